// SPDX-License-Identifier: MIT

//! Relay specs
//!
//! The server side alone: concurrent raw connections, verbatim output,
//! resilience to disconnects.

use std::time::Duration;

use peek_server::Relay;
use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::TcpStream;

async fn start_relay() -> (std::net::SocketAddr, DuplexStream) {
    let (sink, output) = duplex(64 * 1024);
    let relay = Relay::bind("127.0.0.1:0", sink).await.unwrap();
    let addr = relay.local_addr().unwrap();
    tokio::spawn(relay.run());
    (addr, output)
}

async fn read_until(output: &mut DuplexStream, received: &mut String, needles: &[&str]) {
    let mut buf = [0u8; 4096];
    while !needles.iter().all(|n| received.contains(n)) {
        let n = tokio::time::timeout(Duration::from_secs(5), output.read(&mut buf))
            .await
            .expect("relay output timed out")
            .unwrap();
        assert!(n > 0, "relay output closed early; got {received:?}");
        received.push_str(&String::from_utf8_lossy(&buf[..n]));
    }
}

#[tokio::test]
async fn output_contains_lines_from_both_concurrent_clients() {
    let (addr, mut output) = start_relay().await;

    let mut a = TcpStream::connect(addr).await.unwrap();
    let mut b = TcpStream::connect(addr).await.unwrap();
    let (ra, rb) = tokio::join!(a.write_all(b"alpha\n"), b.write_all(b"beta\n"));
    ra.unwrap();
    rb.unwrap();

    let mut received = String::new();
    read_until(&mut output, &mut received, &["alpha\n", "beta\n"]).await;
}

#[tokio::test]
async fn closing_one_client_does_not_interrupt_the_other() {
    let (addr, mut output) = start_relay().await;

    let mut staying = TcpStream::connect(addr).await.unwrap();
    let mut leaving = TcpStream::connect(addr).await.unwrap();
    leaving.write_all(b"goodbye\n").await.unwrap();
    drop(leaving);

    let mut received = String::new();
    read_until(&mut output, &mut received, &["goodbye\n"]).await;

    staying.write_all(b"still here\n").await.unwrap();
    read_until(&mut output, &mut received, &["still here\n"]).await;
}

#[tokio::test]
async fn many_clients_all_get_through() {
    let (addr, mut output) = start_relay().await;

    let mut expected = Vec::new();
    for i in 0..10 {
        let line = format!("client-{i}\n");
        expected.push(line.clone());
        let mut conn = TcpStream::connect(addr).await.unwrap();
        tokio::spawn(async move {
            conn.write_all(line.as_bytes()).await.unwrap();
            // Hold the connection open a moment so lifetimes overlap.
            tokio::time::sleep(Duration::from_millis(50)).await;
        });
    }

    let needles: Vec<&str> = expected.iter().map(String::as_str).collect();
    let mut received = String::new();
    read_until(&mut output, &mut received, &needles).await;
}
