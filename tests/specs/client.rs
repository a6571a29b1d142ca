// SPDX-License-Identifier: MIT

//! Client-to-relay specs
//!
//! A real `DumpSession` talks to a real `Relay` over loopback; the relay's
//! sink is captured instead of stdout.

use std::time::Duration;

use peek::{CallSite, DumpOptions, DumpSession};
use peek_server::Relay;
use serial_test::serial;
use tokio::io::{duplex, AsyncReadExt, DuplexStream};

const SITE: CallSite = CallSite { file: "tests/app.rs", line: 21 };

async fn start_relay() -> (String, DuplexStream) {
    let (sink, output) = duplex(64 * 1024);
    let relay = Relay::bind("127.0.0.1:0", sink).await.unwrap();
    let addr = relay.local_addr().unwrap().to_string();
    tokio::spawn(relay.run());
    (addr, output)
}

async fn read_until(output: &mut DuplexStream, received: &mut String, needle: &str) {
    let mut buf = [0u8; 4096];
    while !received.contains(needle) {
        let n = tokio::time::timeout(Duration::from_secs(5), output.read(&mut buf))
            .await
            .expect("relay output timed out")
            .unwrap();
        assert!(n > 0, "relay output closed early; got {received:?}");
        received.push_str(&String::from_utf8_lossy(&buf[..n]));
    }
}

#[tokio::test]
#[serial]
async fn first_dump_reaches_relay_with_banner_then_without() {
    std::env::set_var("NO_COLOR", "1");
    let (addr, mut output) = start_relay().await;

    // Session writes block; keep them off the async runtime threads.
    let task = tokio::task::spawn_blocking(move || {
        let mut session = DumpSession::with_addr(addr);
        session.dump(&41, Some("first"), DumpOptions::default(), SITE).unwrap();
        session.dump(&42, Some("second"), DumpOptions::default(), SITE).unwrap();
    });

    let mut received = String::new();
    read_until(&mut output, &mut received, "second: 42").await;
    task.await.unwrap();

    peek_assert::contains(&received, "----");
    peek_assert::contains(&received, "first: 41");
    let after_banner = received.split_once("first: 41").map(|(_, rest)| rest).unwrap();
    peek_assert::not_contains(after_banner, "----");
    std::env::remove_var("NO_COLOR");
}

#[tokio::test]
#[serial]
async fn timer_round_trip_reports_elapsed_milliseconds() {
    std::env::set_var("NO_COLOR", "1");
    let (addr, mut output) = start_relay().await;

    let task = tokio::task::spawn_blocking(move || {
        let mut session = DumpSession::with_addr(addr);
        session.timer(Some("load")).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        session.timer(Some("load")).unwrap().expect("second call reports")
    });
    let elapsed = task.await.unwrap();
    assert!(elapsed >= Duration::from_millis(5));

    let mut received = String::new();
    read_until(&mut output, &mut received, " ms").await;
    peek_assert::contains(&received, "load: ");
    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn macros_end_to_end_on_the_fixed_endpoint() {
    use std::io::Read;
    use std::sync::{Arc, Mutex};

    // The macros only talk to the fixed endpoint. Skip when something else
    // already owns the port rather than failing the suite.
    let listener = match std::net::TcpListener::bind(peek::DEFAULT_ADDR) {
        Ok(listener) => listener,
        Err(_) => {
            eprintln!("skipping: {} is in use", peek::DEFAULT_ADDR);
            return;
        }
    };
    std::env::set_var("NO_COLOR", "1");

    let received = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&received);
    std::thread::spawn(move || {
        if let Ok((mut conn, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            loop {
                match conn.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => sink.lock().unwrap().push_str(&String::from_utf8_lossy(&buf[..n])),
                }
            }
        }
    });

    use peek::{rd, rda, rdm, rf, rl, t};
    let total = 6;
    let out = rd!(total * 7);
    peek_assert::same(&out, &42);
    rdm!("pair", 1, 2);
    rda!("k" => "v");
    rf!();
    rl!("marker");
    t!("timing");
    t!("timing");

    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    let wanted =
        ["total * 7: 42", "pair: 1 | 2", "k: \"v\"", "macros_end_to_end", " marker ", "timing: "];
    loop {
        let snapshot = received.lock().unwrap().clone();
        if wanted.iter().all(|needle| snapshot.contains(needle)) {
            peek_assert::contains(&snapshot, "----");
            break;
        }
        assert!(std::time::Instant::now() < deadline, "missing output; got {snapshot:?}");
        std::thread::sleep(Duration::from_millis(10));
    }
    std::env::remove_var("NO_COLOR");
}

#[test]
fn dump_is_a_pass_through() {
    // Pass-through holds on the session API regardless of transport fate;
    // the macro layer returns the same value it dumped.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    std::thread::spawn(move || {
        // Drain and drop whatever the session writes.
        if let Ok((mut conn, _)) = listener.accept() {
            let mut sink = Vec::new();
            let _ = std::io::copy(&mut conn, &mut sink);
        }
    });

    let mut session = DumpSession::with_addr(addr);
    let value = vec![1, 2, 3];
    session.dump(&value, None, DumpOptions::default(), SITE).unwrap();
    peek_assert::same(&value, &vec![1, 2, 3]);
}
