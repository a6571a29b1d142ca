// SPDX-License-Identifier: MIT

//! Accept loop and per-connection relay tasks.
//!
//! One task per connection, all writing into a shared sink. A connection
//! error only ends that connection's task; the accept loop runs until the
//! process is killed.

use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tracing::{debug, error};

/// Errors from relay startup.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
}

/// Accepts dump-client connections and copies their bytes to a shared sink.
///
/// Generic over the sink so tests can capture output; `peekd` passes stdout.
#[derive(Debug)]
pub struct Relay<W> {
    listener: TcpListener,
    sink: Arc<Mutex<W>>,
}

impl<W> Relay<W>
where
    W: AsyncWrite + Send + Unpin + 'static,
{
    /// Bind the relay to `addr`, writing relayed bytes into `sink`.
    pub async fn bind(addr: &str, sink: W) -> Result<Self, RelayError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RelayError::Bind { addr: addr.to_string(), source })?;
        Ok(Self { listener, sink: Arc::new(Mutex::new(sink)) })
    }

    /// Address actually bound (useful when `addr` asked for port 0).
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections forever, spawning a relay task per client.
    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    debug!(%addr, "client connected");
                    let sink = Arc::clone(&self.sink);
                    tokio::spawn(relay_connection(stream, sink));
                }
                Err(e) => error!("accept error: {}", e),
            }
        }
    }
}

/// Copy bytes from one client into the sink until EOF or error.
async fn relay_connection<W>(mut stream: TcpStream, sink: Arc<Mutex<W>>)
where
    W: AsyncWrite + Send + Unpin + 'static,
{
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) => {
                debug!("client disconnected");
                return;
            }
            Ok(n) => {
                let mut sink = sink.lock().await;
                if let Err(e) = sink.write_all(&buf[..n]).await {
                    error!("output write failed: {}", e);
                    return;
                }
                // Dump lines should appear as they arrive, not on buffer
                // boundaries.
                let _ = sink.flush().await;
            }
            Err(e) => {
                debug!("read error: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
