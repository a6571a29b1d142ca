// SPDX-License-Identifier: MIT

//! `peekd` - the dump relay server.
//!
//! Binds the fixed loopback endpoint and prints everything dump clients
//! send. Run it in its own terminal; kill it when done.

use anyhow::Context;
use peek_server::{Relay, DEFAULT_ADDR};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries relayed dump output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let relay = Relay::bind(DEFAULT_ADDR, tokio::io::stdout())
        .await
        .with_context(|| format!("could not bind dump server to {DEFAULT_ADDR}"))?;
    info!("listening on {}", DEFAULT_ADDR);
    relay.run().await;
    Ok(())
}
