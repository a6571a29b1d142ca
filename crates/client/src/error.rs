// SPDX-License-Identifier: MIT

use std::io;

use thiserror::Error;

/// Errors from the dump transport.
///
/// Session methods surface these to the caller; the entry-point macros treat
/// any of them as fatal to the host process.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not connect to dump server at {addr} (is peekd running?): {source}")]
    Connect { addr: String, source: io::Error },

    #[error("could not send data to dump server: {0}")]
    Write(io::Error),
}
