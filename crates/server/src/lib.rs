// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! peek-server: the dump relay behind `peekd`.
//!
//! Accepts any number of dump-client connections and copies whatever bytes
//! arrive to a shared output sink. No framing, no acknowledgement; ordering
//! across connections is whatever the reads happen to produce.

pub mod relay;

pub use peek_core::DEFAULT_ADDR;
pub use relay::{Relay, RelayError};
