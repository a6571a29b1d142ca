// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! peek-core: shared primitives for the peek dump toolkit.
//!
//! Terminal coloring, the clock abstraction used for deterministic timer
//! tests, and elapsed-time/size formatting shared by the client and server.

pub mod clock;
pub mod color;
pub mod elapsed;

pub use clock::{Clock, FakeClock, SystemClock};

/// Endpoint shared by the dump client and `peekd`. The entry-point macros
/// take no configuration; everything talks to this address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:6666";
