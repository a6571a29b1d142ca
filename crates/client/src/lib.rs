// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! peek: remote value dumps over a loopback TCP relay.
//!
//! Start `peekd` in a terminal, then sprinkle dump macros through the host
//! program:
//!
//! ```ignore
//! let user = load_user(rd!(user_id));   // dumps and passes the value through
//! rdm!("totals", count, sum, mean);     // several values on one line
//! t!("query");                          // start a timer…
//! run_query();
//! t!("query");                          // …and report elapsed ms
//! ```
//!
//! Formatted, ANSI-colored text is written to a lazily-opened connection to
//! [`DEFAULT_ADDR`]; `peekd` prints whatever arrives. The first dump of a
//! process is preceded by a banner line, and a summary line (wall-clock time,
//! peak memory) is sent when the process exits.
//!
//! The macros are deliberately blunt: if the server is unreachable or a write
//! fails, they print a diagnostic and terminate the process. Code that wants
//! errors back can hold its own [`DumpSession`] and use its methods directly.

pub mod banner;
pub mod callsite;
pub mod render;
pub mod session;

mod entry;
mod error;
mod exit_hook;
mod global;
mod macros;

pub use entry::{__rd, __rda, __rdm, __rf, __rl, __t};
pub use error::TransportError;
pub use peek_core::DEFAULT_ADDR;
pub use render::DumpOptions;
pub use session::{CallSite, DumpSession};
