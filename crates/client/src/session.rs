// SPDX-License-Identifier: MIT

//! The dump session: transport, message counter, and timer registry.
//!
//! A session owns one lazily-established connection to the dump server and
//! the per-process cosmetic state (banner trigger, sequence counter, timer
//! marks). The entry-point macros share one process-wide session; tests and
//! embedding code construct their own and point it at a local listener.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::net::TcpStream;
use std::time::{Duration, Instant};

use peek_core::color::{color, Color};
use peek_core::elapsed::format_ms;
use peek_core::{Clock, SystemClock, DEFAULT_ADDR};
use tracing::debug;

use crate::banner;
use crate::callsite;
use crate::error::TransportError;
use crate::exit_hook;
use crate::render::{render, render_inline, DumpOptions};

/// Source location of a dump call, captured by the macros via
/// `file!()`/`line!()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

/// A connection to the dump server plus the process-local dump state.
pub struct DumpSession<C: Clock = SystemClock> {
    addr: String,
    conn: Option<TcpStream>,
    /// `None` until the first send; the banner trigger. Incremented after
    /// every successful send, and only cosmetic (trace-line sequence).
    counter: Option<u64>,
    /// Last mark per timer label; the unlabeled timer is the `None` key.
    timers: HashMap<Option<String>, Instant>,
    clock: C,
    started: Instant,
}

impl DumpSession<SystemClock> {
    /// Session against the fixed loopback endpoint.
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_ADDR, SystemClock)
    }

    /// Session against an arbitrary endpoint. Intended for tests; the
    /// public macros always use [`DEFAULT_ADDR`].
    pub fn with_addr(addr: impl Into<String>) -> Self {
        Self::with_clock(addr, SystemClock)
    }
}

impl Default for DumpSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DumpSession<C> {
    pub fn with_clock(addr: impl Into<String>, clock: C) -> Self {
        let started = clock.now();
        Self {
            addr: addr.into(),
            conn: None,
            counter: None,
            timers: HashMap::new(),
            clock,
            started,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Establish the connection if it does not exist yet.
    pub fn ensure_connected(&mut self) -> Result<(), TransportError> {
        if self.conn.is_some() {
            return Ok(());
        }
        let stream = TcpStream::connect(&self.addr)
            .map_err(|source| TransportError::Connect { addr: self.addr.clone(), source })?;
        debug!(addr = %self.addr, "connected to dump server");
        self.conn = Some(stream);
        Ok(())
    }

    /// Write one message. The first send of a session is prefixed with the
    /// session banner, in the same write.
    pub fn send(&mut self, message: &str) -> Result<(), TransportError> {
        self.ensure_connected()?;
        let first = self.counter.is_none();
        let payload = if first {
            let mut p = banner::session_banner(chrono::Local::now());
            p.push_str(message);
            p
        } else {
            message.to_owned()
        };
        if let Some(conn) = self.conn.as_mut() {
            conn.write_all(payload.as_bytes()).map_err(TransportError::Write)?;
        }
        if first {
            self.counter = Some(0);
        }
        if let Some(n) = self.counter.as_mut() {
            *n += 1;
        }
        Ok(())
    }

    /// Sequence number stamped into the next dump's trace lines.
    fn seq(&self) -> u64 {
        self.counter.unwrap_or(0)
    }

    /// One value, rendered as a block, with optional label and trace lines.
    pub fn dump<T: fmt::Debug + ?Sized>(
        &mut self,
        value: &T,
        label: Option<&str>,
        opts: DumpOptions,
        site: CallSite,
    ) -> Result<(), TransportError> {
        let mut message = String::new();
        if let Some(label) = label {
            message.push_str(&color(label, Color::White));
            message.push_str(": ");
        }
        message.push_str(render(value, &opts).trim_end());
        message.push('\n');
        for line in callsite::trace_lines(site, opts.trace, self.seq()) {
            message.push_str(&line);
        }
        self.send(&message)
    }

    /// Several values on one line, pipe-separated.
    pub fn dump_multi(
        &mut self,
        name: &str,
        values: &[&dyn fmt::Debug],
    ) -> Result<(), TransportError> {
        let rendered: Vec<String> = values.iter().map(|v| render_inline(v)).collect();
        let message = format!("{}: {}\n", color(name, Color::White), rendered.join(" | "));
        self.send(&message)
    }

    /// Named values on one line, pipe-separated.
    pub fn dump_all(&mut self, entries: &[(&str, &dyn fmt::Debug)]) -> Result<(), TransportError> {
        let parts: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{}: {}", color(key, Color::White), render_inline(value)))
            .collect();
        let message = format!("{}\n", parts.join(" | "));
        self.send(&message)
    }

    /// Current function name, for `rf!`.
    pub fn dump_fn(&mut self, name: &str) -> Result<(), TransportError> {
        let message = format!("{}\n", color(name, Color::LightPurple));
        self.send(&message)
    }

    /// Highlighted label banner, for `rl!`.
    pub fn label_line(&mut self, label: &str) -> Result<(), TransportError> {
        self.send(&banner::label_banner(label))
    }

    /// Mark or report a timer.
    ///
    /// The first call for a label records the mark and sends nothing.
    /// Subsequent calls send the elapsed time since the previous mark and
    /// reset it. Returns the elapsed duration when one was reported.
    pub fn timer(&mut self, label: Option<&str>) -> Result<Option<Duration>, TransportError> {
        let now = self.clock.now();
        match self.timers.insert(label.map(str::to_owned), now) {
            None => Ok(None),
            Some(prev) => {
                let elapsed = now.duration_since(prev);
                let name = label.unwrap_or("time");
                let message = format!(
                    "{}: {}\n",
                    color(name, Color::Yellow),
                    color(&format_ms(elapsed), Color::LightYellow)
                );
                self.send(&message)?;
                Ok(Some(elapsed))
            }
        }
    }

    /// End-of-process summary: wall-clock elapsed and peak memory.
    ///
    /// A session that never sent anything stays silent.
    pub fn summary(&mut self) -> Result<(), TransportError> {
        if self.counter.is_none() {
            return Ok(());
        }
        let elapsed = self.clock.now().duration_since(self.started);
        self.send(&banner::summary_line(elapsed, exit_hook::peak_rss_bytes()))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
