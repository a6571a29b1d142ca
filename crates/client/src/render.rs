// SPDX-License-Identifier: MIT

//! Depth-bounded, length-truncated value rendering.
//!
//! The pretty-printer is the standard alternate `Debug` formatting; this
//! module bounds its output so a deep or huge value cannot flood the relay.

use std::fmt;

/// Default nesting depth kept in a dump.
pub const DEFAULT_DEPTH: usize = 5;

/// Default number of call-site trace lines appended to a dump.
pub const DEFAULT_TRACE: usize = 1;

/// Truncation limit for one rendered value.
pub const MAX_LEN: usize = 5000;

/// Truncation limit for single-line renderings (`rdm!`/`rda!` entries).
const INLINE_MAX_LEN: usize = 200;

/// Rendering knobs for a single dump.
///
/// `depth` and `trace` are independent: lowering the depth does not suppress
/// trace lines, and `trace: 0` does not change the depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    /// Nesting levels of the value to keep; deeper fields collapse to `...`.
    pub depth: usize,
    /// Call-site trace lines to append (0 for none).
    pub trace: usize,
    /// Character limit for the rendered value.
    pub max_len: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, trace: DEFAULT_TRACE, max_len: MAX_LEN }
    }
}

impl DumpOptions {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_trace(mut self, trace: usize) -> Self {
        self.trace = trace;
        self
    }
}

/// Render a value as a possibly multi-line block, bounded by `opts`.
pub fn render<T: fmt::Debug + ?Sized>(value: &T, opts: &DumpOptions) -> String {
    let full = format!("{value:#?}");
    truncate(collapse_depth(&full, opts.depth), opts.max_len)
}

/// Render a value on a single line, for multi-value dumps.
pub fn render_inline<T: fmt::Debug + ?Sized>(value: &T) -> String {
    truncate(format!("{value:?}"), INLINE_MAX_LEN)
}

/// Drop lines nested deeper than `depth`, leaving one `...` per elided run.
///
/// Alternate `Debug` output indents by 4 spaces per nesting level, so the
/// level of a line is its leading-space count / 4.
fn collapse_depth(text: &str, depth: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut eliding = false;
    for line in text.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent / 4 > depth {
            if !eliding {
                for _ in 0..(depth + 1) * 4 {
                    out.push(' ');
                }
                out.push_str("...\n");
                eliding = true;
            }
            continue;
        }
        eliding = false;
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn truncate(text: String, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text;
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}... (truncated)")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
