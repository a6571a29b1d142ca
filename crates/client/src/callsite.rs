// SPDX-License-Identifier: MIT

//! Best-effort call-site labels and trace lines.
//!
//! The dump macros capture the argument expression text at compile time;
//! [`label_for`] decides whether that text is a useful name. Extra trace
//! frames come from parsing the rendered `std::backtrace` output, which is
//! inherently best-effort: a frame that cannot be resolved simply produces
//! no line.

use std::backtrace::Backtrace;
use std::path::Path;
use std::sync::OnceLock;

use peek_core::color::{color, Color};
use regex::Regex;

use crate::session::CallSite;

/// A resolved stack frame. `file` is `None` when the frame had no source
/// location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub file: Option<String>,
    pub line: u32,
}

/// Decide whether a captured argument expression makes a useful label.
///
/// String, char, and numeric literals are rejected: dumping `rd!("boom")`
/// should not label the value with its own text.
pub fn label_for(expr: &str) -> Option<String> {
    let candidate = expr.trim();
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if first == '"' || first == '\'' || first.is_ascii_digit() {
        return None;
    }
    if first == '-' && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    if candidate.starts_with("r\"") || candidate.starts_with("r#") {
        return None;
    }
    Some(candidate.to_string())
}

/// Render one frame as `in <dir>/<file>:<line> (<seq>)`, newline-terminated.
///
/// Returns `None` when the frame has no file.
pub fn trace_line(frame: &Frame, seq: u64) -> Option<String> {
    let file = frame.file.as_deref()?;
    let text = format!("in {}:{} ({})", short_path(file), frame.line, seq);
    Some(format!("{}\n", color(&text, Color::Gray)))
}

/// Trace lines for a dump: the exact call site first, then up to
/// `count - 1` best-effort frames above it.
pub fn trace_lines(site: CallSite, count: usize, seq: u64) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let mut frames = vec![Frame { file: Some(site.file.to_string()), line: site.line }];
    if count > 1 {
        frames.extend(frames_above(site, count - 1));
    }
    frames.iter().filter_map(|f| trace_line(f, seq)).collect()
}

/// Keep at most the last two path components.
fn short_path(path: &str) -> String {
    let p = Path::new(path);
    match (p.parent().and_then(Path::file_name), p.file_name()) {
        (Some(dir), Some(file)) => {
            format!("{}/{}", dir.to_string_lossy(), file.to_string_lossy())
        }
        (None, Some(file)) => file.to_string_lossy().into_owned(),
        _ => path.to_string(),
    }
}

fn at_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a literal; compilation cannot fail.
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"(?m)^\s+at (.+?):(\d+)(?::\d+)?$").expect("literal pattern"))
}

/// Frames above the dump call site, parsed from the rendered backtrace.
///
/// Walks the backtrace until the call site itself is found, then collects
/// caller frames, skipping toolchain internals. If the call site never shows
/// up (stripped or inlined), no extra frames are produced.
fn frames_above(site: CallSite, limit: usize) -> Vec<Frame> {
    let rendered = Backtrace::force_capture().to_string();
    let mut frames = Vec::new();
    let mut past_call_site = false;
    for cap in at_re().captures_iter(&rendered) {
        let path = &cap[1];
        let line: u32 = cap[2].parse().unwrap_or(0);
        if !past_call_site {
            if path.ends_with(site.file) && line == site.line {
                past_call_site = true;
            }
            continue;
        }
        if path.contains("/rustc/") || path.contains(".cargo/registry") {
            continue;
        }
        frames.push(Frame { file: Some(path.to_string()), line });
        if frames.len() == limit {
            break;
        }
    }
    frames
}

#[cfg(test)]
#[path = "callsite_tests.rs"]
mod tests;
