// SPDX-License-Identifier: MIT

//! Elapsed-time and size formatting for dump messages.

use std::time::Duration;

/// Format a duration as fractional milliseconds, e.g. `"12.345 ms"`.
///
/// Timer output is always in milliseconds: debug timings are usually short,
/// and a single unit keeps repeated measurements comparable at a glance.
pub fn format_ms(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}

/// Format a duration for the end-of-process summary, e.g. `"1.24 s"` or
/// `"2m 3s"`.
pub fn format_secs(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        format!("{:.2} s", elapsed.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format a byte count with a binary-ish human unit, e.g. `"12.3 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
#[path = "elapsed_tests.rs"]
mod tests;
