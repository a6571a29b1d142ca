// SPDX-License-Identifier: MIT

//! Session banners and the end-of-process summary line.

use std::time::Duration;

use chrono::{DateTime, Local};
use peek_core::color::{color, colored, pad, BgColor, Color};
use peek_core::elapsed::{format_bytes, format_secs};

/// Visible width of banner lines.
const BANNER_WIDTH: usize = 120;

/// Banner prepended to the first dump of a process: timestamp, request
/// identity, dashes out to a fixed width.
pub fn session_banner(now: DateTime<Local>) -> String {
    let ts = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let line = format!("{} {} ", color(&ts, Color::Gray), request_header());
    format!("\n{}\n", pad(&line, BANNER_WIDTH, '-'))
}

/// Identity of this invocation: HTTP method and URL for a web request
/// (CGI-style environment), otherwise `cli #<pid>`.
pub fn request_header() -> String {
    match (std::env::var("REQUEST_METHOD"), std::env::var("REQUEST_URI")) {
        (Ok(method), Ok(uri)) => {
            format!("{} {}", color(&method, Color::White), highlight_query(&uri))
        }
        _ => color(&format!("cli #{}", std::process::id()), Color::White),
    }
}

/// Highlight `key=value` pairs in a URL's query string.
fn highlight_query(uri: &str) -> String {
    match uri.split_once('?') {
        None => color(uri, Color::LightCyan),
        Some((path, query)) => {
            let pairs: Vec<String> = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => format!("{}={}", color(key, Color::Yellow), value),
                    None => pair.to_string(),
                })
                .collect();
            format!("{}?{}", color(path, Color::LightCyan), pairs.join("&"))
        }
    }
}

/// Highlighted banner line for `rl!`.
pub fn label_banner(label: &str) -> String {
    let text = format!(" {label} ");
    format!("{}\n", colored(&text, Some(Color::White), Some(BgColor::Blue)))
}

/// Summary sent when the host process exits.
pub fn summary_line(elapsed: Duration, peak_rss: Option<u64>) -> String {
    let mut text = format!("took {}", format_secs(elapsed));
    if let Some(bytes) = peak_rss {
        text.push_str(&format!(", peak memory {}", format_bytes(bytes)));
    }
    format!("{}\n", color(&text, Color::Gray))
}

#[cfg(test)]
#[path = "banner_tests.rs"]
mod tests;
