// SPDX-License-Identifier: MIT

//! ANSI terminal colors for dump output.
//!
//! Dump messages travel over a socket and are printed by the server's
//! terminal, so coloring is on by default regardless of whether the client's
//! own stdout is a TTY. `NO_COLOR=1` disables.

use std::sync::OnceLock;

use regex::Regex;

/// Foreground colors. Codes follow the classic 16-color SGR table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    LightGray,
    Gray,
    Black,
    Red,
    LightRed,
    Green,
    LightGreen,
    Blue,
    LightBlue,
    Cyan,
    LightCyan,
    Purple,
    LightPurple,
    Yellow,
    LightYellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::White => "1;37",
            Color::LightGray => "0;37",
            Color::Gray => "1;30",
            Color::Black => "0;30",
            Color::Red => "0;31",
            Color::LightRed => "1;31",
            Color::Green => "0;32",
            Color::LightGreen => "1;32",
            Color::Blue => "0;34",
            Color::LightBlue => "1;34",
            Color::Cyan => "0;36",
            Color::LightCyan => "1;36",
            Color::Purple => "0;35",
            Color::LightPurple => "1;35",
            Color::Yellow => "1;33",
            Color::LightYellow => "0;33",
        }
    }
}

/// Background colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BgColor {
    LightGray,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl BgColor {
    fn code(self) -> &'static str {
        match self {
            BgColor::LightGray => "47",
            BgColor::Black => "40",
            BgColor::Red => "41",
            BgColor::Green => "42",
            BgColor::Blue => "44",
            BgColor::Yellow => "43",
            BgColor::Purple => "45",
            BgColor::Cyan => "46",
        }
    }
}

/// Determine if color output should be enabled.
///
/// On unless `NO_COLOR=1`: the escape codes are rendered by the server's
/// terminal, so the client's own TTY status is irrelevant.
pub fn enabled() -> bool {
    !std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// Wrap `text` in foreground and/or background escape codes.
pub fn colored(text: &str, fg: Option<Color>, bg: Option<BgColor>) -> String {
    if !enabled() || (fg.is_none() && bg.is_none()) {
        return text.to_string();
    }
    let mut out = String::new();
    if let Some(fg) = fg {
        out.push_str("\x1b[");
        out.push_str(fg.code());
        out.push('m');
    }
    if let Some(bg) = bg {
        out.push_str("\x1b[");
        out.push_str(bg.code());
        out.push('m');
    }
    out.push_str(text);
    out.push_str("\x1b[0m");
    out
}

/// Foreground-only shorthand.
pub fn color(text: &str, fg: Color) -> String {
    colored(text, Some(fg), None)
}

/// Background-only shorthand.
pub fn background(text: &str, bg: BgColor) -> String {
    colored(text, None, Some(bg))
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a literal; compilation cannot fail.
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\x1b\[[^m]*m").expect("literal pattern"))
}

/// Remove all `ESC [ … m` sequences, yielding the plain text.
pub fn strip(text: &str) -> String {
    ansi_re().replace_all(text, "").into_owned()
}

/// Visible width of `text` (length with escape codes removed).
pub fn visible_len(text: &str) -> usize {
    strip(text).chars().count()
}

/// Right-pad `text` with `fill` up to `width` visible columns.
///
/// Escape codes do not count toward the width, so colored strings line up
/// with plain ones.
pub fn pad(text: &str, width: usize, fill: char) -> String {
    let visible = visible_len(text);
    if visible >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - visible);
    out.push_str(text);
    for _ in visible..width {
        out.push(fill);
    }
    out
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
