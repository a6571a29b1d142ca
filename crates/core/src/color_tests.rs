// SPDX-License-Identifier: MIT

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn color_wraps_text_in_escape_codes() {
    std::env::remove_var("NO_COLOR");

    let result = color("foo", Color::Red);
    assert_eq!(result, "\x1b[0;31mfoo\x1b[0m");
}

#[test]
#[serial]
fn background_wraps_text_in_escape_codes() {
    std::env::remove_var("NO_COLOR");

    let result = background("bar", BgColor::Blue);
    assert_eq!(result, "\x1b[44mbar\x1b[0m");
}

#[test]
#[serial]
fn colored_emits_foreground_before_background() {
    std::env::remove_var("NO_COLOR");

    let result = colored("x", Some(Color::White), Some(BgColor::Red));
    assert_eq!(result, "\x1b[1;37m\x1b[41mx\x1b[0m");
}

#[test]
#[serial]
fn no_color_disables_everything() {
    std::env::set_var("NO_COLOR", "1");

    assert_eq!(color("foo", Color::Cyan), "foo");
    assert_eq!(background("foo", BgColor::Yellow), "foo");
    assert!(!enabled());

    std::env::remove_var("NO_COLOR");
}

#[yare::parameterized(
    fg_only   = { "\x1b[0;32mok\x1b[0m", "ok" },
    bg_only   = { "\x1b[44mok\x1b[0m", "ok" },
    fg_and_bg = { "\x1b[1;37m\x1b[41mboth\x1b[0m", "both" },
    nested    = { "a\x1b[0;31mb\x1b[0mc", "abc" },
    plain     = { "plain", "plain" },
    empty     = { "", "" },
)]
fn strip_removes_escape_sequences(input: &str, expected: &str) {
    assert_eq!(strip(input), expected);
}

#[test]
#[serial]
fn strip_round_trips_any_colored_text() {
    std::env::remove_var("NO_COLOR");

    let fgs = [Color::White, Color::Gray, Color::Red, Color::LightGreen, Color::Yellow];
    let bgs = [BgColor::Black, BgColor::Blue, BgColor::Cyan];
    for fg in fgs {
        for bg in bgs {
            let plain = "the quick brown fox";
            assert_eq!(strip(&colored(plain, Some(fg), Some(bg))), plain);
        }
    }
}

#[test]
#[serial]
fn pad_counts_visible_width_only() {
    std::env::remove_var("NO_COLOR");

    let colored_text = color("ab", Color::Red);
    let padded = pad(&colored_text, 5, '-');
    assert_eq!(strip(&padded), "ab---");
}

#[test]
fn pad_leaves_wide_text_alone() {
    assert_eq!(pad("abcdef", 4, ' '), "abcdef");
}

#[test]
fn visible_len_ignores_codes() {
    assert_eq!(visible_len("\x1b[0;31mabc\x1b[0m"), 3);
}
