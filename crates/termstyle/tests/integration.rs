//! Integration tests for termstyle.
//!
//! These exercise whole chains through the public surface: exact
//! escape bytes per color, attribute ordering, the `on` background
//! selector, the disable flag, and the textual round-trip.

use termstyle::utils::{extract_codes, is_escape, visible, visible_width};
use termstyle::{Attr, Color, Style, StyleError, TERMSTYLE};

/// Build a style by folding a dotted chain through `get`.
fn chain(tokens: &str) -> Style {
    tokens
        .split('.')
        .fold(TERMSTYLE, |style, token| style.get(token).unwrap())
}

#[test]
fn every_color_wraps_with_its_foreground_code() {
    for color in Color::ALL {
        let painted = chain(color.name()).paint_unless("t", false).unwrap();
        assert_eq!(
            painted,
            format!("\x1b[{}mt\x1b[0m", color.fg_code()),
            "foreground rendering for {}",
            color.name()
        );
    }
}

#[test]
fn every_color_wraps_with_its_background_code() {
    for color in Color::ALL {
        let painted = chain(&format!("on.{}", color.name()))
            .paint_unless("t", false)
            .unwrap();
        assert_eq!(
            painted,
            format!("\x1b[{}mt\x1b[0m", color.bg_code()),
            "background rendering for {}",
            color.name()
        );
    }
}

#[test]
fn every_attr_wraps_with_its_code() {
    for attr in Attr::ALL {
        let painted = chain(attr.name()).paint_unless("t", false).unwrap();
        assert_eq!(painted, format!("\x1b[{}mt\x1b[0m", attr.code()));
    }
}

#[test]
fn repeated_attrs_emit_once_per_occurrence() {
    let painted = chain("bold.bold.bold").paint_unless("t", false).unwrap();
    assert_eq!(painted, "\x1b[1m\x1b[1m\x1b[1mt\x1b[0m");
}

#[test]
fn colors_always_precede_attrs_in_output() {
    // Attributes chained before the color still come after it in the
    // escape prefix: foreground, background, then attrs in chain order.
    let painted = chain("bold.red.underlined.on.blue")
        .paint_unless("t", false)
        .unwrap();
    assert_eq!(
        extract_codes(&painted),
        vec!["\x1b[31m", "\x1b[44m", "\x1b[1m", "\x1b[4m", "\x1b[0m"]
    );
}

#[test]
fn dangling_on_is_an_error() {
    assert_eq!(
        TERMSTYLE.get("on").unwrap().paint_unless("t", false),
        Err(StyleError::DanglingOn)
    );
}

#[test]
fn on_resolves_at_the_next_color_not_immediately() {
    // Attributes may sit between `on` and the color that resolves it.
    let painted = chain("red.on.bold.dark.magenta")
        .paint_unless("t", false)
        .unwrap();
    assert_eq!(painted, "\x1b[31m\x1b[45m\x1b[1m\x1b[2mt\x1b[0m");
}

#[test]
fn unknown_token_reports_the_name() {
    let err = chain("red").get("purple").unwrap_err();
    assert_eq!(err, StyleError::UnknownToken("purple".to_string()));
    assert_eq!(err.to_string(), "no style token named `purple`");
}

#[test]
fn disable_flag_is_the_identity() {
    let style = chain("red.bold.on.blue");
    assert_eq!(style.paint_unless("x", true).unwrap(), "x");
    assert_eq!(TERMSTYLE.paint_unless("", true).unwrap(), "");
}

#[test]
fn chaining_is_persistent() {
    let red = chain("red");
    let red_on_blue = red.get("on").unwrap().get("blue").unwrap();
    let red_bold = red.get("bold").unwrap();

    // Three styles from one ancestor, none sharing state.
    assert_eq!(red.paint_unless("x", false).unwrap(), "\x1b[31mx\x1b[0m");
    assert_eq!(
        red_on_blue.paint_unless("x", false).unwrap(),
        "\x1b[31m\x1b[44mx\x1b[0m"
    );
    assert_eq!(
        red_bold.paint_unless("x", false).unwrap(),
        "\x1b[31m\x1b[1mx\x1b[0m"
    );
}

#[test]
fn empty_style_still_appends_reset() {
    assert_eq!(TERMSTYLE.paint_unless("x", false).unwrap(), "x\x1b[0m");
    assert_eq!(TERMSTYLE.paint_unless("", false).unwrap(), "\x1b[0m");
}

#[test]
fn description_round_trips_through_paint() {
    let style = chain("bold.red.on.blue");
    assert_eq!(style.to_string(), "termstyle.bold.red.on.blue");

    // Painting the description wraps it exactly like any other text.
    let painted_name = style.paint_unless(&style.to_string(), false).unwrap();
    let painted_other = style.paint_unless("other", false).unwrap();
    assert_eq!(
        painted_name,
        painted_other.replace("other", "termstyle.bold.red.on.blue")
    );
}

#[test]
fn description_round_trips_through_parse() {
    for tokens in ["red", "on.white", "bold.bold.cyan", "dark.grey.on.yellow"] {
        let style = chain(tokens);
        let reparsed: Style = style.to_string().parse().unwrap();
        assert_eq!(reparsed, style);
    }
}

#[test]
fn typed_and_string_chains_agree() {
    let typed = TERMSTYLE
        .color(Color::Red)
        .background(Color::Blue)
        .attr(Attr::Bold);
    assert_eq!(typed, chain("red.on.blue.bold"));
}

#[test]
fn painted_output_is_invisible_to_width() {
    let painted = chain("green.reversed").paint_unless("hello", false).unwrap();
    assert!(is_escape(&painted));
    assert_eq!(visible(&painted), "hello");
    assert_eq!(visible_width(&painted), 5);
}
