//! The closed set of style tokens and their SGR codes.
//!
//! Chains like `red.on.blue.bold` are built from three kinds of token:
//! colors, attributes, and the `on` background selector. Each token name
//! maps to a fixed numeric SGR code; the tables here match the classic
//! 8-color terminal palette.

use std::str::FromStr;

use crate::error::StyleError;

/// One of the eight named terminal colors.
///
/// Foreground codes occupy 30-37 and background codes 40-47, in the
/// same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Grey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in SGR code order.
    pub const ALL: [Color; 8] = [
        Color::Grey,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The token name for this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// The SGR code selecting this color as the foreground.
    pub const fn fg_code(self) -> u8 {
        match self {
            Color::Grey => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    /// The SGR code selecting this color as the background.
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// Look up a color by its token name.
    ///
    /// # Example
    ///
    /// ```
    /// use termstyle_core::Color;
    /// assert_eq!(Color::from_name("magenta"), Some(Color::Magenta));
    /// assert_eq!(Color::from_name("mauve"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// A text attribute such as bold or underlined.
///
/// Unlike colors, attributes accumulate: chaining the same attribute
/// twice emits its code twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Bold,
    Dark,
    Underlined,
    Blinking,
    Reversed,
    Concealed,
}

impl Attr {
    /// All attributes, in SGR code order.
    pub const ALL: [Attr; 6] = [
        Attr::Bold,
        Attr::Dark,
        Attr::Underlined,
        Attr::Blinking,
        Attr::Reversed,
        Attr::Concealed,
    ];

    /// The token name for this attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Attr::Bold => "bold",
            Attr::Dark => "dark",
            Attr::Underlined => "underlined",
            Attr::Blinking => "blinking",
            Attr::Reversed => "reversed",
            Attr::Concealed => "concealed",
        }
    }

    /// The SGR code enabling this attribute.
    pub const fn code(self) -> u8 {
        match self {
            Attr::Bold => 1,
            Attr::Dark => 2,
            Attr::Underlined => 4,
            Attr::Blinking => 5,
            Attr::Reversed => 7,
            Attr::Concealed => 8,
        }
    }

    /// Look up an attribute by its token name.
    pub fn from_name(name: &str) -> Option<Attr> {
        Attr::ALL.iter().copied().find(|a| a.name() == name)
    }
}

/// One link in a style chain.
///
/// Dispatching over this closed enumeration replaces the dynamic
/// name-by-name lookup a chain like `red.on.blue.bold` suggests: a
/// name is parsed into a `Token` once, and everything downstream is an
/// ordinary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A color name; sets the foreground, or the background right
    /// after `on`.
    Color(Color),
    /// An attribute name; appended to the attribute list.
    Attr(Attr),
    /// The background selector: the next color token sets the
    /// background instead of the foreground.
    On,
}

impl FromStr for Token {
    type Err = StyleError;

    /// # Example
    ///
    /// ```
    /// use termstyle_core::{Color, StyleError, Token};
    /// assert_eq!("red".parse(), Ok(Token::Color(Color::Red)));
    /// assert_eq!(
    ///     "crimson".parse::<Token>(),
    ///     Err(StyleError::UnknownToken("crimson".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Token, StyleError> {
        if s == "on" {
            return Ok(Token::On);
        }
        if let Some(color) = Color::from_name(s) {
            return Ok(Token::Color(color));
        }
        if let Some(attr) = Attr::from_name(s) {
            return Ok(Token::Attr(attr));
        }
        Err(StyleError::UnknownToken(s.to_string()))
    }
}
