//! The immutable chainable style builder.
//!
//! A [`Style`] accumulates a foreground color, a background color, and
//! an ordered list of attributes, one token at a time. Every chaining
//! operation takes `&self` and returns a fresh value, so intermediate
//! styles can be kept and extended in several directions without
//! affecting each other. Nothing is written to the output until the
//! style is resolved with [`Style::paint`].
//!
//! # Example
//!
//! ```
//! use termstyle::TERMSTYLE;
//!
//! let style = TERMSTYLE.get("red").unwrap().get("on").unwrap().get("blue").unwrap();
//! let text = style.paint_unless("warning", false).unwrap();
//! assert_eq!(text, "\x1b[31m\x1b[44mwarning\x1b[0m");
//! ```

use std::fmt;
use std::str::FromStr;

use termstyle_core::{Attr, Color, Result, StyleError, Token};

use crate::codes;

/// Environment variable that disables all styling when present.
///
/// Presence is what matters; the value is ignored, and an empty value
/// still disables styling.
pub const DISABLE_ENV_VAR: &str = "ANSI_COLORS_DISABLED";

/// Whether styling is globally disabled for this process.
///
/// Consulted fresh on every [`Style::paint`] call, so toggling the
/// variable between calls takes effect immediately.
pub fn colors_disabled() -> bool {
    std::env::var_os(DISABLE_ENV_VAR).is_some()
}

/// Transient parse state: `on` arms the next color token to land on
/// the background instead of the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    PendingBackground,
}

/// An accumulated style description.
///
/// Styles are plain immutable values; the chaining methods never touch
/// the receiver. Resolution happens lazily in [`Style::paint`], which
/// wraps its argument in the escape sequences the chain described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    color: Option<Color>,
    /// Background color
    background: Option<Color>,
    /// Text attributes, in chain order, duplicates kept
    attrs: Vec<Attr>,
    /// `on` parse state; must be back to normal before painting
    mode: Mode,
}

/// The root style: no color, no background, no attributes.
///
/// Every chain starts here.
pub const TERMSTYLE: Style = Style::new();

impl Style {
    /// Create an empty style, equal to [`TERMSTYLE`].
    pub const fn new() -> Self {
        Style {
            color: None,
            background: None,
            attrs: Vec::new(),
            mode: Mode::Normal,
        }
    }

    /// Chain one token by name.
    ///
    /// The name is parsed against the closed token set and applied;
    /// anything else is an [`StyleError::UnknownToken`] error at the
    /// point of the bad access.
    ///
    /// # Example
    ///
    /// ```
    /// use termstyle::TERMSTYLE;
    ///
    /// let bold_green = TERMSTYLE.get("bold").unwrap().get("green").unwrap();
    /// assert!(TERMSTYLE.get("shiny").is_err());
    /// # let _ = bold_green;
    /// ```
    pub fn get(&self, token: &str) -> Result<Style> {
        Ok(self.apply(token.parse()?))
    }

    /// Chain one typed token.
    ///
    /// A color token lands on the foreground, or on the background if
    /// the previous token was [`Token::On`] (which also disarms the
    /// selector). An attribute token appends. `on` arms the selector
    /// and changes nothing else.
    pub fn apply(&self, token: Token) -> Style {
        match token {
            Token::Color(color) => match self.mode {
                Mode::Normal => self.color(color),
                Mode::PendingBackground => {
                    let mut next = self.clone();
                    next.background = Some(color);
                    next.mode = Mode::Normal;
                    next
                }
            },
            Token::Attr(attr) => self.attr(attr),
            Token::On => self.on(),
        }
    }

    /// Return a copy with the foreground color set.
    pub fn color(&self, color: Color) -> Style {
        let mut next = self.clone();
        next.color = Some(color);
        next
    }

    /// Return a copy with the background color set.
    pub fn background(&self, color: Color) -> Style {
        let mut next = self.clone();
        next.background = Some(color);
        next
    }

    /// Return a copy with `attr` appended to the attribute list.
    ///
    /// Attributes accumulate: appending `bold` twice emits its code
    /// twice when painting.
    pub fn attr(&self, attr: Attr) -> Style {
        let mut next = self.clone();
        next.attrs.push(attr);
        next
    }

    /// Return a copy with the background selector armed: the next
    /// color token chained onto the result sets the background.
    pub fn on(&self) -> Style {
        let mut next = self.clone();
        next.mode = Mode::PendingBackground;
        next
    }

    /// Resolve the style and wrap `text` in its escape sequences.
    ///
    /// Emits the foreground code, then the background code, then each
    /// attribute code in chain order, followed by `text` and a single
    /// reset. The reset is appended even when the style is empty.
    ///
    /// Fails with [`StyleError::DanglingOn`] if the chain ended on an
    /// unresolved `on`. Returns `text` untouched when the
    /// [`DISABLE_ENV_VAR`] environment variable is present.
    pub fn paint(&self, text: &str) -> Result<String> {
        self.paint_unless(text, colors_disabled())
    }

    /// [`Style::paint`] with the disable flag injected.
    ///
    /// Lets callers (and tests) bypass the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// use termstyle::TERMSTYLE;
    ///
    /// let style = TERMSTYLE.get("cyan").unwrap();
    /// assert_eq!(style.paint_unless("hi", false).unwrap(), "\x1b[36mhi\x1b[0m");
    /// assert_eq!(style.paint_unless("hi", true).unwrap(), "hi");
    /// ```
    pub fn paint_unless(&self, text: &str, disabled: bool) -> Result<String> {
        if self.mode == Mode::PendingBackground {
            return Err(StyleError::DanglingOn);
        }

        if disabled {
            return Ok(text.to_string());
        }

        let mut out = String::new();
        if let Some(color) = self.color {
            out.push_str(&codes::sgr(color.fg_code()));
        }
        if let Some(color) = self.background {
            out.push_str(&codes::sgr(color.bg_code()));
        }
        for attr in &self.attrs {
            out.push_str(&codes::sgr(attr.code()));
        }
        out.push_str(text);
        out.push_str(codes::RESET);
        Ok(out)
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new()
    }
}

/// The dotted chain description: `termstyle` followed by each
/// attribute, the color, and `on` plus the background, in that order.
///
/// The output parses back into an equal style, and painting it with
/// the style itself yields a styled rendering of the style's own name.
///
/// # Example
///
/// ```
/// use termstyle::TERMSTYLE;
///
/// let style = TERMSTYLE
///     .get("bold").unwrap()
///     .get("red").unwrap()
///     .get("on").unwrap()
///     .get("blue").unwrap();
/// assert_eq!(style.to_string(), "termstyle.bold.red.on.blue");
/// ```
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("termstyle")?;
        for attr in &self.attrs {
            write!(f, ".{}", attr.name())?;
        }
        if let Some(color) = self.color {
            write!(f, ".{}", color.name())?;
        }
        if let Some(color) = self.background {
            write!(f, ".on.{}", color.name())?;
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    /// Parse a dotted chain, with or without the leading `termstyle`
    /// produced by [`Display`](fmt::Display).
    ///
    /// # Example
    ///
    /// ```
    /// use termstyle::{Style, TERMSTYLE};
    ///
    /// let parsed: Style = "termstyle.bold.red.on.blue".parse().unwrap();
    /// let chained = TERMSTYLE
    ///     .get("bold").unwrap()
    ///     .get("red").unwrap()
    ///     .get("on").unwrap()
    ///     .get("blue").unwrap();
    /// assert_eq!(parsed, chained);
    /// ```
    fn from_str(s: &str) -> Result<Style> {
        let mut style = Style::new();
        let mut tokens = s.split('.').peekable();
        if tokens.peek() == Some(&"termstyle") {
            tokens.next();
        }
        for token in tokens {
            style = style.get(token)?;
        }
        Ok(style)
    }
}
