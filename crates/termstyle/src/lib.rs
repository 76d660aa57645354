//! Termstyle
//!
//! ANSI color formatting for terminal output, built up through a
//! natural chaining syntax and resolved lazily when a style is asked
//! to paint some text.
//!
//! # Overview
//!
//! - [`Style`] - The immutable chainable style builder
//! - [`TERMSTYLE`] - The root style every chain starts from
//! - [`codes`] - Raw SGR escape sequence constants
//! - [`utils`] - Text processing utilities (visible width, code stripping)
//!
//! # Example
//!
//! ```
//! use termstyle::TERMSTYLE;
//!
//! let style = TERMSTYLE
//!     .get("underlined").unwrap()
//!     .get("red").unwrap()
//!     .get("on").unwrap()
//!     .get("blue").unwrap();
//!
//! let line = style.paint_unless("underlined red on blue", false).unwrap();
//! assert!(line.starts_with("\x1b[31m\x1b[44m\x1b[4m"));
//! assert!(line.ends_with("\x1b[0m"));
//! ```
//!
//! Styling can be disabled for a whole process by setting the
//! `ANSI_COLORS_DISABLED` environment variable, in which case painting
//! returns its input verbatim.

pub mod codes;
pub mod style;
pub mod utils;

pub use style::{colors_disabled, Style, DISABLE_ENV_VAR, TERMSTYLE};
pub use termstyle_core::{Attr, Color, Result, StyleError, Token};
