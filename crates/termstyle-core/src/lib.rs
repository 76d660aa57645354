//! Termstyle Core
//!
//! This crate provides the token and error definitions for the
//! termstyle ANSI styling library.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Color`] - The eight named terminal colors and their SGR codes
//! - [`Attr`] - Text attributes (bold, underlined, etc.)
//! - [`Token`] - The closed set of chainable style tokens
//! - [`StyleError`] - Error types

pub mod error;
pub mod token;

pub use error::{Result, StyleError};
pub use token::{Attr, Color, Token};
