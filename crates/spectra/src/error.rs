//! Error types for color construction and coercion.

use thiserror::Error;

/// Why an input could not be turned into a [`Color`](crate::Color).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// No input was supplied (the typed form of `null`/`undefined`).
    #[error("no color input supplied")]
    Absent,

    /// The string was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// A hex color had a digit count other than the accepted ones.
    #[error("invalid hex color length: {0}")]
    HexLength(usize),

    /// A hex color contained a non-hex digit.
    #[error("invalid hex digit: {0}")]
    HexDigit(char),

    /// An `rgb()`/`rgba()` function did not match the expected grammar.
    #[error("malformed rgb()/rgba() function")]
    MalformedFunction,

    /// An RGB channel was not an integer in 0-255.
    #[error("channel out of range (0-255): {0}")]
    ChannelOutOfRange(String),

    /// An alpha value was not a number in 0-1.
    #[error("alpha out of range (0-1): {0}")]
    AlphaOutOfRange(String),

    /// The string was not a known CSS color name.
    #[error("unknown color name")]
    UnknownName,
}

/// Errors that can occur when building a color.
///
/// There is a single kind: the input could not be understood as a color.
/// The [`InvalidReason`] carries the detail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The input is not a recognized color shape or notation.
    #[error("invalid color input `{input}`: {reason}")]
    InvalidColorInput {
        /// The offending input, as text.
        input: String,
        /// What was wrong with it.
        reason: InvalidReason,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        let input = input.into();
        log::debug!("rejected color input {:?}: {}", input, reason);
        ColorError::InvalidColorInput { input, reason }
    }

    /// Returns the reason the input was rejected.
    pub fn reason(&self) -> &InvalidReason {
        match self {
            ColorError::InvalidColorInput { reason, .. } => reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ColorError> = std::result::Result<T, E>;
