//! The library entry point.
//!
//! There is no process-wide registry: [`init`](crate::init) hands back a
//! [`Spectra`] value and callers keep it wherever they like. Handles are
//! `Copy` and independent of each other.

use crate::color::Color;
use crate::error::Result;
use crate::like::ColorLike;
use crate::parse::ParseOptions;

/// A color factory carrying parse options.
///
/// ```
/// let spectra = spectra::init();
/// let color = spectra.color("#ff194b").unwrap();
/// assert_eq!(color.red(), 255);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spectra {
    options: ParseOptions,
}

impl Spectra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Builds a color from any accepted input.
    pub fn color(&self, input: impl Into<ColorLike>) -> Result<Color> {
        input.into().into_color_with(self.options)
    }

    /// Parses a CSS notation.
    pub fn parse(&self, text: &str) -> Result<Color> {
        Color::parse_with(text, self.options)
    }
}
