//! Inputs that can be coerced into a [`Color`].

use crate::color::Color;
use crate::convert::{Hsl, Hsv, Rgb};
use crate::error::{ColorError, InvalidReason, Result};
use crate::parse::ParseOptions;

/// Any value accepted where a color is expected.
///
/// Constructors and operations such as [`Color::mix`] take
/// `impl Into<ColorLike>`, so callers can pass a `Color`, a CSS string, a
/// channel struct or a tuple directly. `None` converts to
/// [`ColorLike::Absent`], which never coerces.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorLike {
    /// An existing color, copied as-is.
    Color(Color),
    /// RGB channels with an optional alpha (defaults to 1).
    Rgb { r: u8, g: u8, b: u8, a: Option<f64> },
    /// HSV components with an optional alpha (defaults to 1).
    Hsv { h: f64, s: f64, v: f64, a: Option<f64> },
    /// HSL components with an optional alpha (defaults to 1).
    Hsl { h: f64, s: f64, l: f64, a: Option<f64> },
    /// A CSS notation such as `#ff194b`, `rgba(255,25,75,.6)` or `teal`.
    Css(String),
    /// No input at all.
    Absent,
}

impl ColorLike {
    /// Coerces into a color using the default parse options.
    pub fn into_color(self) -> Result<Color> {
        self.into_color_with(ParseOptions::default())
    }

    /// Coerces into a color; `options` only affects [`ColorLike::Css`].
    pub fn into_color_with(self, options: ParseOptions) -> Result<Color> {
        match self {
            ColorLike::Color(color) => Ok(color),
            ColorLike::Rgb { r, g, b, a } => Ok(Color::rgba(r, g, b, a.unwrap_or(1.0))),
            ColorLike::Hsv { h, s, v, a } => Ok(Color::hsva(h, s, v, a.unwrap_or(1.0))),
            ColorLike::Hsl { h, s, l, a } => Ok(Color::hsla(h, s, l, a.unwrap_or(1.0))),
            ColorLike::Css(text) => {
                log::trace!("coercing css notation {:?}", text);
                Color::parse_with(&text, options)
            }
            ColorLike::Absent => Err(ColorError::invalid("<absent>", InvalidReason::Absent)),
        }
    }
}

impl From<Color> for ColorLike {
    fn from(color: Color) -> Self {
        ColorLike::Color(color)
    }
}

impl From<&Color> for ColorLike {
    fn from(color: &Color) -> Self {
        ColorLike::Color(*color)
    }
}

impl From<&str> for ColorLike {
    fn from(text: &str) -> Self {
        ColorLike::Css(text.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(text: String) -> Self {
        ColorLike::Css(text)
    }
}

impl From<&String> for ColorLike {
    fn from(text: &String) -> Self {
        ColorLike::Css(text.clone())
    }
}

impl From<Rgb> for ColorLike {
    fn from(Rgb { r, g, b }: Rgb) -> Self {
        ColorLike::Rgb { r, g, b, a: None }
    }
}

impl From<(u8, u8, u8)> for ColorLike {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorLike::Rgb { r, g, b, a: None }
    }
}

impl From<(u8, u8, u8, f64)> for ColorLike {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        ColorLike::Rgb { r, g, b, a: Some(a) }
    }
}

impl From<Hsv> for ColorLike {
    fn from(Hsv { h, s, v }: Hsv) -> Self {
        ColorLike::Hsv { h, s, v, a: None }
    }
}

impl From<Hsl> for ColorLike {
    fn from(Hsl { h, s, l }: Hsl) -> Self {
        ColorLike::Hsl { h, s, l, a: None }
    }
}

impl<T: Into<ColorLike>> From<Option<T>> for ColorLike {
    fn from(value: Option<T>) -> Self {
        value.map_or(ColorLike::Absent, Into::into)
    }
}
