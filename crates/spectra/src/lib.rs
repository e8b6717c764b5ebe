//! Color values with consistent RGB, HSV and HSL views.
//!
//! This crate provides a [`Color`] type that can be built from channel
//! values in any of the three models or from CSS-style text, read and
//! written one channel at a time, serialized back to CSS, and transformed
//! into related colors.
//!
//! # Overview
//!
//! - **Construction**: `Color::rgb`, `Color::hsv`, `Color::hsl`,
//!   `Color::parse` (`#rgb`, `#rrggbb`, `rgb()`, `rgba()`, CSS names), or
//!   `Color::new` with anything convertible into [`ColorLike`]
//! - **Channels**: `red`, `green`, `blue`, `alpha`, `hue`, `saturationv`,
//!   `value`, `saturationl`, `lightness`, each with `with_*` and `set_*`
//! - **Serialization**: `hex`, `rgb_string`, `rgba_string`, `hsl_string`,
//!   `hsla_string`, `rgb_number`
//! - **Operations**: complement, negate, lighten/darken, saturate/desaturate,
//!   fades, luma, grayscale, mix, gradient, harmony, multiply, screen
//!
//! # Usage
//!
//! ```
//! use spectra::Color;
//!
//! let color = Color::parse("#4Af").unwrap();
//! assert_eq!(color.hex(), "#44aaff");
//! assert_eq!(color.hsl_string(), "hsl(207,1,0.63)");
//!
//! let palette = color.harmony(Some("triad"), None);
//! assert_eq!(palette.len(), 3);
//!
//! let mixed = Color::parse("#0f7").unwrap().mix("#f87", 20.0).unwrap();
//! assert_eq!(mixed.hex(), "#33e777");
//! ```

pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod handle;
pub mod harmony;
pub mod like;
pub mod named;
pub mod ops;
pub mod parse;

// Re-export main types at crate root
pub use channel::Channel;
pub use color::Color;
pub use convert::{Hsl, Hsv, Rgb};
pub use error::{ColorError, InvalidReason, Result};
pub use handle::Spectra;
pub use harmony::Harmony;
pub use like::ColorLike;
pub use parse::ParseOptions;

/// Returns a color factory with the default parse options.
///
/// Calling this any number of times is side-effect free; each caller owns
/// its handle.
pub fn init() -> Spectra {
    Spectra::new()
}
