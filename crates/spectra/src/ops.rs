//! Derived color operations.
//!
//! Every operation returns a new [`Color`] and leaves its receiver and
//! arguments untouched. Amounts are percentages: `lighten(10.0)` raises HSL
//! lightness by `0.10`.
//!
//! ```
//! use spectra::Color;
//!
//! let color = Color::rgba(255, 25, 75, 0.6);
//! assert_eq!(color.complement().hex(), "#19ffcd");
//! assert_eq!(color.darken(10.0).hex(), "#e50032");
//! assert_eq!(color.mix("#000", 50.0).unwrap().hex(), "#800d26");
//! ```

use crate::channel::{CHANNEL_MAX, round_channel};
use crate::color::Color;
use crate::convert::Rgb;
use crate::error::Result;
use crate::like::ColorLike;

// Rec. 709 luma coefficients.
const LUMA_RED: f64 = 0.2126;
const LUMA_GREEN: f64 = 0.7152;
const LUMA_BLUE: f64 = 0.0722;

/// Luma below this is considered dark.
pub const DARK_THRESHOLD: f64 = 128.0;

fn percent(amount: f64) -> f64 {
    amount / 100.0
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl Color {
    /// Rotates the hue by 180 degrees, keeping saturation, value and alpha.
    pub fn complement(&self) -> Color {
        self.with_hue(self.to_hsv().h + 180.0)
    }

    /// Replaces each RGB channel with `255 - channel`. Alpha is kept.
    pub fn negate(&self) -> Color {
        let Rgb { r, g, b } = self.to_rgb();
        Color::rgba(255 - r, 255 - g, 255 - b, self.alpha())
    }

    /// Same as [`Color::negate`].
    pub fn invert(&self) -> Color {
        self.negate()
    }

    pub fn lighten(&self, amount: f64) -> Color {
        self.with_lightness(self.lightness() + percent(amount))
    }

    pub fn darken(&self, amount: f64) -> Color {
        self.with_lightness(self.lightness() - percent(amount))
    }

    /// Raises HSL saturation by `amount` percent.
    pub fn saturate(&self, amount: f64) -> Color {
        self.with_saturationl(self.saturationl() + percent(amount))
    }

    pub fn desaturate(&self, amount: f64) -> Color {
        self.with_saturationl(self.saturationl() - percent(amount))
    }

    /// Raises alpha by `amount` percent.
    pub fn fade_in(&self, amount: f64) -> Color {
        self.with_alpha(self.alpha() + percent(amount))
    }

    pub fn fade_out(&self, amount: f64) -> Color {
        self.with_alpha(self.alpha() - percent(amount))
    }

    /// Perceptual luminance on the 0-255 scale.
    pub fn luma(&self) -> f64 {
        let Rgb { r, g, b } = self.to_rgb();
        LUMA_RED * f64::from(r) + LUMA_GREEN * f64::from(g) + LUMA_BLUE * f64::from(b)
    }

    /// Drops HSL saturation to zero, keeping lightness and alpha.
    ///
    /// `#ff194b` becomes `#8c8c8c`.
    pub fn grayscale(&self) -> Color {
        self.with_saturationl(0.0)
    }

    /// Gray with every channel set to the rounded [`Color::luma`].
    ///
    /// `#ff194b` becomes `#4e4e4e`.
    pub fn luma_grayscale(&self) -> Color {
        let gray = round_channel(self.luma());
        Color::rgba(gray, gray, gray, self.alpha())
    }

    pub fn is_dark(&self) -> bool {
        self.luma() < DARK_THRESHOLD
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Linearly interpolates red, green, blue and alpha toward `other`.
    ///
    /// `weight` is the percentage leaning toward `other` and is clamped to
    /// `0..=100`: `0` returns the receiver, `100` returns `other`.
    pub fn mix(&self, other: impl Into<ColorLike>, weight: f64) -> Result<Color> {
        let other = other.into().into_color()?;
        Ok(self.mix_color(&other, weight))
    }

    fn mix_color(&self, other: &Color, weight: f64) -> Color {
        let t = percent(weight).clamp(0.0, 1.0);
        let (from, to) = (self.to_rgb(), other.to_rgb());
        let channel = |a: u8, b: u8| round_channel(lerp(f64::from(a), f64::from(b), t));

        Color::rgba(
            channel(from.r, to.r),
            channel(from.g, to.g),
            channel(from.b, to.b),
            lerp(self.alpha(), other.alpha(), t),
        )
    }

    /// `steps` colors running from the receiver to `other`, both included.
    ///
    /// Step `i` sits at mix weight `100 * i / (steps - 1)`. One step yields
    /// only the receiver, zero steps yield nothing.
    pub fn gradient(&self, other: impl Into<ColorLike>, steps: usize) -> Result<Vec<Color>> {
        let other = other.into().into_color()?;
        log::trace!("gradient {} -> {} in {} steps", self, other, steps);

        let colors = match steps {
            0 => Vec::new(),
            1 => vec![*self],
            _ => {
                let last = (steps - 1) as f64;
                (0..steps)
                    .map(|i| self.mix_color(&other, 100.0 * i as f64 / last))
                    .collect()
            }
        };
        Ok(colors)
    }

    /// Multiply blend: `a * b / 255` per channel. Alpha is the receiver's.
    pub fn multiply(&self, other: impl Into<ColorLike>) -> Result<Color> {
        let other = other.into().into_color()?;
        Ok(self.blend(&other, |a, b| a * b / CHANNEL_MAX))
    }

    /// Screen blend: `255 - (255 - a) * (255 - b) / 255` per channel.
    /// Alpha is the receiver's.
    pub fn screen(&self, other: impl Into<ColorLike>) -> Result<Color> {
        let other = other.into().into_color()?;
        Ok(self.blend(&other, |a, b| {
            CHANNEL_MAX - (CHANNEL_MAX - a) * (CHANNEL_MAX - b) / CHANNEL_MAX
        }))
    }

    fn blend(&self, other: &Color, op: impl Fn(f64, f64) -> f64) -> Color {
        let (a, b) = (self.to_rgb(), other.to_rgb());
        let channel = |x: u8, y: u8| round_channel(op(f64::from(x), f64::from(y)));
        Color::rgba(
            channel(a.r, b.r),
            channel(a.g, b.g),
            channel(a.b, b.b),
            self.alpha(),
        )
    }
}
