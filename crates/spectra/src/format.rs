//! Serialization of colors to CSS-style strings and packed integers.
//!
//! Numbers are written in their shortest round-trip form, so an alpha of
//! `1.0` renders as `1` and `0.6` as `0.6`. HSL strings carry the hue in
//! whole degrees and saturation/lightness as unit numbers at two decimals.

use std::fmt;

use crate::channel::wrap_hue;
use crate::color::Color;

fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Color {
    /// Lowercase `#rrggbb`. Alpha is not included.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    /// `rgb(r,g,b)`.
    pub fn rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.red(), self.green(), self.blue())
    }

    /// `rgba(r,g,b,a)`.
    pub fn rgba_string(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }

    /// `hsl(h,s,l)` with `s` and `l` in `0..=1`, e.g. `hsl(207,1,0.63)`.
    pub fn hsl_string(&self) -> String {
        let (h, s, l) = self.hsl_parts();
        format!("hsl({},{},{})", h, s, l)
    }

    /// `hsla(h,s,l,a)`, e.g. `hsla(207,1,0.63,1)`.
    pub fn hsla_string(&self) -> String {
        let (h, s, l) = self.hsl_parts();
        format!("hsla({},{},{},{})", h, s, l, self.alpha())
    }

    /// The RGB channels packed as `0xRRGGBB`.
    pub fn rgb_number(&self) -> u32 {
        self.to_rgb().packed()
    }

    fn hsl_parts(&self) -> (f64, f64, f64) {
        let hsl = self.to_hsl();
        (
            wrap_hue(hsl.h.round()),
            two_decimals(hsl.s),
            two_decimals(hsl.l),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rgba_string())
    }
}
