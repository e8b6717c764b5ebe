//! The [`Color`] type and its per-channel accessors.
//!
//! A color keeps its RGB, HSV and HSL views side by side. Every mutator
//! re-derives the other views before returning, so the three always describe
//! the same point:
//!
//! - RGB setters recompute HSV and HSL from the new integer channels.
//! - HSV setters round into RGB and convert HSV to HSL exactly.
//! - HSL setters round into RGB and convert HSL to HSV exactly.
//!
//! Hue is shared by both cylindrical views and is `0` whenever the RGB view
//! is achromatic (`r == g == b`). Otherwise cylindrical setters keep the
//! exact hue they were given.
//!
//! ```
//! use spectra::Color;
//!
//! let mut color = Color::rgb(123, 192, 72);
//! color.set_hue(347.0);
//! color.set_saturationv(0.902);
//! color.set_value(1.0);
//! assert_eq!(color.hex(), "#ff194b");
//!
//! let lighter = color.with_lightness(color.lightness() + 0.1);
//! assert_eq!(lighter.hex(), "#ff4c73");
//! ```

use std::str::FromStr;

use crate::channel::{Channel, clamp_channel, clamp_unit, wrap_hue};
use crate::convert::{self, Hsl, Hsv, Rgb};
use crate::error::{ColorError, Result};
use crate::like::ColorLike;
use crate::parse::{self, ParseOptions};

// Alpha values closer than this compare equal.
const ALPHA_TOLERANCE: f64 = 1e-9;

// Achromatic colors have no meaningful hue.
fn hue_for(rgb: Rgb, hue: f64) -> f64 {
    if rgb.r == rgb.g && rgb.g == rgb.b {
        0.0
    } else {
        hue
    }
}

/// A color with consistent RGB, HSV and HSL views and an alpha channel.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    rgb: Rgb,
    alpha: f64,
    hue: f64,
    saturation_v: f64,
    value: f64,
    saturation_l: f64,
    lightness: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from RGB channels and an alpha, which is clamped to `0..=1`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::from_rgb(Rgb::new(r, g, b), a)
    }

    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::hsva(h, s, v, 1.0)
    }

    /// Creates a color from HSV components; out-of-range values are clamped
    /// and the hue is wrapped.
    pub fn hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self::from_hsv(Hsv::new(h, s, v), a)
    }

    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Creates a color from HSL components; out-of-range values are clamped
    /// and the hue is wrapped.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::from_hsl(Hsl::new(h, s, l), a)
    }

    /// Unpacks a `0xRRGGBB` integer into an opaque color.
    pub fn from_rgb_number(packed: u32) -> Self {
        Self::from_rgb(Rgb::from_packed(packed), 1.0)
    }

    /// Builds a color from anything [`ColorLike`] accepts.
    ///
    /// ```
    /// use spectra::Color;
    ///
    /// let a = Color::new("#ff194b").unwrap();
    /// let b = Color::new((255, 25, 75)).unwrap();
    /// assert_eq!(a, b);
    /// assert!(Color::new(None::<&str>).is_err());
    /// ```
    pub fn new(input: impl Into<ColorLike>) -> Result<Self> {
        input.into().into_color()
    }

    /// Parses a CSS notation with the default (strict) options.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, ParseOptions::default())
    }

    /// Parses a CSS notation with explicit options.
    pub fn parse_with(input: &str, options: ParseOptions) -> Result<Self> {
        let (rgb, alpha) = parse::parse_notation(input, options)?;
        Ok(Self::from_rgb(rgb, alpha))
    }

    pub(crate) fn from_rgb(rgb: Rgb, alpha: f64) -> Self {
        let mut color = Self::blank(alpha);
        color.assign_rgb(rgb);
        color
    }

    pub(crate) fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        let mut color = Self::blank(alpha);
        color.assign_hsv(hsv.normalized());
        color
    }

    pub(crate) fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        let mut color = Self::blank(alpha);
        color.assign_hsl(hsl.normalized());
        color
    }

    fn blank(alpha: f64) -> Self {
        Self {
            rgb: Rgb::default(),
            alpha: clamp_unit(alpha),
            hue: 0.0,
            saturation_v: 0.0,
            value: 0.0,
            saturation_l: 0.0,
            lightness: 0.0,
        }
    }

    // ==================== STATE SYNC ====================

    fn assign_rgb(&mut self, rgb: Rgb) {
        let hsv = convert::rgb_to_hsv(rgb);
        let hsl = convert::rgb_to_hsl(rgb);
        self.rgb = rgb;
        self.hue = hsv.h;
        self.saturation_v = hsv.s;
        self.value = hsv.v;
        self.saturation_l = hsl.s;
        self.lightness = hsl.l;
    }

    fn assign_hsv(&mut self, hsv: Hsv) {
        let hsl = convert::hsv_to_hsl(hsv);
        self.rgb = convert::hsv_to_rgb(hsv);
        self.hue = hue_for(self.rgb, hsv.h);
        self.saturation_v = hsv.s;
        self.value = hsv.v;
        self.saturation_l = hsl.s;
        self.lightness = hsl.l;
    }

    fn assign_hsl(&mut self, hsl: Hsl) {
        let hsv = convert::hsl_to_hsv(hsl);
        self.rgb = convert::hsl_to_rgb(hsl);
        self.hue = hue_for(self.rgb, hsl.h);
        self.saturation_v = hsv.s;
        self.value = hsv.v;
        self.saturation_l = hsl.s;
        self.lightness = hsl.l;
    }

    // ==================== VIEWS ====================

    /// The integer RGB view.
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSV view, with the unrounded hue.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation_v, self.value)
    }

    /// The HSL view, with the unrounded hue.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation_l, self.lightness)
    }

    // ==================== GETTERS ====================

    pub fn red(&self) -> u8 {
        self.rgb.r
    }

    pub fn green(&self) -> u8 {
        self.rgb.g
    }

    pub fn blue(&self) -> u8 {
        self.rgb.b
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Hue in whole degrees, `0..360`.
    ///
    /// Derived operations work from the unrounded hue; use [`Color::to_hsv`]
    /// to read it.
    pub fn hue(&self) -> f64 {
        wrap_hue(self.hue.round())
    }

    /// Saturation in the HSV model.
    pub fn saturationv(&self) -> f64 {
        self.saturation_v
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Saturation in the HSL model.
    pub fn saturationl(&self) -> f64 {
        self.saturation_l
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Reads any channel as a number in its natural domain.
    ///
    /// Unlike [`Color::hue`], the hue comes back unrounded, so writing the
    /// value back with [`Color::set_channel`] leaves the color unchanged.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => f64::from(self.rgb.r),
            Channel::Green => f64::from(self.rgb.g),
            Channel::Blue => f64::from(self.rgb.b),
            Channel::Alpha => self.alpha,
            Channel::Hue => self.hue,
            Channel::SaturationV => self.saturation_v,
            Channel::Value => self.value,
            Channel::SaturationL => self.saturation_l,
            Channel::Lightness => self.lightness,
        }
    }

    // ==================== IN-PLACE SETTERS ====================

    /// Sets red, clamped to `0..=255`.
    pub fn set_red(&mut self, red: i32) {
        self.assign_rgb(Rgb {
            r: clamp_channel(red),
            ..self.rgb
        });
    }

    /// Sets green, clamped to `0..=255`.
    pub fn set_green(&mut self, green: i32) {
        self.assign_rgb(Rgb {
            g: clamp_channel(green),
            ..self.rgb
        });
    }

    /// Sets blue, clamped to `0..=255`.
    pub fn set_blue(&mut self, blue: i32) {
        self.assign_rgb(Rgb {
            b: clamp_channel(blue),
            ..self.rgb
        });
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = clamp_unit(alpha);
    }

    /// Sets the hue in degrees, wrapping into `0..360`.
    pub fn set_hue(&mut self, hue: f64) {
        self.assign_hsv(Hsv::new(hue, self.saturation_v, self.value).normalized());
    }

    pub fn set_saturationv(&mut self, saturation: f64) {
        self.assign_hsv(Hsv::new(self.hue, saturation, self.value).normalized());
    }

    pub fn set_value(&mut self, value: f64) {
        self.assign_hsv(Hsv::new(self.hue, self.saturation_v, value).normalized());
    }

    pub fn set_saturationl(&mut self, saturation: f64) {
        self.assign_hsl(Hsl::new(self.hue, saturation, self.lightness).normalized());
    }

    pub fn set_lightness(&mut self, lightness: f64) {
        self.assign_hsl(Hsl::new(self.hue, self.saturation_l, lightness).normalized());
    }

    /// Writes any channel; the value is clamped (or wrapped) into its domain.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        let value = channel.normalize(value);
        match channel {
            // already rounded into 0..=255
            Channel::Red => self.set_red(value as i32),
            Channel::Green => self.set_green(value as i32),
            Channel::Blue => self.set_blue(value as i32),
            Channel::Alpha => self.set_alpha(value),
            Channel::Hue => self.set_hue(value),
            Channel::SaturationV => self.set_saturationv(value),
            Channel::Value => self.set_value(value),
            Channel::SaturationL => self.set_saturationl(value),
            Channel::Lightness => self.set_lightness(value),
        }
    }

    // ==================== PURE SETTERS ====================

    pub fn with_red(mut self, red: i32) -> Self {
        self.set_red(red);
        self
    }

    pub fn with_green(mut self, green: i32) -> Self {
        self.set_green(green);
        self
    }

    pub fn with_blue(mut self, blue: i32) -> Self {
        self.set_blue(blue);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.set_alpha(alpha);
        self
    }

    pub fn with_hue(mut self, hue: f64) -> Self {
        self.set_hue(hue);
        self
    }

    pub fn with_saturationv(mut self, saturation: f64) -> Self {
        self.set_saturationv(saturation);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_saturationl(mut self, saturation: f64) -> Self {
        self.set_saturationl(saturation);
        self
    }

    pub fn with_lightness(mut self, lightness: f64) -> Self {
        self.set_lightness(lightness);
        self
    }

    pub fn with_channel(mut self, channel: Channel, value: f64) -> Self {
        self.set_channel(channel, value);
        self
    }

    // ==================== EQUALITY ====================

    /// Compares red, green, blue and alpha. Hue and saturation are derived
    /// views and do not take part.
    pub fn equals(&self, other: &Color) -> bool {
        self.rgb == other.rgb && (self.alpha - other.alpha).abs() < ALPHA_TOLERANCE
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
