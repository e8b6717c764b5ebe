//! Channel ranges and the rounding policy shared by every conversion.
//!
//! Integer channels (red, green, blue) live in `0..=255`. Alpha, saturation,
//! value and lightness live in `0.0..=1.0`. Hue is measured in degrees and
//! wraps into `0.0..360.0`.
//!
//! Out-of-range input is clamped (or wrapped, for hue); nothing here fails.

use std::fmt;

/// Largest value of an integer channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Full turn of the hue circle in degrees.
pub const HUE_TURN: f64 = 360.0;

// Precision that intermediate channel values are snapped to before rounding.
const SNAP: f64 = 1e6;

/// Every channel a [`Color`](crate::Color) exposes, across all three spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Hue,
    /// Saturation in the HSV model.
    SaturationV,
    Value,
    /// Saturation in the HSL model.
    SaturationL,
    Lightness,
}

impl Channel {
    /// Every channel, RGB first, then alpha, then the cylindrical ones.
    pub const ALL: [Channel; 9] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Alpha,
        Channel::Hue,
        Channel::SaturationV,
        Channel::Value,
        Channel::SaturationL,
        Channel::Lightness,
    ];

    /// Brings an arbitrary value into this channel's domain.
    ///
    /// RGB channels are rounded and clamped to `0..=255`, hue is wrapped
    /// into `0..360`, everything else is clamped to `0..=1`.
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => f64::from(round_channel(value)),
            Channel::Hue => wrap_hue(value),
            _ => clamp_unit(value),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
            Channel::Hue => "hue",
            Channel::SaturationV => "saturationv",
            Channel::Value => "value",
            Channel::SaturationL => "saturationl",
            Channel::Lightness => "lightness",
        };
        f.write_str(name)
    }
}

/// Rounds a 0-255 scaled value to the nearest integer channel.
///
/// Ties round away from zero. The value is first snapped to six decimals so
/// that a tie which is exact in real arithmetic (`36.5` arriving as
/// `36.49999999999997`) still rounds up.
pub fn round_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let snapped = (value * SNAP).round() / SNAP;
    snapped.round().clamp(0.0, CHANNEL_MAX) as u8
}

/// Scales a unit value to 0-255 and rounds it.
pub fn unit_to_channel(unit: f64) -> u8 {
    round_channel(unit * CHANNEL_MAX)
}

/// Clamps to `0.0..=1.0`; NaN and `-0.0` become `0.0`.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value.min(1.0)
    }
}

/// Wraps a hue into `0.0..360.0` (`-5.0` becomes `355.0`).
pub fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(HUE_TURN);
    // rem_euclid can land on the upper bound for tiny negative inputs
    if wrapped >= HUE_TURN { 0.0 } else { wrapped }
}

/// Clamps an arbitrary integer to a channel.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
