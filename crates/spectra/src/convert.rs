//! Pure conversions between the RGB, HSV and HSL color models.
//!
//! RGB is stored as integer channels; HSV and HSL as real numbers with hue in
//! degrees and the remaining components in `0.0..=1.0`. Converting an integer
//! RGB triple into either cylindrical model and back reproduces it exactly.

use crate::channel::{CHANNEL_MAX, clamp_unit, unit_to_channel, wrap_hue};

/// An RGB triple with integer channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` integer. Bits above 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Packs the channels into `0xRRGGBB`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Hue, saturation and value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue, saturation and lightness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Wraps the hue and clamps saturation and value.
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_unit(self.s),
            v: clamp_unit(self.v),
        }
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wraps the hue and clamps saturation and lightness.
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: clamp_unit(self.s),
            l: clamp_unit(self.l),
        }
    }
}

// Max, min and their difference over the three channels.
fn extremes(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (max, min, max - min)
}

/// Hue in degrees shared by the HSV and HSL models; `0.0` when achromatic.
pub fn rgb_hue(rgb: Rgb) -> f64 {
    let (max, _, delta) = extremes(rgb);
    if delta == 0.0 {
        return 0.0;
    }

    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_hue(sector * 60.0)
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (max, _, delta) = extremes(rgb);
    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        h: rgb_hue(rgb),
        s,
        v: max / CHANNEL_MAX,
    }
}

/// Converts HSV to RGB using the six-sector algorithm.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv.normalized();

    let position = h / 60.0;
    let sector = position.floor();
    let f = position - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (max, min, delta) = extremes(rgb);
    let l = (max + min) / 2.0 / CHANNEL_MAX;
    // Same as delta / (255 - |2*l*255 - 255|) without the detour through l.
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (CHANNEL_MAX - (max + min - CHANNEL_MAX).abs())
    };
    Hsl {
        h: rgb_hue(rgb),
        s,
        l,
    }
}

/// Converts HSL to RGB with the hue-to-RGB helper applied at 1/3 offsets.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl.normalized();

    if s == 0.0 {
        let gray = unit_to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let h = h / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        unit_to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_rgb(p, q, h)),
        unit_to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Exact HSV to HSL conversion; the hue is carried over untouched.
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let Hsv { h, s, v } = hsv.normalized();
    let l = v * (1.0 - s / 2.0);
    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    Hsl {
        h,
        s: clamp_unit(s),
        l,
    }
}

/// Exact HSL to HSV conversion; the hue is carried over untouched.
pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    let Hsl { h, s, l } = hsl.normalized();
    let v = l + s * l.min(1.0 - l);
    let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsv {
        h,
        s: clamp_unit(s),
        v: clamp_unit(v),
    }
}
