//! Hue-rotation palettes.
//!
//! A scheme is a list of hue offsets in degrees. [`Color::harmony`] places
//! the receiver at position `k` of the list and rotates every other entry by
//! the difference between its offset and offset `k`, where `k` is the index
//! magnitude modulo the scheme size:
//!
//! | scheme        | offsets              |
//! |---------------|----------------------|
//! | complementary | 0, 180               |
//! | analogous     | -30, 0, 30           |
//! | triad         | 0, 120, 240          |
//! | rectangle     | 0, 60, 180, 240      |
//! | square        | 0, 90, 180, 270      |
//!
//! A triad at index 2 is the split-complementary palette.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;

/// A named hue-rotation scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// The receiver and its complement. Also the fallback for unknown names.
    #[default]
    Complementary,
    Analogous,
    Triad,
    Rectangle,
    Square,
}

impl Harmony {
    /// Hue offsets in degrees, in palette order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Harmony::Complementary => &[0.0, 180.0],
            Harmony::Analogous => &[-30.0, 0.0, 30.0],
            Harmony::Triad => &[0.0, 120.0, 240.0],
            Harmony::Rectangle => &[0.0, 60.0, 180.0, 240.0],
            Harmony::Square => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    /// Number of colors the scheme produces.
    pub fn color_count(self) -> usize {
        self.offsets().len()
    }

    /// Looks a scheme up by name, ignoring case. Unknown names fall back to
    /// [`Harmony::Complementary`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "analogous" => Harmony::Analogous,
            "triad" => Harmony::Triad,
            "rectangle" => Harmony::Rectangle,
            "square" => Harmony::Square,
            "complementary" | "complement" => Harmony::Complementary,
            other => {
                log::debug!("unknown harmony {:?}, using complementary", other);
                Harmony::Complementary
            }
        }
    }
}

impl FromStr for Harmony {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triad => "triad",
            Harmony::Rectangle => "rectangle",
            Harmony::Square => "square",
        };
        f.write_str(name)
    }
}

impl Color {
    /// Builds a palette from a scheme name and an anchor index.
    ///
    /// A missing or unknown scheme yields the two-color complementary
    /// palette; a missing index means `0`. This never fails.
    ///
    /// ```
    /// use spectra::Color;
    ///
    /// let color = Color::rgb(255, 25, 75);
    /// let hexes: Vec<String> = color
    ///     .harmony(Some("analogous"), Some(1))
    ///     .iter()
    ///     .map(Color::hex)
    ///     .collect();
    /// assert_eq!(hexes, ["#ff19be", "#ff194b", "#ff5a19"]);
    /// ```
    pub fn harmony(&self, scheme: Option<&str>, index: Option<i64>) -> Vec<Color> {
        let scheme = scheme.map(Harmony::from_name).unwrap_or_default();
        self.harmony_of(scheme, index.unwrap_or(0))
    }

    /// Builds a palette for a typed scheme; see [`Color::harmony`].
    pub fn harmony_of(&self, scheme: Harmony, index: i64) -> Vec<Color> {
        let offsets = scheme.offsets();
        let anchor = (index.unsigned_abs() % offsets.len() as u64) as usize;
        let hue = self.to_hsv().h;

        offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                if i == anchor {
                    *self
                } else {
                    self.with_hue(hue + offset - offsets[anchor])
                }
            })
            .collect()
    }
}
