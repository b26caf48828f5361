// SPDX-License-Identifier: MIT
//
// Canonical color records.
//
// A color is stored in exactly one native model, RGB or HSL, plus an
// alpha kept alongside by the owning `Color`. The other model is always
// derived on demand from the native one and never stored, so the two
// can not drift apart.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::{hsl_to_rgb, rgb_to_hsl};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB triple with 8-bit channels.
///
/// `u8` fields make the 0–255 range a property of the type; there is no
/// unchecked state to validate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether all three channels are equal (a gray).
    #[inline]
    #[must_use]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue, saturation and lightness, each a fraction in 0.0–1.0.
///
/// - `h`: fraction of a turn around the hue circle. 0 = red, 1/3 = green,
///   2/3 = blue; 1.0 is the same hue as 0.0.
/// - `s`: 0 = gray, 1 = fully saturated.
/// - `l`: 0 = black, 0.5 = pure hue, 1 = white.
///
/// Values handed to [`Color`](crate::Color) are validated on the way in;
/// a bare `Hsl` is just a record.
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Whether the color has no saturation (a gray, black or white).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < f64::EPSILON
    }
}

impl fmt::Debug for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsl({:.4}, {:.4}, {:.4})", self.h, self.s, self.l)
    }
}

// ─── Native ──────────────────────────────────────────────────────────────────

/// The representation a color was built from or last transformed into.
///
/// Operations that work on the hue circle produce `Hsl`; operations that
/// work on channels produce `Rgb`. Neither forces a conversion back.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Native {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Native {
    /// The RGB view, converting if HSL-native.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl_to_rgb(hsl),
        }
    }

    /// The HSL view, converting if RGB-native.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        match self {
            Self::Rgb(rgb) => rgb_to_hsl(rgb),
            Self::Hsl(hsl) => hsl,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Rgb(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_hsl(self) -> bool {
        matches!(self, Self::Hsl(_))
    }
}

impl From<Rgb> for Native {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Native {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}
