// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard notation for these formulas.
//
// Both directions work on channels normalized to 0.0–1.0. Hue is a
// fraction of a turn rather than degrees, so the six 60° sectors of the
// hue circle are sixths here.
//
// Round-trip guarantee: `hsl_to_rgb(rgb_to_hsl(c))` reproduces every
// channel of `c` to within ±1 (in practice exactly, since the
// intermediate HSL is kept in f64). Achromatic colors come back with
// hue 0.

use crate::model::{Hsl, Rgb};
use crate::numeric::{round_channel, wrap_hue};

/// Convert an 8-bit RGB triple to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Exact comparison is safe: both come from the same three inputs.
    if rgb.r.max(rgb.g).max(rgb.b) == rgb.r.min(rgb.g).min(rgb.b) {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());

    let sector = if rgb.r >= rgb.g && rgb.r >= rgb.b {
        (g - b) / d
    } else if rgb.g >= rgb.b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let h = sector / 6.0;
    let h = if h < 0.0 { h + 1.0 } else { h };

    Hsl::new(h, s.min(1.0), l)
}

/// Convert HSL to an 8-bit RGB triple.
///
/// Out-of-range inputs are tolerated: the hue wraps and each resulting
/// channel is rounded half-up and clamped to 0–255.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let hp = wrap_hue(h) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match sextant(hp) {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        round_channel((r + m) * 255.0),
        round_channel((g + m) * 255.0),
        round_channel((b + m) * 255.0),
    )
}

/// Which sixth of the hue circle `hp` (0.0–6.0) falls into.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sextant(hp: f64) -> u8 {
    // hp is non-negative and below 6, so the cast is exact.
    hp.floor().clamp(0.0, 5.0) as u8
}
