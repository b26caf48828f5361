// SPDX-License-Identifier: MIT
//
// Numeric primitives shared by every layer.
//
// Three domains show up everywhere in this crate:
//
//   channel  integer-like, 0–255     red / green / blue
//   unit     float, 0.0–1.0          alpha, hue, saturation, lightness, mix %
//   amount   float, -1.0–1.0         relative lighten / saturate steps
//
// The `is_*` predicates answer "is this value in the domain", the
// `check_*` functions turn a miss into the matching `ColorError`, and
// the rest (clamping, rounding, hue wrapping) only ever apply to values
// computed inside the crate.

use crate::error::{ColorError, ColorResult};

/// Whether `v` is a finite, integer-like value in 0–255.
#[inline]
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_channel(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && (0.0..=255.0).contains(&v)
}

/// Whether `v` is a finite value in 0.0–1.0.
#[inline]
#[must_use]
pub fn is_unit(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

/// Whether `v` is a finite value in -1.0–1.0.
#[inline]
#[must_use]
pub fn is_amount(v: f64) -> bool {
    v.is_finite() && (-1.0..=1.0).contains(&v)
}

/// Validate a channel value and narrow it to `u8`.
///
/// # Errors
///
/// [`ColorError::InvalidChannel`] when `v` is not an integer in 0–255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn check_channel(v: f64) -> ColorResult<u8> {
    if is_channel(v) {
        // Exact: integer-valued and within u8 range.
        Ok(v as u8)
    } else {
        Err(ColorError::InvalidChannel(v))
    }
}

/// Validate an alpha value (or any absolute unit-range component).
///
/// # Errors
///
/// [`ColorError::InvalidAlpha`] when `v` is outside 0.0–1.0.
pub fn check_unit(v: f64) -> ColorResult<f64> {
    if is_unit(v) {
        Ok(v)
    } else {
        Err(ColorError::InvalidAlpha(v))
    }
}

/// Validate a relative adjustment.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `v` is outside -1.0–1.0.
pub fn check_amount(v: f64) -> ColorResult<f64> {
    if is_amount(v) {
        Ok(v)
    } else {
        Err(ColorError::InvalidAmount(v))
    }
}

/// Validate a mix percentage (`combine`, `tint`).
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `v` is outside 0.0–1.0.
pub fn check_percentage(v: f64) -> ColorResult<f64> {
    if is_unit(v) {
        Ok(v)
    } else {
        Err(ColorError::InvalidAmount(v))
    }
}

/// Clamp a computed value into 0.0–1.0.
#[inline]
#[must_use]
pub const fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Round half-up and clamp into a channel.
///
/// `127.5` becomes `128`; NaN becomes `0`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_channel(v: f64) -> u8 {
    // The float-to-int cast saturates and maps NaN to 0.
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Wrap any finite hue into [0, 1).
///
/// Works for multi-turn shifts in either direction: `-1.25` wraps to
/// `0.75`, `2.5` to `0.5`.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h - h.floor();
    // A tiny negative input can round up to exactly 1.0.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
