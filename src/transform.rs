// SPDX-License-Identifier: MIT
//
// Transform engine — pure functions from one native color to another.
//
// Hue-circle operations (lighten, saturate, hue shifts, tint) read the
// HSL view, change one component and return `Native::Hsl`. Channel
// operations (channel setters, invert, combine) read the RGB view and
// return `Native::Rgb`. A result is never converted back to the input's
// model; the owning `Color` decides what to do with it.
//
// Inputs are validated before anything is computed. Clamping is only
// applied to computed values: `lighten(0.3)` on l = 0.9 gives l = 1.0,
// while `lighten(1.3)` is an error.

use crate::error::{ColorError, ColorResult};
use crate::model::{Hsl, Native, Rgb};
use crate::numeric::{
    check_amount, check_channel, check_percentage, check_unit, clamp_unit, round_channel, wrap_hue,
};

/// One of the three RGB channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

// ─── Relative HSL adjustments ────────────────────────────────────────────────

/// Raise lightness by `amount` (-1.0–1.0), clamping the result.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `amount` is out of range.
pub fn lighten(native: Native, amount: f64) -> ColorResult<Native> {
    let amount = check_amount(amount)?;
    let hsl = native.to_hsl();
    Ok(Native::Hsl(Hsl {
        l: clamp_unit(hsl.l + amount),
        ..hsl
    }))
}

/// Lower lightness by `amount` (-1.0–1.0), clamping the result.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `amount` is out of range.
pub fn darken(native: Native, amount: f64) -> ColorResult<Native> {
    lighten(native, -check_amount(amount)?)
}

/// Raise saturation by `amount` (-1.0–1.0), clamping the result.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `amount` is out of range.
pub fn saturate(native: Native, amount: f64) -> ColorResult<Native> {
    let amount = check_amount(amount)?;
    let hsl = native.to_hsl();
    Ok(Native::Hsl(Hsl {
        s: clamp_unit(hsl.s + amount),
        ..hsl
    }))
}

/// Lower saturation by `amount` (-1.0–1.0), clamping the result.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `amount` is out of range.
pub fn desaturate(native: Native, amount: f64) -> ColorResult<Native> {
    saturate(native, -check_amount(amount)?)
}

/// Rotate the hue by `amount` turns, wrapping into [0, 1).
///
/// Any finite amount is accepted; `1.0` and `-3.0` are identities.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `amount` is NaN or infinite.
pub fn shift_hue(native: Native, amount: f64) -> ColorResult<Native> {
    if !amount.is_finite() {
        return Err(ColorError::InvalidAmount(amount));
    }
    let hsl = native.to_hsl();
    Ok(Native::Hsl(Hsl {
        h: wrap_hue(hsl.h + amount),
        ..hsl
    }))
}

// ─── Absolute HSL setters ────────────────────────────────────────────────────

/// Replace any subset of hue, saturation and lightness.
///
/// `None` keeps the current component. Each given value must be in
/// 0.0–1.0.
///
/// # Errors
///
/// [`ColorError::InvalidAlpha`] for the first out-of-range component.
pub fn set_hsl(native: Native, h: Option<f64>, s: Option<f64>, l: Option<f64>) -> ColorResult<Native> {
    let h = h.map(check_unit).transpose()?;
    let s = s.map(check_unit).transpose()?;
    let l = l.map(check_unit).transpose()?;

    let hsl = native.to_hsl();
    Ok(Native::Hsl(Hsl {
        h: h.unwrap_or(hsl.h),
        s: s.unwrap_or(hsl.s),
        l: l.unwrap_or(hsl.l),
    }))
}

/// Set the hue to `value` (0.0–1.0).
///
/// # Errors
///
/// [`ColorError::InvalidAlpha`] when `value` is out of range.
pub fn set_hue(native: Native, value: f64) -> ColorResult<Native> {
    set_hsl(native, Some(value), None, None)
}

/// Set the saturation to `value` (0.0–1.0).
///
/// # Errors
///
/// [`ColorError::InvalidAlpha`] when `value` is out of range.
pub fn set_saturation(native: Native, value: f64) -> ColorResult<Native> {
    set_hsl(native, None, Some(value), None)
}

/// Set the lightness to `value` (0.0–1.0).
///
/// # Errors
///
/// [`ColorError::InvalidAlpha`] when `value` is out of range.
pub fn set_lightness(native: Native, value: f64) -> ColorResult<Native> {
    set_hsl(native, None, None, Some(value))
}

// ─── Channel operations ──────────────────────────────────────────────────────

/// Set one RGB channel to `value` (an integer 0–255).
///
/// # Errors
///
/// [`ColorError::InvalidChannel`] when `value` is out of range or
/// fractional.
pub fn set_channel(native: Native, channel: Channel, value: f64) -> ColorResult<Native> {
    let value = check_channel(value)?;
    let rgb = native.to_rgb();
    Ok(Native::Rgb(match channel {
        Channel::Red => Rgb { r: value, ..rgb },
        Channel::Green => Rgb { g: value, ..rgb },
        Channel::Blue => Rgb { b: value, ..rgb },
    }))
}

/// Complement every channel: `c -> 255 - c`.
#[must_use]
pub fn invert(native: Native) -> Native {
    let Rgb { r, g, b } = native.to_rgb();
    Native::Rgb(Rgb::new(255 - r, 255 - g, 255 - b))
}

/// Linear per-channel blend toward `other`.
///
/// `pct` = 0.0 keeps `native`, 1.0 gives `other`. Each channel is
/// rounded half-up: black and white at 0.5 give (128, 128, 128).
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `pct` is outside 0.0–1.0.
pub fn combine(native: Native, other: Native, pct: f64) -> ColorResult<Native> {
    let pct = check_percentage(pct)?;
    let from = native.to_rgb();
    let to = other.to_rgb();
    let mix = |a: u8, b: u8| {
        let a = f64::from(a);
        round_channel((f64::from(b) - a).mul_add(pct, a))
    };
    Ok(Native::Rgb(Rgb::new(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
    )))
}

/// Move the hue toward `other`'s hue by `pct`, along the shorter arc.
///
/// Saturation and lightness come from `native` unchanged. At an exact
/// half-turn difference the hue moves in the increasing direction.
///
/// # Errors
///
/// [`ColorError::InvalidAmount`] when `pct` is outside 0.0–1.0.
pub fn tint(native: Native, other: Native, pct: f64) -> ColorResult<Native> {
    let pct = check_percentage(pct)?;
    let hsl = native.to_hsl();
    let target = other.to_hsl();
    Ok(Native::Hsl(Hsl {
        h: interpolate_hue(hsl.h, target.h, pct),
        ..hsl
    }))
}

/// Interpolate between two hues (turns) taking the shorter arc.
#[inline]
#[must_use]
pub fn interpolate_hue(from: f64, to: f64, t: f64) -> f64 {
    let diff = to - from;
    let diff = if diff > 0.5 {
        diff - 1.0
    } else if diff <= -0.5 {
        diff + 1.0
    } else {
        diff
    };
    wrap_hue(diff.mul_add(t, from))
}
