// SPDX-License-Identifier: MIT
//
// Error kinds for color construction and adjustment.
//
// Every failure is raised at the call that introduced the bad value.
// Out-of-range inputs are never clamped into range; only computed
// intermediates (a lightness pushed past 1.0 by an in-range amount)
// are clamped.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input could not be read as any supported color shape.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An alpha value, or an absolute hue/saturation/lightness, was
    /// outside 0.0–1.0 or not a finite number.
    #[error("invalid alpha value: {0}")]
    InvalidAlpha(f64),

    /// A red/green/blue channel was outside 0–255, fractional, or not
    /// a finite number.
    #[error("invalid channel value: {0}")]
    InvalidChannel(f64),

    /// A relative adjustment or mix percentage was out of its domain.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
}

impl ColorError {
    /// Build a [`ColorError::InvalidColor`] quoting the rejected input.
    pub(crate) fn color(input: impl std::fmt::Display) -> Self {
        Self::InvalidColor(format!("\"{input}\""))
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
