// SPDX-License-Identifier: MIT
//
// tinct — immutable CSS color values.
//
// Parses the color forms CSS authors write (named colors, `#rgb` and
// `#rrggbb`, `rgb()` / `rgba()`), plus channel lists and HSL records,
// into a small `Copy` value. Adjustments happen in HSL or RGB depending
// on what they touch, and the result prints back as the shortest
// canonical CSS form.
//
// Layering:
//
//   numeric    range predicates, clamping, half-up rounding, hue wrap
//   model      Rgb, Hsl, and the Native tagged union
//   convert    RGB ↔ HSL
//   parse      ColorInput → Canonical
//   transform  pure Native → Native operations
//   serialize  Canonical → CSS string
//   color      the Color value type tying it all together
//
// The named-color table lives in the `tinct-names` crate.
//
// Everything is synchronous, allocation-light and free of shared mutable
// state; a `Color` can be sent and shared across threads freely.

// Single-char math variables are standard in color formulas.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod convert;
pub mod error;
pub mod model;
pub mod numeric;
pub mod parse;
pub mod serialize;
pub mod transform;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use model::{Hsl, Native, Rgb};
pub use parse::{ColorInput, HslInput};
pub use transform::Channel;
