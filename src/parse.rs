// SPDX-License-Identifier: MIT
//
// Input parsing — every accepted color shape to one canonical form.
//
// Accepted shapes, one `ColorInput` variant each:
//
//   Color     an existing value, copied as-is (native model and alpha)
//   Channels  3 or 4 numbers: r, g, b integers 0–255, optional alpha 0–1
//   Css       named color, `#rgb` / `#rrggbb`, `rgb(r,g,b)`, `rgba(r,g,b,a)`
//   Hsl       an {h, s, l} record with optional alpha
//
// Dispatch is a `match` over the variant. Numbers are checked for
// finiteness before any range check, so NaN and infinities fail the
// same way an out-of-range value does.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ColorError, ColorResult};
use crate::model::{Hsl, Native, Rgb};
use crate::numeric::{check_unit, is_channel, is_unit};

// ─── Canonical ───────────────────────────────────────────────────────────────

/// Parser output: one native representation plus alpha.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Canonical {
    pub native: Native,
    pub alpha: f64,
}

impl Canonical {
    /// Black at zero alpha, the value of the `transparent` keyword.
    pub const TRANSPARENT: Self = Self {
        native: Native::Rgb(Rgb::BLACK),
        alpha: 0.0,
    };

    #[inline]
    const fn opaque(native: Native) -> Self {
        Self { native, alpha: 1.0 }
    }
}

// ─── Input shapes ────────────────────────────────────────────────────────────

/// An HSL record as handed in by a caller, with optional alpha.
///
/// `h`, `s` and `l` must each lie in 0.0–1.0. `a`, when present, must
/// lie in 0.0–1.0; when absent the color is opaque.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HslInput {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: Option<f64>,
}

impl HslInput {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }

    #[must_use]
    pub const fn with_alpha(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a: Some(a) }
    }
}

/// Everything a [`Color`] can be built from.
///
/// Usually produced implicitly through one of the `From` impls:
///
/// ```
/// use tinct::Color;
///
/// let a = Color::parse("rebeccapurple").unwrap();
/// let b = Color::parse([102.0, 51.0, 153.0]).unwrap();
/// let c = Color::parse(a).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// ```
#[derive(Clone, Debug)]
pub enum ColorInput<'a> {
    /// Copy of an existing value.
    Color(Color),
    /// `[r, g, b]` or `[r, g, b, a]`.
    Channels(Vec<f64>),
    /// A CSS color string.
    Css(Cow<'a, str>),
    /// An `{h, s, l}` record.
    Hsl(HslInput),
}

impl ColorInput<'_> {
    /// Short name of the input shape, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Channels(_) => "channels",
            Self::Css(_) => "css",
            Self::Hsl(_) => "hsl",
        }
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&Color> for ColorInput<'_> {
    fn from(color: &Color) -> Self {
        Self::Color(*color)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Css(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Css(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for ColorInput<'_> {
    fn from(s: String) -> Self {
        Self::Css(Cow::Owned(s))
    }
}

impl From<Vec<f64>> for ColorInput<'_> {
    fn from(channels: Vec<f64>) -> Self {
        Self::Channels(channels)
    }
}

impl From<&[f64]> for ColorInput<'_> {
    fn from(channels: &[f64]) -> Self {
        Self::Channels(channels.to_vec())
    }
}

impl From<[f64; 3]> for ColorInput<'_> {
    fn from(channels: [f64; 3]) -> Self {
        Self::Channels(channels.to_vec())
    }
}

impl From<[f64; 4]> for ColorInput<'_> {
    fn from(channels: [f64; 4]) -> Self {
        Self::Channels(channels.to_vec())
    }
}

impl From<[u8; 3]> for ColorInput<'_> {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::Channels(vec![f64::from(r), f64::from(g), f64::from(b)])
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array().into()
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(HslInput::new(hsl.h, hsl.s, hsl.l))
    }
}

impl From<HslInput> for ColorInput<'_> {
    fn from(hsl: HslInput) -> Self {
        Self::Hsl(hsl)
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Parse any accepted input shape.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when the input does not match its
/// shape's grammar or ranges; [`ColorError::InvalidAlpha`] when an HSL
/// record carries an out-of-range alpha.
pub fn parse(input: ColorInput<'_>) -> ColorResult<Canonical> {
    trace!(shape = input.shape(), "parsing color input");
    match input {
        ColorInput::Color(color) => Ok(color.canonical()),
        ColorInput::Channels(channels) => parse_channels(&channels),
        ColorInput::Css(css) => parse_css(&css),
        ColorInput::Hsl(hsl) => parse_hsl(hsl),
    }
}

/// Parse an input and replace its alpha with `alpha`.
///
/// The separate alpha wins over anything the input implies, including
/// the alpha of an `rgba()` string or of a copied color.
///
/// # Errors
///
/// As [`parse`], plus [`ColorError::InvalidAlpha`] when `alpha` is
/// outside 0.0–1.0. A bad input is reported before a bad alpha.
pub fn parse_with_alpha(input: ColorInput<'_>, alpha: f64) -> ColorResult<Canonical> {
    let parsed = parse(input)?;
    let alpha = check_unit(alpha).inspect_err(|_| debug!(alpha, "rejected alpha override"))?;
    Ok(Canonical { alpha, ..parsed })
}

/// `[r, g, b]` or `[r, g, b, a]`.
fn parse_channels(values: &[f64]) -> ColorResult<Canonical> {
    let reject = || {
        debug!(?values, "rejected channel list");
        ColorError::InvalidColor(format!("{values:?}"))
    };

    let (rgb, alpha) = match *values {
        [r, g, b] => ([r, g, b], 1.0),
        [r, g, b, a] => ([r, g, b], a),
        _ => return Err(reject()),
    };
    if !rgb.iter().all(|&v| is_channel(v)) || !is_unit(alpha) {
        return Err(reject());
    }

    Ok(Canonical {
        native: Native::Rgb(channels_to_rgb(rgb)),
        alpha,
    })
}

/// An `{h, s, l}` record with optional alpha.
fn parse_hsl(input: HslInput) -> ColorResult<Canonical> {
    let HslInput { h, s, l, a } = input;
    if !(is_unit(h) && is_unit(s) && is_unit(l)) {
        debug!(h, s, l, "rejected hsl record");
        return Err(ColorError::InvalidColor(format!("hsl({h}, {s}, {l})")));
    }
    let alpha = match a {
        Some(a) => check_unit(a).inspect_err(|_| debug!(a, "rejected hsl alpha"))?,
        None => 1.0,
    };
    Ok(Canonical {
        native: Native::Hsl(Hsl::new(h, s, l)),
        alpha,
    })
}

// ─── CSS strings ─────────────────────────────────────────────────────────────

/// Parse a CSS color string.
///
/// Recognized, ignoring ASCII case and surrounding whitespace:
///
/// - a named color (`red`, `AliceBlue`) or `transparent`
/// - `#rgb` and `#rrggbb` hex (the `#` is required)
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with comma-separated numbers
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when none of the forms match.
pub fn parse_css(input: &str) -> ColorResult<Canonical> {
    recognize_css(input).ok_or_else(|| {
        debug!(input, "rejected color string");
        ColorError::color(input)
    })
}

fn recognize_css(input: &str) -> Option<Canonical> {
    let s = input.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).map(|rgb| Canonical::opaque(Native::Rgb(rgb)));
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba") {
        return parse_function(args, 4);
    }
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_function(args, 3);
    }
    if lower == "transparent" {
        return Some(Canonical::TRANSPARENT);
    }

    tinct_names::lookup(&lower).map(|rgb| Canonical::opaque(Native::Rgb(Rgb::from(rgb))))
}

/// The text between `name(` and the closing `)`.
fn function_args<'s>(s: &'s str, name: &str) -> Option<&'s str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

/// Comma-separated `rgb()`/`rgba()` arguments. `arity` is 3 or 4.
fn parse_function(args: &str, arity: usize) -> Option<Canonical> {
    let values = args
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if values.len() != arity {
        return None;
    }
    parse_channels(&values).ok()
}

/// Hex digits after the `#`: 3 (each nibble doubled) or 6.
fn parse_hex(hex: &str) -> Option<Rgb> {
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Narrow already-validated channel values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channels_to_rgb([r, g, b]: [f64; 3]) -> Rgb {
    // Callers check `is_channel` first, so each cast is exact.
    Rgb::new(r as u8, g as u8, b as u8)
}
