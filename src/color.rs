// SPDX-License-Identifier: MIT
//
// Color — the immutable value type.
//
// A `Color` is a native representation (RGB or HSL) plus alpha. It is
// `Copy` and has no interior mutability: every adjustment returns a new
// value, and the non-native model is recomputed from the native one on
// each access rather than cached. Getters hand out `Rgb` / `Hsl` by
// value, so callers never hold a reference into a color.
//
// Construction goes through the parser; every other operation goes
// through the transform engine and wraps its result with the receiver's
// alpha.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, ColorResult};
use crate::model::{Hsl, Native, Rgb};
use crate::numeric::check_unit;
use crate::parse::{self, Canonical, ColorInput, HslInput};
use crate::serialize;
use crate::transform::{self, Channel};

/// An immutable CSS color value.
///
/// # Examples
///
/// ```
/// use tinct::Color;
///
/// let red = Color::parse("#f00").unwrap();
/// assert_eq!(red.to_string(), "#F00");
///
/// // Every operation returns a new value.
/// let pink = red.with_saturation(0.5).unwrap();
/// assert_eq!(pink.to_string(), "#BF4040");
/// assert_eq!(red.to_string(), "#F00");
///
/// // Alpha changes the output form.
/// assert_eq!(red.with_alpha(0.5).unwrap().to_string(), "rgba(255,0,0,0.5)");
/// assert_eq!(red.with_alpha(0.0).unwrap().to_string(), "transparent");
///
/// // Hue blends take the shorter way around the circle.
/// let magenta = red.tint("#00f", 0.5).unwrap();
/// assert_eq!(magenta.to_string(), "#F0F");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    native: Native,
    alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_canonical(Canonical::TRANSPARENT);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse any accepted input: a CSS string, a channel list, an HSL
    /// record, or another color.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColor`] for input that matches no shape, and
    /// [`ColorError::InvalidAlpha`] for an HSL record with a bad alpha.
    pub fn parse<'a>(input: impl Into<ColorInput<'a>>) -> ColorResult<Self> {
        parse::parse(input.into()).map(Self::from_canonical)
    }

    /// Parse `input` and give the result `alpha`, overriding whatever
    /// alpha the input carries.
    ///
    /// # Errors
    ///
    /// As [`Color::parse`], plus [`ColorError::InvalidAlpha`] when
    /// `alpha` is outside 0.0–1.0.
    pub fn parse_with_alpha<'a>(input: impl Into<ColorInput<'a>>, alpha: f64) -> ColorResult<Self> {
        parse::parse_with_alpha(input.into(), alpha).map(Self::from_canonical)
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            native: Native::Rgb(Rgb::new(r, g, b)),
            alpha: 1.0,
        }
    }

    /// Color from 8-bit channels and an alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when `alpha` is outside 0.0–1.0.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            native: Native::Rgb(Rgb::new(r, g, b)),
            alpha: check_unit(alpha)?,
        })
    }

    /// Opaque HSL-native color.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColor`] when a component is outside 0.0–1.0.
    pub fn hsl(h: f64, s: f64, l: f64) -> ColorResult<Self> {
        Self::parse(HslInput::new(h, s, l))
    }

    /// HSL-native color with alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColor`] for a bad component,
    /// [`ColorError::InvalidAlpha`] for a bad alpha.
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> ColorResult<Self> {
        Self::parse(HslInput::with_alpha(h, s, l, alpha))
    }

    /// The CSS named-color table, sorted by name.
    #[inline]
    #[must_use]
    pub const fn names() -> &'static [(&'static str, [u8; 3])] {
        tinct_names::names()
    }

    #[inline]
    const fn from_canonical(canonical: Canonical) -> Self {
        Self {
            native: canonical.native,
            alpha: canonical.alpha,
        }
    }

    #[inline]
    pub(crate) const fn canonical(self) -> Canonical {
        Canonical {
            native: self.native,
            alpha: self.alpha,
        }
    }

    /// Wrap a transform result, keeping this color's alpha.
    #[inline]
    const fn with_native(self, native: Native) -> Self {
        Self { native, ..self }
    }

    // ─── Getters ─────────────────────────────────────────────────────────

    /// The representation this color was built from or last produced by
    /// a transform.
    #[inline]
    #[must_use]
    pub const fn native(self) -> Native {
        self.native
    }

    #[inline]
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        self.native.to_rgb()
    }

    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        self.native.to_hsl()
    }

    #[must_use]
    pub fn red(self) -> u8 {
        self.to_rgb().r
    }

    #[must_use]
    pub fn green(self) -> u8 {
        self.to_rgb().g
    }

    #[must_use]
    pub fn blue(self) -> u8 {
        self.to_rgb().b
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Hue as a fraction of a turn (0.0–1.0).
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsl().h
    }

    #[must_use]
    pub fn saturation(self) -> f64 {
        self.to_hsl().s
    }

    #[must_use]
    pub fn lightness(self) -> f64 {
        self.to_hsl().l
    }

    /// Hex form of the color channels, ignoring alpha.
    #[must_use]
    pub fn hex(self) -> String {
        serialize::to_hex(self.to_rgb())
    }

    /// Whether alpha is exactly 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether alpha is exactly 0.0.
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// Canonical CSS string: `transparent`, `rgba(...)` or hex.
    #[must_use]
    pub fn to_css(self) -> String {
        serialize::to_css(self.to_rgb(), self.alpha)
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when `alpha` is outside 0.0–1.0.
    pub fn with_alpha(self, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            alpha: check_unit(alpha)?,
            ..self
        })
    }

    // ─── HSL adjustments ─────────────────────────────────────────────────

    /// Increase lightness by `amount` (-1.0–1.0), clamped to 0.0–1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAmount`] when `amount` is out of range.
    pub fn lighten(self, amount: f64) -> ColorResult<Self> {
        transform::lighten(self.native, amount).map(|n| self.with_native(n))
    }

    /// Decrease lightness by `amount` (-1.0–1.0), clamped to 0.0–1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAmount`] when `amount` is out of range.
    pub fn darken(self, amount: f64) -> ColorResult<Self> {
        transform::darken(self.native, amount).map(|n| self.with_native(n))
    }

    /// Increase saturation by `amount` (-1.0–1.0), clamped to 0.0–1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAmount`] when `amount` is out of range.
    pub fn saturate(self, amount: f64) -> ColorResult<Self> {
        transform::saturate(self.native, amount).map(|n| self.with_native(n))
    }

    /// Decrease saturation by `amount` (-1.0–1.0), clamped to 0.0–1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAmount`] when `amount` is out of range.
    pub fn desaturate(self, amount: f64) -> ColorResult<Self> {
        transform::desaturate(self.native, amount).map(|n| self.with_native(n))
    }

    /// Rotate the hue by `amount` turns (wraps around).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAmount`] when `amount` is not finite.
    pub fn shift_hue(self, amount: f64) -> ColorResult<Self> {
        transform::shift_hue(self.native, amount).map(|n| self.with_native(n))
    }

    /// Set the hue (0.0–1.0).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when `hue` is out of range.
    pub fn with_hue(self, hue: f64) -> ColorResult<Self> {
        transform::set_hue(self.native, hue).map(|n| self.with_native(n))
    }

    /// Set the saturation (0.0–1.0).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when `saturation` is out of range.
    pub fn with_saturation(self, saturation: f64) -> ColorResult<Self> {
        transform::set_saturation(self.native, saturation).map(|n| self.with_native(n))
    }

    /// Set the lightness (0.0–1.0).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when `lightness` is out of range.
    pub fn with_lightness(self, lightness: f64) -> ColorResult<Self> {
        transform::set_lightness(self.native, lightness).map(|n| self.with_native(n))
    }

    /// Set any subset of hue, saturation and lightness at once.
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let c = Color::parse("#f00").unwrap().with_hsl(None, Some(0.5), Some(0.5)).unwrap();
    /// assert_eq!(c.to_string(), "#BF4040");
    /// ```
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidAlpha`] when a given component is out of range.
    pub fn with_hsl(self, h: Option<f64>, s: Option<f64>, l: Option<f64>) -> ColorResult<Self> {
        transform::set_hsl(self.native, h, s, l).map(|n| self.with_native(n))
    }

    // ─── Channel adjustments ─────────────────────────────────────────────

    /// Set the red channel (integer 0–255).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidChannel`] when `value` is out of range.
    pub fn with_red(self, value: f64) -> ColorResult<Self> {
        self.with_channel(Channel::Red, value)
    }

    /// Set the green channel (integer 0–255).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidChannel`] when `value` is out of range.
    pub fn with_green(self, value: f64) -> ColorResult<Self> {
        self.with_channel(Channel::Green, value)
    }

    /// Set the blue channel (integer 0–255).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidChannel`] when `value` is out of range.
    pub fn with_blue(self, value: f64) -> ColorResult<Self> {
        self.with_channel(Channel::Blue, value)
    }

    /// Set one channel (integer 0–255).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidChannel`] when `value` is out of range.
    pub fn with_channel(self, channel: Channel, value: f64) -> ColorResult<Self> {
        transform::set_channel(self.native, channel, value).map(|n| self.with_native(n))
    }

    /// Complement every channel.
    #[must_use]
    pub fn invert(self) -> Self {
        self.with_native(transform::invert(self.native))
    }

    // ─── Mixing ──────────────────────────────────────────────────────────

    /// Blend channels linearly toward `other` by `pct` (0.0–1.0).
    ///
    /// `other` is anything [`Color::parse`] accepts.
    ///
    /// # Errors
    ///
    /// Any parse error of `other`, or [`ColorError::InvalidAmount`] when
    /// `pct` is outside 0.0–1.0.
    pub fn combine<'a>(self, other: impl Into<ColorInput<'a>>, pct: f64) -> ColorResult<Self> {
        let other = Self::parse(other)?;
        transform::combine(self.native, other.native, pct).map(|n| self.with_native(n))
    }

    /// Even blend with `other` (`combine` at 0.5).
    ///
    /// # Errors
    ///
    /// Any parse error of `other`.
    pub fn blend<'a>(self, other: impl Into<ColorInput<'a>>) -> ColorResult<Self> {
        self.combine(other, 0.5)
    }

    /// Move the hue toward `other`'s hue by `pct` (0.0–1.0), along the
    /// shorter arc. Saturation and lightness are kept.
    ///
    /// # Errors
    ///
    /// Any parse error of `other`, or [`ColorError::InvalidAmount`] when
    /// `pct` is outside 0.0–1.0.
    pub fn tint<'a>(self, other: impl Into<ColorInput<'a>>, pct: f64) -> ColorResult<Self> {
        let other = Self::parse(other)?;
        transform::tint(self.native, other.native, pct).map(|n| self.with_native(n))
    }
}

impl Default for Color {
    /// Default is fully transparent black.
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.native, self.is_opaque()) {
            (Native::Rgb(Rgb { r, g, b }), true) => write!(f, "Color::rgb({r}, {g}, {b})"),
            (Native::Rgb(Rgb { r, g, b }), false) => {
                write!(f, "Color::rgba({r}, {g}, {b}, {})", self.alpha)
            }
            (Native::Hsl(Hsl { h, s, l }), true) => {
                write!(f, "Color::hsl({h:.4}, {s:.4}, {l:.4})")
            }
            (Native::Hsl(Hsl { h, s, l }), false) => {
                write!(f, "Color::hsla({h:.4}, {s:.4}, {l:.4}, {})", self.alpha)
            }
        }
    }
}

impl PartialEq for Color {
    /// Two colors are equal when they render the same: same RGB triple,
    /// same alpha, regardless of native model.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha && self.to_rgb() == other.to_rgb()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_css(s).map(Self::from_canonical)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// A color serializes as its canonical CSS string and deserializes through
// the string parser, so a value read from config goes through the same
// validation as one built in code.

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    fn css(input: &str) -> Color {
        Color::parse(input).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn construct_from_every_shape() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(css("red").to_rgb(), red);
        assert_eq!(css("#f00").to_rgb(), red);
        assert_eq!(css("#ff0000").to_rgb(), red);
        assert_eq!(css("rgb(255, 0, 0)").to_rgb(), red);
        assert_eq!(Color::parse([255.0, 0.0, 0.0]).unwrap().to_rgb(), red);
        assert_eq!(Color::parse(HslInput::new(0.0, 1.0, 0.5)).unwrap().to_rgb(), red);
        assert_eq!(Color::parse(css("red")).unwrap().to_rgb(), red);
    }

    #[test]
    fn unknown_name_fails() {
        assert!(matches!(Color::parse("notacolor"), Err(ColorError::InvalidColor(_))));
    }

    #[test]
    fn alpha_override_domain() {
        assert_eq!(Color::parse_with_alpha("red", -0.1), Err(ColorError::InvalidAlpha(-0.1)));
        assert_eq!(Color::parse_with_alpha("red", 1.1), Err(ColorError::InvalidAlpha(1.1)));
        assert_abs_diff_eq!(Color::parse_with_alpha("rgba(1,2,3,0.5)", 0.1).unwrap().alpha(), 0.1);
    }

    #[test]
    fn copy_with_new_alpha() {
        let base = Color::hsla(0.5, 1.0, 0.5, 0.3).unwrap();
        let copy = Color::parse_with_alpha(base, 0.9).unwrap();
        assert!(copy.native().is_hsl());
        assert_abs_diff_eq!(copy.alpha(), 0.9);
    }

    #[test]
    fn typed_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).to_rgb(), Rgb::new(1, 2, 3));
        assert_eq!(Color::rgba(1, 2, 3, 2.0), Err(ColorError::InvalidAlpha(2.0)));
        assert!(matches!(Color::hsl(1.5, 0.0, 0.0), Err(ColorError::InvalidColor(_))));
        assert_eq!(Color::hsla(0.0, 0.0, 0.0, -1.0), Err(ColorError::InvalidAlpha(-1.0)));
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default().to_string(), "transparent");
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn names_table_is_exposed() {
        assert_eq!(Color::names().len(), 148);
        assert!(Color::names().iter().any(|(name, rgb)| *name == "red" && *rgb == [255, 0, 0]));
    }

    #[test]
    fn from_str_and_try_from() {
        let a: Color = "teal".parse().unwrap();
        let b = Color::try_from("#008080").unwrap();
        assert_eq!(a, b);
        assert!("".parse::<Color>().is_err());
    }

    // ── Getters ─────────────────────────────────────────────────────────

    #[test]
    fn channel_getters() {
        let white = css("#fff");
        assert_eq!((white.red(), white.green(), white.blue()), (255, 255, 255));
    }

    #[test]
    fn hsl_getters() {
        assert_abs_diff_eq!(css("#0f0").hue(), 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(css("#00f").hue(), 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(css("rgb(100,100,100)").saturation(), 0.0);
        assert_abs_diff_eq!(css("rgb(100,0,100)").saturation(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(css("rgb(0,0,0)").lightness(), 0.0);
        assert_abs_diff_eq!(css("rgb(255,255,255)").lightness(), 1.0);
    }

    #[test]
    fn alpha_getter() {
        assert_abs_diff_eq!(css("#f00").alpha(), 1.0);
        assert_abs_diff_eq!(css("rgba(255,0,0,0.5)").alpha(), 0.5);
    }

    #[test]
    fn hex_getter_ignores_alpha() {
        assert_eq!(css("rgba(255,0,0,0.5)").hex(), "#F00");
    }

    #[test]
    fn getters_return_copies() {
        let color = css("#123456");
        let mut rgb = color.to_rgb();
        rgb.r = 0;
        assert_ne!(rgb, color.to_rgb());

        let mut hsl = color.to_hsl();
        hsl.l = 1.0;
        assert_ne!(hsl, color.to_hsl());

        assert_eq!(color.to_rgb(), Rgb::new(0x12, 0x34, 0x56));
    }

    // ── Immutability / native model ─────────────────────────────────────

    #[test]
    fn transforms_leave_receiver_untouched() {
        let base = css("#336699");
        let _ = base.lighten(0.2).unwrap();
        let _ = base.with_red(0.0).unwrap();
        let _ = base.invert();
        assert_eq!(base.to_string(), "#369");
        assert!(base.native().is_rgb());
    }

    #[test]
    fn hsl_ops_produce_hsl_native_and_keep_alpha() {
        let base = Color::rgba(255, 0, 0, 0.5).unwrap();
        let out = base.lighten(0.1).unwrap();
        assert!(out.native().is_hsl());
        assert_abs_diff_eq!(out.alpha(), 0.5);
    }

    #[test]
    fn channel_ops_produce_rgb_native() {
        let base = Color::hsl(0.0, 1.0, 0.5).unwrap();
        assert!(base.with_blue(255.0).unwrap().native().is_rgb());
        assert!(base.invert().native().is_rgb());
    }

    #[test]
    fn with_alpha_keeps_native_model() {
        let base = Color::hsl(0.2, 0.3, 0.4).unwrap();
        let out = base.with_alpha(0.5).unwrap();
        assert!(out.native().is_hsl());
        assert_eq!(base.with_alpha(1.5), Err(ColorError::InvalidAlpha(1.5)));
    }

    #[test]
    fn equality_ignores_native_model() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).unwrap(), css("red"));
        assert_ne!(css("red"), Color::rgba(255, 0, 0, 0.5).unwrap());
    }

    // ── Extremes ────────────────────────────────────────────────────────

    #[test]
    fn lighten_fully_is_white_darken_fully_is_black() {
        for input in ["red", "#123456", "rgb(7,200,33)", "black", "white"] {
            assert_eq!(css(input).lighten(1.0).unwrap().to_rgb(), Rgb::WHITE, "{input}");
            assert_eq!(css(input).darken(1.0).unwrap().to_rgb(), Rgb::BLACK, "{input}");
        }
    }

    #[test]
    fn saturate_fully_reads_back_one() {
        for input in ["#808080", "#123456", "black"] {
            assert_abs_diff_eq!(css(input).saturate(1.0).unwrap().saturation(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn desaturate_fully_is_gray() {
        for input in ["red", "#123456", "rgb(7,200,33)"] {
            assert!(css(input).desaturate(1.0).unwrap().to_rgb().is_gray(), "{input}");
        }
    }

    // ── Hue ─────────────────────────────────────────────────────────────

    #[test]
    fn shift_hue_identities() {
        let base = css("#a1b2c1");
        assert_abs_diff_eq!(base.shift_hue(1.0).unwrap().hue(), base.hue(), epsilon = 1e-12);
        let round_trip = base.shift_hue(-0.25).unwrap().shift_hue(0.25).unwrap();
        assert_abs_diff_eq!(round_trip.hue(), base.hue(), epsilon = 1e-12);
        assert_eq!(round_trip.to_rgb(), base.to_rgb());
    }

    #[test]
    fn hue_setter_examples() {
        assert_eq!(css("#f00").with_hue(2.0 / 3.0).unwrap().to_string(), "#00F");
        assert_eq!(css("#0f0").with_hue(1.0).unwrap().to_string(), "#F00");
        assert_eq!(css("#00f").with_hue(1.0 / 3.0).unwrap().to_string(), "#0F0");
    }

    #[test]
    fn saturation_and_lightness_setter_examples() {
        assert_eq!(css("rgb(100,50,50)").with_saturation(0.0).unwrap().to_string(), "#4B4B4B");
        assert_eq!(css("rgb(50,50,100)").with_saturation(1.0).unwrap().to_string(), "#000096");
        assert_eq!(css("rgb(255,0,0)").with_lightness(0.0).unwrap().to_string(), "#000");
        assert_eq!(css("rgb(255,0,0)").with_lightness(0.5).unwrap().to_string(), "#F00");
        assert_eq!(css("rgb(255,0,0)").with_lightness(1.0).unwrap().to_string(), "#FFF");
    }

    // ── Channels ────────────────────────────────────────────────────────

    #[test]
    fn channel_setter_examples() {
        assert_eq!(css("rgb(0,0,255)").with_red(255.0).unwrap().to_string(), "#F0F");
        assert_eq!(css("rgb(255,0,0)").with_green(255.0).unwrap().to_string(), "#FF0");
        assert_eq!(css("#FF0").with_blue(255.0).unwrap().to_string(), "#FFF");
        assert_eq!(css("red").with_green(300.0), Err(ColorError::InvalidChannel(300.0)));
    }

    #[test]
    fn invert_twice_is_identity() {
        let base = css("#a1b2c1");
        assert_eq!(base.invert().invert().to_rgb(), base.to_rgb());
        assert_eq!(css("#f00").invert().to_string(), "#0FF");
        assert_eq!(css("#fff").invert().to_string(), "#000");
    }

    // ── Mixing ──────────────────────────────────────────────────────────

    #[test]
    fn combine_black_with_white() {
        let out = Color::BLACK.combine("#fff", 0.5).unwrap();
        assert_eq!(out.to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(out.to_string(), "#808080");
        assert_eq!(Color::BLACK.blend("#fff").unwrap(), out);
    }

    #[test]
    fn combine_accepts_any_input_and_keeps_alpha() {
        let base = Color::rgba(0, 0, 0, 0.5).unwrap();
        let out = base.combine([255.0, 255.0, 255.0], 1.0).unwrap();
        assert_eq!(out.to_rgb(), Rgb::WHITE);
        assert_abs_diff_eq!(out.alpha(), 0.5);
        assert!(matches!(base.combine("nope", 0.5), Err(ColorError::InvalidColor(_))));
        assert_eq!(base.combine("red", 1.5), Err(ColorError::InvalidAmount(1.5)));
    }

    #[test]
    fn tint_examples() {
        let out = css("rgb(255,0,0)").tint("#00f", 0.5).unwrap();
        assert_abs_diff_eq!(out.hue(), 5.0 / 6.0, epsilon = 1e-12);
        assert_eq!(out.to_string(), "#F0F");
        assert_eq!(css("rgb(0,0,100)").tint("rgb(100,0,0)", 0.1).unwrap().to_string(), "#140064");
    }

    #[test]
    fn tint_keeps_own_saturation_and_lightness() {
        let base = Color::hsl(0.1, 0.4, 0.3).unwrap();
        let out = base.tint("#00f", 0.5).unwrap();
        assert_abs_diff_eq!(out.saturation(), 0.4);
        assert_abs_diff_eq!(out.lightness(), 0.3);
    }

    // ── Output ──────────────────────────────────────────────────────────

    #[test]
    fn canonical_output_forms() {
        assert_eq!(css("red").to_string(), "#F00");
        assert_eq!(css("#e2b644").to_string(), "#E2B644");
        assert_eq!(css("#f00").with_alpha(0.5).unwrap().to_string(), "rgba(255,0,0,0.5)");
        assert_eq!(css("#f00").with_alpha(0.0).unwrap().to_string(), "transparent");
        assert_eq!(Color::parse_with_alpha("rgba(1,2,3,0.5)", 1.0).unwrap().to_string(), "#010203");
    }

    #[test]
    fn canonical_output_parses_back() {
        for input in ["#abc", "rgba(10,20,30,0.25)", "transparent", "gold"] {
            let color = css(input);
            assert_eq!(css(&color.to_string()), color, "{input}");
        }
    }

    #[test]
    fn debug_names_native_model() {
        assert_eq!(format!("{:?}", Color::rgb(1, 2, 3)), "Color::rgb(1, 2, 3)");
        assert_eq!(
            format!("{:?}", Color::hsla(0.5, 1.0, 0.25, 0.5).unwrap()),
            "Color::hsla(0.5000, 1.0000, 0.2500, 0.5)"
        );
    }

    // ── Serde ───────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_css_strings() {
        let color = Color::rgba(255, 0, 0, 0.5).unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"rgba(255,0,0,0.5)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_structured_records() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
    }
}
