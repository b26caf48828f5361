// SPDX-License-Identifier: MIT
//
// Canonical CSS output.
//
//   alpha == 0      transparent
//   0 < alpha < 1   rgba(R,G,B,A)      integer channels, alpha as given
//   alpha == 1      #RGB or #RRGGBB    uppercase, shorthand when possible

use std::fmt::Write as _;

use crate::model::Rgb;

/// Format a color in its canonical CSS form.
#[must_use]
pub fn to_css(rgb: Rgb, alpha: f64) -> String {
    if alpha <= 0.0 {
        "transparent".to_owned()
    } else if alpha < 1.0 {
        let Rgb { r, g, b } = rgb;
        format!("rgba({r},{g},{b},{alpha})")
    } else {
        to_hex(rgb)
    }
}

/// Uppercase hex, collapsed to `#RGB` when every channel is a doubled
/// nibble (`#FF0000` prints as `#F00`).
#[must_use]
pub fn to_hex(rgb: Rgb) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    if rgb.to_array().iter().all(|&c| c >> 4 == c & 0x0f) {
        for c in rgb.to_array() {
            let _ = write!(out, "{:X}", c & 0x0f);
        }
    } else {
        for c in rgb.to_array() {
            let _ = write!(out, "{c:02X}");
        }
    }
    out
}

/// Always the six-digit form, for callers that need fixed width.
#[must_use]
pub fn to_hex_long(rgb: Rgb) -> String {
    let Rgb { r, g, b } = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_alpha_is_transparent() {
        assert_eq!(to_css(Rgb::new(255, 0, 0), 0.0), "transparent");
    }

    #[test]
    fn partial_alpha_is_rgba() {
        assert_eq!(to_css(Rgb::new(255, 0, 0), 0.5), "rgba(255,0,0,0.5)");
        assert_eq!(to_css(Rgb::new(1, 2, 3), 0.125), "rgba(1,2,3,0.125)");
    }

    #[test]
    fn opaque_is_hex() {
        assert_eq!(to_css(Rgb::new(255, 0, 0), 1.0), "#F00");
        assert_eq!(to_css(Rgb::new(0xe2, 0xb6, 0x44), 1.0), "#E2B644");
    }

    #[test]
    fn hex_shorthand_needs_every_channel_doubled() {
        assert_eq!(to_hex(Rgb::new(0x11, 0x22, 0x33)), "#123");
        assert_eq!(to_hex(Rgb::new(0x11, 0x22, 0x34)), "#112234");
        assert_eq!(to_hex(Rgb::BLACK), "#000");
        assert_eq!(to_hex(Rgb::new(128, 128, 128)), "#808080");
    }

    #[test]
    fn long_hex_never_collapses() {
        assert_eq!(to_hex_long(Rgb::new(255, 0, 0)), "#FF0000");
    }
}
