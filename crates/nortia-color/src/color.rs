// SPDX-License-Identifier: MIT
//
// nortia color system — Oklab over raw 8-bit channels.
//
// Conversion pipeline:
//
//   Rgb ↔ Oklab ↔ OklabPolar
//
// Channels go into the LMS matrix as-is (0–255, no gamma decode). That
// makes Oklab lightness span 0.0 (black) to ~6.34 (white) instead of the
// textbook 0.0–1.0, and every lightness offset and contrast step in
// nortia-theme is expressed in those units. The coefficients below match
// the published theme generator digit for digit; changing any digit
// changes every derived color.
//
// Arithmetic is unfused (plain multiply, then add, in matrix order), the
// same operation order the published generator uses, so a conversion gives
// the same bits on platforms with and without FMA.
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::unreadable_literal)]

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A concrete display color with 8-bit channels.
///
/// This is the output precision of the whole pipeline: every conversion out
/// of Oklab lands here, rounded half-up and clamped.
///
/// # Examples
///
/// ```
/// use nortia_color::Rgb;
///
/// let amber = Rgb::new(255, 189, 60);
/// assert_eq!(amber.to_hex(), "#ffbd3c");
/// assert_eq!(Rgb::hex("#ffbd3c"), Some(amber));
///
/// // Oklab round trip is lossless at 8-bit precision.
/// assert_eq!(amber.to_polar().to_rgb(), amber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
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

    /// A neutral grey with all three channels set to `v`.
    #[inline]
    #[must_use]
    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Parse a hex color: `#RGB` or `#RRGGBB`, with or without `#`.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbb` followed by an uppercase two-digit alpha (`#1e1e1eA0`).
    #[must_use]
    pub fn to_hex_with_alpha(self, alpha: u8) -> String {
        format!("{}{alpha:02X}", self.to_hex())
    }

    /// Convert to Cartesian Oklab.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (l, a, b) = rgb_to_oklab(f64::from(self.r), f64::from(self.g), f64::from(self.b));
        Oklab { l, a, b }
    }

    /// Convert to polar Oklab (lightness, chroma, hue).
    #[must_use]
    pub fn to_polar(self) -> OklabPolar {
        self.to_oklab().to_polar()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = *self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Error returned when a string is not a `#RGB` / `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {input:?}: expected #RGB or #RRGGBB")]
pub struct ParseColorError {
    input: String,
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).ok_or_else(|| ParseColorError {
            input: s.to_string(),
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// Cartesian Oklab: lightness plus two opponent axes.
///
/// `a` and `b` are unbounded but stay small in practice (under ~1.0 on this
/// channel scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert back to display RGB, rounding half-up and clamping to 0–255.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = oklab_to_rgb(self.l, self.a, self.b);
        Rgb::new(round_channel(r), round_channel(g), round_channel(b))
    }

    #[must_use]
    pub fn to_polar(self) -> OklabPolar {
        OklabPolar {
            l: self.l,
            c: (self.a * self.a + self.b * self.b).sqrt(),
            h: self.b.atan2(self.a),
        }
    }
}

// ─── OklabPolar ──────────────────────────────────────────────────────────────

/// Polar Oklab: lightness, chroma and hue angle.
///
/// `h` is in radians and is never normalized; it only ever reaches the
/// Cartesian form through `sin`/`cos`, so `h` and `h + 2πn` are the same
/// color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklabPolar {
    /// Lightness, ~0.0 (black) to ~6.34 (white) on this channel scale.
    pub l: f64,
    /// Chroma, >= 0.0.
    pub c: f64,
    /// Hue angle in radians.
    pub h: f64,
}

impl OklabPolar {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        Oklab {
            l: self.l,
            a: self.c * self.h.cos(),
            b: self.c * self.h.sin(),
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        self.to_oklab().to_rgb()
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Rotate the hue by `degrees`. Lightness and chroma are untouched.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: self.h + degrees_to_radians(degrees),
            ..self
        }
    }

    /// Replace hue (radians) and chroma, keeping lightness.
    #[inline]
    #[must_use]
    pub const fn with_hue_chroma(self, h: f64, c: f64) -> Self {
        Self { h, c, ..self }
    }

    /// Hue in degrees, wrapped to [0, 360).
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h.to_degrees().rem_euclid(360.0)
    }
}

/// Degrees to radians as a fraction of a full turn.
///
/// Written as `d / 360 · 2π` rather than `d · π/180`; the two differ in the
/// last bit and the theme files were generated with this form.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / 360.0 * 2.0 * PI
}

// ─── Matrix Transforms ───────────────────────────────────────────────────────

/// RGB (un-normalized, treated as linear) → Oklab.
#[inline]
fn rgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    // RGB → LMS
    let l = 0.4121656120 * r + 0.5362752080 * g + 0.0514575653 * b;
    let m = 0.2118591070 * r + 0.6807189584 * g + 0.1074065790 * b;
    let s = 0.0883097947 * r + 0.2818474174 * g + 0.6302613616 * b;

    // Cube root
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // LMS' → Lab
    (
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    )
}

/// Oklab → RGB floats, not yet rounded or clamped.
#[inline]
fn oklab_to_rgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Lab → LMS'
    let l_ = l_ok + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l_ok - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l_ok - 0.0894841775 * a - 1.2914855480 * b;

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → RGB
    (
        4.0767245293 * l - 3.3072168827 * m + 0.2307590544 * s,
        -1.2681437731 * l + 2.6093323231 * m - 0.3411344290 * s,
        -0.0041119885 * l - 0.7034763098 * m + 1.7068625689 * s,
    )
}

/// Round half-up and clamp into a channel value. NaN saturates to 0.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
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

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB values are close (within ±1 out of 255).
    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |x: u8, y: u8| x.abs_diff(y) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    fn round_trip(c: Rgb) -> Rgb {
        c.to_oklab().to_polar().to_oklab().to_rgb()
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn corners_roundtrip() {
        let corners = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::WHITE,
            Rgb::BLACK,
        ];
        for c in corners {
            assert_rgb_close(round_trip(c), c);
        }
    }

    #[test]
    fn every_grey_roundtrips() {
        for v in 0..=255u8 {
            assert_rgb_close(round_trip(Rgb::grey(v)), Rgb::grey(v));
        }
    }

    proptest! {
        #[test]
        fn any_rgb_roundtrips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Rgb::new(r, g, b);
            let back = round_trip(c);
            prop_assert!(back.r.abs_diff(r) <= 1, "{} -> {}", c, back);
            prop_assert!(back.g.abs_diff(g) <= 1, "{} -> {}", c, back);
            prop_assert!(back.b.abs_diff(b) <= 1, "{} -> {}", c, back);
        }

        #[test]
        fn full_turn_is_identity(
            l in 0.0f64..6.4,
            c in 0.0f64..1.0,
            h in -10.0f64..10.0,
        ) {
            let p = OklabPolar::new(l, c, h);
            prop_assert_eq!(p.rotate(360.0).to_hex(), p.to_hex());
        }

        #[test]
        fn conversion_never_leaves_gamut(
            l in -2.0f64..10.0,
            a in -3.0f64..3.0,
            b in -3.0f64..3.0,
        ) {
            // Any Oklab input saturates into a valid color; the u8 type
            // already bounds the channels, so just make sure nothing panics
            // and the hex is well formed.
            let hex = Oklab::new(l, a, b).to_rgb().to_hex();
            prop_assert_eq!(hex.len(), 7);
        }
    }

    // ── Oklab values ─────────────────────────────────────────────────────

    #[test]
    fn black_is_origin() {
        let lab = Rgb::BLACK.to_oklab();
        assert!(approx_eq(lab.l, 0.0, 1e-12));
        assert!(approx_eq(lab.a, 0.0, 1e-12));
        assert!(approx_eq(lab.b, 0.0, 1e-12));
    }

    #[test]
    fn white_lightness_uses_channel_scale() {
        let lab = Rgb::WHITE.to_oklab();
        assert!(approx_eq(lab.l, 6.3412, 1e-3), "white L: {}", lab.l);
        assert!(lab.a.abs() < 1e-3 && lab.b.abs() < 1e-3, "white not neutral: {lab:?}");
    }

    #[test]
    fn amber_polar_values() {
        let p = Rgb::new(255, 189, 60).to_polar();
        assert!(approx_eq(p.l, 5.7857, 1e-3), "L: {}", p.l);
        assert!(approx_eq(p.c, 0.7305, 1e-3), "C: {}", p.c);
        assert!(approx_eq(p.h, 1.5836, 1e-3), "h: {}", p.h);
    }

    #[test]
    fn polar_matches_cartesian() {
        let lab = Oklab::new(3.0, 0.3, -0.4);
        let p = lab.to_polar();
        assert!(approx_eq(p.c, 0.5, 1e-12));
        let back = p.to_oklab();
        assert!(approx_eq(back.a, 0.3, 1e-12));
        assert!(approx_eq(back.b, -0.4, 1e-12));
    }

    // ── Rotation ─────────────────────────────────────────────────────────

    #[test]
    fn rotate_only_moves_hue() {
        let p = OklabPolar::new(4.0, 0.5, 1.0);
        let r = p.rotate(-45.0);
        assert_eq!(r.l, p.l);
        assert_eq!(r.c, p.c);
        assert!(approx_eq(r.h, 1.0 - PI / 4.0, 1e-12));
    }

    #[test]
    fn hue_degrees_wraps() {
        assert!(approx_eq(OklabPolar::new(1.0, 0.1, -PI / 2.0).hue_degrees(), 270.0, 1e-9));
        assert!(approx_eq(OklabPolar::new(1.0, 0.1, 2.0 * PI).hue_degrees(), 0.0, 1e-9));
    }

    #[test]
    fn degrees_to_radians_quarter_turn() {
        assert!(approx_eq(degrees_to_radians(90.0), PI / 2.0, 1e-15));
        assert!(approx_eq(degrees_to_radians(115.0), 115.0_f64.to_radians(), 1e-12));
    }

    // ── Rounding ─────────────────────────────────────────────────────────

    #[test]
    fn round_channel_half_up_and_clamps() {
        assert_eq!(round_channel(35.5), 36);
        assert_eq!(round_channel(35.49), 35);
        assert_eq!(round_channel(-12.0), 0);
        assert_eq!(round_channel(300.0), 255);
        assert_eq!(round_channel(f64::NAN), 0);
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::hex("#ffbd3c"), Some(Rgb::new(255, 189, 60)));
        assert_eq!(Rgb::hex("FFBD3C"), Some(Rgb::new(255, 189, 60)));
    }

    #[test]
    fn hex_parsing_short() {
        assert_eq!(Rgb::hex("#f80"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Rgb::hex("xyz").is_none());
        assert!(Rgb::hex("#12345").is_none());
        assert!(Rgb::hex("#ffbd3c80").is_none());
        assert!(Rgb::hex("").is_none());
    }

    #[test]
    fn from_str_reports_input() {
        let err = "#nope".parse::<Rgb>().unwrap_err();
        assert!(err.to_string().contains("#nope"), "{err}");
    }

    #[test]
    fn hex_formatting() {
        let c = Rgb::new(0x24, 0x24, 0x24);
        assert_eq!(c.to_hex(), "#242424");
        assert_eq!(c.to_string(), "#242424");
        assert_eq!(Rgb::new(0xd9, 0xd9, 0xd9).to_hex_with_alpha(0xA0), "#d9d9d9A0");
        assert_eq!(c.to_hex_with_alpha(0x40), "#24242440");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_string() {
        let c = Rgb::new(255, 189, 60);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ffbd3c\"");
        let back: Rgb = serde_json::from_str("\"#ffbd3c\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Rgb>("\"amber\"").is_err());
    }
}
