//! WCAG-style contrast between two colors.
//!
//! Colors are compared after quantizing to 8-bit RGB, so the ratio measured
//! here is the ratio of the hex values that end up in the theme file.

use nortia_color::{OklabPolar, Rgb};

/// Linearize one 8-bit sRGB channel.
///
/// Uses the WCAG 2.0 threshold (0.03928) rather than the IEC 0.04045.
fn channel_luminance(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG: 0.0 for black, 1.0 for white.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(c: Rgb) -> f64 {
    let r = channel_luminance(c.r);
    let g = channel_luminance(c.g);
    let b = channel_luminance(c.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two quantized colors, in [1.0, 21.0].
///
/// Symmetric: argument order never matters.
#[must_use]
pub fn rgb_contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two polar Oklab colors, measured on their RGB
/// quantization.
#[must_use]
pub fn contrast_ratio(a: OklabPolar, b: OklabPolar) -> f64 {
    rgb_contrast_ratio(a.to_rgb(), b.to_rgb())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
