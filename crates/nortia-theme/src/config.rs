//! Theme inputs: the hour plus optional base color, tints and threshold.

use nortia_color::{OklabPolar, Rgb};
use serde::{Deserialize, Serialize};

use crate::schedule::{background_lightness, foreground_lightness, grey, is_dark};

/// Warm amber seed for every accent color.
pub const DEFAULT_BASE: Rgb = Rgb::new(255, 189, 60);

/// Minimum luminance contrast accents must reach against the background.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 2.5;

/// Lowest threshold a config may ask for. Every pair of colors already
/// reaches 1:1.
pub const MIN_CONTRAST_THRESHOLD: f64 = 1.0;

/// Hue/chroma override for the base greys. The default is neutral grey.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tint {
    /// Hue angle in radians.
    pub h: f64,
    /// Oklab chroma.
    pub c: f64,
}

impl Tint {
    pub const NEUTRAL: Self = Self { h: 0.0, c: 0.0 };

    #[must_use]
    pub const fn new(h: f64, c: f64) -> Self {
        Self { h, c }
    }
}

/// Everything a theme is generated from.
///
/// Only `hour` is meaningful on its own; every other field has a default,
/// and deserializing a partial table fills in the rest.
///
/// `hour` must be 0-23. The derived accessors below index the schedule
/// directly and panic otherwise; [`Theme::generate`](crate::Theme::generate)
/// checks the range up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub hour: u8,
    pub base: Rgb,
    pub tint_fg: Tint,
    pub tint_bg: Tint,
    pub contrast_threshold: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ThemeConfig {
    /// Default configuration for `hour`.
    #[must_use]
    pub const fn new(hour: u8) -> Self {
        Self {
            hour,
            base: DEFAULT_BASE,
            tint_fg: Tint::NEUTRAL,
            tint_bg: Tint::NEUTRAL,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
        }
    }

    #[must_use]
    pub const fn with_hour(self, hour: u8) -> Self {
        Self { hour, ..self }
    }

    #[must_use]
    pub const fn with_base(self, base: Rgb) -> Self {
        Self { base, ..self }
    }

    #[must_use]
    pub const fn with_tint_fg(self, tint_fg: Tint) -> Self {
        Self { tint_fg, ..self }
    }

    #[must_use]
    pub const fn with_tint_bg(self, tint_bg: Tint) -> Self {
        Self { tint_bg, ..self }
    }

    #[must_use]
    pub const fn with_contrast_threshold(self, contrast_threshold: f64) -> Self {
        Self {
            contrast_threshold,
            ..self
        }
    }

    /// A finite threshold of at least [`MIN_CONTRAST_THRESHOLD`]. NaN never
    /// compares below anything, so it would skip the search entirely.
    #[must_use]
    pub const fn has_valid_threshold(&self) -> bool {
        self.contrast_threshold.is_finite() && self.contrast_threshold >= MIN_CONTRAST_THRESHOLD
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        is_dark(self.hour)
    }

    /// The base accent color in polar form.
    #[must_use]
    pub fn base_polar(&self) -> OklabPolar {
        self.base.to_polar()
    }

    /// Background grey for the hour, with `tint_bg` as its hue and chroma.
    #[must_use]
    pub fn background_base(&self) -> OklabPolar {
        tinted_grey(background_lightness(self.hour), self.tint_bg)
    }

    /// Foreground grey for the hour, with `tint_fg` as its hue and chroma.
    #[must_use]
    pub fn foreground_base(&self) -> OklabPolar {
        tinted_grey(foreground_lightness(self.hour), self.tint_fg)
    }
}

fn tinted_grey(percent: u8, tint: Tint) -> OklabPolar {
    grey(percent).to_polar().with_hue_chroma(tint.h, tint.c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let c = ThemeConfig::new(5);
        assert_eq!(c.hour, 5);
        assert_eq!(c.base, Rgb::new(255, 189, 60));
        assert_eq!(c.tint_fg, Tint::NEUTRAL);
        assert_eq!(c.tint_bg, Tint::NEUTRAL);
        assert!((c.contrast_threshold - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn neutral_bases_are_greys() {
        let c = ThemeConfig::new(0);
        assert_eq!(c.background_base().to_rgb(), Rgb::grey(0x24));
        assert_eq!(c.foreground_base().to_rgb(), Rgb::grey(0xd6));
        assert!(c.background_base().c.abs() < f64::EPSILON);
    }

    #[test]
    fn tint_overrides_hue_and_chroma() {
        let c = ThemeConfig::new(0).with_tint_bg(Tint::new(4.0, 0.2));
        let bg = c.background_base();
        assert!((bg.h - 4.0).abs() < f64::EPSILON);
        assert!((bg.c - 0.2).abs() < f64::EPSILON);
        // Lightness still comes from the schedule.
        assert!((bg.l - ThemeConfig::new(0).background_base().l).abs() < f64::EPSILON);
        assert_ne!(bg.to_rgb(), Rgb::grey(0x24));
    }

    #[test]
    fn builders_touch_one_field() {
        let c = ThemeConfig::new(3)
            .with_hour(9)
            .with_base(Rgb::new(10, 20, 30))
            .with_contrast_threshold(4.5);
        assert_eq!(c.hour, 9);
        assert_eq!(c.base, Rgb::new(10, 20, 30));
        assert_eq!(c.tint_fg, Tint::NEUTRAL);
        assert!((c.contrast_threshold - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: ThemeConfig = toml::from_str(
            r##"
            hour = 14
            base = "#3c8cff"

            [tint_bg]
            h = 1.5
            c = 0.05
            "##,
        )
        .unwrap();
        assert_eq!(c.hour, 14);
        assert_eq!(c.base, Rgb::new(0x3c, 0x8c, 0xff));
        assert_eq!(c.tint_bg, Tint::new(1.5, 0.05));
        assert_eq!(c.tint_fg, Tint::NEUTRAL);
        assert!((c.contrast_threshold - DEFAULT_CONTRAST_THRESHOLD).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_table_is_default() {
        let c: ThemeConfig = toml::from_str("").unwrap();
        assert_eq!(c, ThemeConfig::default());
    }

    #[test]
    fn threshold_validity() {
        assert!(ThemeConfig::default().has_valid_threshold());
        assert!(ThemeConfig::new(0).with_contrast_threshold(1.0).has_valid_threshold());
        assert!(ThemeConfig::new(0).with_contrast_threshold(22.0).has_valid_threshold());
        for t in [f64::NAN, f64::INFINITY, 0.0, 0.99, -1.0] {
            assert!(
                !ThemeConfig::new(0).with_contrast_threshold(t).has_valid_threshold(),
                "{t}"
            );
        }
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let err = toml::from_str::<ThemeConfig>("contrast = 3.0").unwrap_err();
        assert!(err.to_string().contains("contrast"), "{err}");
        assert!(toml::from_str::<ThemeConfig>("[tint_bg]\nhue = 1.0\n").is_err());
    }
}
