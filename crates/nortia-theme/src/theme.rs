//! Theme composition, from one hour to every derived color.

use nortia_color::Rgb;
use tracing::debug;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::ladder::{background_ladder, foreground_ladder, semantic_background};
use crate::palette::{Accent, synthesize_accent};
use crate::schedule::{Appearance, is_valid_hour};
use crate::workbench::ThemeOutput;

// ---------------------------------------------------------------------------
// ThemePalette
// ---------------------------------------------------------------------------

/// Every color a theme is assembled from.
///
/// Backgrounds and foregrounds come from the schedule and the ladders;
/// accents and status colors from the contrast search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    // ── Foregrounds ───────────────────────────────────────────
    /// Primary text.
    pub foreground: Rgb,
    pub fore2: Rgb,
    pub fore3: Rgb,
    /// Dimmest text: line numbers, comments, inactive labels.
    pub fore4: Rgb,

    // ── Backgrounds ───────────────────────────────────────────
    /// Editor background.
    pub background: Rgb,
    /// Side bar, activity bar, title bar, inputs.
    pub back2: Rgb,
    /// Status bar, inactive tabs, selections.
    pub back3: Rgb,
    /// Active list selection.
    pub back4: Rgb,
    /// Borders.
    pub back5: Rgb,

    // ── Accents ───────────────────────────────────────────────
    pub palette1: Rgb,
    pub palette2: Rgb,
    pub palette3: Rgb,
    pub palette4: Rgb,
    pub palette5: Rgb,
    pub palette6: Rgb,

    // ── Status colors ─────────────────────────────────────────
    pub good: Rgb,
    pub bad: Rgb,
    pub warn: Rgb,
    pub neutral: Rgb,
    pub good_bg: Rgb,
    pub bad_bg: Rgb,
    pub warn_bg: Rgb,
    pub neutral_bg: Rgb,
}

impl ThemePalette {
    /// Derive the full palette for `config`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ContrastNotReached`] if any accent cannot meet the
    /// configured threshold.
    ///
    /// # Panics
    ///
    /// Panics if `config.hour` is 24 or more.
    pub fn generate(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let dark = config.is_dark();

        let foreground = config.foreground_base().to_rgb();
        let background = config.background_base().to_rgb();

        let [fore2, fore3, fore4] = foreground_ladder(foreground, dark);
        let [back2, back3, back4, back5] = background_ladder(background, dark);

        let accent = |a: Accent| synthesize_accent(config, a).map(|s| s.rgb);
        let palette1 = accent(Accent::Palette1)?;
        let palette2 = accent(Accent::Palette2)?;
        let palette3 = accent(Accent::Palette3)?;
        let palette4 = accent(Accent::Palette4)?;
        let palette5 = accent(Accent::Palette5)?;
        let palette6 = accent(Accent::Palette6)?;

        let good = accent(Accent::Good)?;
        let bad = accent(Accent::Bad)?;
        let warn = accent(Accent::Warn)?;
        let neutral = accent(Accent::Neutral)?;

        Ok(Self {
            foreground,
            fore2,
            fore3,
            fore4,
            background,
            back2,
            back3,
            back4,
            back5,
            palette1,
            palette2,
            palette3,
            palette4,
            palette5,
            palette6,
            good,
            bad,
            warn,
            neutral,
            good_bg: semantic_background(good, dark),
            bad_bg: semantic_background(bad, dark),
            warn_bg: semantic_background(warn, dark),
            neutral_bg: semantic_background(neutral, dark),
        })
    }

    /// The synthesized color for `accent`.
    #[must_use]
    pub const fn accent(&self, accent: Accent) -> Rgb {
        match accent {
            Accent::Palette1 => self.palette1,
            Accent::Palette2 => self.palette2,
            Accent::Palette3 => self.palette3,
            Accent::Palette4 => self.palette4,
            Accent::Palette5 => self.palette5,
            Accent::Palette6 => self.palette6,
            Accent::Good => self.good,
            Accent::Bad => self.bad,
            Accent::Warn => self.warn,
            Accent::Neutral => self.neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A generated theme for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub hour: u8,
    pub appearance: Appearance,
    pub palette: ThemePalette,
}

impl Theme {
    /// Generate the theme for `config.hour`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::InvalidHour`] if the hour is not 0-23.
    /// - [`ThemeError::InvalidThreshold`] if the contrast threshold is not a
    ///   finite ratio of at least 1.
    /// - [`ThemeError::ContrastNotReached`] if an accent cannot meet the
    ///   contrast threshold.
    pub fn generate(config: &ThemeConfig) -> Result<Self, ThemeError> {
        if !is_valid_hour(config.hour) {
            return Err(ThemeError::InvalidHour(config.hour));
        }
        if !config.has_valid_threshold() {
            return Err(ThemeError::InvalidThreshold(config.contrast_threshold));
        }

        let _span = tracing::debug_span!("theme", hour = config.hour).entered();
        let palette = ThemePalette::generate(config)?;
        let appearance = Appearance::at(config.hour);
        debug!(
            appearance = appearance.name(),
            background = %palette.background,
            foreground = %palette.foreground,
            "theme generated"
        );

        Ok(Self {
            hour: config.hour,
            appearance,
            palette,
        })
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.appearance.is_dark()
    }

    /// Named color roles and token rules for this theme.
    #[must_use]
    pub fn to_output(&self) -> ThemeOutput {
        ThemeOutput::from_palette(self.is_dark(), &self.palette)
    }
}

/// `(hour, overrides) → theme description`.
///
/// # Errors
///
/// See [`Theme::generate`].
pub fn generate(config: &ThemeConfig) -> Result<ThemeOutput, ThemeError> {
    Theme::generate(config).map(|theme| theme.to_output())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
