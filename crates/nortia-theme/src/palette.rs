//! Accent synthesis: contrast-guaranteed colors from one base color.
//!
//! Every accent starts as the configured base color, optionally transformed
//! (hue rotated, or hue pinned with chroma scaled), then gets pushed away
//! from the background until it meets the contrast threshold:
//!
//! - dark themes scale lightness and chroma up together (brighter, more
//!   saturated);
//! - light themes scale lightness down and chroma up (darker, still
//!   saturated), since brightening would close the gap to a light
//!   background.
//!
//! Scaling only ever touches `L` and `C`, so the hue chosen by the
//! transform survives the search untouched.

use std::fmt;

use nortia_color::color::degrees_to_radians;
use nortia_color::{OklabPolar, Rgb};
use tracing::{debug, trace, warn};

use crate::config::ThemeConfig;
use crate::contrast::contrast_ratio;
use crate::error::ThemeError;

/// Upper bound on contrast steps before giving up.
///
/// Reachable thresholds converge in a handful of steps (0-2 for the default
/// amber); 1.1^100 and 0.9^100 are far past saturation in either direction.
pub const MAX_CONTRAST_STEPS: u32 = 100;

/// Chroma multiplier for the fixed-hue status colors.
pub const SEMANTIC_CHROMA_SCALE: f64 = 1.3;

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// How an accent is derived from the base color before the contrast search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// The base color as-is.
    Identity,
    /// Rotate the base hue by this many degrees.
    RotateHue(f64),
    /// Pin the hue to an absolute angle (degrees) and scale the base chroma.
    ForceHue { degrees: f64, chroma_scale: f64 },
}

impl Transform {
    /// Apply to the base color.
    #[must_use]
    pub fn apply(self, base: OklabPolar) -> OklabPolar {
        match self {
            Self::Identity => base,
            Self::RotateHue(degrees) => base.rotate(degrees),
            Self::ForceHue {
                degrees,
                chroma_scale,
            } => base.with_hue_chroma(degrees_to_radians(degrees), base.c * chroma_scale),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Identity => f.write_str("base color"),
            Self::RotateHue(degrees) => write!(f, "base hue {degrees:+}°"),
            Self::ForceHue {
                degrees,
                chroma_scale,
            } => write!(f, "hue {degrees}°, chroma ×{chroma_scale}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Accent
// ---------------------------------------------------------------------------

/// The ten synthesized colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    /// The base color itself: cursor, buttons, functions, types.
    Palette1,
    Palette2,
    Palette3,
    Palette4,
    Palette5,
    Palette6,
    /// Success / insertions (green).
    Good,
    /// Errors / deletions (red).
    Bad,
    /// Warnings / conflicts (orange).
    Warn,
    /// Modifications / secondary matches (yellow).
    Neutral,
}

impl Accent {
    pub const ALL: [Self; 10] = [
        Self::Palette1,
        Self::Palette2,
        Self::Palette3,
        Self::Palette4,
        Self::Palette5,
        Self::Palette6,
        Self::Good,
        Self::Bad,
        Self::Warn,
        Self::Neutral,
    ];

    /// How this accent is derived from the base color.
    #[must_use]
    pub const fn transform(self) -> Transform {
        match self {
            Self::Palette1 => Transform::Identity,
            Self::Palette2 => Transform::RotateHue(-45.0),
            Self::Palette3 => Transform::RotateHue(30.0),
            Self::Palette4 => Transform::RotateHue(-75.0),
            Self::Palette5 => Transform::RotateHue(150.0),
            Self::Palette6 => Transform::RotateHue(190.0),
            Self::Good => semantic(115.0),
            Self::Bad => semantic(0.0),
            Self::Warn => semantic(30.0),
            Self::Neutral => semantic(59.0),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Palette1 => "palette1",
            Self::Palette2 => "palette2",
            Self::Palette3 => "palette3",
            Self::Palette4 => "palette4",
            Self::Palette5 => "palette5",
            Self::Palette6 => "palette6",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Warn => "warn",
            Self::Neutral => "neutral",
        }
    }

    /// Whether this is one of the fixed-hue status colors.
    #[must_use]
    pub const fn is_semantic(self) -> bool {
        matches!(self, Self::Good | Self::Bad | Self::Warn | Self::Neutral)
    }
}

const fn semantic(degrees: f64) -> Transform {
    Transform::ForceHue {
        degrees,
        chroma_scale: SEMANTIC_CHROMA_SCALE,
    }
}

// ---------------------------------------------------------------------------
// Contrast search
// ---------------------------------------------------------------------------

/// The outcome of a contrast search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesis {
    /// Final color in polar Oklab (unquantized).
    pub color: OklabPolar,
    /// `color` quantized, the value that lands in the theme.
    pub rgb: Rgb,
    /// Contrast of `rgb` against the background.
    pub ratio: f64,
    /// Scaling steps taken.
    pub steps: u32,
}

impl Synthesis {
    fn new(color: OklabPolar, ratio: f64, steps: u32) -> Self {
        Self {
            color,
            rgb: color.to_rgb(),
            ratio,
            steps,
        }
    }
}

/// One scaling step away from the background.
#[must_use]
pub fn contrast_step(color: OklabPolar, is_dark: bool) -> OklabPolar {
    if is_dark {
        OklabPolar {
            l: color.l * 1.10,
            c: color.c * 1.10,
            ..color
        }
    } else {
        OklabPolar {
            l: color.l * 0.9,
            c: color.c * 1.20,
            ..color
        }
    }
}

/// Step `start` away from `background` until their contrast reaches
/// `threshold`.
///
/// Returns `Err` with the last candidate if [`MAX_CONTRAST_STEPS`] steps
/// were not enough.
///
/// # Errors
///
/// The threshold is unreachable from `start`: above 21:1, or the scaling
/// saturates in the wrong direction for this hue.
pub fn search_contrast(
    start: OklabPolar,
    background: OklabPolar,
    threshold: f64,
    is_dark: bool,
) -> Result<Synthesis, Synthesis> {
    let mut color = start;
    let mut ratio = contrast_ratio(color, background);
    let mut steps = 0;

    while ratio < threshold {
        if steps == MAX_CONTRAST_STEPS {
            warn!(steps, ratio, threshold, "contrast search gave up");
            return Err(Synthesis::new(color, ratio, steps));
        }
        color = contrast_step(color, is_dark);
        ratio = contrast_ratio(color, background);
        steps += 1;
        trace!(steps, ratio, l = color.l, c = color.c, "contrast step");
    }

    debug!(steps, ratio, "contrast reached");
    Ok(Synthesis::new(color, ratio, steps))
}

/// Derive one accent for `config`: transform the base color, then search
/// for contrast against the hour's background.
///
/// # Errors
///
/// - [`ThemeError::InvalidThreshold`] if the threshold is NaN, infinite or
///   below 1.
/// - [`ThemeError::ContrastNotReached`] if the search hits its step bound.
///
/// # Panics
///
/// Panics if `config.hour` is 24 or more.
pub fn synthesize(config: &ThemeConfig, transform: Transform) -> Result<Synthesis, ThemeError> {
    if !config.has_valid_threshold() {
        return Err(ThemeError::InvalidThreshold(config.contrast_threshold));
    }
    let start = transform.apply(config.base_polar());
    search_contrast(
        start,
        config.background_base(),
        config.contrast_threshold,
        config.is_dark(),
    )
    .map_err(|best| ThemeError::ContrastNotReached {
        transform,
        threshold: config.contrast_threshold,
        achieved: best.ratio,
        steps: best.steps,
    })
}

/// [`synthesize`] for a named accent.
///
/// # Errors
///
/// See [`synthesize`].
pub fn synthesize_accent(config: &ThemeConfig, accent: Accent) -> Result<Synthesis, ThemeError> {
    let _span = tracing::debug_span!("accent", name = accent.name()).entered();
    synthesize(config, accent.transform())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
