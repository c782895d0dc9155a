//! The diurnal lightness schedule.
//!
//! Two fixed 24-entry tables give the background and foreground grey for
//! each hour, as percent of white. Hours 8-15 are light; the rest of the
//! day is dark, with slightly lifted backgrounds around dawn and dusk.

use nortia_color::{Rgb, round_channel};
use serde::{Deserialize, Serialize};

/// Number of hours in the schedule.
pub const HOURS_PER_DAY: u8 = 24;

/// Background lightness per hour, percent of white.
pub const BACKGROUND_LIGHTNESS: [u8; HOURS_PER_DAY as usize] = [
    14, 14, 18, 18, 22, 22, 22, 22, 94, 96, 96, 98, //
    98, 96, 94, 94, 25, 22, 18, 18, 14, 14, 14, 14,
];

/// Foreground lightness per hour, percent of white.
pub const FOREGROUND_LIGHTNESS: [u8; HOURS_PER_DAY as usize] = [
    84, 84, 88, 88, 84, 84, 84, 84, 35, 35, 35, 35, //
    35, 35, 35, 35, 84, 84, 84, 84, 84, 84, 80, 80,
];

/// Background lightness at or below this percentage makes a dark theme.
const DARK_CUTOFF: u8 = 50;

/// Whether `hour` indexes the schedule.
#[must_use]
pub const fn is_valid_hour(hour: u8) -> bool {
    hour < HOURS_PER_DAY
}

/// Background lightness for `hour`.
///
/// # Panics
///
/// Panics if `hour` is 24 or more.
#[must_use]
pub const fn background_lightness(hour: u8) -> u8 {
    BACKGROUND_LIGHTNESS[hour as usize]
}

/// Foreground lightness for `hour`.
///
/// # Panics
///
/// Panics if `hour` is 24 or more.
#[must_use]
pub const fn foreground_lightness(hour: u8) -> u8 {
    FOREGROUND_LIGHTNESS[hour as usize]
}

/// The one dark/light predicate every other branch derives from.
///
/// # Panics
///
/// Panics if `hour` is 24 or more.
#[must_use]
pub const fn is_dark(hour: u8) -> bool {
    background_lightness(hour) <= DARK_CUTOFF
}

/// A neutral grey at `percent` of white.
#[must_use]
pub fn grey(percent: u8) -> Rgb {
    Rgb::grey(round_channel(f64::from(percent) / 100.0 * 255.0))
}

/// Dark or light, as editors label a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Appearance of the theme at `hour`.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is 24 or more.
    #[must_use]
    pub const fn at(hour: u8) -> Self {
        if is_dark(hour) { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
