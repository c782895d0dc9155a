//! Errors surfaced by theme generation.

use crate::palette::Transform;

/// Why a theme could not be generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    /// The hour does not index the 24-hour schedule.
    #[error("hour {0} is outside the 0-23 schedule")]
    InvalidHour(u8),

    /// The contrast threshold is NaN, infinite or below 1:1.
    #[error("contrast threshold {0} must be a finite ratio of at least 1")]
    InvalidThreshold(f64),

    /// The contrast search gave up before the candidate separated from the
    /// background, e.g. a threshold above the 21:1 maximum.
    #[error(
        "contrast {achieved:.2} after {steps} steps is below the {threshold:.2} threshold ({transform})"
    )]
    ContrastNotReached {
        transform: Transform,
        threshold: f64,
        achieved: f64,
        steps: u32,
    },
}
