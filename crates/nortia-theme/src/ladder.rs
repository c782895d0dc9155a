//! Foreground and background step ladders.
//!
//! Each step nudges Oklab lightness by a fixed additive amount (`amount /
//! 400`) and requantizes to RGB before the next step, so ladders chain on
//! the colors that actually appear in the theme rather than on unrounded
//! intermediates.

use nortia_color::Rgb;

/// Foreground step, in 1/400ths of Oklab lightness.
pub const FOREGROUND_STEP: f64 = 10.0;

/// Background step, in 1/400ths of Oklab lightness.
pub const BACKGROUND_STEP: f64 = 20.0;

/// Offset from a status color to its background tint.
pub const SEMANTIC_BACKGROUND_STEP: f64 = 60.0;

const OFFSET_SCALE: f64 = 400.0;

/// Which way an offset moves a color relative to the theme's background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Less prominent: toward the background (darker in dark themes,
    /// lighter in light themes). Used for foreground steps.
    Recede,
    /// More prominent surface: away from the base background (lighter in
    /// dark themes, darker in light themes). Used for background steps and
    /// status tints.
    Emphasize,
}

/// Shift the Oklab lightness of `color` by `amount / 400`.
///
/// | offset      | dark | light |
/// |-------------|------|-------|
/// | `Recede`    |  −   |  +    |
/// | `Emphasize` |  +   |  −    |
#[must_use]
pub fn offset(color: Rgb, amount: f64, is_dark: bool, direction: Offset) -> Rgb {
    let mut polar = color.to_polar();
    let delta = amount / OFFSET_SCALE;
    let lighten = match direction {
        Offset::Recede => !is_dark,
        Offset::Emphasize => is_dark,
    };
    polar.l = if lighten {
        polar.l + delta
    } else {
        polar.l - delta
    };
    polar.to_rgb()
}

/// `fore2..=fore4`: three chained foreground steps toward the background.
#[must_use]
pub fn foreground_ladder(foreground: Rgb, is_dark: bool) -> [Rgb; 3] {
    chain(foreground, FOREGROUND_STEP, is_dark, Offset::Recede)
}

/// `back2..=back5`: four chained background steps of growing prominence.
#[must_use]
pub fn background_ladder(background: Rgb, is_dark: bool) -> [Rgb; 4] {
    chain(background, BACKGROUND_STEP, is_dark, Offset::Emphasize)
}

/// Background tint for a status color (diff, search highlights).
#[must_use]
pub fn semantic_background(color: Rgb, is_dark: bool) -> Rgb {
    offset(color, SEMANTIC_BACKGROUND_STEP, is_dark, Offset::Emphasize)
}

fn chain<const N: usize>(start: Rgb, amount: f64, is_dark: bool, direction: Offset) -> [Rgb; N] {
    let mut current = start;
    std::array::from_fn(|_| {
        current = offset(current, amount, is_dark, direction);
        current
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
