//! # nortia-theme — time-of-day editor themes
//!
//! Synthesizes a complete editor color theme from a single hour (0-23).
//! The hour picks a background and foreground grey from two fixed
//! lightness schedules; everything else (accent palette, status colors,
//! syntax token colors) is derived from one warm base color and checked
//! for contrast against the background.
//!
//! # Architecture
//!
//! ```text
//! ThemeConfig { hour, base, tints, contrast_threshold }
//!     │
//!     ▼
//! schedule.rs:  hour → background/foreground lightness, dark/light
//!     │
//!     ▼
//! ladder.rs:    fg/bg step ladders (additive Oklab lightness offsets)
//!     │
//!     ▼
//! palette.rs:   accent + semantic colors, each pushed until it meets
//!               the contrast threshold (contrast.rs)
//!     │
//!     ▼
//! theme.rs:     ThemePalette → ThemeOutput
//!     │
//!     ▼
//! workbench.rs: named color roles + token scope rules
//! document.rs:  named, serializable theme file
//! ```
//!
//! Everything here is a pure function of its inputs. No clock, no
//! filesystem, no shared state: generating all 24 hours in parallel needs
//! no coordination.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// The role table is one long literal.
#![allow(clippy::too_many_lines)]

pub mod config;
pub mod contrast;
pub mod document;
pub mod error;
pub mod ladder;
pub mod palette;
pub mod schedule;
pub mod theme;
pub mod workbench;

pub use config::{ThemeConfig, Tint};
pub use document::ThemeDocument;
pub use error::ThemeError;
pub use palette::{Accent, Transform};
pub use schedule::Appearance;
pub use theme::{Theme, ThemePalette, generate};
pub use workbench::ThemeOutput;
