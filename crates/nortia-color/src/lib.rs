// SPDX-License-Identifier: MIT
//
// nortia-color — Oklab color math for the nortia theme generator.
//
// Three representations, one direction of precision loss:
//
//   Rgb (u8 × 3)  →  Oklab (L, a, b)  →  OklabPolar (L, C, h)
//        ↑                                     │
//        └──────── round + clamp ──────────────┘
//
// Rgb is the only output format. Going back to it always rounds half-up
// and saturates into 0–255, so no conversion can fail.

// Single-character variable names (r, g, b, l, m, s, a) are the standard
// notation for these transforms.
#![allow(clippy::many_single_char_names)]

pub mod color;

pub use color::{Oklab, OklabPolar, ParseColorError, Rgb, round_channel};
