// SPDX-License-Identifier: MIT
//
// Batch writer: one theme file per hour.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nortia_theme::document::theme_file_name;
use nortia_theme::{ThemeConfig, ThemeDocument};
use tracing::info;

/// Write `nortia-00.json` … `nortia-23.json` into `out_dir`, creating it if
/// needed. Returns the written paths in hour order.
///
/// Every document is generated before anything is written, so a config that
/// fails for one hour leaves the directory untouched.
pub fn write_all(out_dir: &Path, base: &ThemeConfig) -> Result<Vec<PathBuf>> {
    let docs = ThemeDocument::all_hours(base).context("generating themes")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(docs.len());
    for (hour, doc) in (0u8..).zip(docs) {
        let path = out_dir.join(theme_file_name(hour));
        let json = doc.to_json_pretty()?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(file = %path.display(), appearance = doc.appearance.name(), "generated");
        written.push(path);
    }

    Ok(written)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
