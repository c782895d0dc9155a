// SPDX-License-Identifier: MIT
//
// Host configuration: theme overrides plus the switching schedule.
//
//   [theme]
//   base = "#ffbd3c"
//   contrast_threshold = 2.5
//   tint_bg = { h = 4.2, c = 0.02 }
//
//   [schedule]
//   locked_hour = 21
//   auto_switch = true
//
// Every key is optional and unknown keys are errors. `theme.hour` is
// ignored; the hour always comes from the command line or the schedule.
//
// `lock`, `unlock` and `auto` rewrite only the `[schedule]` table. Comments
// and every other table survive the edit.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use nortia_color::Rgb;
use nortia_theme::ThemeConfig;
use nortia_theme::schedule::is_valid_hour;
use serde::Deserialize;
use tempfile::NamedTempFile;
use toml_edit::{DocumentMut, TableLike};

// ─── Settings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub theme: ThemeConfig,
    pub schedule: Schedule,
}

impl Settings {
    /// Load from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The configured theme with command-line overrides applied on top.
    #[must_use]
    pub fn theme_with(&self, base: Option<Rgb>, contrast: Option<f64>) -> ThemeConfig {
        let mut theme = self.theme;
        if let Some(base) = base {
            theme = theme.with_base(base);
        }
        if let Some(contrast) = contrast {
            theme = theme.with_contrast_threshold(contrast);
        }
        theme
    }
}

// ─── Schedule ───────────────────────────────────────────────────────────────

/// When to switch themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Schedule {
    /// Pin the theme to this hour instead of following the clock.
    /// Values outside 0-23 are ignored.
    pub locked_hour: Option<u8>,
    /// Follow the schedule at all. Off means the user picks a theme by hand.
    pub auto_switch: bool,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            locked_hour: None,
            auto_switch: true,
        }
    }
}

/// What the schedule decides for a given clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    /// Following the clock.
    Auto(u8),
    /// Pinned to a fixed hour.
    Locked(u8),
    /// Automatic switching is off.
    Manual,
}

impl Schedule {
    #[must_use]
    pub fn state(&self, clock_hour: u8) -> ScheduleState {
        if !self.auto_switch {
            return ScheduleState::Manual;
        }
        match self.locked_hour {
            Some(hour) if is_valid_hour(hour) => ScheduleState::Locked(hour),
            _ => ScheduleState::Auto(clock_hour),
        }
    }

    /// The hour whose theme should be active, if switching is on.
    #[must_use]
    pub fn theme_hour(&self, clock_hour: u8) -> Option<u8> {
        match self.state(clock_hour) {
            ScheduleState::Auto(hour) | ScheduleState::Locked(hour) => Some(hour),
            ScheduleState::Manual => None,
        }
    }
}

// ─── Schedule edits ─────────────────────────────────────────────────────────

/// A change to the stored schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleEdit {
    /// Pin the theme to an hour and turn switching on.
    Lock(u8),
    /// Drop the pinned hour and follow the clock again.
    Unlock,
    /// Turn automatic switching on or off, keeping any pinned hour.
    AutoSwitch(bool),
}

impl ScheduleEdit {
    /// The schedule after this edit.
    #[must_use]
    pub const fn apply(self, schedule: Schedule) -> Schedule {
        match self {
            Self::Lock(hour) => Schedule {
                locked_hour: Some(hour),
                auto_switch: true,
            },
            Self::Unlock => Schedule {
                locked_hour: None,
                auto_switch: true,
            },
            Self::AutoSwitch(auto_switch) => Schedule {
                auto_switch,
                ..schedule
            },
        }
    }

    fn apply_to_table(self, table: &mut dyn TableLike) {
        match self {
            Self::Lock(hour) => {
                table.insert("locked_hour", toml_edit::value(i64::from(hour)));
            }
            Self::Unlock => {
                table.remove("locked_hour");
            }
            Self::AutoSwitch(_) => {}
        }
        let auto_switch = self.apply(Schedule::default()).auto_switch;
        table.insert("auto_switch", toml_edit::value(auto_switch));
    }
}

/// Apply `edit` to the `[schedule]` table of the file at `path`, creating
/// the file if needed. Returns the settings as they now load.
///
/// The new text is validated before anything is written, and the file is
/// replaced atomically.
pub fn edit_schedule(path: &Path, edit: ScheduleEdit) -> Result<Settings> {
    let mut doc = match fs::read_to_string(path) {
        Ok(text) => text
            .parse::<DocumentMut>()
            .with_context(|| format!("parsing config {}", path.display()))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => DocumentMut::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("reading config {}", path.display()));
        }
    };

    let schedule = doc
        .entry("schedule")
        .or_insert(toml_edit::table())
        .as_table_like_mut()
        .with_context(|| format!("`schedule` in {} is not a table", path.display()))?;
    edit.apply_to_table(schedule);

    let text = doc.to_string();
    let settings = Settings::from_toml(&text)
        .with_context(|| format!("edited config {} would not load", path.display()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    fs::write(tmp.path(), text).with_context(|| format!("writing {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replacing {}", path.display()))?;

    Ok(settings)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
