// SPDX-License-Identifier: MIT
//
// nortia — time-of-day editor themes generated in Oklab.
//
// This is the host binary that wires the two library crates to the outside
// world:
//
//   nortia-color → RGB / Oklab / polar conversions, hex parsing
//   nortia-theme → schedule, contrast search, ladders, role tables, documents
//
// Commands:
//
//   generate  → write nortia-00.json … nortia-23.json into a directory
//   show      → print one hour's theme document as JSON on stdout
//   current   → report which theme the schedule selects right now
//   lock      → pin the schedule to one hour
//   unlock    → follow the clock again
//   auto      → turn automatic switching on or off
//
// Logs go to stderr so `show` output can be piped straight into a file.
// `RUST_LOG` overrides the default filter.

mod batch;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::{Parser, Subcommand, ValueEnum};
use nortia_color::Rgb;
use nortia_theme::ThemeDocument;
use nortia_theme::document::theme_name;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{ScheduleEdit, ScheduleState, Settings};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "nortia", version, about = "Time-of-day editor themes generated in Oklab")]
struct Cli {
    /// Debug-level logs for each generated color.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML settings file.
    #[arg(short, long, global = true, env = "NORTIA_CONFIG")]
    config: Option<PathBuf>,

    /// Base accent color, e.g. `#ffbd3c`. Overrides the settings file.
    #[arg(long, global = true, value_name = "HEX")]
    base: Option<Rgb>,

    /// Minimum accent contrast against the background.
    #[arg(long, global = true, value_name = "RATIO")]
    contrast: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write all 24 hourly theme files.
    Generate {
        #[arg(short, long, default_value = "themes")]
        out_dir: PathBuf,
    },
    /// Print one theme document as JSON.
    Show {
        /// Hour 0-23. Defaults to the hour the schedule selects now.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: Option<u8>,
    },
    /// Report the theme the schedule selects now.
    Current,
    /// Pin the schedule to one hour and turn switching on.
    Lock {
        #[arg(value_parser = clap::value_parser!(u8).range(0..24))]
        hour: u8,
    },
    /// Drop the pinned hour and follow the clock.
    Unlock,
    /// Turn automatic switching on or off.
    Auto {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Command {
    /// The schedule change this command makes, if it edits the settings file.
    const fn schedule_edit(&self) -> Option<ScheduleEdit> {
        match self {
            Self::Lock { hour } => Some(ScheduleEdit::Lock(*hour)),
            Self::Unlock => Some(ScheduleEdit::Unlock),
            Self::Auto { state } => Some(ScheduleEdit::AutoSwitch(matches!(state, Toggle::On))),
            Self::Generate { .. } | Self::Show { .. } | Self::Current => None,
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(edit) = cli.command.schedule_edit() {
        let path = cli
            .config
            .as_deref()
            .context("no settings file to edit; pass --config or set NORTIA_CONFIG")?;
        let settings = config::edit_schedule(path, edit)?;
        info!(config = %path.display(), ?edit, "schedule updated");
        println!("{}", describe(settings.schedule.state(clock_hour())));
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let theme = settings.theme_with(cli.base, cli.contrast);
    debug!(base = %theme.base, threshold = theme.contrast_threshold, "settings loaded");

    match cli.command {
        Command::Generate { out_dir } => {
            let written = batch::write_all(&out_dir, &theme)?;
            info!(count = written.len(), dir = %out_dir.display(), "themes written");
        }
        Command::Show { hour } => {
            let hour = match hour {
                Some(hour) => hour,
                None => settings
                    .schedule
                    .theme_hour(clock_hour())
                    .context("automatic switching is off; pass --hour")?,
            };
            let doc = ThemeDocument::for_config(&theme.with_hour(hour))?;
            println!("{}", doc.to_json_pretty()?);
        }
        Command::Current => {
            println!("{}", describe(settings.schedule.state(clock_hour())));
        }
        Command::Lock { .. } | Command::Unlock | Command::Auto { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nortia={level},nortia_theme={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Local wall-clock hour, 0-23.
fn clock_hour() -> u8 {
    u8::try_from(Local::now().hour()).unwrap_or(0)
}

fn describe(state: ScheduleState) -> String {
    match state {
        ScheduleState::Auto(hour) => format!("{} (auto)", theme_name(hour)),
        ScheduleState::Locked(hour) => format!("{} (locked)", theme_name(hour)),
        ScheduleState::Manual => "manual (automatic switching is off)".to_owned(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
