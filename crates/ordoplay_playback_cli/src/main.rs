// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` playback driver
//!
//! Runs the playback scheduler headlessly at a fixed update rate and prints
//! every evaluation window it produces. Useful for checking loop, ping-pong
//! and trimming settings without opening the editor.

mod driver;

use clap::Parser;
use driver::{drive, DriveOptions, DriverError};
use ordoplay_playback::{PlaybackScheduler, PlaybackSettings};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Drive the `OrdoPlay` playback scheduler without the editor
#[derive(Debug, Parser)]
#[command(name = "ordoplay_playback", version, about)]
struct Args {
    /// Playback settings file (RON). Defaults are used when omitted.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seconds per update
    #[arg(short, long, default_value_t = 1.0 / 60.0)]
    delta: f64,

    /// Maximum number of updates
    #[arg(short, long, default_value_t = 600)]
    steps: u64,

    /// Print windows as JSON lines
    #[arg(long)]
    json: bool,

    /// Write the default settings to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Windows go to stdout, logs to stderr. The binary and the library share
    // the `ordoplay_playback` target prefix.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("ordoplay_playback=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting OrdoPlay playback driver v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        tracing::error!("Playback driver failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    if let Some(path) = &args.write_default {
        PlaybackSettings::default().save(path)?;
        tracing::info!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => PlaybackSettings::load(path)?,
        None => PlaybackSettings::default(),
    };

    let mut scheduler = PlaybackScheduler::from_settings(&settings);
    let effective = scheduler.effective_playback_range();
    tracing::info!(
        "Playing [{}, {}) at {}, tick resolution {}, {} loop(s)",
        effective.start,
        effective.end,
        scheduler.display_rate(),
        scheduler.tick_resolution(),
        settings.options.num_loops_to_play
    );

    let options = DriveOptions {
        delta_seconds: args.delta,
        max_steps: args.steps,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = drive(&mut scheduler, &options, |record| {
        if args.json {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", record.to_text())?;
        }
        Ok(())
    })?;
    out.flush()?;

    tracing::info!(
        steps = summary.steps,
        windows = summary.windows,
        loops = summary.loops_completed,
        final_time = summary.final_time,
        stopped = summary.stopped,
        "Done"
    );
    Ok(())
}
