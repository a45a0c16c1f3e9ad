// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-step driving of a playback scheduler.
//!
//! Stands in for a frame loop: the scheduler is updated with a constant
//! delta time and every produced window is handed to a sink.

use ordoplay_playback::{
    EvaluationWindow, PlayDirection, PlaybackScheduler, PlaybackStatus, SettingsError,
};
use serde::Serialize;

/// Error while driving playback
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Settings could not be loaded or saved
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A window could not be encoded
    #[error("Failed to encode window: {0}")]
    Encode(#[from] serde_json::Error),

    /// Output could not be written
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// How to drive the scheduler
#[derive(Debug, Clone, Copy)]
pub struct DriveOptions {
    /// Seconds per update
    pub delta_seconds: f64,
    /// Updates to run at most
    pub max_steps: u64,
}

/// A window as reported to the user, in both ticks and display frames
#[derive(Debug, Clone, Serialize)]
pub struct WindowRecord {
    /// Update that produced the window, 0 for the initial evaluation
    pub step: u64,
    /// Playhead before the sweep, in ticks
    pub from_tick: i64,
    /// Playhead after the sweep, in ticks
    pub to_tick: i64,
    /// Playhead before the sweep, in display frames
    pub from_time: f64,
    /// Playhead after the sweep, in display frames
    pub to_time: f64,
    /// Sweep direction
    pub direction: PlayDirection,
    /// Status at evaluation time
    pub status: PlaybackStatus,
    /// Whether the sweep jumped
    pub has_jumped: bool,
}

impl WindowRecord {
    /// Describe a window produced by `scheduler`
    pub fn new(step: u64, window: &EvaluationWindow, scheduler: &PlaybackScheduler) -> Self {
        Self {
            step,
            from_tick: window.from.value(),
            to_tick: window.to.value(),
            from_time: scheduler.to_display(window.from).as_decimal(),
            to_time: scheduler.to_display(window.to).as_decimal(),
            direction: window.direction,
            status: window.status,
            has_jumped: window.has_jumped,
        }
    }

    /// One-line human readable form
    pub fn to_text(&self) -> String {
        let arrow = if self.has_jumped { "~>" } else { "->" };
        let direction = match self.direction {
            PlayDirection::Forward => "fwd",
            PlayDirection::Backward => "bwd",
        };
        format!(
            "{:>6}  {:>10.3} {arrow} {:<10.3}  {direction}  ticks {} {arrow} {}",
            self.step, self.from_time, self.to_time, self.from_tick, self.to_tick
        )
    }
}

/// Outcome of a drive
#[derive(Debug, Clone, PartialEq)]
pub struct DriveSummary {
    /// Updates run
    pub steps: u64,
    /// Windows produced, including the initial evaluation
    pub windows: usize,
    /// Loops completed when the drive ended
    pub loops_completed: i32,
    /// Final playhead in display frames
    pub final_time: f64,
    /// Whether playback stopped on its own
    pub stopped: bool,
}

/// Play the scheduler from its current position until it stops or
/// `max_steps` updates ran
pub fn drive<F>(
    scheduler: &mut PlaybackScheduler,
    options: &DriveOptions,
    mut on_window: F,
) -> Result<DriveSummary, DriverError>
where
    F: FnMut(&WindowRecord) -> Result<(), DriverError>,
{
    scheduler.set_playback_status(PlaybackStatus::Playing);

    let mut windows = 0;
    for window in scheduler.update_at_current_time() {
        on_window(&WindowRecord::new(0, &window, scheduler))?;
        windows += 1;
    }

    let mut steps = 0;
    while steps < options.max_steps && scheduler.is_playing() {
        steps += 1;
        for window in scheduler.update(options.delta_seconds) {
            on_window(&WindowRecord::new(steps, &window, scheduler))?;
            windows += 1;
        }
    }

    let stopped = !scheduler.is_playing();
    if stopped {
        tracing::info!(steps, "Playback finished");
    } else {
        tracing::info!(steps, "Step limit reached while playing");
        scheduler.set_playback_status(PlaybackStatus::Stopped);
    }

    Ok(DriveSummary {
        steps,
        windows,
        loops_completed: scheduler.num_loops_completed(),
        final_time: scheduler.current_time().as_decimal(),
        stopped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordoplay_playback::PlaybackSettings;

    #[test]
    fn test_drive_single_loop_to_end() {
        let settings = PlaybackSettings::default();
        let mut scheduler = PlaybackScheduler::from_settings(&settings);
        let options = DriveOptions {
            delta_seconds: 1.0 / 60.0,
            max_steps: 10_000,
        };

        let mut records = Vec::new();
        let summary = drive(&mut scheduler, &options, |record| {
            records.push(record.clone());
            Ok(())
        })
        .unwrap();

        // 150 frames at 30 fps, two updates per frame
        assert_eq!(summary.steps, 300);
        assert!(summary.stopped);
        assert_eq!(summary.loops_completed, 1);
        assert_eq!(summary.windows, records.len());
        assert_eq!(records.first().map(|r| r.step), Some(0));
        assert_eq!(records.last().map(|r| r.to_tick), Some(119_999));
    }

    #[test]
    fn test_drive_stops_at_step_limit() {
        let mut settings = PlaybackSettings::default();
        settings.options.num_loops_to_play = 0;
        settings.options.ping_pong = true;
        let mut scheduler = PlaybackScheduler::from_settings(&settings);
        let options = DriveOptions {
            delta_seconds: 0.5,
            max_steps: 40,
        };

        let summary = drive(&mut scheduler, &options, |_| Ok(())).unwrap();

        assert_eq!(summary.steps, 40);
        assert!(!summary.stopped);
        assert_eq!(summary.loops_completed, 4);
        assert_eq!(scheduler.playback_status(), PlaybackStatus::Stopped);
    }

    #[test]
    fn test_sink_error_aborts_drive() {
        let mut scheduler = PlaybackScheduler::from_settings(&PlaybackSettings::default());
        let options = DriveOptions {
            delta_seconds: 0.1,
            max_steps: 10,
        };

        let result = drive(&mut scheduler, &options, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        });
        assert!(matches!(result, Err(DriverError::Io(_))));
    }

    #[test]
    fn test_record_formats() {
        let scheduler = PlaybackScheduler::from_settings(&PlaybackSettings::default());
        let window = EvaluationWindow::new(
            ordoplay_playback::FrameNumber(0),
            ordoplay_playback::FrameNumber(1200),
            PlayDirection::Forward,
            PlaybackStatus::Playing,
            true,
        );
        let record = WindowRecord::new(3, &window, &scheduler);

        assert_eq!(record.to_time, 1.5);
        assert!(record.to_text().contains("~>"));

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"has_jumped\":true"));
        assert!(json.contains("\"direction\":\"Forward\""));
    }
}
