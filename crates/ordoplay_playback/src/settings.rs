// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback settings stored as RON.
//!
//! Settings describe a timeline (range and rates) and the live playback
//! options applied on top of it. Times are given in display frames.

use crate::frame::{FrameNumber, FrameRate};
use crate::range::FrameRange;
use crate::scheduler::{EvaluationType, LoopDissection};
use crate::window::PlayDirection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Conventional file extension for settings files
pub const SETTINGS_FILE_EXTENSION: &str = "playback.ron";

/// Error loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid RON for these settings
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),

    /// File was written by a newer version
    #[error("Settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// A rate has a zero numerator or denominator
    #[error("Invalid {name} {numerator}/{denominator}")]
    InvalidFrameRate {
        /// Which rate
        name: &'static str,
        /// Numerator as written
        numerator: u32,
        /// Denominator as written
        denominator: u32,
    },

    /// Sequence end lies before its start
    #[error("Sequence end {end} is before start {start}")]
    InvalidRange {
        /// Start frame
        start: i64,
        /// End frame
        end: i64,
    },
}

/// The timeline being played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSettings {
    /// First display frame of the sequence
    pub start_frame: i64,
    /// Display frame just past the end of the sequence
    pub end_frame: i64,
    /// Internal tick resolution
    pub tick_resolution: FrameRate,
    /// Caller-facing display rate
    pub display_rate: FrameRate,
    /// Evaluation type
    pub evaluation_type: EvaluationType,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            start_frame: 0,
            end_frame: 150,
            tick_resolution: FrameRate::fps(24000),
            display_rate: FrameRate::fps(30),
            evaluation_type: EvaluationType::WithSubFrames,
        }
    }
}

impl SequenceSettings {
    /// Sequence bounds converted to ticks
    pub fn tick_range(&self) -> FrameRange {
        let to_ticks = |frame: i64| {
            FrameRate::transform_frame(FrameNumber(frame), self.display_rate, self.tick_resolution).round_to_frame()
        };
        FrameRange::new(to_ticks(self.start_frame), to_ticks(self.end_frame))
    }
}

/// Live playback options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Start trim in display frames
    pub start_offset: f64,
    /// End trim in display frames
    pub end_offset: f64,
    /// Loops to play, `<= 0` for infinite
    pub num_loops_to_play: i32,
    /// Play rate multiplier
    pub play_rate: f64,
    /// Play direction
    pub direction: PlayDirection,
    /// Alternate direction on every loop
    pub ping_pong: bool,
    /// Loop dissection policy
    pub dissection: LoopDissection,
    /// Apply an installed time warp to playback time
    pub transform_playback_time: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            start_offset: 0.0,
            end_offset: 0.0,
            num_loops_to_play: 1,
            play_rate: 1.0,
            direction: PlayDirection::Forward,
            ping_pong: false,
            dissection: LoopDissection::DissectOne,
            transform_playback_time: false,
        }
    }
}

/// Complete playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Settings format version
    pub version: u32,
    /// Timeline description
    #[serde(default)]
    pub sequence: SequenceSettings,
    /// Playback options
    #[serde(default)]
    pub options: PlaybackOptions,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            sequence: SequenceSettings::default(),
            options: PlaybackOptions::default(),
        }
    }
}

impl PlaybackSettings {
    /// Parse settings from a RON string
    pub fn from_ron(content: &str) -> Result<Self, SettingsError> {
        let settings: PlaybackSettings = ron::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a RON string
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_ron(&content)?;
        tracing::debug!("Loaded playback settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = self.to_ron()?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved playback settings to {}", path.display());
        Ok(())
    }

    /// Check version, rates and range
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.version > SETTINGS_FORMAT_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: self.version,
                supported: SETTINGS_FORMAT_VERSION,
            });
        }

        for (name, rate) in [
            ("tick resolution", self.sequence.tick_resolution),
            ("display rate", self.sequence.display_rate),
        ] {
            if !rate.is_valid() {
                return Err(SettingsError::InvalidFrameRate {
                    name,
                    numerator: rate.numerator,
                    denominator: rate.denominator,
                });
            }
        }

        if self.sequence.end_frame < self.sequence.start_frame {
            return Err(SettingsError::InvalidRange {
                start: self.sequence.start_frame,
                end: self.sequence.end_frame,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::PlaybackScheduler;

    #[test]
    fn test_default_settings() {
        let settings = PlaybackSettings::default();
        assert_eq!(settings.version, SETTINGS_FORMAT_VERSION);
        assert_eq!(
            settings.sequence.tick_range(),
            FrameRange::new(FrameNumber(0), FrameNumber(120_000))
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let mut settings = PlaybackSettings::default();
        settings.options.ping_pong = true;
        settings.options.num_loops_to_play = 0;
        settings.options.dissection = LoopDissection::DissectAll;
        settings.sequence.display_rate = FrameRate::new(30000, 1001);

        let ron_str = settings.to_ron().unwrap();
        let loaded = PlaybackSettings::from_ron(&ron_str).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded = PlaybackSettings::from_ron("(version: 1, options: (ping_pong: true))").unwrap();
        assert!(loaded.options.ping_pong);
        assert_eq!(loaded.options.num_loops_to_play, 1);
        assert_eq!(loaded.sequence, SequenceSettings::default());
    }

    #[test]
    fn test_rejects_newer_version() {
        let result = PlaybackSettings::from_ron("(version: 99)");
        assert!(matches!(
            result,
            Err(SettingsError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_rate() {
        let content = "(version: 1, sequence: (display_rate: (numerator: 0, denominator: 1)))";
        assert!(matches!(
            PlaybackSettings::from_ron(content),
            Err(SettingsError::InvalidFrameRate { name: "display rate", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let content = "(version: 1, sequence: (start_frame: 10, end_frame: 5))";
        assert!(matches!(
            PlaybackSettings::from_ron(content),
            Err(SettingsError::InvalidRange { start: 10, end: 5 })
        ));
        assert!(matches!(
            PlaybackSettings::from_ron("not ron"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_scheduler_from_settings() {
        let mut settings = PlaybackSettings::default();
        settings.options.start_offset = 15.0;
        settings.options.end_offset = 30.0;
        settings.options.num_loops_to_play = 3;
        settings.options.play_rate = -2.0;
        settings.options.ping_pong = true;

        let scheduler = PlaybackScheduler::from_settings(&settings);

        assert_eq!(scheduler.start_offset_ticks(), 12_000);
        assert_eq!(scheduler.end_offset_ticks(), 24_000);
        assert_eq!(scheduler.current_tick(), FrameNumber(12_000));
        assert_eq!(scheduler.num_loops_to_play(), 3);
        assert_eq!(scheduler.play_rate(), 2.0);
        assert_eq!(scheduler.play_direction(), PlayDirection::Backward);
        assert!(scheduler.is_ping_pong_playback());
    }

    #[test]
    fn test_demo_settings_parse() {
        let settings = PlaybackSettings::from_ron(include_str!("../../../demos/ping_pong.playback.ron")).unwrap();
        assert_eq!(settings.sequence.evaluation_type, EvaluationType::FrameLocked);
        assert_eq!(settings.sequence.tick_range().size(), 48_000);

        let scheduler = PlaybackScheduler::from_settings(&settings);
        assert_eq!(scheduler.effective_tick_range().size(), 36_000);
        assert_eq!(scheduler.dissect_looping(), LoopDissection::DissectAll);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("ordoplay_settings_{}.{}", std::process::id(), SETTINGS_FILE_EXTENSION));
        let settings = PlaybackSettings::default();
        settings.save(&path).unwrap();
        let loaded = PlaybackSettings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }
}
