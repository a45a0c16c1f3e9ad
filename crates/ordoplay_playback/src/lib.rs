// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback scheduling for OrdoPlay sequences.
//!
//! This crate decides how time advances on a timeline:
//! - Delta-time and absolute-time updates
//! - Finite and infinite looping, ping-pong
//! - Start/end trimming
//! - Play rate and time-warp remapping
//!
//! ## Architecture
//!
//! A [`PlaybackScheduler`] owns the playhead. Every update returns the
//! ordered [`EvaluationWindow`]s an evaluator must process; what gets
//! evaluated inside a window is up to the caller.
//! - Ticks are whole [`FrameNumber`]s at a fixed tick resolution
//! - Caller-facing times are [`FrameTime`]s at the display rate
//! - Settings load from RON files via [`PlaybackSettings`]

pub mod frame;
pub mod range;
pub mod window;
pub mod time_warp;
pub mod scheduler;
pub mod settings;

pub use frame::{FrameNumber, FrameTime, FrameRate};
pub use range::FrameRange;
pub use window::{EvaluationWindow, PlaybackStatus, PlayDirection};
pub use time_warp::{TimeWarp, TimeWarpDomain, IdentityWarp, FnTimeWarp};
pub use scheduler::{PlaybackScheduler, LoopDissection, EvaluationType, TimeRange};
pub use settings::{
    PlaybackSettings, SequenceSettings, PlaybackOptions, SettingsError,
    SETTINGS_FORMAT_VERSION, SETTINGS_FILE_EXTENSION,
};
