// SPDX-License-Identifier: MIT OR Apache-2.0
//! Evaluation windows handed to the evaluator after each update.

use crate::frame::FrameNumber;
use crate::range::FrameRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Not advancing; seeks only reposition the playhead
    #[default]
    Stopped,
    /// Advancing with delta time
    Playing,
    /// Driven by absolute times from a scrubber
    Scrubbing,
}

impl PlaybackStatus {
    /// Whether updates in this status produce contiguous sweeps
    pub fn is_sweeping(&self) -> bool {
        matches!(self, PlaybackStatus::Playing | PlaybackStatus::Scrubbing)
    }
}

/// Direction the playhead moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayDirection {
    /// Towards later frames
    #[default]
    Forward,
    /// Towards earlier frames
    Backward,
}

impl PlayDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            PlayDirection::Forward => PlayDirection::Backward,
            PlayDirection::Backward => PlayDirection::Forward,
        }
    }

    /// `1` forward, `-1` backward
    pub fn sign(self) -> i64 {
        match self {
            PlayDirection::Forward => 1,
            PlayDirection::Backward => -1,
        }
    }

    /// Whether this is [`PlayDirection::Forward`]
    pub fn is_forward(self) -> bool {
        self == PlayDirection::Forward
    }
}

/// One sweep of the playhead that the evaluator must process.
///
/// `from` is where the playhead was before the sweep and `to` is where it is
/// afterwards. Consecutive windows chain, so a window's `from` equals the
/// previous window's `to` unless `has_jumped` is set.
///
/// `to` is a playhead position, not the exclusive end of a span: the sweep
/// covers `from..=to` in either direction. A wrap with 50 ticks of overplay
/// yields `[0 -> 50]` and leaves the playhead on tick 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationWindow {
    /// Playhead before the sweep, in ticks
    pub from: FrameNumber,
    /// Playhead after the sweep, in ticks
    pub to: FrameNumber,
    /// Direction of the sweep
    pub direction: PlayDirection,
    /// Status at evaluation time
    pub status: PlaybackStatus,
    /// The sweep does not continue from the previous playhead
    pub has_jumped: bool,
}

impl EvaluationWindow {
    /// Create a window
    pub fn new(
        from: FrameNumber,
        to: FrameNumber,
        direction: PlayDirection,
        status: PlaybackStatus,
        has_jumped: bool,
    ) -> Self {
        Self {
            from,
            to,
            direction,
            status,
            has_jumped,
        }
    }

    /// Mark the window as not following the previous playhead
    pub fn jumped(mut self) -> Self {
        self.has_jumped = true;
        self
    }

    /// Lowest tick touched by the sweep
    pub fn lower(&self) -> FrameNumber {
        self.from.min(self.to)
    }

    /// Highest tick touched by the sweep
    pub fn upper(&self) -> FrameNumber {
        self.from.max(self.to)
    }

    /// Every tick touched by the sweep, endpoints included
    pub fn range(&self) -> FrameRange {
        FrameRange::inclusive(self.lower(), self.upper())
    }

    /// Distance covered by the sweep in ticks
    pub fn length(&self) -> i64 {
        (self.to - self.from).value().abs()
    }

    /// Whether the window re-evaluates a single tick
    pub fn is_instant(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for EvaluationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.from, self.to)?;
        if self.has_jumped {
            write!(f, " (jumped)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_reversal() {
        assert_eq!(PlayDirection::Forward.reversed(), PlayDirection::Backward);
        assert_eq!(PlayDirection::Backward.reversed().sign(), 1);
        assert!(!PlayDirection::Backward.is_forward());
    }

    #[test]
    fn test_backward_window_range() {
        let window = EvaluationWindow::new(
            FrameNumber(80),
            FrameNumber(60),
            PlayDirection::Backward,
            PlaybackStatus::Playing,
            false,
        );
        assert_eq!(window.lower(), FrameNumber(60));
        assert_eq!(window.upper(), FrameNumber(80));
        assert_eq!(window.length(), 20);
        assert_eq!(window.range(), FrameRange::new(FrameNumber(60), FrameNumber(81)));
        assert_eq!(window.to_string(), "[80 -> 60]");
        assert_eq!(window.jumped().to_string(), "[80 -> 60] (jumped)");
    }

    #[test]
    fn test_forward_window_includes_playhead() {
        let window = EvaluationWindow::new(
            FrameNumber(0),
            FrameNumber(50),
            PlayDirection::Forward,
            PlaybackStatus::Playing,
            true,
        );
        assert_eq!(window.upper(), FrameNumber(50));
        assert!(window.range().contains(FrameNumber(50)));
        assert!(!window.range().contains(FrameNumber(51)));
        assert_eq!(window.length(), 50);
    }

    #[test]
    fn test_status_sweeping() {
        assert!(PlaybackStatus::Playing.is_sweeping());
        assert!(PlaybackStatus::Scrubbing.is_sweeping());
        assert!(!PlaybackStatus::Stopped.is_sweeping());
    }
}
