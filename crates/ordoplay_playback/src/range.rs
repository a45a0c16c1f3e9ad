// SPDX-License-Identifier: MIT OR Apache-2.0
//! Half-open frame ranges.

use crate::frame::FrameNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range of frames, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameRange {
    /// First frame in the range
    pub start: FrameNumber,
    /// First frame past the range
    pub end: FrameNumber,
}

impl FrameRange {
    /// Create a range. An inverted range collapses to an empty one at `start`.
    pub fn new(start: FrameNumber, end: FrameNumber) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Create a range covering `first..=last`
    pub fn inclusive(first: FrameNumber, last: FrameNumber) -> Self {
        Self::new(first, last + 1)
    }

    /// Number of frames in the range
    pub fn size(&self) -> i64 {
        (self.end - self.start).value()
    }

    /// Whether the range contains no frames
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Last frame inside the range, or `start` for an empty range
    pub fn last_frame(&self) -> FrameNumber {
        (self.end - 1).max(self.start)
    }

    /// Whether the frame lies in the range
    pub fn contains(&self, frame: FrameNumber) -> bool {
        frame >= self.start && frame < self.end
    }

    /// Whether two ranges share at least one frame
    pub fn overlaps(&self, other: &FrameRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Clamp a frame into `[start, last_frame]`
    pub fn clamp(&self, frame: FrameNumber) -> FrameNumber {
        frame.clamp(self.start, self.last_frame())
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basics() {
        let range = FrameRange::new(FrameNumber(10), FrameNumber(20));
        assert_eq!(range.size(), 10);
        assert_eq!(range.last_frame(), FrameNumber(19));
        assert!(range.contains(FrameNumber(10)));
        assert!(!range.contains(FrameNumber(20)));
        assert_eq!(range, FrameRange::inclusive(FrameNumber(10), FrameNumber(19)));
    }

    #[test]
    fn test_empty_range() {
        let range = FrameRange::new(FrameNumber(5), FrameNumber(2));
        assert!(range.is_empty());
        assert_eq!(range.size(), 0);
        assert_eq!(range.last_frame(), FrameNumber(5));
        assert_eq!(range.clamp(FrameNumber(100)), FrameNumber(5));
    }

    #[test]
    fn test_overlap_and_clamp() {
        let a = FrameRange::new(FrameNumber(0), FrameNumber(10));
        let b = FrameRange::new(FrameNumber(9), FrameNumber(12));
        let c = FrameRange::new(FrameNumber(10), FrameNumber(12));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.clamp(FrameNumber(-3)), FrameNumber(0));
        assert_eq!(a.clamp(FrameNumber(42)), FrameNumber(9));
    }
}
