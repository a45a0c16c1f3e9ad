// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame numbers, frame times and rational frame rates.
//!
//! All scheduler arithmetic happens on whole [`FrameNumber`]s at the tick
//! resolution. [`FrameTime`] only appears at the API boundary where a
//! display-rate value may fall between two display frames.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A whole frame (or tick) at some [`FrameRate`]
///
/// Arithmetic saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FrameNumber(pub i64);

impl FrameNumber {
    /// Raw frame value
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Add for FrameNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for FrameNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add<i64> for FrameNumber {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<i64> for FrameNumber {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        Self(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A frame number plus a fractional position towards the next frame
///
/// `sub_frame` is always in `[0, 1)`, so `-0.25` frames is stored as
/// frame `-1` with a sub-frame of `0.75`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Whole frame
    pub frame: FrameNumber,
    /// Fraction of the next frame, in `[0, 1)`
    pub sub_frame: f32,
}

impl FrameTime {
    /// A time exactly on a frame
    pub const fn from_frame(frame: FrameNumber) -> Self {
        Self { frame, sub_frame: 0.0 }
    }

    /// Create a time from a frame and a sub-frame, normalizing the sub-frame
    pub fn new(frame: FrameNumber, sub_frame: f32) -> Self {
        let carry = sub_frame.floor();
        let sub_frame = sub_frame - carry;
        // Rounding can leave exactly 1.0 behind
        if sub_frame >= 1.0 {
            return Self::from_frame(frame + (carry as i64 + 1));
        }
        Self {
            frame: frame + carry as i64,
            sub_frame,
        }
    }

    /// Create a time from a decimal frame count
    pub fn from_decimal(value: f64) -> Self {
        let whole = value.floor();
        Self::new(FrameNumber(whole as i64), (value - whole) as f32)
    }

    /// Shift by a decimal number of frames
    pub fn offset_by(self, frames: f64) -> Self {
        let whole = frames.floor();
        Self::new(self.frame + whole as i64, self.sub_frame + (frames - whole) as f32)
    }

    /// The time as a decimal frame count
    pub fn as_decimal(self) -> f64 {
        self.frame.0 as f64 + f64::from(self.sub_frame)
    }

    /// Round to the nearest frame, halves away from the past
    pub fn round_to_frame(self) -> FrameNumber {
        if self.sub_frame >= 0.5 {
            self.frame + 1
        } else {
            self.frame
        }
    }

    /// The frame at or before this time
    pub fn floor_to_frame(self) -> FrameNumber {
        self.frame
    }

    /// The frame at or after this time
    pub fn ceil_to_frame(self) -> FrameNumber {
        if self.sub_frame > 0.0 {
            self.frame + 1
        } else {
            self.frame
        }
    }
}

impl From<FrameNumber> for FrameTime {
    fn from(frame: FrameNumber) -> Self {
        Self::from_frame(frame)
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub_frame == 0.0 {
            write!(f, "{}", self.frame)
        } else {
            write!(f, "{:.3}", self.as_decimal())
        }
    }
}

/// A rational frame rate in frames per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Frames
    pub numerator: u32,
    /// Per this many seconds
    pub denominator: u32,
}

impl FrameRate {
    /// Create a rate of `numerator / denominator` frames per second.
    ///
    /// Zero components are replaced with 1.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        debug_assert!(numerator > 0 && denominator > 0, "frame rate components must be non-zero");
        Self {
            numerator: numerator.max(1),
            denominator: denominator.max(1),
        }
    }

    /// Whole frames per second
    pub fn fps(frames_per_second: u32) -> Self {
        Self::new(frames_per_second, 1)
    }

    /// Whether both components are non-zero
    pub fn is_valid(&self) -> bool {
        self.numerator > 0 && self.denominator > 0
    }

    /// Rate as a decimal number of frames per second
    pub fn as_decimal(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Decimal number of frames at this rate in `seconds`.
    ///
    /// Kept as `f64` so sub-frame progress survives large tick resolutions.
    pub fn seconds_to_frames(&self, seconds: f64) -> f64 {
        seconds * self.as_decimal()
    }

    /// Convert a time from one rate to another.
    ///
    /// The whole-frame part is converted with exact integer arithmetic, only
    /// the sub-frame goes through floating point.
    pub fn transform_time(time: FrameTime, from: FrameRate, to: FrameRate) -> FrameTime {
        if from == to {
            return time;
        }

        let scale_num = i128::from(to.numerator) * i128::from(from.denominator);
        let scale_den = i128::from(to.denominator) * i128::from(from.numerator);

        let scaled = i128::from(time.frame.0) * scale_num;
        let whole = scaled.div_euclid(scale_den);
        let remainder = scaled.rem_euclid(scale_den);

        let fraction = (remainder as f64 + f64::from(time.sub_frame) * scale_num as f64) / scale_den as f64;
        FrameTime::from_frame(FrameNumber(saturate_to_i64(whole))).offset_by(fraction)
    }

    /// Convert a whole frame from one rate to another
    pub fn transform_frame(frame: FrameNumber, from: FrameRate, to: FrameRate) -> FrameTime {
        Self::transform_time(FrameTime::from_frame(frame), from, to)
    }

}

fn saturate_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::fps(30)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{} fps", self.numerator)
        } else {
            write!(f, "{}/{} fps", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_normalizes_negative_sub_frame() {
        let time = FrameTime::from_decimal(-0.25);
        assert_eq!(time.frame, FrameNumber(-1));
        assert!((time.sub_frame - 0.75).abs() < 1e-6);
        assert_eq!(time.round_to_frame(), FrameNumber(0));
        assert_eq!(time.floor_to_frame(), FrameNumber(-1));
        assert_eq!(time.ceil_to_frame(), FrameNumber(0));
    }

    #[test]
    fn test_transform_exact_multiple() {
        let display = FrameRate::fps(30);
        let ticks = FrameRate::fps(24000);

        let time = FrameRate::transform_frame(FrameNumber(45), display, ticks);
        assert_eq!(time, FrameTime::from_frame(FrameNumber(36000)));

        let back = FrameRate::transform_frame(FrameNumber(36000), ticks, display);
        assert_eq!(back, FrameTime::from_frame(FrameNumber(45)));
    }

    #[test]
    fn test_transform_keeps_sub_frame() {
        let display = FrameRate::fps(30);
        let ticks = FrameRate::fps(24000);

        // 400 ticks is half a display frame
        let time = FrameRate::transform_frame(FrameNumber(1200), ticks, display);
        assert_eq!(time.frame, FrameNumber(1));
        assert!((time.sub_frame - 0.5).abs() < 1e-6);

        let negative = FrameRate::transform_frame(FrameNumber(-400), ticks, display);
        assert_eq!(negative.frame, FrameNumber(-1));
        assert!((negative.sub_frame - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ntsc_rate() {
        let ntsc = FrameRate::new(30000, 1001);
        let ticks = FrameRate::fps(60000);

        // One NTSC frame is exactly 2002 ticks at 60000 fps
        let time = FrameRate::transform_frame(FrameNumber(1), ntsc, ticks);
        assert_eq!(time, FrameTime::from_frame(FrameNumber(2002)));
    }

    #[test]
    fn test_seconds_conversion() {
        let ticks = FrameRate::fps(24000);
        assert_eq!(ticks.seconds_to_frames(0.5), 12000.0);
        assert_eq!(ticks.seconds_to_frames(-0.5), -12000.0);
        assert_eq!(FrameRate::new(30000, 1001).seconds_to_frames(1001.0), 30000.0);
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(FrameNumber(i64::MAX - 1) + 5, FrameNumber(i64::MAX));
        assert_eq!(FrameNumber(i64::MIN + 1) - FrameNumber(5), FrameNumber(i64::MIN));

        let time = FrameRate::transform_frame(FrameNumber(i64::MAX), FrameRate::fps(1), FrameRate::fps(24000));
        assert_eq!(time.frame, FrameNumber(i64::MAX));
        let time = FrameRate::transform_frame(FrameNumber(i64::MIN), FrameRate::fps(1), FrameRate::fps(24000));
        assert_eq!(time.frame, FrameNumber(i64::MIN));
    }
}
