// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback scheduler.
//!
//! The scheduler owns the playhead of a single timeline. Each update turns a
//! delta time or an absolute target time into an ordered list of
//! [`EvaluationWindow`]s, handling:
//! - Loop wraps, including several loops crossed in one update
//! - Ping-pong reversal
//! - Start/end trimming offsets
//! - Play rate and an optional time warp
//!
//! Positions are tracked in ticks at the tick resolution; display-rate values
//! are only used at the API boundary.

use crate::frame::{FrameNumber, FrameRate, FrameTime};
use crate::range::FrameRange;
use crate::settings::{PlaybackOptions, PlaybackSettings};
use crate::time_warp::{TimeWarp, TimeWarpDomain};
use crate::window::{EvaluationWindow, PlayDirection, PlaybackStatus};
use serde::{Deserialize, Serialize};

/// Largest playhead move a single delta-time update can request, in ticks.
/// Exactly representable as `f64`.
const MAX_UPDATE_TICKS: f64 = (1_i64 << 52) as f64;

/// Skipped loops given their own window under [`LoopDissection::DissectAll`]
/// in one update. Loops beyond this are passed over without a window.
const MAX_DISSECTED_LOOPS: i64 = 1024;

/// How a loop-boundary crossing is split into evaluation windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoopDissection {
    /// A single window from the start of the new loop; the tail of the old
    /// loop is jumped over
    None,
    /// Finish the current loop, then jump into the new one
    #[default]
    DissectOne,
    /// Like `DissectOne`, plus one window for every loop skipped entirely
    DissectAll,
}

/// How playback positions relate to display frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EvaluationType {
    /// The playhead may rest between display frames
    #[default]
    WithSubFrames,
    /// The playhead only rests on whole display frames
    FrameLocked,
}

/// A range of display-rate times
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeRange {
    /// Inclusive start
    pub start: FrameTime,
    /// Exclusive end
    pub end: FrameTime,
}

/// Effective range bounds used for wrap arithmetic
#[derive(Debug, Clone, Copy)]
struct LoopBounds {
    start: FrameNumber,
    last: FrameNumber,
    /// Never less than one tick
    duration: i64,
}

impl LoopBounds {
    fn new(range: FrameRange) -> Self {
        Self {
            start: range.start,
            last: range.last_frame(),
            duration: range.size().max(1),
        }
    }

    /// First and terminal tick of a sweep in the given direction
    fn sweep(&self, direction: PlayDirection) -> (FrameNumber, FrameNumber) {
        match direction {
            PlayDirection::Forward => (self.start, self.last),
            PlayDirection::Backward => (self.last, self.start),
        }
    }

    fn is_crossed_by(&self, direction: PlayDirection, tick: FrameNumber) -> bool {
        match direction {
            PlayDirection::Forward => tick > self.last,
            PlayDirection::Backward => tick < self.start,
        }
    }

    fn clamp(&self, tick: FrameNumber) -> FrameNumber {
        tick.clamp(self.start, self.last)
    }
}

/// Time advancement and looping state for one timeline
#[derive(Debug)]
pub struct PlaybackScheduler {
    /// Nominal bounds of the timeline in ticks
    sequence_range: FrameRange,
    /// Internal resolution
    tick_resolution: FrameRate,
    /// Caller-facing rate
    display_rate: FrameRate,
    evaluation_type: EvaluationType,

    current_tick: FrameNumber,
    /// Sub-tick remainder left over from delta-time updates
    carry: f64,
    /// The next window starts somewhere other than the playhead
    jump_pending: bool,
    status: PlaybackStatus,
    direction: PlayDirection,
    play_rate: f64,
    ping_pong: bool,
    /// `<= 0` plays forever
    num_loops_to_play: i32,
    num_loops_completed: i32,
    start_offset: i64,
    end_offset: i64,
    dissection: LoopDissection,
    time_warp: Option<Box<dyn TimeWarp>>,
    transform_playback_time: bool,
}

impl PlaybackScheduler {
    /// Create a scheduler positioned at the start of the sequence
    pub fn new(
        sequence_range: FrameRange,
        tick_resolution: FrameRate,
        display_rate: FrameRate,
        evaluation_type: EvaluationType,
    ) -> Self {
        Self {
            sequence_range,
            tick_resolution,
            display_rate,
            evaluation_type,
            current_tick: sequence_range.start,
            carry: 0.0,
            jump_pending: false,
            status: PlaybackStatus::Stopped,
            direction: PlayDirection::Forward,
            play_rate: 1.0,
            ping_pong: false,
            num_loops_to_play: 1,
            num_loops_completed: 0,
            start_offset: 0,
            end_offset: 0,
            dissection: LoopDissection::DissectOne,
            time_warp: None,
            transform_playback_time: false,
        }
    }

    /// Create a scheduler from loaded settings
    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        let mut scheduler = Self::new(
            settings.sequence.tick_range(),
            settings.sequence.tick_resolution,
            settings.sequence.display_rate,
            settings.sequence.evaluation_type,
        );
        scheduler.apply_options(&settings.options);
        scheduler
    }

    /// Bind a new timeline, resetting every playback setting
    pub fn initialize(
        &mut self,
        sequence_range: FrameRange,
        tick_resolution: FrameRate,
        display_rate: FrameRate,
        evaluation_type: EvaluationType,
    ) {
        *self = Self::new(sequence_range, tick_resolution, display_rate, evaluation_type);
        tracing::debug!(range = %sequence_range, %tick_resolution, %display_rate, "Playback scheduler initialized");
    }

    /// Apply a set of live playback options
    pub fn apply_options(&mut self, options: &PlaybackOptions) {
        self.set_start_offset(FrameTime::from_decimal(options.start_offset));
        self.set_end_offset(FrameTime::from_decimal(options.end_offset));
        self.set_num_loops_to_play(options.num_loops_to_play);
        self.set_play_direction(options.direction);
        self.set_play_rate(options.play_rate);
        self.set_ping_pong_playback(options.ping_pong);
        self.set_dissect_looping(options.dissection);
        self.set_transform_playback_time(options.transform_playback_time);
    }

    // ------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------

    /// Advance by a delta time in seconds. Only advances while playing.
    ///
    /// Non-finite deltas are ignored. A single update moves the playhead by
    /// at most 2^52 ticks before loop wrapping.
    pub fn update(&mut self, delta_seconds: f64) -> Vec<EvaluationWindow> {
        if self.status != PlaybackStatus::Playing {
            return Vec::new();
        }
        if !delta_seconds.is_finite() {
            tracing::warn!(delta_seconds, "Ignoring non-finite update delta");
            return Vec::new();
        }

        self.enter_effective_range(self.loop_bounds());

        let scaled_delta = delta_seconds * self.direction.sign() as f64 * self.play_rate;
        let offset = self.carry + self.tick_resolution.seconds_to_frames(scaled_delta);
        let step = offset.round().clamp(-MAX_UPDATE_TICKS, MAX_UPDATE_TICKS);
        if step.abs() < MAX_UPDATE_TICKS {
            self.carry = offset - step;
        } else {
            tracing::warn!(delta_seconds, "Update delta too large, clamping playhead move");
            self.carry = 0.0;
        }
        let mut next_tick = self.current_tick + step as i64;

        if self.should_transform_playback_time() {
            if let Some(warp) = &self.time_warp {
                next_tick = warp.transform(next_tick);
            }
        }

        if self.evaluation_type == EvaluationType::FrameLocked {
            let locked = self.lock_to_display_frame(next_tick);
            self.carry += (next_tick - locked).value() as f64;
            next_tick = locked;
        }

        tracing::trace!(delta_seconds, current = %self.current_tick, next = %next_tick, "Playback update");
        self.advance_to(next_tick)
    }

    /// Advance to an absolute display-rate time.
    ///
    /// Loop semantics still apply when the target lies past the end of the
    /// current loop.
    pub fn update_to(&mut self, time: FrameTime) -> Vec<EvaluationWindow> {
        let next_tick = self.to_ticks(time);
        self.carry = 0.0;
        self.advance_to(next_tick)
    }

    /// Re-evaluate the current position without moving
    pub fn update_at_current_time(&mut self) -> Vec<EvaluationWindow> {
        let has_jumped = !self.status.is_sweeping() || std::mem::take(&mut self.jump_pending);
        vec![EvaluationWindow::new(
            self.current_tick,
            self.current_tick,
            self.direction,
            self.status,
            has_jumped,
        )]
    }

    /// Advance to an absolute tick.
    ///
    /// While stopped this only repositions the playhead. Otherwise it returns
    /// the windows the evaluator must process, in play order.
    pub fn advance_to(&mut self, next_tick: FrameNumber) -> Vec<EvaluationWindow> {
        if self.status == PlaybackStatus::Stopped {
            self.current_tick = next_tick;
            self.carry = 0.0;
            return Vec::new();
        }

        if self.loop_budget_exhausted() {
            tracing::warn!(
                completed = self.num_loops_completed,
                to_play = self.num_loops_to_play,
                "Loop budget already spent, stopping playback"
            );
            self.finish_playback();
            return Vec::new();
        }

        let bounds = self.loop_bounds();
        self.enter_effective_range(bounds);

        let mut windows = Vec::new();
        if bounds.is_crossed_by(self.direction, next_tick) {
            self.advance_across_loops(bounds, next_tick, &mut windows);
        } else {
            self.advance_within_loop(bounds, next_tick, &mut windows);
        }
        windows
    }

    fn advance_within_loop(&mut self, bounds: LoopBounds, next_tick: FrameNumber, windows: &mut Vec<EvaluationWindow>) {
        let next_tick = bounds.clamp(next_tick);
        let (_, loop_last) = bounds.sweep(self.direction);
        let reached_end = next_tick == loop_last && self.current_tick != loop_last;

        let window = self.window(self.current_tick, next_tick, false);
        windows.push(window);
        self.current_tick = next_tick;

        // Land on the terminal tick of the last loop: evaluate it, then stop
        if reached_end && self.is_final_loop() {
            self.complete_loops(1);
            tracing::debug!(tick = %next_tick, "Reached the end of the final loop");
            self.finish_playback();
        }
    }

    fn advance_across_loops(&mut self, bounds: LoopBounds, next_tick: FrameNumber, windows: &mut Vec<EvaluationWindow>) {
        let (loop_start, loop_last) = bounds.sweep(self.direction);
        let distance = (next_tick - loop_start).value().saturating_abs();
        let loops_crossed = distance / bounds.duration;
        debug_assert!(loops_crossed >= 1, "a crossed boundary must span at least one loop");
        let loops_crossed = loops_crossed.max(1);

        let remaining = self.remaining_loops();
        let newly_completed = remaining.map_or(loops_crossed, |remaining| loops_crossed.min(remaining));
        let exhausts_budget = remaining.is_some_and(|remaining| newly_completed >= remaining);

        if self.dissection != LoopDissection::None {
            let window = self.window(self.current_tick, loop_last, false);
            windows.push(window);
            self.current_tick = loop_last;
        }

        // Loops passed over entirely, between the first crossed boundary and
        // the loop the playhead ends up in
        let skipped = if exhausts_budget {
            newly_completed - 1
        } else {
            loops_crossed - 1
        };
        let dissected = if self.dissection == LoopDissection::DissectAll {
            skipped.min(MAX_DISSECTED_LOOPS)
        } else {
            0
        };
        for _ in 0..dissected {
            self.cross_loop_boundary();
            let (start, last) = bounds.sweep(self.direction);
            let window = self.window(start, last, true);
            windows.push(window);
            self.current_tick = last;
        }
        if self.dissection == LoopDissection::DissectAll && dissected < skipped {
            tracing::warn!(skipped, dissected, "Too many loops skipped in one update to dissect each");
        }
        if self.ping_pong && (skipped - dissected) % 2 == 1 {
            self.reverse_direction();
        }

        self.complete_loops(newly_completed);

        if exhausts_budget {
            let (final_start, stop_tick) = bounds.sweep(self.direction);
            let evaluated = windows.last().is_some_and(|window| window.to == stop_tick);
            if !evaluated {
                let window = if newly_completed == 1 {
                    self.window(self.current_tick, stop_tick, false)
                } else {
                    self.window(final_start, stop_tick, true)
                };
                windows.push(window);
            }
            self.current_tick = stop_tick;
            tracing::debug!(tick = %stop_tick, loops = self.num_loops_completed, "Loop budget spent");
            self.finish_playback();
            return;
        }

        self.cross_loop_boundary();
        let overplay = distance % bounds.duration;
        let (new_start, new_last) = bounds.sweep(self.direction);
        let position = new_start + overplay * self.direction.sign();

        let window = self.window(new_start, position, true);
        windows.push(window);
        self.current_tick = position;
        tracing::debug!(
            loops_crossed,
            overplay,
            direction = ?self.direction,
            completed = self.num_loops_completed,
            "Wrapped playback loop"
        );

        // Overplay landing exactly on the terminal tick of the last loop
        // completes it. Loops counted above are already part of the budget.
        if position == new_last && self.is_final_loop() {
            self.complete_loops(1);
            tracing::debug!(tick = %position, "Overplay completed the final loop");
            self.finish_playback();
        }
    }

    /// Pull a playhead left outside the effective range back in. The next
    /// window is flagged as a jump.
    ///
    /// A playhead past the end of the loop in the play direction restarts the
    /// loop rather than resting on its terminal tick, so no loop is counted
    /// for ground that was never played.
    fn enter_effective_range(&mut self, bounds: LoopBounds) {
        let entered = if bounds.is_crossed_by(self.direction, self.current_tick) {
            bounds.sweep(self.direction).0
        } else {
            bounds.clamp(self.current_tick)
        };
        if entered != self.current_tick {
            self.current_tick = entered;
            self.jump_pending = true;
        }
    }

    fn window(&mut self, from: FrameNumber, to: FrameNumber, has_jumped: bool) -> EvaluationWindow {
        let has_jumped = has_jumped || std::mem::take(&mut self.jump_pending);
        EvaluationWindow::new(from, to, self.direction, self.status, has_jumped)
    }

    fn lock_to_display_frame(&self, tick: FrameNumber) -> FrameNumber {
        let display = FrameRate::transform_frame(tick, self.tick_resolution, self.display_rate);
        let frame = match self.direction {
            PlayDirection::Forward => display.floor_to_frame(),
            PlayDirection::Backward => display.ceil_to_frame(),
        };
        self.to_ticks(FrameTime::from_frame(frame))
    }

    // ------------------------------------------------------------------
    // Loop and direction state
    // ------------------------------------------------------------------

    fn cross_loop_boundary(&mut self) {
        if self.ping_pong {
            self.reverse_direction();
        }
    }

    /// Flip the play direction
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
        // Leftover progress keeps pointing along the play direction
        self.carry = -self.carry;
        tracing::trace!(direction = ?self.direction, "Reversed play direction");
    }

    fn remaining_loops(&self) -> Option<i64> {
        (self.num_loops_to_play > 0)
            .then(|| i64::from(self.num_loops_to_play) - i64::from(self.num_loops_completed))
    }

    fn is_final_loop(&self) -> bool {
        self.remaining_loops().is_some_and(|remaining| remaining <= 1)
    }

    fn loop_budget_exhausted(&self) -> bool {
        self.remaining_loops().is_some_and(|remaining| remaining <= 0)
    }

    fn complete_loops(&mut self, count: i64) {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        self.num_loops_completed = self.num_loops_completed.saturating_add(count);
        debug_assert!(
            self.num_loops_to_play <= 0 || self.num_loops_completed <= self.num_loops_to_play,
            "completed {} of {} loops",
            self.num_loops_completed,
            self.num_loops_to_play
        );
    }

    fn finish_playback(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.carry = 0.0;
        self.jump_pending = false;
    }

    fn loop_bounds(&self) -> LoopBounds {
        LoopBounds::new(self.effective_tick_range())
    }

    // ------------------------------------------------------------------
    // Position
    // ------------------------------------------------------------------

    /// Current position in display-rate time
    pub fn current_time(&self) -> FrameTime {
        self.to_display(self.current_tick)
    }

    /// Current position in ticks
    pub fn current_tick(&self) -> FrameNumber {
        self.current_tick
    }

    /// Move the playhead to a display-rate time.
    ///
    /// While stopped the position is simply assigned. Otherwise the target is
    /// clamped into the effective range and a single jumped window is
    /// returned for it.
    pub fn set_current_time(&mut self, time: FrameTime) -> Vec<EvaluationWindow> {
        let target = self.to_ticks(time);
        self.set_current_tick(target)
    }

    /// Move the playhead to a tick, see [`Self::set_current_time`]
    pub fn set_current_tick(&mut self, tick: FrameNumber) -> Vec<EvaluationWindow> {
        self.carry = 0.0;
        if self.status == PlaybackStatus::Stopped {
            self.current_tick = tick;
            return Vec::new();
        }

        let target = self.loop_bounds().clamp(tick);
        let window = EvaluationWindow::new(self.current_tick, target, self.direction, self.status, true);
        self.current_tick = target;
        self.jump_pending = false;
        vec![window]
    }

    // ------------------------------------------------------------------
    // Effective range and offsets
    // ------------------------------------------------------------------

    /// Nominal timeline bounds in ticks
    pub fn sequence_range(&self) -> FrameRange {
        self.sequence_range
    }

    /// Sequence length in ticks
    pub fn sequence_duration(&self) -> i64 {
        self.sequence_range.size()
    }

    /// The trimmed range actually played, in ticks
    pub fn effective_tick_range(&self) -> FrameRange {
        FrameRange::new(
            self.sequence_range.start + self.start_offset,
            self.sequence_range.end - self.end_offset,
        )
    }

    /// The trimmed range actually played, in display-rate time
    pub fn effective_playback_range(&self) -> TimeRange {
        let range = self.effective_tick_range();
        TimeRange {
            start: self.to_display(range.start),
            end: self.to_display(range.end),
        }
    }

    /// Start of the effective range in display-rate time
    pub fn effective_start_time(&self) -> FrameTime {
        self.to_display(self.effective_tick_range().start)
    }

    /// Exclusive end of the effective range in display-rate time
    pub fn effective_end_time(&self) -> FrameTime {
        self.to_display(self.effective_tick_range().end)
    }

    /// Last tick playback can rest on, in display-rate time
    pub fn last_valid_time(&self) -> FrameTime {
        self.to_display(self.effective_tick_range().last_frame())
    }

    /// Start trim in display-rate time
    pub fn start_offset(&self) -> FrameTime {
        self.to_display(FrameNumber(self.start_offset))
    }

    /// End trim in display-rate time
    pub fn end_offset(&self) -> FrameTime {
        self.to_display(FrameNumber(self.end_offset))
    }

    /// Start trim in ticks
    pub fn start_offset_ticks(&self) -> i64 {
        self.start_offset
    }

    /// End trim in ticks
    pub fn end_offset_ticks(&self) -> i64 {
        self.end_offset
    }

    /// Set the start trim from a display-rate duration
    pub fn set_start_offset(&mut self, offset: FrameTime) {
        let ticks = self.to_ticks(offset);
        self.set_start_offset_ticks(ticks.value());
    }

    /// Set the end trim from a display-rate duration
    pub fn set_end_offset(&mut self, offset: FrameTime) {
        let ticks = self.to_ticks(offset);
        self.set_end_offset_ticks(ticks.value());
    }

    /// Set the end trim so that playback ends at an absolute display time
    pub fn set_end_offset_as_time(&mut self, end_time: FrameTime) {
        let end_tick = self.to_ticks(end_time);
        self.set_end_offset_ticks((self.sequence_range.end - end_tick).value());
    }

    /// Set the start trim in ticks. The end trim shrinks to keep the
    /// effective range inside the sequence.
    pub fn set_start_offset_ticks(&mut self, offset: i64) {
        let duration = self.sequence_duration();
        self.start_offset = offset.clamp(0, duration);
        self.end_offset = self.end_offset.min(duration - self.start_offset);
        self.clamp_to_effective_range();
    }

    /// Set the end trim in ticks. The start trim shrinks to keep the
    /// effective range inside the sequence.
    pub fn set_end_offset_ticks(&mut self, offset: i64) {
        let duration = self.sequence_duration();
        self.end_offset = offset.clamp(0, duration);
        self.start_offset = self.start_offset.min(duration - self.end_offset);
        self.clamp_to_effective_range();
    }

    fn clamp_to_effective_range(&mut self) {
        self.current_tick = self.loop_bounds().clamp(self.current_tick);
        self.carry = 0.0;
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Current status
    pub fn playback_status(&self) -> PlaybackStatus {
        self.status
    }

    /// Change status. Stopping discards any partial tick progress.
    pub fn set_playback_status(&mut self, status: PlaybackStatus) {
        if status == PlaybackStatus::Stopped {
            self.finish_playback();
        } else {
            self.status = status;
        }
    }

    /// Whether the scheduler advances on delta-time updates
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Current play direction
    pub fn play_direction(&self) -> PlayDirection {
        self.direction
    }

    /// Set the play direction
    pub fn set_play_direction(&mut self, direction: PlayDirection) {
        if direction != self.direction {
            self.reverse_direction();
        }
    }

    /// Play rate multiplier
    pub fn play_rate(&self) -> f64 {
        self.play_rate
    }

    /// Set the play rate multiplier.
    ///
    /// A negative rate reverses the play direction and keeps its magnitude.
    /// Non-finite rates are ignored.
    pub fn set_play_rate(&mut self, rate: f64) {
        if !rate.is_finite() {
            tracing::warn!(rate, "Ignoring non-finite play rate");
            return;
        }
        if rate < 0.0 {
            self.reverse_direction();
        }
        self.play_rate = rate.abs();
    }

    /// Loops to play, `<= 0` for infinite
    pub fn num_loops_to_play(&self) -> i32 {
        self.num_loops_to_play
    }

    /// Set the loops to play, `<= 0` for infinite.
    ///
    /// Lowering the budget below the loops already completed stops playback
    /// on the next update.
    pub fn set_num_loops_to_play(&mut self, loops: i32) {
        self.num_loops_to_play = loops;
        if loops > 0 {
            self.num_loops_completed = self.num_loops_completed.min(loops);
        }
    }

    /// Loops completed since the last reset
    pub fn num_loops_completed(&self) -> i32 {
        self.num_loops_completed
    }

    /// Reset the completed loop counter
    pub fn reset_num_loops_completed(&mut self) {
        self.num_loops_completed = 0;
    }

    /// Whether ping-pong playback is enabled
    pub fn is_ping_pong_playback(&self) -> bool {
        self.ping_pong
    }

    /// Enable or disable ping-pong playback
    pub fn set_ping_pong_playback(&mut self, ping_pong: bool) {
        self.ping_pong = ping_pong;
    }

    /// Loop dissection policy
    pub fn dissect_looping(&self) -> LoopDissection {
        self.dissection
    }

    /// Set the loop dissection policy
    pub fn set_dissect_looping(&mut self, dissection: LoopDissection) {
        self.dissection = dissection;
    }

    /// Install or remove a time warp
    pub fn set_time_warp(&mut self, warp: Option<Box<dyn TimeWarp>>) {
        self.time_warp = warp;
    }

    /// Whether the time warp should be applied when set
    pub fn set_transform_playback_time(&mut self, transform: bool) {
        self.transform_playback_time = transform;
    }

    /// Whether delta-time updates are remapped through the time warp
    pub fn should_transform_playback_time(&self) -> bool {
        self.transform_playback_time
            && self
                .time_warp
                .as_ref()
                .is_some_and(|warp| warp.domain() == TimeWarpDomain::PlayRate)
    }

    /// Internal tick resolution
    pub fn tick_resolution(&self) -> FrameRate {
        self.tick_resolution
    }

    /// Caller-facing display rate
    pub fn display_rate(&self) -> FrameRate {
        self.display_rate
    }

    /// Evaluation type
    pub fn evaluation_type(&self) -> EvaluationType {
        self.evaluation_type
    }

    // ------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------

    /// Convert a display-rate time to the nearest tick
    pub fn to_ticks(&self, time: FrameTime) -> FrameNumber {
        FrameRate::transform_time(time, self.display_rate, self.tick_resolution).round_to_frame()
    }

    /// Convert a tick to display-rate time
    pub fn to_display(&self, tick: FrameNumber) -> FrameTime {
        FrameRate::transform_frame(tick, self.tick_resolution, self.display_rate)
    }
}
