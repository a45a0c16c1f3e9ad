// SPDX-License-Identifier: MIT OR Apache-2.0
//! Optional tick remapping applied to advancing playback time.

use crate::frame::FrameNumber;
use std::fmt;

/// Which part of playback a [`TimeWarp`] is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWarpDomain {
    /// Remaps the advancing playhead (play-rate warping)
    #[default]
    PlayRate,
    /// Remaps times inside the evaluated content; ignored by the scheduler
    Content,
}

/// A pure tick-to-tick remapping
pub trait TimeWarp: fmt::Debug + Send {
    /// Remap a tick
    fn transform(&self, tick: FrameNumber) -> FrameNumber;

    /// Domain the warp applies to
    fn domain(&self) -> TimeWarpDomain {
        TimeWarpDomain::PlayRate
    }
}

/// Leaves ticks unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityWarp;

impl TimeWarp for IdentityWarp {
    fn transform(&self, tick: FrameNumber) -> FrameNumber {
        tick
    }
}

/// A time warp backed by a closure
pub struct FnTimeWarp<F> {
    func: F,
    domain: TimeWarpDomain,
}

impl<F> FnTimeWarp<F>
where
    F: Fn(FrameNumber) -> FrameNumber + Send,
{
    /// Create a play-rate warp from a closure
    pub fn new(func: F) -> Self {
        Self {
            func,
            domain: TimeWarpDomain::PlayRate,
        }
    }

    /// Set the domain
    pub fn with_domain(mut self, domain: TimeWarpDomain) -> Self {
        self.domain = domain;
        self
    }
}

impl<F> fmt::Debug for FnTimeWarp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTimeWarp")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl<F> TimeWarp for FnTimeWarp<F>
where
    F: Fn(FrameNumber) -> FrameNumber + Send,
{
    fn transform(&self, tick: FrameNumber) -> FrameNumber {
        (self.func)(tick)
    }

    fn domain(&self) -> TimeWarpDomain {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_warp() {
        let warp = FnTimeWarp::new(|tick: FrameNumber| tick + 5);
        assert_eq!(warp.transform(FrameNumber(10)), FrameNumber(15));
        assert_eq!(warp.domain(), TimeWarpDomain::PlayRate);

        let content = FnTimeWarp::new(|tick: FrameNumber| tick).with_domain(TimeWarpDomain::Content);
        assert_eq!(content.domain(), TimeWarpDomain::Content);
        assert!(format!("{content:?}").contains("Content"));
    }

    #[test]
    fn test_identity_warp() {
        assert_eq!(IdentityWarp.transform(FrameNumber(-7)), FrameNumber(-7));
    }
}
