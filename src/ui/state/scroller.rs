// SPDX-License-Identifier: MPL-2.0
//! Decelerating scroll animation.
//!
//! A [`Scroller`] is given a start offset, a distance and a time budget and
//! is then polled once per frame for the next offset. Progress follows a
//! viscous-fluid curve: fast at first, easing into the target. The final
//! offset is always reported exactly once before the scroller goes idle.

use iced::time::{Duration, Instant};

/// Steepness of the viscous-fluid curve.
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// `e^-1`, where the exponential tail of the curve starts.
const VISCOUS_FLUID_TAIL_START: f32 = 0.367_879_44;

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let tail = 1.0 - (1.0 - x).exp();
        VISCOUS_FLUID_TAIL_START + tail * (1.0 - VISCOUS_FLUID_TAIL_START)
    }
}

/// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
#[must_use]
pub fn viscous_fluid_interpolation(t: f32) -> f32 {
    let normalize = 1.0 / viscous_fluid(1.0);
    (normalize * viscous_fluid(t.clamp(0.0, 1.0))).clamp(0.0, 1.0)
}

/// Owned, resettable scroll animation.
#[derive(Debug, Clone)]
pub struct Scroller {
    start: i32,
    distance: i32,
    final_offset: i32,
    current: i32,
    started_at: Option<Instant>,
    duration: Duration,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self {
            start: 0,
            distance: 0,
            final_offset: 0,
            current: 0,
            started_at: None,
            duration: Duration::ZERO,
            finished: true,
        }
    }
}

impl Scroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the animation from `start` by `distance` pixels.
    ///
    /// Any animation in progress is replaced.
    pub fn start_scroll(&mut self, start: i32, distance: i32, duration: Duration, now: Instant) {
        self.start = start;
        self.distance = distance;
        self.final_offset = start.saturating_add(distance);
        self.current = start;
        self.started_at = Some(now);
        self.duration = duration;
        self.finished = false;
    }

    /// Returns the offset for the frame at `now`, or `None` once the
    /// animation has completed.
    ///
    /// The frame that reaches the end of the time budget yields the final
    /// offset; every call after that yields `None`.
    pub fn compute_offset(&mut self, now: Instant) -> Option<i32> {
        if self.finished {
            return None;
        }

        let elapsed = self.time_passed(now);
        if elapsed < self.duration {
            let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            let travelled = (viscous_fluid_interpolation(t) * self.distance as f32).round();
            self.current = self.start.saturating_add(travelled as i32);
        } else {
            self.current = self.final_offset;
            self.finished = true;
        }

        Some(self.current)
    }

    /// Stops the animation where it is.
    pub fn force_finished(&mut self) {
        self.finished = true;
    }

    /// Stops the animation and moves the current offset to the final one.
    pub fn abort(&mut self) {
        self.current = self.final_offset;
        self.finished = true;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset reported by the last [`compute_offset`](Self::compute_offset).
    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[must_use]
    pub fn final_offset(&self) -> i32 {
        self.final_offset
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time elapsed since the animation started.
    #[must_use]
    pub fn time_passed(&self, now: Instant) -> Duration {
        self.started_at
            .map_or(Duration::ZERO, |started_at| {
                now.saturating_duration_since(started_at)
            })
    }
}
