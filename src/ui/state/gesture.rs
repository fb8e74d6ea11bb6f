// SPDX-License-Identifier: MPL-2.0
//! Gesture tracking
//!
//! Holds the per-gesture pointer samples used to decide interception and to
//! turn raw Y coordinates into drag deltas. The whole value is overwritten
//! when a new gesture begins, so nothing leaks from one gesture to the next.

use crate::domain::ui::TouchSlop;

/// Where the current gesture stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Pointer is down but has not travelled past the slop.
    Pressed,
    /// The container claimed the gesture and scrolls with the pointer.
    Dragging,
}

/// Pointer samples of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    /// Y where the pointer went down.
    start_y: f32,
    /// Y the last applied drag step was measured from.
    last_y: f32,
}

impl GestureTracker {
    /// Starts a new gesture at `y`, discarding the previous one.
    pub fn begin(&mut self, y: f32) {
        *self = Self {
            phase: GesturePhase::Pressed,
            start_y: y,
            last_y: y,
        };
    }

    /// Reports whether a move to `y` claims the gesture (or it already is).
    ///
    /// The claim is a one-way latch: once travel from the start reaches the
    /// slop the gesture stays claimed until [`end`](Self::end). The drag
    /// reference is left at the start point, so the first drag step covers
    /// the whole travel.
    pub fn intercept_move(&mut self, y: f32, slop: TouchSlop) -> bool {
        match self.phase {
            GesturePhase::Idle => false,
            GesturePhase::Dragging => true,
            GesturePhase::Pressed => {
                if slop.is_exceeded_by(y - self.start_y) {
                    self.phase = GesturePhase::Dragging;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Claims the gesture without a slop check.
    pub fn claim(&mut self) {
        if self.phase == GesturePhase::Pressed {
            self.phase = GesturePhase::Dragging;
        }
    }

    /// Pixels to scroll for a pointer now at `y`; positive moves content up.
    ///
    /// Truncates toward zero like a float-to-int cast.
    #[must_use]
    pub fn delta_to(&self, y: f32) -> i32 {
        (self.last_y - y) as i32
    }

    /// Marks `y` as the reference for the next drag step.
    pub fn advance(&mut self, y: f32) {
        self.last_y = y;
    }

    /// Ends the gesture and returns the phase it ended in.
    pub fn end(&mut self) -> GesturePhase {
        std::mem::take(&mut self.phase)
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    #[must_use]
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    #[must_use]
    pub fn last_y(&self) -> f32 {
        self.last_y
    }
}
