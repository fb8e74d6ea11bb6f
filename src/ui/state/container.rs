// SPDX-License-Identifier: MPL-2.0
//! Host-facing capability interface of a scroll container.
//!
//! The host toolkit owns the event loop and calls these hooks in order:
//! measure and layout passes, interception and touch callbacks for pointer
//! input, and a frame callback once per display refresh while the container
//! keeps asking for redraws. [`SnapState`](super::SnapState) implements it
//! independently of any toolkit; the Iced binding lives in
//! [`crate::ui::widgets::snap_scroll_layout`].

use iced::time::Instant;

/// Phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Pointer went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer was released.
    Up,
    /// Gesture was aborted by the host (focus loss, pointer lost).
    Cancel,
}

/// A pointer sample in window coordinates.
///
/// Only the vertical coordinate matters to a vertical container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub y: f32,
}

impl TouchEvent {
    #[must_use]
    pub fn down(y: f32) -> Self {
        Self {
            phase: TouchPhase::Down,
            y,
        }
    }

    #[must_use]
    pub fn moved(y: f32) -> Self {
        Self {
            phase: TouchPhase::Move,
            y,
        }
    }

    #[must_use]
    pub fn up(y: f32) -> Self {
        Self {
            phase: TouchPhase::Up,
            y,
        }
    }

    #[must_use]
    pub fn cancel(y: f32) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            y,
        }
    }

    /// Returns true for the phases that end a gesture.
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(self.phase, TouchPhase::Up | TouchPhase::Cancel)
    }
}

/// Page the container settles on after a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapTarget {
    /// Zero-based page index at the target offset.
    pub index: usize,
    /// Offset the settle animation ends at.
    pub offset: i32,
}

/// What the host should do after a touch callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct TouchResponse {
    /// The offset changed or an animation started; draw another frame.
    pub redraw: bool,
    /// Set when the event started a settle animation.
    pub snap: Option<SnapTarget>,
}

/// Hooks a host toolkit binds to a scroll container.
pub trait ScrollContainer {
    /// Returns the constraints each child is measured with.
    ///
    /// The parent's constraints are forwarded unchanged.
    fn on_measure<C>(&self, constraints: C) -> C {
        constraints
    }

    /// Places children given their measured heights and returns each child's top.
    ///
    /// `changed` mirrors the host's "size or position changed" flag; bounds are
    /// only recomputed when it is set.
    fn on_layout(&mut self, changed: bool, viewport_height: i32, child_heights: &[i32])
        -> Vec<i32>;

    /// Decides whether the container claims the current gesture.
    fn on_intercept_touch(&mut self, event: TouchEvent) -> bool;

    /// Handles a pointer event of a claimed gesture.
    fn on_touch(&mut self, event: TouchEvent, now: Instant) -> TouchResponse;

    /// Advances the settle animation. Returns true while more frames are needed.
    fn on_frame(&mut self, now: Instant) -> bool;

    /// Aborts an in-flight animation, leaving the offset where it is.
    fn cancel(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_phases_are_detected() {
        assert!(TouchEvent::up(0.0).is_release());
        assert!(TouchEvent::cancel(0.0).is_release());
        assert!(!TouchEvent::down(0.0).is_release());
        assert!(!TouchEvent::moved(0.0).is_release());
    }

    #[test]
    fn default_response_requests_nothing() {
        let response = TouchResponse::default();
        assert!(!response.redraw);
        assert!(response.snap.is_none());
    }
}
