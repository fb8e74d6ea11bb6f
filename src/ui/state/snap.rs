// SPDX-License-Identifier: MPL-2.0
//! Snap scrolling state
//!
//! Headless core of the snapping picker: vertical layout bounds, the scroll
//! offset, the gesture in progress and the settle animation. All arithmetic
//! is on integer pixel offsets.
//!
//! A drag moves the offset with the pointer, clamped so the viewport never
//! leaves `[top_border, bottom_border]`. On release the offset settles on the
//! nearest page boundary, a page being `viewport_height / visible_count`.

use super::container::{ScrollContainer, SnapTarget, TouchEvent, TouchPhase, TouchResponse};
use super::gesture::{GesturePhase, GestureTracker};
use super::scroller::Scroller;
use crate::domain::ui::{SnapDuration, TouchSlop, VisibleCount};
use iced::time::Instant;

/// Scroll state of a snapping vertical container.
#[derive(Debug, Clone, Default)]
pub struct SnapState {
    offset: i32,
    viewport_height: i32,
    top_border: i32,
    bottom_border: i32,
    visible_count: VisibleCount,
    touch_slop: TouchSlop,
    snap_duration: SnapDuration,
    gesture: GestureTracker,
    scroller: Scroller,
}

impl SnapState {
    #[must_use]
    pub fn new(
        visible_count: VisibleCount,
        touch_slop: TouchSlop,
        snap_duration: SnapDuration,
    ) -> Self {
        Self {
            visible_count,
            touch_slop,
            snap_duration,
            scroller: Scroller::new(),
            ..Self::default()
        }
    }

    // ---------------------------------------------------------------------
    // Settings
    // ---------------------------------------------------------------------

    pub fn set_visible_count(&mut self, visible_count: VisibleCount) {
        self.visible_count = visible_count;
    }

    pub fn set_touch_slop(&mut self, touch_slop: TouchSlop) {
        self.touch_slop = touch_slop;
    }

    pub fn set_snap_duration(&mut self, snap_duration: SnapDuration) {
        self.snap_duration = snap_duration;
    }

    #[must_use]
    pub fn visible_count(&self) -> VisibleCount {
        self.visible_count
    }

    #[must_use]
    pub fn touch_slop(&self) -> TouchSlop {
        self.touch_slop
    }

    #[must_use]
    pub fn snap_duration(&self) -> SnapDuration {
        self.snap_duration
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Current vertical scroll offset.
    #[must_use]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    #[must_use]
    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// Top edge of the first child after the last changed layout.
    #[must_use]
    pub fn top_border(&self) -> i32 {
        self.top_border
    }

    /// Bottom edge of the last child after the last changed layout.
    #[must_use]
    pub fn bottom_border(&self) -> i32 {
        self.bottom_border
    }

    /// Largest offset that keeps the viewport inside the content.
    ///
    /// Collapses to `top_border` when the content is shorter than the viewport.
    #[must_use]
    pub fn max_offset(&self) -> i32 {
        (self.bottom_border - self.viewport_height).max(self.top_border)
    }

    /// Height of one page, or `None` when the viewport is too short to page.
    #[must_use]
    pub fn item_height(&self) -> Option<i32> {
        self.visible_count.page_height(self.viewport_height)
    }

    /// Page the current offset rounds to.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        let item_height = self.item_height()?;
        Some(page_index(self.offset, item_height))
    }

    // ---------------------------------------------------------------------
    // Offset
    // ---------------------------------------------------------------------

    /// Jumps to an absolute offset without clamping.
    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// Scrolls by a relative amount without clamping.
    pub fn scroll_by(&mut self, delta: i32) {
        self.offset = self.offset.saturating_add(delta);
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(self.top_border, self.max_offset());
    }

    // ---------------------------------------------------------------------
    // Gesture
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Returns true once the current gesture has been claimed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns true while the settle animation has frames left.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        !self.scroller.is_finished()
    }

    /// Applies one drag step for a pointer now at `y`.
    fn drag(&mut self, y: f32) -> bool {
        let before = self.offset;
        let scrolled = self.gesture.delta_to(y);

        if self.offset.saturating_add(scrolled) < self.top_border {
            self.scroll_to(self.top_border);
        } else if self.offset.saturating_add(scrolled) > self.max_offset() {
            self.scroll_to(self.max_offset());
        } else {
            self.scroll_by(scrolled);
            self.gesture.advance(y);
        }

        self.offset != before
    }

    /// Starts the settle animation toward the nearest page.
    fn settle(&mut self, now: Instant) -> Option<SnapTarget> {
        let Some(item_height) = self.item_height() else {
            log::debug!(
                "viewport height {} too short for {} pages, not snapping",
                self.viewport_height,
                self.visible_count.value()
            );
            return None;
        };

        let index = self
            .offset
            .saturating_add(item_height / 2)
            .div_euclid(item_height);
        let target = index
            .saturating_mul(item_height)
            .clamp(self.top_border, self.max_offset());
        let dy = target - self.offset;

        self.scroller.start_scroll(
            self.offset,
            dy,
            self.snap_duration.as_duration(),
            now,
        );

        let snap = SnapTarget {
            index: page_index(target, item_height),
            offset: target,
        };
        log::debug!(
            "settling from {} to page {} at {} over {:?}",
            self.offset,
            snap.index,
            snap.offset,
            self.scroller.duration()
        );
        Some(snap)
    }
}

/// Page whose boundary is nearest to `offset`, rounding half up.
fn page_index(offset: i32, item_height: i32) -> usize {
    let index = offset.saturating_add(item_height / 2).div_euclid(item_height);
    usize::try_from(index).unwrap_or(0)
}

impl ScrollContainer for SnapState {
    fn on_layout(
        &mut self,
        changed: bool,
        viewport_height: i32,
        child_heights: &[i32],
    ) -> Vec<i32> {
        let mut tops = Vec::with_capacity(child_heights.len());
        let mut top: i32 = 0;
        for height in child_heights {
            tops.push(top);
            top = top.saturating_add((*height).max(0));
        }

        if !changed {
            return tops;
        }

        self.viewport_height = viewport_height.max(0);

        let (Some(first), Some(last_top), Some(last_height)) =
            (tops.first(), tops.last(), child_heights.last())
        else {
            log::debug!("laid out without children, keeping bounds");
            return tops;
        };

        self.top_border = *first;
        self.bottom_border = last_top.saturating_add((*last_height).max(0));
        self.clamp_offset();

        log::debug!(
            "bounds [{}, {}] for viewport {}",
            self.top_border,
            self.bottom_border,
            self.viewport_height
        );

        tops
    }

    fn on_intercept_touch(&mut self, event: TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Down => {
                self.gesture.begin(event.y);
                false
            }
            TouchPhase::Move => {
                let was_dragging = self.gesture.is_dragging();
                let claimed = self.gesture.intercept_move(event.y, self.touch_slop);
                if claimed && !was_dragging {
                    log::debug!(
                        "claimed drag after {:.1}px",
                        event.y - self.gesture.start_y()
                    );
                    self.cancel();
                }
                claimed
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                let _ = self.gesture.end();
                false
            }
        }
    }

    fn on_touch(&mut self, event: TouchEvent, now: Instant) -> TouchResponse {
        match event.phase {
            TouchPhase::Down => {
                self.gesture.begin(event.y);
                TouchResponse::default()
            }
            TouchPhase::Move => {
                if !self.gesture.is_active() {
                    return TouchResponse::default();
                }
                if !self.gesture.is_dragging() {
                    self.gesture.claim();
                    self.cancel();
                }
                TouchResponse {
                    redraw: self.drag(event.y),
                    snap: None,
                }
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                if self.gesture.end() == GesturePhase::Idle {
                    return TouchResponse::default();
                }
                let snap = self.settle(now);
                TouchResponse {
                    redraw: snap.is_some(),
                    snap,
                }
            }
        }
    }

    fn on_frame(&mut self, now: Instant) -> bool {
        match self.scroller.compute_offset(now) {
            Some(offset) => {
                log::trace!("frame offset {}", offset);
                self.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    fn cancel(&mut self) {
        self.scroller.force_finished();
    }
}
