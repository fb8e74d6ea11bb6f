// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for picker settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Paging Bounds
// =============================================================================

/// Visible page count bounds (1 to 12).
pub mod visible_bounds {
    /// Minimum number of visible pages.
    pub const MIN: u32 = 1;
    /// Maximum number of visible pages.
    pub const MAX: u32 = 12;
    /// Default number of visible pages.
    pub const DEFAULT: u32 = 3;
}

// =============================================================================
// VisibleCount
// =============================================================================

/// Number of pages sharing the viewport height, guaranteed to be at least 1.
///
/// Page height is derived as `viewport_height / count`, so keeping the
/// count non-zero removes the division guard from every usage site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCount(u32);

impl VisibleCount {
    /// Creates a new visible count, clamping the value to the valid range.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(count.clamp(visible_bounds::MIN, visible_bounds::MAX))
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the page height for a viewport, or `None` when the viewport
    /// is too short to hold a single pixel per page.
    #[must_use]
    pub fn page_height(self, viewport_height: i32) -> Option<i32> {
        let divisor = i32::try_from(self.0).ok()?;
        let height = viewport_height / divisor;
        (height > 0).then_some(height)
    }
}

impl Default for VisibleCount {
    fn default() -> Self {
        Self(visible_bounds::DEFAULT)
    }
}

impl From<u32> for VisibleCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

// =============================================================================
// Touch Slop Bounds
// =============================================================================

/// Touch slop bounds in logical pixels (0 to 128).
pub mod slop_bounds {
    /// Minimum slop.
    pub const MIN: f32 = 0.0;
    /// Maximum slop.
    pub const MAX: f32 = 128.0;
    /// Default slop.
    pub const DEFAULT: f32 = 16.0;
}

// =============================================================================
// TouchSlop
// =============================================================================

/// Minimum vertical travel, in logical pixels, before a press becomes a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSlop(f32);

impl TouchSlop {
    /// Creates a new touch slop, clamping the value to the valid range.
    ///
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(slop_bounds::MIN, slop_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether a travel distance (either direction) reaches the slop.
    #[must_use]
    pub fn is_exceeded_by(self, travel: f32) -> bool {
        travel.abs() >= self.0
    }
}

impl Default for TouchSlop {
    fn default() -> Self {
        Self(slop_bounds::DEFAULT)
    }
}

impl From<f32> for TouchSlop {
    fn from(pixels: f32) -> Self {
        Self::new(pixels)
    }
}

// =============================================================================
// Snap Duration Bounds
// =============================================================================

/// Settle animation bounds in milliseconds (0 to 2000).
pub mod duration_bounds {
    /// Minimum duration in milliseconds.
    pub const MIN_MS: u64 = 0;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 250;
}

// =============================================================================
// SnapDuration
// =============================================================================

/// Time budget of the settle animation started on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapDuration(Duration);

impl SnapDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.clamp(
            Duration::from_millis(duration_bounds::MIN_MS),
            Duration::from_millis(duration_bounds::MAX_MS),
        ))
    }

    /// Creates a new duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the inner duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for SnapDuration {
    fn default() -> Self {
        Self(Duration::from_millis(duration_bounds::DEFAULT_MS))
    }
}

impl From<Duration> for SnapDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}
