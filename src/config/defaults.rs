// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module gathers the default values and bounds used across the
//! crate under configuration names. Constants are organized by category.
//!
//! # Categories
//!
//! - **Paging**: How many pages share the viewport
//! - **Gesture**: Minimum drag distance before the layout claims a gesture
//! - **Snap Animation**: Time budget of the settle animation
//!
//! Bounds live next to the domain newtypes that enforce them; this module
//! re-exposes them under configuration names.

use crate::domain::ui::newtypes::{duration_bounds, slop_bounds, visible_bounds};

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Default number of pages visible at once.
pub const DEFAULT_VISIBLE_COUNT: u32 = visible_bounds::DEFAULT;

/// Minimum number of visible pages.
pub const MIN_VISIBLE_COUNT: u32 = visible_bounds::MIN;

/// Maximum number of visible pages.
pub const MAX_VISIBLE_COUNT: u32 = visible_bounds::MAX;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default touch slop in logical pixels.
///
/// Matches the paging slop of common mobile platforms (twice the plain tap slop).
pub const DEFAULT_TOUCH_SLOP: f32 = slop_bounds::DEFAULT;

/// Minimum touch slop. Zero claims every vertical move.
pub const MIN_TOUCH_SLOP: f32 = slop_bounds::MIN;

/// Maximum touch slop.
pub const MAX_TOUCH_SLOP: f32 = slop_bounds::MAX;

// ==========================================================================
// Snap Animation Defaults
// ==========================================================================

/// Default settle animation duration in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Minimum settle duration. Zero jumps on the next frame.
pub const MIN_SNAP_DURATION_MS: u64 = duration_bounds::MIN_MS;

/// Maximum settle duration.
pub const MAX_SNAP_DURATION_MS: u64 = duration_bounds::MAX_MS;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VISIBLE_COUNT > 0);
    assert!(MAX_VISIBLE_COUNT >= MIN_VISIBLE_COUNT);
    assert!(DEFAULT_VISIBLE_COUNT >= MIN_VISIBLE_COUNT);
    assert!(DEFAULT_VISIBLE_COUNT <= MAX_VISIBLE_COUNT);

    assert!(MIN_TOUCH_SLOP >= 0.0);
    assert!(MAX_TOUCH_SLOP > MIN_TOUCH_SLOP);
    assert!(DEFAULT_TOUCH_SLOP >= MIN_TOUCH_SLOP);
    assert!(DEFAULT_TOUCH_SLOP <= MAX_TOUCH_SLOP);

    assert!(MAX_SNAP_DURATION_MS >= MIN_SNAP_DURATION_MS);
    assert!(DEFAULT_SNAP_DURATION_MS >= MIN_SNAP_DURATION_MS);
    assert!(DEFAULT_SNAP_DURATION_MS <= MAX_SNAP_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_count_defaults_are_valid() {
        assert_eq!(DEFAULT_VISIBLE_COUNT, 3);
        assert!(DEFAULT_VISIBLE_COUNT >= MIN_VISIBLE_COUNT);
        assert!(DEFAULT_VISIBLE_COUNT <= MAX_VISIBLE_COUNT);
    }

    #[test]
    fn touch_slop_defaults_are_valid() {
        assert_eq!(DEFAULT_TOUCH_SLOP, 16.0);
        assert!(DEFAULT_TOUCH_SLOP >= MIN_TOUCH_SLOP);
        assert!(DEFAULT_TOUCH_SLOP <= MAX_TOUCH_SLOP);
    }

    #[test]
    fn snap_duration_defaults_are_valid() {
        assert_eq!(DEFAULT_SNAP_DURATION_MS, 250);
        assert!(DEFAULT_SNAP_DURATION_MS <= MAX_SNAP_DURATION_MS);
    }
}
