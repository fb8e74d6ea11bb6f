// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the toolkit-independent scroll logic of the snapping
//! layout, separated from the Iced widget that binds it to real events.

pub mod container;
pub mod gesture;
pub mod scroller;
pub mod snap;

// Re-export commonly used types for convenience
pub use container::{ScrollContainer, SnapTarget, TouchEvent, TouchPhase, TouchResponse};
pub use gesture::{GesturePhase, GestureTracker};
pub use scroller::Scroller;
pub use snap::SnapState;
