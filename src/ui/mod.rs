// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`state`] - Toolkit-independent scroll state (gesture, scroller, snapping)
//! - [`widgets`] - Custom Iced widgets built on that state

pub mod state;
pub mod widgets;
