// SPDX-License-Identifier: MPL-2.0
pub mod snap_scroll_layout;

pub use snap_scroll_layout::{snap_scroll_layout, SnapScrollLayout};
