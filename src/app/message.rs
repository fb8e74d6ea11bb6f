// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The picker started settling on this page.
    Snapped(usize),
    /// An item button was pressed without dragging.
    ItemPressed(usize),
    /// The user asked for a different number of visible pages.
    VisibleCountChanged(u32),
}

/// Runtime flags passed from the command line. Values set here override the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Number of items in the picker.
    pub items: Option<usize>,
    /// Pages visible at once.
    pub visible_count: Option<u32>,
    /// Drag threshold in logical pixels.
    pub touch_slop: Option<f32>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
}
