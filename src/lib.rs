// SPDX-License-Identifier: MPL-2.0
//! `iced_snap` is a vertical Iced container that snaps its children to page
//! positions after a drag, like a wheel picker.
//!
//! The scroll logic in [`ui::state`] is independent of Iced and can be driven
//! directly; [`ui::widgets::SnapScrollLayout`] binds it to Iced events.

#![doc(html_root_url = "https://docs.rs/iced_snap/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
