// SPDX-License-Identifier: MPL-2.0
//! Demo application: a numbered picker built on
//! [`SnapScrollLayout`](crate::ui::widgets::SnapScrollLayout).
//!
//! Settings come from `settings.toml` and can be overridden on the command
//! line through [`Flags`].

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::domain::ui::{SnapDuration, TouchSlop, VisibleCount};
use iced::{window, Element, Task};

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 520.0;
pub const PICKER_WIDTH: f32 = 240.0;
pub const PICKER_HEIGHT: f32 = 300.0;
pub const DEFAULT_ITEM_COUNT: usize = 20;

/// Root Iced application state.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    items: usize,
    visible_count: VisibleCount,
    touch_slop: TouchSlop,
    snap_duration: SnapDuration,
    selected: usize,
    last_pressed: Option<usize>,
    /// Settings as loaded, updated when the user changes them.
    config: config::Config,
    /// Whether setting changes are written back to `settings.toml`.
    persist_settings: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEM_COUNT,
            visible_count: VisibleCount::default(),
            touch_slop: TouchSlop::default(),
            snap_duration: SnapDuration::default(),
            selected: 0,
            last_pressed: None,
            config: config::Config::default(),
            persist_settings: false,
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the config, applies command line overrides and builds the state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(dir) = flags.config_dir.clone() {
            config::set_config_dir_override(dir);
        }

        let config = config::load().unwrap_or_else(|err| {
            log::warn!("failed to load config: {err}; using defaults");
            config::Config::default()
        });

        let app = Self {
            persist_settings: true,
            ..Self::from_config(&config, &flags)
        };
        (app, Task::none())
    }

    fn from_config(config: &config::Config, flags: &Flags) -> Self {
        let app = Self {
            items: flags.items.unwrap_or(DEFAULT_ITEM_COUNT),
            visible_count: flags
                .visible_count
                .map(VisibleCount::new)
                .unwrap_or_else(|| config.visible_count()),
            touch_slop: flags
                .touch_slop
                .map(TouchSlop::new)
                .unwrap_or_else(|| config.touch_slop()),
            snap_duration: config.snap_duration(),
            config: config.clone(),
            ..Self::default()
        };

        log::debug!(
            "picker: {} items, {} visible, slop {}px, settle {:?}",
            app.items,
            app.visible_count.value(),
            app.touch_slop.value(),
            app.snap_duration.as_duration()
        );

        app
    }

    fn title(&self) -> String {
        format!("IcedSnap - page {}", self.selected)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Snapped(index) => {
                log::info!("snapped to page {index}");
                self.selected = index;
            }
            Message::ItemPressed(index) => {
                log::info!("item {} pressed", index + 1);
                self.last_pressed = Some(index);
            }
            Message::VisibleCountChanged(count) => {
                self.visible_count = VisibleCount::new(count);
                self.config.visible_count = Some(self.visible_count.value());
                self.persist();
            }
        }
        Task::none()
    }

    fn persist(&self) {
        if !self.persist_settings {
            return;
        }
        if let Err(err) = config::save(&self.config) {
            log::warn!("failed to save settings: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            items: self.items,
            selected: self.selected,
            last_pressed: self.last_pressed,
            visible_count: self.visible_count,
            touch_slop: self.touch_slop,
            snap_duration: self.snap_duration,
        })
    }
}
