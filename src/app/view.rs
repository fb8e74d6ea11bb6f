// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{Message, PICKER_HEIGHT, PICKER_WIDTH};
use crate::config::{MAX_VISIBLE_COUNT, MIN_VISIBLE_COUNT};
use crate::domain::ui::{SnapDuration, TouchSlop, VisibleCount};
use crate::ui::widgets::{snap_scroll_layout, SnapScrollLayout};
use iced::widget::{button, center, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext {
    pub items: usize,
    pub selected: usize,
    pub last_pressed: Option<usize>,
    pub visible_count: VisibleCount,
    pub touch_slop: TouchSlop,
    pub snap_duration: SnapDuration,
}

/// Height of one picker item so that `visible_count` items fill the picker.
pub fn item_height(picker_height: f32, visible_count: VisibleCount) -> f32 {
    (picker_height / visible_count.value() as f32).floor()
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let height = item_height(PICKER_HEIGHT, ctx.visible_count);

    let items = (0..ctx.items).map(|index| {
        button(text(format!("Item {}", index + 1)).center())
            .on_press(Message::ItemPressed(index))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    });

    let picker: SnapScrollLayout<'a, Message> = snap_scroll_layout(items)
        .visible_count(ctx.visible_count)
        .touch_slop(ctx.touch_slop)
        .snap_duration(ctx.snap_duration)
        .on_snap(Message::Snapped)
        .width(Length::Fill)
        .height(Length::Fixed(PICKER_HEIGHT));

    let pressed = match ctx.last_pressed {
        Some(index) => format!("Last pressed: item {}", index + 1),
        None => String::from("Last pressed: none"),
    };

    let count = ctx.visible_count.value();
    let visible_controls = row![
        button(text("-").center()).on_press_maybe(
            (count > MIN_VISIBLE_COUNT).then(|| Message::VisibleCountChanged(count - 1))
        ),
        text(format!("{count} visible")),
        button(text("+").center()).on_press_maybe(
            (count < MAX_VISIBLE_COUNT).then(|| Message::VisibleCountChanged(count + 1))
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content: Column<'a, Message> = column![
        text(format!("Selected page: {}", ctx.selected)).size(20),
        text(pressed),
        visible_controls,
        container(picker)
            .width(Length::Fixed(PICKER_WIDTH))
            .style(container::bordered_box),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    center(content).into()
}
