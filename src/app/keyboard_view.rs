// SPDX-License-Identifier: GPL-3.0-only

//! Virtual keyboard window view
//!
//! The grid is rebuilt from the active label table on every render, so a
//! shift toggle swaps every label at once.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::keyboard::layout::{SHIFT_LABEL, SPACE_LABEL};
use crate::keyboard::{KeyPosition, VirtualKeyboard};
use cosmic::Element;
use cosmic::iced::{Alignment, Length, window};
use cosmic::widget;

impl AppModel {
    /// Build the view of the keyboard window `id`
    pub fn keyboard_view(&self, id: window::Id) -> Element<'_, Message> {
        let Some(keyboard) = self.keyboard.keyboard(id) else {
            return widget::Space::new(Length::Fill, Length::Fill).into();
        };

        let mut grid = widget::column()
            .spacing(ui::KEY_SPACING)
            .padding(ui::CONTENT_PADDING)
            .align_x(Alignment::Center);

        for (row_idx, row) in keyboard.rows().iter().enumerate() {
            let mut keys = widget::row().spacing(ui::KEY_SPACING);
            for (col_idx, label) in row.iter().enumerate() {
                let position = KeyPosition::new(row_idx, col_idx);
                keys = keys.push(key_button(id, keyboard, position, *label));
            }
            grid = grid.push(keys);
        }

        widget::container(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}

fn key_button<'a>(
    id: window::Id,
    keyboard: &VirtualKeyboard,
    position: KeyPosition,
    label: &'static str,
) -> Element<'a, Message> {
    let width = if label == SPACE_LABEL {
        ui::SPACE_KEY_WIDTH
    } else {
        ui::KEY_WIDTH
    };

    // Highlight shift while it is armed
    let class = if label == SHIFT_LABEL && keyboard.shift_state().is_shifted() {
        cosmic::theme::Button::Suggested
    } else {
        cosmic::theme::Button::Standard
    };

    widget::button::custom(
        widget::container(widget::text::body(label))
            .center_x(Length::Fill),
    )
    .width(Length::Fixed(width))
    .class(class)
    .on_press(Message::KeyPressed(id, position))
    .into()
}
