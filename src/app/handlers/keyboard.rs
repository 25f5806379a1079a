// SPDX-License-Identifier: GPL-3.0-only

//! Caption and virtual keyboard handlers

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::keyboard::{KeyOutcome, KeyPosition, ToggleAction};
use cosmic::{ApplicationExt, Task};
use cosmic::iced::{Size, window};
use tracing::{debug, warn};

impl AppModel {
    pub(crate) fn handle_caption_edited(&mut self, value: String) -> Task<cosmic::Action<Message>> {
        self.caption.set(value);
        Task::none()
    }

    /// Open the keyboard window, or close it if it is already open
    pub(crate) fn handle_toggle_keyboard(&mut self) -> Task<cosmic::Action<Message>> {
        match self.keyboard.toggle() {
            ToggleAction::Close(id) => window::close(id),
            ToggleAction::Open => {
                let (width, height) = ui::KEYBOARD_WINDOW_SIZE;
                let (id, open) = window::open(window::Settings {
                    size: Size::new(width, height),
                    resizable: false,
                    ..Default::default()
                });

                let mut tasks = vec![open.map(|id| cosmic::Action::App(Message::KeyboardOpened(id)))];
                if let Some(stale) = self.keyboard.attach(id) {
                    warn!(window = ?stale, "Closing stale keyboard window");
                    tasks.push(window::close(stale));
                }
                tasks.push(self.set_window_title(ui::KEYBOARD_WINDOW_TITLE.to_string(), id));
                Task::batch(tasks)
            }
        }
    }

    /// A dismissed window was already closed by the toggle that dismissed it
    pub(crate) fn handle_keyboard_opened(&mut self, id: window::Id) -> Task<cosmic::Action<Message>> {
        if self.keyboard.window_id() == Some(id) {
            debug!(window = ?id, "Keyboard window shown");
        } else {
            debug!(window = ?id, "Keyboard window opened after being dismissed");
        }
        Task::none()
    }

    pub(crate) fn handle_key_pressed(
        &mut self,
        id: window::Id,
        position: KeyPosition,
    ) -> Task<cosmic::Action<Message>> {
        let Some(keyboard) = self.keyboard.keyboard_mut(id) else {
            warn!(window = ?id, "Key press from unknown window");
            return Task::none();
        };

        match keyboard.press_at(position, &mut self.caption) {
            KeyOutcome::CloseRequested => {
                self.keyboard.detach(id);
                window::close(id)
            }
            outcome => {
                debug!(?outcome, "Key pressed");
                Task::none()
            }
        }
    }
}
