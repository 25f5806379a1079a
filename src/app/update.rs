// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher; the handling code lives
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::camera`: frame polling, shutdown
//! - `handlers::keyboard`: caption edits, keyboard window, key presses
//! - `handlers::capture`: snapshot capture and save results

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== Camera =====
            Message::Tick => self.handle_tick(),

            // ===== Caption =====
            Message::CaptionEdited(value) => self.handle_caption_edited(value),

            // ===== Virtual Keyboard =====
            Message::ToggleKeyboard => self.handle_toggle_keyboard(),
            Message::KeyboardOpened(id) => self.handle_keyboard_opened(id),
            Message::KeyPressed(id, position) => self.handle_key_pressed(id, position),

            // ===== Capture =====
            Message::Capture => self.handle_capture(),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),

            // ===== Windows =====
            Message::WindowCloseRequested(id) => self.handle_window_close_requested(id),
        }
    }
}
