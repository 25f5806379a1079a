// SPDX-License-Identifier: GPL-3.0-only

//! Camera handlers
//!
//! Frame polling and device shutdown.

use crate::app::state::{AppModel, Message};
use cosmic::Task;
use cosmic::iced::window;
use cosmic::widget::image::Handle;
use tracing::info;

impl AppModel {
    /// Pull one frame and refresh the preview.
    ///
    /// A missed read keeps the previous preview on screen.
    pub(crate) fn handle_tick(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(frame) = self.capture.tick() {
            self.preview = Some(Handle::from_rgba(
                frame.width,
                frame.height,
                frame.data.to_vec(),
            ));
        }
        Task::none()
    }

    pub(crate) fn handle_window_close_requested(
        &mut self,
        id: window::Id,
    ) -> Task<cosmic::Action<Message>> {
        if self.keyboard.detach(id) {
            return window::close(id);
        }

        if self.core.main_window_id() == Some(id) {
            info!("Main window closing, releasing camera");
            self.capture.stop();
            if let Some(keyboard_id) = self.keyboard.window_id() {
                self.keyboard.detach(keyboard_id);
                return window::close(keyboard_id);
            }
        }

        Task::none()
    }
}
