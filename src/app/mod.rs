// SPDX-License-Identifier: GPL-3.0-only

//! Main application module
//!
//! This module contains the application state, message handling and UI
//! rendering for the camera window and the virtual keyboard window.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, StatusLine)
//! - `view`: Main window rendering
//! - `keyboard_view`: Keyboard window rendering
//! - `update`: Message dispatch
//! - `handlers`: Message handling by domain

mod handlers;
mod keyboard_view;
mod state;
mod update;
mod view;

use crate::backends::camera::{self, CameraFormat, CaptureSurface};
use crate::caption::SharedText;
use crate::constants::{capture, ui};
use crate::errors::AppResult;
use crate::keyboard::KeyboardHost;
use crate::pipelines::photo::SnapshotNamer;
use cosmic::iced::{Subscription, window};
use cosmic::{ApplicationExt, Element, Task};
pub use state::{AppModel, Message, StatusLine};
use tracing::{debug, error, info};

/// Open the camera for the preview
fn start_camera(surface: &mut CaptureSurface) -> AppResult<CameraFormat> {
    Ok(surface.start()?)
}

/// Directory snapshots are written to (the working directory)
pub fn get_photo_directory() -> std::path::PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."))
}

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.captioncamera.CaptionCamera";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Opens the camera and builds the initial model.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let mut capture = CaptureSurface::new(camera::default_source());
        let status = match start_camera(&mut capture) {
            Ok(format) => {
                info!(format = %format, "Camera ready");
                None
            }
            Err(e) => {
                error!(error = %e, "Camera unavailable");
                Some(StatusLine::from(e))
            }
        };

        let mut caption = SharedText::new();
        caption.subscribe(|value| debug!(chars = value.chars().count(), "Caption changed"));

        let photo_dir = get_photo_directory();
        info!(path = %photo_dir.display(), "Snapshots will be saved here");

        let mut app = AppModel {
            core,
            capture,
            preview: None,
            caption,
            keyboard: KeyboardHost::new(),
            namer: SnapshotNamer::new(photo_dir),
            status,
            is_saving: false,
        };

        app.set_header_title(ui::MAIN_WINDOW_TITLE.to_string());
        let title_task = match app.core.main_window_id() {
            Some(id) => app.set_window_title(ui::MAIN_WINDOW_TITLE.to_string(), id),
            None => Task::none(),
        };

        (app, title_task)
    }

    /// Describes the main window.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Describes secondary windows (the virtual keyboard).
    fn view_window(&self, id: window::Id) -> Element<'_, Self::Message> {
        self.keyboard_view(id)
    }

    /// Poll the camera on a fixed tick while it is streaming.
    fn subscription(&self) -> Subscription<Self::Message> {
        if self.capture.status().is_running() {
            cosmic::iced::time::every(capture::TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn on_close_requested(&self, id: window::Id) -> Option<Self::Message> {
        Some(Message::WindowCloseRequested(id))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
