// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Snapshot the current frame with the caption burned in and save it.

use crate::app::state::{AppModel, Message, StatusLine};
use crate::errors::{AppError, PhotoError};
use crate::pipelines::photo::save_snapshot;
use cosmic::Task;
use std::path::PathBuf;
use tracing::{error, info, warn};

impl AppModel {
    /// Capture the current frame as a snapshot
    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        if self.is_saving {
            warn!("Snapshot still being written, ignoring capture");
            return Task::none();
        }

        let image = match self.capture.snapshot(Some(self.caption.get())) {
            Ok(image) => image,
            Err(PhotoError::EmptyCaptureBuffer) => {
                info!("No frame available to capture");
                return Task::none();
            }
            Err(e) => {
                error!(error = %e, "Snapshot failed");
                self.status = Some(StatusLine::from(AppError::from(e)));
                return Task::none();
            }
        };

        let path = self.namer.next_path(chrono::Local::now());
        info!(
            path = %path.display(),
            captioned = !self.caption.is_empty(),
            "Capturing snapshot"
        );
        self.is_saving = true;

        Task::perform(save_snapshot(image, path), |result| {
            cosmic::Action::App(Message::PhotoSaved(result))
        })
    }

    pub(crate) fn handle_photo_saved(
        &mut self,
        result: Result<PathBuf, PhotoError>,
    ) -> Task<cosmic::Action<Message>> {
        self.is_saving = false;
        self.status = Some(match result {
            Ok(path) => {
                info!(path = %path.display(), "Image saved");
                StatusLine::Info(format!("Image saved as {}", path.display()))
            }
            Err(err) => {
                error!(error = %err, "Failed to save snapshot");
                StatusLine::from(AppError::from(err))
            }
        });
        Task::none()
    }
}
