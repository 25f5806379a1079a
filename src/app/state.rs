// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::CaptureSurface;
use crate::caption::SharedText;
use crate::errors::{AppError, PhotoError};
use crate::keyboard::{KeyPosition, KeyboardHost};
use crate::pipelines::photo::SnapshotNamer;
use cosmic::iced::window;
use cosmic::widget::image::Handle;
use std::path::PathBuf;

/// One line of feedback under the controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Info(text) | StatusLine::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}

impl From<AppError> for StatusLine {
    fn from(err: AppError) -> Self {
        StatusLine::Error(err.to_string())
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Camera device and most recent frame
    pub capture: CaptureSurface,
    /// Preview image built from the most recent frame
    pub preview: Option<Handle>,
    /// Caption shared by the text input and the virtual keyboard
    pub caption: SharedText,
    /// The virtual keyboard window, if open
    pub keyboard: KeyboardHost<window::Id>,
    /// Snapshot file naming
    pub namer: SnapshotNamer,
    /// Result of the last capture, or a camera error
    pub status: Option<StatusLine>,
    /// A snapshot is being written
    pub is_saving: bool,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Camera =====
    /// Periodic frame poll
    Tick,

    // ===== Caption =====
    /// Caption edited in the main window text input
    CaptionEdited(String),

    // ===== Virtual Keyboard =====
    /// Keyboard button in the main window
    ToggleKeyboard,
    /// The keyboard window finished opening
    KeyboardOpened(window::Id),
    /// A key was pressed in the keyboard window
    KeyPressed(window::Id, KeyPosition),

    // ===== Capture =====
    /// Capture button
    Capture,
    /// Snapshot write finished
    PhotoSaved(Result<PathBuf, PhotoError>),

    // ===== Windows =====
    /// A window asked to be closed
    WindowCloseRequested(window::Id),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CameraError;

    #[test]
    fn test_errors_become_error_status() {
        let status = StatusLine::from(AppError::from(PhotoError::FileWriteFailure(
            "read-only".into(),
        )));
        assert!(status.is_error());
        assert!(status.text().contains("read-only"));

        let status: StatusLine = AppError::from(CameraError::DeviceUnavailable("busy".into())).into();
        assert!(status.text().starts_with("Camera error"));
    }

    #[test]
    fn test_info_status() {
        let status = StatusLine::Info("Image saved as a.png".into());
        assert!(!status.is_error());
        assert_eq!(status.text(), "Image saved as a.png");
    }
}
