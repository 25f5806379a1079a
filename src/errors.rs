// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Camera-related errors
    Camera(CameraError),
    /// Snapshot capture errors
    Photo(PhotoError),
}

/// Camera-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The camera device could not be opened or configured
    DeviceUnavailable(String),
    /// A single frame could not be read (transient)
    FrameReadFailure(String),
    /// The device delivered a pixel format we cannot convert
    UnsupportedFormat(String),
}

/// Snapshot capture errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// Capture requested before any frame was decoded
    EmptyCaptureBuffer,
    /// PNG encoding failed
    EncodingFailed(String),
    /// The encoded file could not be written
    FileWriteFailure(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DeviceUnavailable(msg) => write!(f, "Camera unavailable: {}", msg),
            CameraError::FrameReadFailure(msg) => write!(f, "Frame read failed: {}", msg),
            CameraError::UnsupportedFormat(msg) => write!(f, "Unsupported pixel format: {}", msg),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::EmptyCaptureBuffer => write!(f, "No frame available for capture"),
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            PhotoError::FileWriteFailure(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CameraError {}
impl std::error::Error for PhotoError {}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::FileWriteFailure(err.to_string())
    }
}

impl From<image::ImageError> for PhotoError {
    fn from(err: image::ImageError) -> Self {
        PhotoError::EncodingFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_write_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PhotoError = io.into();
        assert!(matches!(err, PhotoError::FileWriteFailure(_)));
    }

    #[test]
    fn test_display_wraps_inner_error() {
        let err: AppError = CameraError::DeviceUnavailable("/dev/video0".into()).into();
        assert_eq!(
            err.to_string(),
            "Camera error: Camera unavailable: /dev/video0"
        );
    }
}
