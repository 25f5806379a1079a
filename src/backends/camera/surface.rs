// SPDX-License-Identifier: GPL-3.0-only

//! Capture surface
//!
//! Owns the frame source, keeps the most recent decoded frame for display and
//! produces snapshots from it. Everything here runs on the UI thread: `tick`
//! is called from the periodic timer and either yields a new frame or skips.

use super::FrameSource;
use super::types::{CameraFormat, CameraFrame};
use crate::constants::{capture, timing};
use crate::errors::{CameraError, PhotoError};
use crate::pipelines::photo::overlay;
use image::RgbaImage;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Lifecycle of the capture surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SurfaceStatus {
    /// `start` has not been called yet
    #[default]
    Idle,
    /// Streaming in the negotiated format
    Running(CameraFormat),
    /// The device could not be opened
    Unavailable(CameraError),
    /// Released by `stop`
    Stopped,
}

impl SurfaceStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SurfaceStatus::Running(_))
    }
}

pub struct CaptureSurface {
    source: Box<dyn FrameSource>,
    requested: CameraFormat,
    status: SurfaceStatus,
    current_frame: Option<Arc<CameraFrame>>,
    frames_rendered: u64,
    missed_reads: u64,
}

impl CaptureSurface {
    /// Create a surface requesting the fixed preview resolution
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        Self::with_format(
            source,
            CameraFormat::new(capture::FRAME_WIDTH, capture::FRAME_HEIGHT),
        )
    }

    pub fn with_format(source: Box<dyn FrameSource>, requested: CameraFormat) -> Self {
        Self {
            source,
            requested,
            status: SurfaceStatus::Idle,
            current_frame: None,
            frames_rendered: 0,
            missed_reads: 0,
        }
    }

    pub fn status(&self) -> &SurfaceStatus {
        &self.status
    }

    /// Open the camera.
    ///
    /// On failure the surface stays usable but empty and the error is kept in
    /// [`SurfaceStatus::Unavailable`] for display.
    pub fn start(&mut self) -> Result<CameraFormat, CameraError> {
        match self.source.open(&self.requested) {
            Ok(format) => {
                info!(format = %format, "Capture surface started");
                self.status = SurfaceStatus::Running(format.clone());
                Ok(format)
            }
            Err(e) => {
                error!(error = %e, "Failed to start camera");
                self.status = SurfaceStatus::Unavailable(e.clone());
                Err(e)
            }
        }
    }

    /// Pull one frame.
    ///
    /// Returns the new frame, or `None` when the surface is not running or the
    /// read missed. A missed read leaves the previous frame in place.
    pub fn tick(&mut self) -> Option<Arc<CameraFrame>> {
        if !self.status.is_running() {
            return None;
        }

        match self.source.read_frame() {
            Ok(frame) => {
                let frame = Arc::new(frame);
                self.frames_rendered += 1;
                if self.frames_rendered % timing::FRAME_LOG_INTERVAL == 0 {
                    debug!(
                        frames = self.frames_rendered,
                        missed = self.missed_reads,
                        width = frame.width,
                        height = frame.height,
                        "Preview frame"
                    );
                }
                self.current_frame = Some(Arc::clone(&frame));
                Some(frame)
            }
            Err(CameraError::FrameReadFailure(reason)) => {
                self.missed_reads += 1;
                if self.missed_reads % timing::FRAME_LOG_INTERVAL == 0 {
                    debug!(missed = self.missed_reads, reason = %reason, "Missed frame reads");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "Skipping frame");
                self.missed_reads += 1;
                None
            }
        }
    }

    /// Most recently decoded frame
    pub fn current_frame(&self) -> Option<&Arc<CameraFrame>> {
        self.current_frame.as_ref()
    }

    /// Copy the current frame, burning in `caption` when it is non-empty
    pub fn snapshot(&self, caption: Option<&str>) -> Result<RgbaImage, PhotoError> {
        let frame = self
            .current_frame
            .as_ref()
            .ok_or(PhotoError::EmptyCaptureBuffer)?;

        let mut image = frame
            .to_rgba_image()
            .ok_or_else(|| PhotoError::EncodingFailed("frame buffer size mismatch".to_string()))?;

        if let Some(text) = caption.filter(|text| !text.is_empty()) {
            overlay::burn_caption(&mut image, text);
        }

        Ok(image)
    }

    /// Release the camera. Idempotent.
    pub fn stop(&mut self) {
        if self.source.is_open() {
            self.source.close();
            info!(
                frames = self.frames_rendered,
                missed = self.missed_reads,
                "Capture surface stopped"
            );
        }
        if self.status.is_running() {
            self.status = SurfaceStatus::Stopped;
        }
    }
}

impl Drop for CaptureSurface {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Frame source replaying a fixed script of read results
    #[derive(Default)]
    struct ScriptedSource {
        fail_open: bool,
        open: bool,
        reads: VecDeque<Result<CameraFrame, CameraError>>,
    }

    impl FrameSource for ScriptedSource {
        fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError> {
            if self.fail_open {
                return Err(CameraError::DeviceUnavailable("scripted".into()));
            }
            self.open = true;
            Ok(requested.clone())
        }

        fn read_frame(&mut self) -> Result<CameraFrame, CameraError> {
            self.reads
                .pop_front()
                .unwrap_or_else(|| Err(CameraError::FrameReadFailure("empty".into())))
        }

        fn close(&mut self) {
            self.open = false;
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    fn black_frame(sequence: u64) -> CameraFrame {
        CameraFrame::from_rgba(160, 120, vec![0; 160 * 120 * 4], sequence).unwrap()
    }

    #[test]
    fn test_start_failure_is_reported() {
        let mut surface = CaptureSurface::new(Box::new(ScriptedSource {
            fail_open: true,
            ..Default::default()
        }));
        let err = surface.start().unwrap_err();
        assert!(matches!(err, CameraError::DeviceUnavailable(_)));
        assert!(matches!(surface.status(), SurfaceStatus::Unavailable(_)));
        assert!(surface.tick().is_none());
    }

    #[test]
    fn test_missed_read_keeps_previous_frame() {
        let source = ScriptedSource {
            reads: VecDeque::from([
                Ok(black_frame(1)),
                Err(CameraError::FrameReadFailure("miss".into())),
            ]),
            ..Default::default()
        };
        let mut surface = CaptureSurface::new(Box::new(source));
        surface.start().unwrap();

        assert!(surface.tick().is_some());
        assert!(surface.tick().is_none());
        assert_eq!(surface.current_frame().unwrap().sequence, 1);
    }

    #[test]
    fn test_snapshot_before_first_frame() {
        let mut surface = CaptureSurface::new(Box::new(ScriptedSource::default()));
        surface.start().unwrap();
        assert_eq!(
            surface.snapshot(Some("hi")).unwrap_err(),
            PhotoError::EmptyCaptureBuffer
        );
    }

    #[test]
    fn test_snapshot_overlay_only_with_text() {
        let source = ScriptedSource {
            reads: VecDeque::from([Ok(black_frame(1))]),
            ..Default::default()
        };
        let mut surface = CaptureSurface::new(Box::new(source));
        surface.start().unwrap();
        surface.tick();

        let plain = surface.snapshot(Some("")).unwrap();
        assert!(plain.pixels().all(|p| p.0 == [0, 0, 0, 0]));

        let captioned = surface.snapshot(Some("hi")).unwrap();
        assert!(captioned.pixels().any(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut surface = CaptureSurface::new(Box::new(ScriptedSource::default()));
        surface.stop();
        surface.start().unwrap();
        surface.stop();
        surface.stop();
        assert_eq!(surface.status(), &SurfaceStatus::Stopped);
        assert!(surface.tick().is_none());
    }
}
