// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the snapshot path: frame source to PNG on disk

use caption_camera::backends::camera::{
    CameraFormat, CameraFrame, CaptureSurface, FrameSource, SurfaceStatus, V4l2Source,
};
use caption_camera::backends::camera::v4l2::{ReadGate, Readiness};
use caption_camera::errors::{CameraError, PhotoError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use caption_camera::pipelines::photo::{SnapshotNamer, save_snapshot, write_snapshot};
use caption_camera::pipelines::photo::overlay::caption_bounds;

/// Source that always returns the same grey frame
struct GreySource {
    open: bool,
    sequence: u64,
}

impl FrameSource for GreySource {
    fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError> {
        self.open = true;
        Ok(requested.clone())
    }

    fn read_frame(&mut self) -> Result<CameraFrame, CameraError> {
        self.sequence += 1;
        let data = [64, 64, 64, 255].repeat(640 * 480);
        CameraFrame::from_rgba(640, 480, data, self.sequence)
            .ok_or_else(|| CameraError::FrameReadFailure("bad size".into()))
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

fn running_surface() -> CaptureSurface {
    let mut surface = CaptureSurface::new(Box::new(GreySource {
        open: false,
        sequence: 0,
    }));
    surface.start().unwrap();
    assert!(surface.tick().is_some());
    surface
}

fn count_white(image: &image::RgbaImage) -> usize {
    image.pixels().filter(|p| p.0 == [255, 255, 255, 255]).count()
}

#[test]
fn test_empty_caption_saves_frame_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut namer = SnapshotNamer::new(dir.path());
    let surface = running_surface();

    let image = surface.snapshot(Some("")).unwrap();
    let path = namer.next_path(chrono::Local::now());
    write_snapshot(&image, &path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (640, 480));
    assert!(saved.pixels().all(|p| p.0 == [64, 64, 64, 255]));
}

#[test]
fn test_caption_is_burned_near_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let mut namer = SnapshotNamer::new(dir.path());
    let surface = running_surface();

    let image = surface.snapshot(Some("hi")).unwrap();
    let path = namer.next_path(chrono::Local::now());
    write_snapshot(&image, &path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert!(count_white(&saved) > 0);

    // Every caption pixel falls inside the caption's bounds
    let (left, top, right, bottom) = caption_bounds("hi");
    for (x, y, pixel) in saved.enumerate_pixels() {
        let inside = (x as i32) >= left
            && (x as i32) < right
            && (y as i32) >= top
            && (y as i32) < bottom;
        if !inside {
            assert_eq!(pixel.0, [64, 64, 64, 255], "stray pixel at ({x}, {y})");
        }
    }
}

#[test]
fn test_capture_before_first_frame_is_rejected() {
    let mut surface = CaptureSurface::new(Box::new(GreySource {
        open: false,
        sequence: 0,
    }));
    surface.start().unwrap();
    assert_eq!(
        surface.snapshot(Some("hi")).unwrap_err(),
        PhotoError::EmptyCaptureBuffer
    );
}

#[tokio::test]
async fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let surface = running_surface();
    let image = surface.snapshot(None).unwrap();

    let path = dir.path().join("missing").join("capture.png");
    let err = save_snapshot(image, path).await.unwrap_err();
    assert!(matches!(err, PhotoError::FileWriteFailure(_)));
}

#[test]
fn test_missing_device_is_unavailable() {
    let mut surface = CaptureSurface::new(Box::new(V4l2Source::new(
        "/dev/caption-camera-test-missing",
    )));
    let err = surface.start().unwrap_err();
    assert!(matches!(err, CameraError::DeviceUnavailable(_)));
    assert!(matches!(surface.status(), SurfaceStatus::Unavailable(_)));

    surface.stop();
    assert!(surface.tick().is_none());
}

/// Readiness answers replayed in order; empty means ready
struct ReadyScript(RefCell<VecDeque<bool>>);

impl Readiness for ReadyScript {
    fn is_ready(&self) -> io::Result<bool> {
        Ok(self.0.borrow_mut().pop_front().unwrap_or(true))
    }
}

/// Source that only produces a frame when the gate admits the read
struct GatedSource {
    gate: ReadGate<ReadyScript>,
    inner: GreySource,
}

impl FrameSource for GatedSource {
    fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError> {
        self.inner.open(requested)
    }

    fn read_frame(&mut self) -> Result<CameraFrame, CameraError> {
        self.gate.admit()?;
        let frame = self.inner.read_frame()?;
        self.gate.mark_streaming();
        Ok(frame)
    }

    fn close(&mut self) {
        self.inner.close()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }
}

#[test]
fn test_preview_recovers_after_not_ready_ticks() {
    let mut surface = CaptureSurface::new(Box::new(GatedSource {
        gate: ReadGate::new(ReadyScript(RefCell::new(VecDeque::from([
            false, false, true, false,
        ])))),
        inner: GreySource {
            open: false,
            sequence: 0,
        },
    }));
    surface.start().unwrap();

    // First read starts the stream without consulting readiness
    assert_eq!(surface.tick().unwrap().sequence, 1);
    assert!(surface.tick().is_none());
    assert!(surface.tick().is_none());
    assert_eq!(surface.tick().unwrap().sequence, 2);
    assert!(surface.tick().is_none());
    assert_eq!(surface.tick().unwrap().sequence, 3);

    assert!(surface.status().is_running());
    assert!(surface.snapshot(Some("hi")).is_ok());
}
