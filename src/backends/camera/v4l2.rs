// SPDX-License-Identifier: GPL-3.0-only

//! Direct V4L2 capture
//!
//! Opens a `/dev/videoN` node with the v4l crate, negotiates a packed format
//! and reads frames from a memory-mapped stream. Once the stream is running
//! the device fd is polled with a zero timeout before each dequeue, so a tick
//! with no frame pending returns immediately instead of blocking the UI.
//! The first read starts the stream and waits for the first frame.

use super::FrameSource;
use super::format_converters;
use super::types::{CameraFormat, CameraFrame, PixelFormat};
use crate::constants::{capture, timing};
use crate::errors::CameraError;
use std::io;
use std::sync::Arc;
use tracing::{debug, info, warn};
use v4l::buffer::Type;
use v4l::device::Handle;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;

/// Non-blocking check for a filled capture buffer
pub trait Readiness {
    fn is_ready(&self) -> io::Result<bool>;
}

impl Readiness for Handle {
    fn is_ready(&self) -> io::Result<bool> {
        Ok(self.poll(libc::POLLIN, 0)? > 0)
    }
}

impl<R: Readiness + ?Sized> Readiness for Arc<R> {
    fn is_ready(&self) -> io::Result<bool> {
        (**self).is_ready()
    }
}

/// Decides whether a dequeue may be attempted this tick.
///
/// Before the stream has delivered a frame every read is let through, since
/// the first dequeue is what starts streaming. Afterwards a read only goes
/// ahead when the device reports a frame pending.
#[derive(Debug)]
pub struct ReadGate<R> {
    readiness: R,
    streaming: bool,
}

impl<R: Readiness> ReadGate<R> {
    pub fn new(readiness: R) -> Self {
        Self {
            readiness,
            streaming: false,
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// `Ok` if a dequeue would not block
    pub fn admit(&self) -> Result<(), CameraError> {
        if !self.streaming {
            return Ok(());
        }
        match self.readiness.is_ready() {
            Ok(true) => Ok(()),
            Ok(false) => Err(CameraError::FrameReadFailure("no frame ready".to_string())),
            Err(e) => Err(CameraError::FrameReadFailure(format!("poll: {}", e))),
        }
    }

    /// Record that the stream has delivered a frame
    pub fn mark_streaming(&mut self) {
        self.streaming = true;
    }
}

/// Camera frames read straight from a V4L2 device node
pub struct V4l2Source {
    device_path: String,
    // Field order matters: the stream must be dropped before the device
    stream: Option<MmapStream<'static>>,
    gate: Option<ReadGate<Arc<Handle>>>,
    device: Option<Device>,
    format: Option<CameraFormat>,
    sequence: u64,
}

impl V4l2Source {
    pub fn new(device_path: impl Into<String>) -> Self {
        Self {
            device_path: device_path.into(),
            stream: None,
            gate: None,
            device: None,
            format: None,
            sequence: 0,
        }
    }

    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    fn unavailable(&self, what: &str, err: impl std::fmt::Display) -> CameraError {
        CameraError::DeviceUnavailable(format!("{}: {}: {}", self.device_path, what, err))
    }
}

impl Default for V4l2Source {
    fn default() -> Self {
        Self::new(capture::DEVICE_PATH)
    }
}

impl FrameSource for V4l2Source {
    fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError> {
        if self.is_open() {
            self.close();
        }

        info!(
            device_path = %self.device_path,
            format = %requested,
            "Opening V4L2 device"
        );

        let device =
            Device::with_path(&self.device_path).map_err(|e| self.unavailable("open", e))?;

        let mut format = device
            .format()
            .map_err(|e| self.unavailable("query format", e))?;
        format.width = requested.width;
        format.height = requested.height;
        format.fourcc = v4l::FourCC::new(&requested.pixel_format.fourcc());

        let applied = match device.set_format(&format) {
            Ok(applied) => applied,
            Err(e) => {
                warn!(error = %e, "Could not set format, using current device format");
                device
                    .format()
                    .map_err(|e| self.unavailable("query format", e))?
            }
        };

        let pixel_format = PixelFormat::from_fourcc(&applied.fourcc.repr).ok_or_else(|| {
            CameraError::UnsupportedFormat(format!("{} ({})", applied.fourcc, self.device_path))
        })?;

        let negotiated = CameraFormat {
            width: applied.width,
            height: applied.height,
            pixel_format,
            stride: applied.stride,
        };

        if negotiated.width != requested.width || negotiated.height != requested.height {
            warn!(
                requested = %requested,
                negotiated = %negotiated,
                "Device did not accept requested resolution"
            );
        }

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, capture::BUFFER_COUNT)
            .map_err(|e| self.unavailable("create buffer stream", e))?;

        info!(format = %negotiated, "V4L2 capture stream started");

        self.stream = Some(stream);
        self.gate = Some(ReadGate::new(device.handle()));
        self.device = Some(device);
        self.format = Some(negotiated.clone());
        self.sequence = 0;
        Ok(negotiated)
    }

    fn read_frame(&mut self) -> Result<CameraFrame, CameraError> {
        let (Some(stream), Some(gate), Some(format)) =
            (self.stream.as_mut(), self.gate.as_mut(), self.format.as_ref())
        else {
            return Err(CameraError::FrameReadFailure("device not open".to_string()));
        };

        gate.admit()?;

        let (buf, meta) = stream
            .next()
            .map_err(|e| CameraError::FrameReadFailure(e.to_string()))?;
        gate.mark_streaming();

        let used = (meta.bytesused as usize).min(buf.len());
        let payload = if used == 0 { buf } else { &buf[..used] };

        let (width, height, rgba) = format_converters::to_rgba(payload, format)?;

        self.sequence += 1;
        if self.sequence % timing::FRAME_LOG_INTERVAL == 0 {
            debug!(
                frame = self.sequence,
                driver_sequence = meta.sequence,
                bytes = payload.len(),
                "Frame captured"
            );
        }

        CameraFrame::from_rgba(width, height, rgba, self.sequence).ok_or_else(|| {
            CameraError::FrameReadFailure("decoded frame size mismatch".to_string())
        })
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            info!(device_path = %self.device_path, "V4L2 capture stream stopped");
        }
        self.gate = None;
        self.device = None;
        self.format = None;
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}
