// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend abstraction
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │  ← ticks every 10 ms
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │   CaptureSurface    │  ← lifecycle, current frame, snapshot
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  FrameSource Trait  │  ← open / read / close
//! └──────────┬──────────┘
//!            │
//!            ▼
//!        ┌──────┐
//!        │ V4L2 │
//!        └──────┘
//! ```

pub mod format_converters;
pub mod surface;
pub mod types;
pub mod v4l2;

pub use surface::{CaptureSurface, SurfaceStatus};
pub use types::*;
pub use v4l2::V4l2Source;

use crate::errors::CameraError;

/// A device that produces RGBA frames on demand
///
/// Implementations are driven from the UI thread, so `read_frame` must not
/// block for much longer than one tick.
pub trait FrameSource {
    /// Open the device and negotiate a format close to `requested`.
    ///
    /// Returns the format actually in use. Opening an already open source
    /// restarts it.
    fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError>;

    /// Read and decode one frame.
    ///
    /// A `FrameReadFailure` is transient; the caller simply tries again on
    /// its next tick.
    fn read_frame(&mut self) -> Result<CameraFrame, CameraError>;

    /// Release the device. Safe to call repeatedly.
    fn close(&mut self);

    fn is_open(&self) -> bool;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn open(&mut self, requested: &CameraFormat) -> Result<CameraFormat, CameraError> {
        (**self).open(requested)
    }

    fn read_frame(&mut self) -> Result<CameraFrame, CameraError> {
        (**self).read_frame()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// The default frame source for this platform
pub fn default_source() -> Box<dyn FrameSource> {
    Box::new(V4l2Source::default())
}
