// SPDX-License-Identifier: GPL-3.0-only

//! Snapshot pipeline
//!
//! ```text
//! Current Frame → Caption burn-in → PNG encoding → Disk I/O
//!       ↓
//! Preview continues uninterrupted
//! ```
//!
//! The first stage lives in [`CaptureSurface::snapshot`]; the rest runs on
//! the blocking pool through [`encoding::save_snapshot`].
//!
//! [`CaptureSurface::snapshot`]: crate::backends::camera::CaptureSurface::snapshot

pub mod encoding;
pub mod overlay;

pub use encoding::{SnapshotNamer, encode_png, save_snapshot, write_snapshot};
pub use overlay::burn_caption;
