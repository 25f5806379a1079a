// SPDX-License-Identifier: GPL-3.0-only

//! Caption Camera - live camera preview with a captioned snapshot button
//!
//! A caption typed in the main window, or on the on-screen keyboard window,
//! is burned into every snapshot saved as PNG.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Application model, windows and message handling
//! - [`backends`]: Camera device abstraction and the V4L2 source
//! - [`caption`]: Observable caption text shared by both windows
//! - [`keyboard`]: Virtual keyboard layout, shift state and window host
//! - [`pipelines`]: Caption overlay and snapshot encoding
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // caption-camera
//! ```

pub mod app;
pub mod backends;
pub mod caption;
pub mod constants;
pub mod errors;
pub mod keyboard;
pub mod pipelines;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use caption::SharedText;
pub use errors::{AppError, AppResult, CameraError, PhotoError};
pub use keyboard::{KeyOutcome, VirtualKeyboard};
