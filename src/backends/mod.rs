// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for camera capture
//!
//! The backend layer hides hardware access behind the [`camera::FrameSource`]
//! trait so the application only ever sees decoded RGBA frames:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  App Layer                   │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                   │
//! │            ┌──────────────────┐              │
//! │            │     Camera       │              │
//! │            │      (V4L2)      │              │
//! │            └──────────────────┘              │
//! └─────────────────────────────────────────────┘
//! ```

pub mod camera;
