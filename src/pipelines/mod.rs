// SPDX-License-Identifier: GPL-3.0-only

//! Processing pipelines for snapshot capture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Camera Frame │ ──▶ │  Photo Pipeline   │ ──▶ │   PNG File   │
//! │   (RGBA)     │     │  - Caption burn   │     │              │
//! │              │     │  - PNG encoding   │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! The caption is composited on the UI thread when the snapshot is taken;
//! encoding and disk I/O run in a blocking task so the preview keeps going.

pub mod photo;
