// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants
//!
//! The application has no runtime configuration; every tunable lives here.

use std::time::Duration;

/// Camera acquisition constants
pub mod capture {
    use super::Duration;

    /// Camera device opened at startup
    pub const DEVICE_PATH: &str = "/dev/video0";

    /// Requested frame width
    pub const FRAME_WIDTH: u32 = 640;

    /// Requested frame height
    pub const FRAME_HEIGHT: u32 = 480;

    /// Period of the frame polling tick
    pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

    /// Number of mmap buffers requested from the driver
    pub const BUFFER_COUNT: u32 = 4;
}

/// Caption overlay constants
pub mod overlay {
    /// Left edge of the caption text in frame pixels
    pub const ORIGIN_X: i32 = 50;

    /// Baseline of the first caption line in frame pixels
    pub const BASELINE_Y: i32 = 50;

    /// Glyph scale factor applied to the 8x8 bitmap font
    pub const GLYPH_SCALE: u32 = 3;

    /// Stroke weight in pixels
    pub const STROKE_WEIGHT: u32 = 2;

    /// Caption color (opaque white)
    pub const COLOR: [u8; 4] = [255, 255, 255, 255];
}

/// Snapshot output constants
pub mod output {
    /// Filename prefix for saved snapshots
    pub const FILE_PREFIX: &str = "capture";

    /// Filename extension for saved snapshots (PNG, lossless)
    pub const FILE_EXTENSION: &str = "png";
}

/// UI Constants
pub mod ui {
    /// Label of the keyboard toggle button
    pub const KEYBOARD_BUTTON_LABEL: &str = "⌨";

    /// Label of the capture button
    pub const CAPTURE_BUTTON_LABEL: &str = "Capture";

    /// Main window title
    pub const MAIN_WINDOW_TITLE: &str = "Camera with Virtual Keyboard";

    /// Keyboard window title
    pub const KEYBOARD_WINDOW_TITLE: &str = "Virtual Keyboard";

    /// Width of a regular key button
    pub const KEY_WIDTH: f32 = 44.0;

    /// Width of the space bar
    pub const SPACE_KEY_WIDTH: f32 = 280.0;

    /// Gap between key buttons
    pub const KEY_SPACING: u16 = 2;

    /// Caption text input width
    pub const CAPTION_INPUT_WIDTH: f32 = 420.0;

    /// Keyboard window size (width, height)
    pub const KEYBOARD_WINDOW_SIZE: (f32, f32) = (640.0, 260.0);

    /// Padding around the main window content
    pub const CONTENT_PADDING: u16 = 10;
}

/// Timing constants
pub mod timing {
    /// Log frame statistics every N frames
    pub const FRAME_LOG_INTERVAL: u64 = 30;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_leaves_room_for_frame_rate() {
        // 30 fps delivers a frame every ~33 ms
        assert!(capture::TICK_INTERVAL < Duration::from_millis(33));
    }

    #[test]
    fn caption_origin_inside_frame() {
        assert!((overlay::ORIGIN_X as u32) < capture::FRAME_WIDTH);
        assert!((overlay::BASELINE_Y as u32) < capture::FRAME_HEIGHT);
    }
}
