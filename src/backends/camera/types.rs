// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use image::RgbaImage;
use std::sync::Arc;

/// Pixel layouts the capture path knows how to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed YUV 4:2:2, Y0 U Y1 V
    Yuyv,
    /// Motion JPEG, one JPEG image per frame
    Mjpeg,
}

impl PixelFormat {
    /// V4L2 FourCC code for this format
    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            PixelFormat::Yuyv => *b"YUYV",
            PixelFormat::Mjpeg => *b"MJPG",
        }
    }

    /// Map a FourCC code reported by a driver
    pub fn from_fourcc(code: &[u8; 4]) -> Option<Self> {
        match code {
            b"YUYV" => Some(PixelFormat::Yuyv),
            b"MJPG" => Some(PixelFormat::Mjpeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelFormat::Yuyv => write!(f, "YUYV"),
            PixelFormat::Mjpeg => write!(f, "MJPEG"),
        }
    }
}

/// Capture format negotiated with a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFormat {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    /// Bytes per row of the raw frame (0 when the driver does not report it)
    pub stride: u32,
}

impl CameraFormat {
    /// Requested format: the given size, YUYV preferred
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_format: PixelFormat::Yuyv,
            stride: 0,
        }
    }
}

impl std::fmt::Display for CameraFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.pixel_format)
    }
}

/// A decoded camera frame, always tightly packed RGBA
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub data: Arc<[u8]>,
    /// Per-session frame counter
    pub sequence: u64,
}

impl CameraFrame {
    /// Wrap RGBA bytes. Returns `None` if the length does not match the size.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>, sequence: u64) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data: Arc::from(data),
            sequence,
        })
    }

    /// Copy the frame into an owned image buffer
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data.to_vec())
    }
}
