// SPDX-License-Identifier: GPL-3.0-only
//! Pixel format conversion to display-ready RGBA

use super::types::{CameraFormat, PixelFormat};
use crate::errors::CameraError;

/// Convert YUYV (YUV 4:2:2) to RGBA
///
/// YUYV format: Y0 U0 Y1 V0 - each 4-byte group encodes 2 pixels.
/// Uses BT.601 coefficients. `stride` is the number of bytes per source row;
/// pass 0 for tightly packed input.
pub fn yuyv_to_rgba(data: &[u8], width: u32, height: u32, stride: u32) -> Option<Vec<u8>> {
    let w = width as usize;
    let h = height as usize;
    let packed_row = w * 2;
    let stride = if stride == 0 { packed_row } else { stride as usize };

    if stride < packed_row || data.len() < stride * h.saturating_sub(1) + packed_row {
        return None;
    }

    let mut rgba = Vec::with_capacity(w * h * 4);

    for row in data.chunks(stride).take(h) {
        for chunk in row[..packed_row].chunks_exact(4) {
            let y0 = chunk[0] as f32;
            let u = chunk[1] as f32 - 128.0;
            let y1 = chunk[2] as f32;
            let v = chunk[3] as f32 - 128.0;

            for y in [y0, y1] {
                rgba.push((y + 1.402 * v).clamp(0.0, 255.0) as u8);
                rgba.push((y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8);
                rgba.push((y + 1.772 * u).clamp(0.0, 255.0) as u8);
                rgba.push(255);
            }
        }
    }

    // Odd widths leave a trailing half pair
    rgba.truncate(w * h * 4);
    Some(rgba)
}

/// Decode a single MJPEG frame to RGBA
pub fn mjpeg_to_rgba(data: &[u8]) -> Result<(u32, u32, Vec<u8>), image::ImageError> {
    let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((width, height, rgba.into_raw()))
}

/// Convert a raw driver buffer in `format` to RGBA
pub fn to_rgba(data: &[u8], format: &CameraFormat) -> Result<(u32, u32, Vec<u8>), CameraError> {
    match format.pixel_format {
        PixelFormat::Yuyv => yuyv_to_rgba(data, format.width, format.height, format.stride)
            .map(|rgba| (format.width, format.height, rgba))
            .ok_or_else(|| {
                CameraError::FrameReadFailure(format!(
                    "short YUYV buffer: {} bytes for {}",
                    data.len(),
                    format
                ))
            }),
        PixelFormat::Mjpeg => {
            mjpeg_to_rgba(data).map_err(|e| CameraError::FrameReadFailure(e.to_string()))
        }
    }
}
