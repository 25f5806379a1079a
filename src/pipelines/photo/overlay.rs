// SPDX-License-Identifier: GPL-3.0-only

//! Caption burn-in
//!
//! Draws caption text into a snapshot with the 8x8 bitmap font, scaled up and
//! thickened to the configured stroke weight. The first line sits on the
//! fixed baseline; each `'\n'` starts a new line below it.

use crate::constants::overlay::{BASELINE_Y, COLOR, GLYPH_SCALE, ORIGIN_X, STROKE_WEIGHT};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgba, RgbaImage};

/// Glyph cell size in font units
const GLYPH_CELLS: i32 = 8;
/// Font row the baseline sits on
const BASELINE_ROW: i32 = 7;
/// Line advance in font units
const LINE_CELLS: i32 = 10;

/// Pixel rectangle `(left, top, right, bottom)`, right/bottom exclusive
pub type Bounds = (i32, i32, i32, i32);

/// Burn `text` into `image` at the fixed caption position
pub fn burn_caption(image: &mut RgbaImage, text: &str) {
    draw_text(
        image,
        ORIGIN_X,
        BASELINE_Y,
        text,
        Rgba(COLOR),
        GLYPH_SCALE,
        STROKE_WEIGHT,
    );
}

/// Area the fixed-position caption covers, before clipping to the image
pub fn caption_bounds(text: &str) -> Bounds {
    text_bounds(ORIGIN_X, BASELINE_Y, text, GLYPH_SCALE, STROKE_WEIGHT)
}

/// Draw text with its first baseline at `(x, baseline)`
pub fn draw_text(
    image: &mut RgbaImage,
    x: i32,
    baseline: i32,
    text: &str,
    color: Rgba<u8>,
    scale: u32,
    stroke: u32,
) {
    let scale = scale.max(1) as i32;
    let dot = scale + stroke.max(1) as i32 - 1;
    let (width, height) = (image.width() as i32, image.height() as i32);

    for (line_idx, line) in text.split('\n').enumerate() {
        let top = baseline - BASELINE_ROW * scale + line_idx as i32 * LINE_CELLS * scale;
        let mut cursor_x = x;

        for ch in line.chars() {
            let glyph = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?'));
            if let Some(glyph) = glyph {
                for (row_idx, row_bits) in glyph.iter().enumerate() {
                    for col_idx in 0..GLYPH_CELLS {
                        if (*row_bits >> col_idx) & 1 == 0 {
                            continue;
                        }
                        let px = cursor_x + col_idx * scale;
                        let py = top + row_idx as i32 * scale;
                        for ty in py.max(0)..(py + dot).min(height) {
                            for tx in px.max(0)..(px + dot).min(width) {
                                image.put_pixel(tx as u32, ty as u32, color);
                            }
                        }
                    }
                }
            }
            cursor_x += GLYPH_CELLS * scale;
        }
    }
}

/// Bounding box of text drawn by [`draw_text`] with the same arguments
pub fn text_bounds(x: i32, baseline: i32, text: &str, scale: u32, stroke: u32) -> Bounds {
    let scale = scale.max(1) as i32;
    let overhang = stroke.max(1) as i32 - 1;
    let lines: Vec<&str> = text.split('\n').collect();
    let widest = lines
        .iter()
        .map(|line| line.chars().count() as i32)
        .max()
        .unwrap_or(0);
    let top = baseline - BASELINE_ROW * scale;
    let last_line_top = top + (lines.len() as i32 - 1) * LINE_CELLS * scale;

    (
        x,
        top,
        x + widest * GLYPH_CELLS * scale + overhang,
        last_line_top + GLYPH_CELLS * scale + overhang,
    )
}
