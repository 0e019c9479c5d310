use std::path::Path;

use image::{Rgba, RgbaImage};

use super::{Rect, SurfaceError};
use crate::Color;

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Largest raster buffer we agree to allocate (RGBA bytes).
pub(crate) const MAX_RASTER_BYTES: u64 = 512 * 1024 * 1024;

/// Paint rectangles onto a transparent canvas of `ceil(width) x ceil(height)`.
///
/// Edges snap to the nearest pixel boundary, so rectangles that touch in
/// canvas space touch in pixel space too. Canvases whose buffer would exceed
/// `MAX_RASTER_BYTES` are refused.
pub(crate) fn rasterize(rects: &[Rect], width: f64, height: f64) -> Result<RgbaImage, String> {
    let px_width = width.ceil().max(1.0) as u32;
    let px_height = height.ceil().max(1.0) as u32;
    let bytes = u64::from(px_width)
        .checked_mul(u64::from(px_height))
        .and_then(|pixels| pixels.checked_mul(4));
    match bytes {
        Some(bytes) if bytes <= MAX_RASTER_BYTES && usize::try_from(bytes).is_ok() => {}
        _ => {
            return Err(format!(
                "canvas {px_width}x{px_height} exceeds the raster limit of {MAX_RASTER_BYTES} bytes"
            ));
        }
    }
    let mut img = RgbaImage::from_pixel(px_width, px_height, CLEAR);

    for rect in rects {
        let pixel = match rect.color {
            Color::Black => BLACK,
            Color::White { transparent: false } => WHITE,
            Color::White { transparent: true } => continue,
        };
        let x0 = snap(rect.x, px_width);
        let x1 = snap(rect.x + rect.width, px_width);
        let y0 = snap(rect.y, px_height);
        let y1 = snap(rect.y + rect.height, px_height);
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, pixel);
            }
        }
    }
    Ok(img)
}

pub(crate) fn save(img: &RgbaImage, path: &Path) -> Result<(), SurfaceError> {
    img.save(path).map_err(|err| SurfaceError::Raster {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn snap(coord: f64, limit: u32) -> u32 {
    (coord.round().max(0.0) as u32).min(limit)
}
