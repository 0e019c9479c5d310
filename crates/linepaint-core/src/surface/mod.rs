//! Drawing surfaces.
//!
//! The render driver only talks to the `Surface` trait. File output (SVG
//! text, raster images) is isolated here so the encoders and layout stay
//! free of I/O.

mod raster;
mod svg;

pub use svg::SvgSurface;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Color;

/// Minimal drawing interface consumed by the render driver.
pub trait Surface {
    fn set_fill_color(&mut self, color: Color);

    /// Place the cursor at an absolute position.
    fn move_to(&mut self, x: f64, y: f64);

    /// Fill a `width` x `height` rectangle at the cursor with the current
    /// colour, then advance the cursor by `width`.
    fn fill_rect(&mut self, width: f64, height: f64);

    fn export_raster(&mut self, path: &Path) -> Result<(), SurfaceError>;
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("raster export failed ({}): {message}", .path.display())]
    Raster { path: PathBuf, message: String },
}

/// A filled rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}
