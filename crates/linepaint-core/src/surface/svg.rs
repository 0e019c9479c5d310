use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::{Rect, Surface, SurfaceError, raster};
use crate::Color;

/// Records filled rectangles and serializes them as an SVG document.
///
/// Transparent fills are accepted but record nothing.
///
/// # Examples
/// ```
/// use linepaint_core::{Color, Surface, SvgSurface};
///
/// let mut surface = SvgSurface::new(20.0, 10.0);
/// surface.move_to(0.0, 0.0);
/// surface.set_fill_color(Color::Black);
/// surface.fill_rect(10.0, 10.0);
/// assert_eq!(surface.rects().len(), 1);
/// assert!(surface.to_svg_string().contains("<rect"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    cursor: (f64, f64),
    fill: Color,
    rects: Vec<Rect>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            cursor: (0.0, 0.0),
            fill: Color::Black,
            rects: Vec::new(),
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#,
            w = self.width,
            h = self.height
        )?;
        for rect in &self.rects {
            writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                fill_attr(rect.color)
            )?;
        }
        writeln!(out, "</svg>")?;
        out.flush()
    }

    pub fn to_svg_string(&self) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf).expect("write to Vec");
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn save(&self, path: &Path) -> Result<(), SurfaceError> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        debug!("svg written: {} ({} rects)", path.display(), self.rects.len());
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    fn fill_rect(&mut self, width: f64, height: f64) {
        let (x, y) = self.cursor;
        if self.fill.is_painted() {
            self.rects.push(Rect {
                x,
                y,
                width,
                height,
                color: self.fill,
            });
        }
        self.cursor = (x + width, y);
    }

    fn export_raster(&mut self, path: &Path) -> Result<(), SurfaceError> {
        let img = raster::rasterize(&self.rects, self.width, self.height).map_err(|message| {
            SurfaceError::Raster {
                path: path.to_path_buf(),
                message,
            }
        })?;
        raster::save(&img, path)?;
        debug!(
            "raster written: {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(())
    }
}

fn fill_attr(color: Color) -> &'static str {
    match color {
        Color::Black => "#000000",
        Color::White { .. } => "#ffffff",
    }
}
