//! Render driver.
//!
//! Runs the layout once, then folds the encoder over every bit in order,
//! row by row. Encoder state belongs to the whole run: it is created fresh
//! per call to [`render`] and carried across row boundaries, never reset at
//! the start of a row. The resulting [`RenderPlan`] can be replayed onto any
//! [`Surface`].

mod error;
mod options;

pub use error::RenderError;
pub use options::{DEFAULT_HEIGHT, DEFAULT_LINES, DEFAULT_WIDTH, RenderOptions};

use std::path::Path;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::bits::BitSequence;
use crate::encoding::{Encoding, Segment, encode};
use crate::layout::layout;
use crate::surface::{Surface, SvgSurface};

/// Current render plan schema version.
pub const PLAN_VERSION: u32 = 1;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Segments of one row in draw order, starting at `x = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub index: usize,
    /// Top edge of the row.
    pub y: f64,
    pub segments: Vec<Segment>,
}

impl RenderedRow {
    /// Horizontal extent covered by the row's segments.
    pub fn width(&self) -> f64 {
        self.segments.iter().map(|segment| segment.width).sum()
    }
}

/// Everything needed to draw one run, in deterministic order.
///
/// # Examples
/// ```
/// use linepaint_core::{BitSequence, RenderOptions, render};
///
/// let bits = BitSequence::from_bytes(&[0x00]);
/// let plan = render(&bits, &RenderOptions { width: 80.0, ..RenderOptions::default() })?;
/// assert_eq!(plan.rows.len(), 1);
/// assert_eq!(plan.rows[0].segments.len(), 8);
/// assert_eq!(plan.rows[0].width(), 80.0);
/// # Ok::<(), linepaint_core::RenderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Plan schema version (not the crate version).
    pub plan_version: u32,
    pub canvas: Canvas,
    pub encoding: Encoding,
    /// Requested line count (rows may be fewer for short inputs).
    pub lines: usize,
    /// Bits per row; only the last row may hold fewer.
    pub row_bit_width: usize,
    /// Horizontal slot allotted to each bit.
    pub segment_width: f64,
    pub row_height: f64,
    pub rows: Vec<RenderedRow>,
}

impl RenderPlan {
    pub fn segment_count(&self) -> usize {
        self.rows.iter().map(|row| row.segments.len()).sum()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.rows.iter().flat_map(|row| row.segments.iter())
    }
}

pub fn render(bits: &BitSequence, options: &RenderOptions) -> Result<RenderPlan, RenderError> {
    let layout = layout(bits, options.lines, options.width, options.height)?;
    debug!(
        "layout: {} bits, {} rows of {} bits, segment {}x{}, encoding {}",
        bits.len(),
        layout.rows.len(),
        layout.row_bit_width,
        layout.segment_width,
        layout.row_height,
        options.encoding
    );

    let mut state = options.encoding.initial_state();
    let mut rows = Vec::with_capacity(layout.rows.len());
    for row in &layout.rows {
        let mut segments = Vec::with_capacity(row.len() * 2);
        for bit in row.bits.iter().by_vals() {
            let (encoded, next) = encode(bit, state, layout.segment_width, layout.row_height);
            state = next;
            segments.extend(encoded.as_slice().iter().map(|segment| Segment {
                color: segment.color.with_transparent_white(options.transparent_white),
                ..*segment
            }));
        }
        trace!("row {}: {} bits -> {} segments", row.index, row.len(), segments.len());
        rows.push(RenderedRow {
            index: row.index,
            y: row.index as f64 * layout.row_height,
            segments,
        });
    }

    Ok(RenderPlan {
        plan_version: PLAN_VERSION,
        canvas: Canvas {
            width: options.width,
            height: options.height,
        },
        encoding: options.encoding,
        lines: options.lines,
        row_bit_width: layout.row_bit_width,
        segment_width: layout.segment_width,
        row_height: layout.row_height,
        rows,
    })
}

/// Replay a plan onto a surface: one cursor reset per row, one filled
/// rectangle per segment.
pub fn draw<S: Surface + ?Sized>(plan: &RenderPlan, surface: &mut S) {
    for row in &plan.rows {
        surface.move_to(0.0, row.y);
        for segment in &row.segments {
            surface.set_fill_color(segment.color);
            surface.fill_rect(segment.width, segment.height);
        }
    }
}

pub fn render_to_surface<S: Surface + ?Sized>(
    bits: &BitSequence,
    options: &RenderOptions,
    surface: &mut S,
) -> Result<RenderPlan, RenderError> {
    let plan = render(bits, options)?;
    draw(&plan, surface);
    Ok(plan)
}

/// Render `input` to an SVG file, optionally exporting a raster copy too.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use linepaint_core::{RenderOptions, render_svg_file};
///
/// let plan = render_svg_file(
///     b"hello",
///     &RenderOptions::default(),
///     Path::new("hello.svg"),
///     Some(Path::new("hello.png")),
/// )?;
/// println!("{} segments", plan.segment_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_svg_file(
    input: &[u8],
    options: &RenderOptions,
    svg_path: &Path,
    raster_path: Option<&Path>,
) -> Result<RenderPlan, RenderError> {
    let bits = BitSequence::from_bytes(input);
    let mut surface = SvgSurface::new(options.width, options.height);
    let plan = render_to_surface(&bits, options, &mut surface)?;
    surface.save(svg_path)?;
    if let Some(raster_path) = raster_path {
        surface.export_raster(raster_path)?;
    }
    Ok(plan)
}
