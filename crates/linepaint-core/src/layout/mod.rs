//! Row layout.
//!
//! The bit sequence is cut into rows of `ceil(bits / lines)` bits; only the
//! last row may be shorter. Every bit gets the same horizontal slot,
//! `canvas_width / row_bit_width`, so a short last row simply ends early.
//! Row height always divides the canvas by the requested line count, even
//! when fewer rows are actually produced.

pub mod error;

use crate::bits::{BitSequence, Bits};

pub use error::LayoutError;

/// One rendering line: a contiguous slice of the bit sequence.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub index: usize,
    pub bits: &'a Bits,
}

impl Row<'_> {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Rows plus the per-segment geometry shared by all of them.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub rows: Vec<Row<'a>>,
    pub row_bit_width: usize,
    pub segment_width: f64,
    pub row_height: f64,
}

pub fn layout(
    bits: &BitSequence,
    num_lines: usize,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Layout<'_>, LayoutError> {
    if num_lines == 0 {
        return Err(LayoutError::ZeroLines);
    }
    if !is_positive(canvas_width) || !is_positive(canvas_height) {
        return Err(LayoutError::InvalidCanvas {
            width: canvas_width,
            height: canvas_height,
        });
    }
    let row_bit_width = bits.len().div_ceil(num_lines);
    if row_bit_width == 0 {
        return Err(LayoutError::EmptyInput);
    }

    let rows = bits
        .as_bitslice()
        .chunks(row_bit_width)
        .enumerate()
        .map(|(index, bits)| Row { index, bits })
        .collect();

    Ok(Layout {
        rows,
        row_bit_width,
        segment_width: canvas_width / row_bit_width as f64,
        row_height: canvas_height / num_lines as f64,
    })
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
