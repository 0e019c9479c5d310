use serde::{Deserialize, Serialize};

/// Fill colour of one segment.
///
/// White may be marked transparent, meaning nothing is painted and the
/// background shows through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "color", rename_all = "snake_case")]
pub enum Color {
    Black,
    White {
        #[serde(default)]
        transparent: bool,
    },
}

impl Color {
    pub const WHITE: Color = Color::White { transparent: false };

    pub fn is_painted(self) -> bool {
        !matches!(self, Color::White { transparent: true })
    }

    pub fn with_transparent_white(self, transparent: bool) -> Self {
        match self {
            Color::Black => Color::Black,
            Color::White { .. } => Color::White { transparent },
        }
    }

    pub(crate) fn for_level(high: bool) -> Self {
        if high { Color::Black } else { Color::WHITE }
    }
}

/// One rectangle drawn left to right from the current cursor.
///
/// # Examples
/// ```
/// use linepaint_core::{Color, Segment};
///
/// let segment = Segment::new(Color::Black, 10.0, 20.0);
/// assert!(segment.color.is_painted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(flatten)]
    pub color: Color,
    pub width: f64,
    pub height: f64,
}

impl Segment {
    pub fn new(color: Color, width: f64, height: f64) -> Self {
        Self {
            color,
            width,
            height,
        }
    }
}

/// Segments produced for a single bit, in draw order (one or two).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedBit {
    segments: [Segment; 2],
    len: usize,
}

impl EncodedBit {
    pub(crate) fn full(segment: Segment) -> Self {
        Self {
            segments: [segment; 2],
            len: 1,
        }
    }

    pub(crate) fn split(first: Segment, second: Segment) -> Self {
        Self {
            segments: [first, second],
            len: 2,
        }
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn total_width(&self) -> f64 {
        self.as_slice().iter().map(|segment| segment.width).sum()
    }
}
