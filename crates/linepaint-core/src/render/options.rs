use serde::{Deserialize, Serialize};

use crate::Encoding;

pub const DEFAULT_LINES: usize = 1;
pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// Per-run rendering parameters.
///
/// # Examples
/// ```
/// use linepaint_core::{Encoding, RenderOptions};
///
/// let options = RenderOptions {
///     encoding: Encoding::Manchester,
///     ..RenderOptions::default()
/// };
/// assert_eq!(options.lines, 1);
/// assert_eq!(options.width, 600.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Number of rows the bit sequence is split into.
    pub lines: usize,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    pub encoding: Encoding,
    /// Leave white segments unpainted.
    pub transparent_white: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            encoding: Encoding::Naive,
            transparent_white: false,
        }
    }
}
