use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid layout: line count must be at least 1")]
    ZeroLines,
    #[error("invalid layout: input has no bits to lay out")]
    EmptyInput,
    #[error("invalid layout: canvas must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}
