use thiserror::Error;

use crate::layout::LayoutError;
use crate::surface::SurfaceError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    InvalidLayout(#[from] LayoutError),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}
