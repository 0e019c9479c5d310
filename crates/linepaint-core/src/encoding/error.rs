use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unknown encoding '{name}' (expected one of: {expected})")]
    UnknownVariant { name: String, expected: String },
}
