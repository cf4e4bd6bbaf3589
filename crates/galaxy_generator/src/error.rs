//! Error types for galaxy generation

use thiserror::Error;

/// Result type for generation operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur while generating a point cloud
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeneratorError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            GeneratorError::InvalidParameter { name, .. } => name,
        }
    }
}
