/// Core error types for Contour
use thiserror::Error;

/// Result type alias using `ContourError`
pub type Result<T> = std::result::Result<T, ContourError>;

/// Core error type for Contour
#[derive(Error, Debug)]
pub enum ContourError {
    /// Preset persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Signal-model errors
    #[error("Model error: {0}")]
    Model(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "Band" or "Preset"
        entity: String,
        /// Identifier that failed to resolve
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ContourError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
