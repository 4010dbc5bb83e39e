//! Error types for the foundation mesher

use thiserror::Error;

/// Main error type for model-building operations
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Pedestal id {0} already exists in the plan")]
    DuplicatePedestal(u32),

    #[error("Pedestal id {0} not found in the plan")]
    PedestalNotFound(u32),

    #[error("Pedestal {id} center ({x}, {z}) lies outside the {length} x {width} plan")]
    PedestalOutOfBounds {
        id: u32,
        x: f64,
        z: f64,
        length: f64,
        width: f64,
    },

    #[error("Invalid dimension for '{field}': {value} (must be positive)")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Pedestal height must be non-negative, got {0}")]
    NegativeHeight(f64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for model-building operations
pub type MeshResult<T> = Result<T, MeshError>;
