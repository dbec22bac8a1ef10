//! Error handling module for Truckload
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The calculator itself never fails (invalid boxes degrade to the "-"
//! sentinel); these errors cover the terminal, the catalog file and the CLI.

use thiserror::Error;

/// Main error type for Truckload
#[derive(Error, Debug)]
pub enum TruckloadError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog errors (loading, structure)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (catalog values, CLI values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A preset name that is not in the active catalog
    #[error("Unknown preset '{name}'. Valid presets: {valid}")]
    UnknownPreset { name: String, valid: String },
}

/// Result type alias for Truckload operations
pub type Result<T> = std::result::Result<T, TruckloadError>;

// Convenient error constructors
impl TruckloadError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an unknown preset error listing the valid names
    pub fn unknown_preset<'a>(
        name: impl Into<String>,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            valid: valid.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
