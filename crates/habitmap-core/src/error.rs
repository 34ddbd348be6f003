//! Core error types for habitmap-core.
//!
//! Label handling and malformed activity keys never produce errors; what
//! remains are configuration problems, drawing-surface failures and IO.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitmap-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Drawing-surface errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write an artifact to its destination
    #[error("Failed to write image to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether this error originates from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, CoreError::Io(_) | CoreError::WriteFailed { .. })
    }
}

/// Unrecoverable drawing-surface failures. A render call that hits one of
/// these never yields a partial image.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No usable font faces were found
    #[error("No font faces available (searched: {searched})")]
    FontMissing { searched: String },

    /// Font file could not be read
    #[error("Failed to load font from {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Canvas could not be allocated
    #[error("Failed to allocate {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    /// The scene document was rejected by the rasterizer
    #[error("Invalid scene: {0}")]
    Scene(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
