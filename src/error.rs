//! Error types for the vision demo.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Classifier download failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Video source could not be opened or read
    #[error("Camera error: {0}")]
    Camera(String),

    /// Video sink could not be opened or written
    #[error("Recorder error: {0}")]
    Recorder(String),

    /// Cascade model missing, malformed or not downloadable
    #[error("Model error: {0}")]
    Model(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
