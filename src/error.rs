//! Error types for the Sentir library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SentirError`] enum. Variants are split by who is expected to react:
//!
//! - Initialization failures ([`SentirError::ResourceLoad`],
//!   [`SentirError::ArtifactCorrupt`]) abort startup.
//! - [`SentirError::ArtifactNotFound`] is recoverable and triggers a
//!   fallback training run.
//! - Training input problems ([`SentirError::InputLengthMismatch`],
//!   [`SentirError::InsufficientData`]) fail the single call.
//! - [`SentirError::PredictBeforeTrain`] is a contract violation by the caller.
//!
//! # Examples
//!
//! ```
//! use sentir::error::{Result, SentirError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentirError::insufficient_data("need at least 2 samples"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for Sentir operations.
#[derive(Error, Debug)]
pub enum SentirError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The linguistic resource required by the normalizer could not be loaded.
    #[error("Resource load error: {0}")]
    ResourceLoad(String),

    /// No persisted model exists at the given path.
    #[error("Model artifact not found: {path}")]
    ArtifactNotFound { path: String },

    /// A persisted model exists but cannot be reconstructed.
    #[error("Model artifact corrupt: {path}: {reason}")]
    ArtifactCorrupt { path: String, reason: String },

    /// Training texts and labels differ in count.
    #[error("Input length mismatch: {texts} texts but {labels} labels")]
    InputLengthMismatch { texts: usize, labels: usize },

    /// Too few samples or classes to train or evaluate.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Inference was requested before a model was trained or loaded.
    #[error("Prediction requested before the model was trained")]
    PredictBeforeTrain,

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dataset parsing errors (label lists, message files).
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Out-of-range configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid operation for the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SentirError.
pub type Result<T> = std::result::Result<T, SentirError>;

impl SentirError {
    /// Create a new resource load error.
    pub fn resource_load<S: Into<String>>(msg: S) -> Self {
        SentirError::ResourceLoad(msg.into())
    }

    /// Create a new artifact-not-found error for `path`.
    pub fn artifact_not_found<P: AsRef<Path>>(path: P) -> Self {
        SentirError::ArtifactNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a new artifact-corrupt error for `path`.
    pub fn artifact_corrupt<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        SentirError::ArtifactCorrupt {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a new insufficient data error.
    pub fn insufficient_data<S: Into<String>>(msg: S) -> Self {
        SentirError::InsufficientData(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentirError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SentirError::Dataset(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SentirError::InvalidConfig(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SentirError::InvalidOperation(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        SentirError::Serialization(msg.into())
    }

    /// Whether this error means the artifact is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SentirError::ArtifactNotFound { .. })
    }
}
