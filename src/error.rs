//! Error types for the sarissa doc-values fields.
//!
//! Every failure in this crate is a caller contract violation raised at the
//! point of misuse. All of them are represented by [`SarissaError`].
//!
//! # Examples
//!
//! ```
//! use sarissa_docvalues::error::{Result, SarissaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SarissaError::invalid_argument("field name must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for sarissa doc-values operations.
#[derive(Error, Debug)]
pub enum SarissaError {
    /// Null/empty name, missing payload or out-of-bounds byte range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field type was mutated after it was frozen.
    #[error("Frozen configuration: {0}")]
    FrozenConfiguration(String),

    /// A value kind disagrees with the declared doc values type.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SarissaError.
pub type Result<T> = std::result::Result<T, SarissaError>;

impl SarissaError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SarissaError::InvalidArgument(msg.into())
    }

    /// Create a new frozen configuration error.
    pub fn frozen_configuration<S: Into<String>>(msg: S) -> Self {
        SarissaError::FrozenConfiguration(msg.into())
    }

    /// Create a new type mismatch error.
    pub fn type_mismatch<S: Into<String>>(msg: S) -> Self {
        SarissaError::TypeMismatch(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(msg.into())
    }
}
