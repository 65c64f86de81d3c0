//! Error types for the longplan library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all longplan operations.
///
/// Generation and progression never fail; errors come from validating
/// caller input and from the plan store.
#[derive(Error, Debug)]
pub enum LongPlanError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LongPlanError {
        LongPlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LongPlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for attaching a path to I/O results.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`LongPlanError::FileSystem`] at `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| LongPlanError::file_system(path, e))
    }
}

/// Result type alias for longplan operations
pub type Result<T> = std::result::Result<T, LongPlanError>;
