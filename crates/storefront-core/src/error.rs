//! Error types for Storefront.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading configuration or catalog data.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error at {path}: {source}")]
    IoWithPath {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error (malformed document, missing fields)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP fetch error (connection failure, non-success status)
    #[error("HTTP error: {message}")]
    Http {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Catalog error (source could not be used)
    #[error("Catalog error: {message}")]
    Catalog {
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type alias for Storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error that records the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new HTTP error.
    pub fn http<S: Into<String>>(message: S) -> Self {
        Error::Http {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new catalog error.
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Error::Catalog {
            message: message.into(),
        }
    }

    /// Returns whether this error came from reading the catalog source
    /// rather than from its content.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::IoWithPath { .. } | Error::Http { .. }
        )
    }
}
