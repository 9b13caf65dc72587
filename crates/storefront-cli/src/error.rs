//! Error types for storefront-cli

use thiserror::Error;

/// Result type alias for storefront-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in storefront-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from storefront-core (config, I/O, catalog parsing)
    #[error(transparent)]
    Core(#[from] storefront_core::Error),

    /// The catalog could not be loaded for a page render
    #[error("Catalog could not be loaded from {location}")]
    LoadFailed {
        /// Configured catalog location
        location: String,
    },
}
