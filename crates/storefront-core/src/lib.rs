//! Storefront Core: shared errors and configuration.
//!
//! This crate provides the foundational types used across all Storefront
//! crates. It has no internal Storefront dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration with environment overrides

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{CatalogConfig, LoggingConfig, SiteConfig, StorefrontConfig};
pub use error::{Error, Result};
