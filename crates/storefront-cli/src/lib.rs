//! # storefront-cli
//!
//! Command-line front end for Storefront:
//! - Render a homepage or product page view to a static HTML document
//! - Format raw price strings as charm prices
//! - List catalog entries
//! - Inspect and create the config file
//!
//! [`App`] drives a single page view and can be embedded directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use app::App;
pub use error::{Error, Result};
