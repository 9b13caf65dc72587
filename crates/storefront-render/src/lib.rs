//! Page rendering for Storefront.
//!
//! The renderer writes catalog content into a [`RenderSurface`], an
//! injected binding to whatever holds the page. [`PageSurface`] is the
//! in-memory implementation used to produce static HTML documents.
//!
//! # Modules
//!
//! - [`markup`]: HTML escaping and the trusted [`Markup`] fragment type
//! - [`surface`]: Render targets and the [`RenderSurface`] trait
//! - [`page`]: In-memory page layouts emitting HTML documents
//! - [`location`]: The URL of the page being rendered
//! - [`fragments`]: Markup builders for cards, breadcrumbs, and lists
//! - [`renderer`]: Detail/grid dispatch over a loaded catalog
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::{ProductCatalog, parse_document};
//! use storefront_render::{PageLocation, PageRenderer, PageSurface, RenderOutcome};
//!
//! let json = r#"{"products": [{"id": "lemon-1", "name": "Lemon Pack"}], "metadata": {}}"#;
//! let catalog = ProductCatalog::from_document(parse_document(json).unwrap());
//!
//! let location = PageLocation::parse("product.html?id=lemon-1");
//! let mut page = PageSurface::new(location.page_kind(4));
//! let outcome = PageRenderer::default().dispatch(&catalog, &location, &mut page);
//!
//! assert_eq!(outcome, RenderOutcome::Detail("lemon-1".into()));
//! assert!(page.to_html().contains("<title>Lemon Pack | MythicLemon</title>"));
//! ```

#![warn(clippy::all)]

pub mod fragments;
pub mod location;
pub mod markup;
pub mod page;
pub mod renderer;
pub mod surface;

// Re-export commonly used types
pub use location::PageLocation;
pub use markup::{Markup, escape_html};
pub use page::{DEFAULT_STAT_SLOTS, PageKind, PageSurface};
pub use renderer::{PageRenderer, PageState, RenderOptions, RenderOutcome};
pub use surface::{RenderSurface, RenderTarget};
