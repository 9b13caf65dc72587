//! Product catalog model, loading, lookup, and price formatting.
//!
//! This crate owns everything that happens to catalog data before it is
//! turned into markup. It has no presentation logic.
//!
//! # Modules
//!
//! - [`model`]: Product records, metadata, and the catalog document
//! - [`price`]: Charm-price formatting of raw price strings
//! - [`source`]: Where the catalog document is fetched from
//! - [`catalog`]: The loaded, read-only catalog and its accessors
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::{ProductCatalog, ProductId, parse_document};
//!
//! let json = r#"{
//!     "products": [{"id": "lemon-1", "name": "Lemon Pack", "price": "$9.50"}],
//!     "metadata": {"stats": []}
//! }"#;
//!
//! let catalog = ProductCatalog::from_document(parse_document(json).unwrap());
//! let product = catalog.find_by_id(&ProductId::from("lemon-1")).unwrap();
//! assert_eq!(product.name, "Lemon Pack");
//! assert_eq!(storefront_catalog::format_usd_price("$9.50"), "$9.99");
//! ```

pub mod catalog;
pub mod model;
pub mod price;
pub mod source;

// Re-export commonly used types
pub use catalog::{DEFAULT_RELATED_LIMIT, ProductCatalog, parse_document};
pub use model::{
    CatalogDocument, CatalogMetadata, ContentSection, Feature, ProductId, ProductRecord,
    SectionItem, Stat,
};
pub use price::{charm_price, format_optional_price, format_usd_price};
pub use source::{CatalogSource, FileSource, HttpSource, InlineSource, source_for};
