//! The loaded product catalog.
//!
//! A [`ProductCatalog`] is filled once from a [`CatalogSource`] and is
//! read-only afterwards. A failed load leaves it empty; it never holds a
//! partially parsed document.

use storefront_core::{Error, Result};

use crate::model::{CatalogDocument, CatalogMetadata, ProductId, ProductRecord};
use crate::source::CatalogSource;

/// Number of related products shown when no limit is configured.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Parse catalog JSON text into a document.
///
/// Fails on malformed JSON and on missing required fields (`products`,
/// `metadata`, and each product's `id` and `name`).
pub fn parse_document(json: &str) -> Result<CatalogDocument> {
    serde_json::from_str(json).map_err(Error::from)
}

/// In-memory product list and homepage metadata.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
    metadata: CatalogMetadata,
    loaded: bool,
}

impl ProductCatalog {
    /// Create an empty, unloaded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loaded catalog from an already parsed document.
    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            products: document.products,
            metadata: document.metadata,
            loaded: true,
        }
    }

    /// Fetch and parse the catalog, returning the cause on failure.
    ///
    /// On failure the catalog is reset to empty.
    pub async fn try_load(&mut self, source: &dyn CatalogSource) -> Result<()> {
        log::debug!("Loading catalog from {}", source.describe());
        let result = match source.fetch().await {
            Ok(body) => parse_document(&body),
            Err(e) => Err(e),
        };

        match result {
            Ok(document) => {
                *self = Self::from_document(document);
                log::debug!("Loaded {} products", self.products.len());
                Ok(())
            }
            Err(e) => {
                *self = Self::new();
                Err(e)
            }
        }
    }

    /// Fetch and parse the catalog; `false` on any failure.
    ///
    /// Failures are logged, never propagated.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> bool {
        match self.try_load(source).await {
            Ok(()) => true,
            Err(e) if e.is_transport() => {
                log::error!("Error loading products from {}: {e}", source.describe());
                false
            }
            Err(e) => {
                log::error!("Invalid catalog document from {}: {e}", source.describe());
                false
            }
        }
    }

    /// Whether a document has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Homepage metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product whose id equals `id` (type-sensitive).
    pub fn find_by_id(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Featured products in catalog order.
    pub fn featured(&self) -> Vec<&ProductRecord> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products with exactly this category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Up to `limit` products sharing `product`'s category, excluding any
    /// record with `product`'s id, in catalog order.
    pub fn related_to(&self, product: &ProductRecord, limit: usize) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}
