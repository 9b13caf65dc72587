//! Catalog data model.
//!
//! Field names follow the camelCase keys of the catalog JSON document.
//! Everything except `id` and `name` is optional in the document; absent
//! display strings become empty and absent sequences become empty.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ProductId
// ============================================================================

/// Product identifier as it appears in the catalog document.
///
/// Ids may be strings or numbers. Equality is type-sensitive: the string
/// `"1"` and the number `1` are different ids, so a URL parameter (always
/// text) only matches string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// String id, e.g. `"lemon-pack"`.
    Text(String),
    /// Numeric id, e.g. `7`.
    Number(serde_json::Number),
}

impl ProductId {
    /// Returns the id as text, exactly as it would appear in a URL.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

// ============================================================================
// Product record
// ============================================================================

/// A named feature with a short explanation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// Feature title.
    pub title: String,
    /// Feature explanation.
    pub description: String,
}

/// One entry of a detailed-content item grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionItem {
    /// Item name.
    pub name: String,
    /// Item explanation.
    pub description: String,
}

/// A free-form section on the product detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// Section heading.
    pub heading: String,
    /// Optional item grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SectionItem>>,
    /// Optional paragraph text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ContentSection {
    /// Paragraph text, if present and non-empty.
    pub fn paragraph(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// One product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Lookup key and detail-page URL parameter value.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Hero subtitle on the detail page.
    #[serde(default)]
    pub subtitle: String,
    /// One-line summary shown on cards.
    #[serde(default)]
    pub short_description: String,
    /// Long description; also the page meta description.
    #[serde(default)]
    pub description: String,
    /// Grouping key used for related products.
    #[serde(default)]
    pub category: String,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// Raw price string, e.g. `"$49.99"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Raw price range string, e.g. `"$10 to $20"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Tag chips, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Titled features listed under the description.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Extra description sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_content: Option<Vec<ContentSection>>,
    /// Spec name to spec value, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<IndexMap<String, Value>>,
    /// Short key feature lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_features: Option<Vec<String>>,
    /// User guide URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_guide: Option<String>,
    /// Purchase link.
    #[serde(default)]
    pub fab_url: String,
}

impl ProductRecord {
    /// Raw price shown on the detail page: the range when it is non-empty,
    /// the single price otherwise.
    pub fn display_price(&self) -> Option<&str> {
        self.price_range
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(self.price.as_deref())
    }

    /// User guide URL, if present and non-empty.
    pub fn user_guide_url(&self) -> Option<&str> {
        self.user_guide.as_deref().filter(|u| !u.is_empty())
    }

    /// Technical details as display pairs, in document order.
    pub fn technical_entries(&self) -> Vec<(&str, String)> {
        self.technical_details
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), scalar_text(value)))
            .collect()
    }
}

// ============================================================================
// Metadata and document
// ============================================================================

/// A homepage statistic widget value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Headline value; text or number in the document.
    pub value: Value,
    /// Caption under the value.
    #[serde(default)]
    pub label: String,
}

impl Stat {
    /// The headline value as display text.
    pub fn value_text(&self) -> String {
        scalar_text(&self.value)
    }
}

/// Homepage-level aggregate display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Stat widgets, filled by position.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// About-section text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogMetadata {
    /// About text, if present and non-empty.
    pub fn about(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// The complete catalog JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Products in catalog order.
    pub products: Vec<ProductRecord>,
    /// Homepage metadata.
    pub metadata: CatalogMetadata,
}

/// Display text for a JSON scalar: strings verbatim, everything else in
/// its JSON form.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
