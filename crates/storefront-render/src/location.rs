//! The URL of the page being rendered.

use storefront_catalog::ProductId;

use crate::page::PageKind;

/// Detail page file name; product links point here.
pub const PRODUCT_PAGE: &str = "product.html";

/// Homepage file name.
pub const HOME_PAGE: &str = "index.html";

/// Query parameter carrying the product id.
pub const ID_PARAM: &str = "id";

/// A page URL split into its file path and decoded query pairs.
///
/// ```rust
/// use storefront_render::location::PageLocation;
///
/// let loc = PageLocation::parse("/shop/product.html?id=lemon%201#top");
/// assert_eq!(loc.path(), "/shop/product.html");
/// assert_eq!(loc.param("id"), Some("lemon 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    path: String,
    query: Vec<(String, String)>,
}

impl PageLocation {
    /// Parse a relative or absolute page URL. Never fails; anything
    /// unparseable ends up in the path.
    pub fn parse(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        Self {
            path: path.to_string(),
            query: url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Location of the homepage.
    pub fn home() -> Self {
        Self::parse(HOME_PAGE)
    }

    /// The path part.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The requested product, if a non-empty `id` parameter is present.
    ///
    /// The parameter is always text, so it only matches string ids.
    pub fn product_id(&self) -> Option<ProductId> {
        self.param(ID_PARAM)
            .filter(|id| !id.is_empty())
            .map(ProductId::from)
    }

    /// File name of the page (last path segment).
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    /// Layout for this URL: the product page layout for `product.html`,
    /// the homepage layout otherwise.
    pub fn page_kind(&self, stat_slots: usize) -> PageKind {
        if self.file_name() == PRODUCT_PAGE {
            PageKind::Product
        } else {
            PageKind::Home { stat_slots }
        }
    }
}

impl From<&str> for PageLocation {
    fn from(url: &str) -> Self {
        Self::parse(url)
    }
}
