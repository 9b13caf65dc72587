//! Render targets and the surface the renderer writes into.
//!
//! The renderer never addresses presentation directly. It names a logical
//! [`RenderTarget`] and asks the injected [`RenderSurface`] to update it.
//! Every surface operation on a target the page does not have is a no-op,
//! so pages may omit any hook.

use std::fmt;

use crate::markup::Markup;

/// A named hook on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderTarget {
    /// The document `<title>`.
    DocumentTitle,
    /// The `<meta name="description">` tag.
    MetaDescription,
    /// Breadcrumb trail on the detail page.
    Breadcrumb,
    /// Detail hero heading.
    HeroTitle,
    /// Detail hero subtitle.
    HeroSubtitle,
    /// Image gallery container.
    Gallery,
    /// Long description container.
    Description,
    /// Price text in the purchase card.
    Price,
    /// Purchase card container.
    PurchaseCard,
    /// Purchase link inside the purchase card.
    BuyButton,
    /// Technical specifications list.
    SpecsList,
    /// Key features list.
    FeaturesList,
    /// Tag container.
    TagsContainer,
    /// Related products section (hidden when there is nothing related).
    RelatedSection,
    /// Card grid inside the related products section.
    RelatedGrid,
    /// Homepage product card grid.
    ProductGrid,
    /// Heading of the n-th homepage stat widget.
    StatValue(usize),
    /// Label of the n-th homepage stat widget.
    StatLabel(usize),
    /// Homepage about-section paragraph.
    AboutText,
}

impl RenderTarget {
    /// Selector of the hook in the reference page markup.
    pub fn selector(&self) -> String {
        match self {
            Self::DocumentTitle => "title".to_string(),
            Self::MetaDescription => "meta[name=\"description\"]".to_string(),
            Self::Breadcrumb => ".breadcrumb".to_string(),
            Self::HeroTitle => ".product-hero h1".to_string(),
            Self::HeroSubtitle => ".product-hero .subtitle".to_string(),
            Self::Gallery => ".product-gallery".to_string(),
            Self::Description => ".product-description".to_string(),
            Self::Price => ".price-section .price".to_string(),
            Self::PurchaseCard => ".purchase-card".to_string(),
            Self::BuyButton => ".purchase-card .btn".to_string(),
            Self::SpecsList => ".specs-list".to_string(),
            Self::FeaturesList => ".features-list".to_string(),
            Self::TagsContainer => ".tags-container".to_string(),
            Self::RelatedSection => ".related-products".to_string(),
            Self::RelatedGrid => ".related-products .product-grid".to_string(),
            Self::ProductGrid => ".product-grid".to_string(),
            Self::StatValue(i) => format!(".stat-item:nth-of-type({}) h3", i + 1),
            Self::StatLabel(i) => format!(".stat-item:nth-of-type({}) p", i + 1),
            Self::AboutText => ".about > .container > p".to_string(),
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// A page the renderer can write into.
///
/// Implementations must treat every operation on an absent target as a
/// no-op.
pub trait RenderSurface {
    /// Whether the page has this hook.
    fn has(&self, target: RenderTarget) -> bool;

    /// Replace the hook's content with plain text.
    fn set_text(&mut self, target: RenderTarget, text: &str);

    /// Replace the hook's content with markup.
    fn set_html(&mut self, target: RenderTarget, html: Markup);

    /// Set an attribute on the hook's element.
    fn set_attr(&mut self, target: RenderTarget, name: &str, value: &str);

    /// Insert markup immediately after the hook's element.
    fn insert_after(&mut self, target: RenderTarget, html: Markup);

    /// Hide the hook's element entirely.
    fn hide(&mut self, target: RenderTarget);

    /// Replace the whole page body.
    fn replace_body(&mut self, html: Markup);

    /// Number of stat widgets on the page.
    fn stat_slots(&self) -> usize;
}
