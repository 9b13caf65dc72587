//! The page renderer.
//!
//! [`PageRenderer::dispatch`] picks the page variant from the location:
//! a non-empty `id` parameter selects the detail page, otherwise a page with
//! a product grid hook gets the grid and homepage metadata. Each step
//! writes only to hooks the surface has.

use std::fmt;

use storefront_catalog::{
    CatalogMetadata, DEFAULT_RELATED_LIMIT, ProductCatalog, ProductId, ProductRecord,
    format_optional_price,
};

use crate::fragments;
use crate::location::PageLocation;
use crate::surface::{RenderSurface, RenderTarget};

// ============================================================================
// Options and outcomes
// ============================================================================

/// Presentation settings for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Brand appended to detail page titles (`"<name> | <site>"`).
    pub site_name: String,
    /// Maximum related products on a detail page.
    pub related_limit: usize,
    /// Maximum tags on a grid card.
    pub card_tag_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "MythicLemon".to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            card_tag_limit: 3,
        }
    }
}

/// Where a page view is in its load-render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Nothing started, or nothing to render.
    Idle,
    /// Catalog load in flight.
    Loading,
    /// Catalog load failed; placeholders stand.
    Failed,
    /// Rendering a product detail page.
    DetailMode,
    /// Rendering the product grid.
    GridMode,
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Failed => write!(f, "failed"),
            Self::DetailMode => write!(f, "detail"),
            Self::GridMode => write!(f, "grid"),
        }
    }
}

/// What a page view ended up rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The catalog could not be loaded; nothing was rendered.
    Failed,
    /// The requested product does not exist; the body was replaced.
    NotFound(ProductId),
    /// A product detail page was rendered.
    Detail(ProductId),
    /// The product grid was rendered.
    Grid {
        /// Number of cards rendered.
        cards: usize,
    },
    /// Neither an id nor a grid hook; nothing to do.
    Skipped,
}

impl RenderOutcome {
    /// Final page state for this outcome.
    pub fn state(&self) -> PageState {
        match self {
            Self::Failed => PageState::Failed,
            Self::NotFound(_) | Self::Detail(_) => PageState::DetailMode,
            Self::Grid { .. } => PageState::GridMode,
            Self::Skipped => PageState::Idle,
        }
    }
}

// ============================================================================
// PageRenderer
// ============================================================================

/// Writes catalog content into a [`RenderSurface`].
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    options: RenderOptions,
}

impl PageRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The renderer's options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the variant selected by `location`.
    pub fn dispatch(
        &self,
        catalog: &ProductCatalog,
        location: &PageLocation,
        surface: &mut dyn RenderSurface,
    ) -> RenderOutcome {
        if let Some(id) = location.product_id() {
            log::debug!("Rendering detail page for {id}");
            return self.render_detail(catalog, &id, surface);
        }

        if surface.has(RenderTarget::ProductGrid) {
            log::debug!("Rendering product grid");
            let cards = self.render_grid(catalog.products(), surface);
            self.render_homepage_metadata(catalog.metadata(), surface);
            return RenderOutcome::Grid { cards };
        }

        log::debug!("No product id and no product grid on {}", location.path());
        RenderOutcome::Skipped
    }

    /// Render the detail page for `id`, or the not-found page.
    pub fn render_detail(
        &self,
        catalog: &ProductCatalog,
        id: &ProductId,
        surface: &mut dyn RenderSurface,
    ) -> RenderOutcome {
        use RenderTarget::*;

        let Some(product) = catalog.find_by_id(id) else {
            log::warn!("Product not found: {id}");
            self.render_not_found(surface);
            return RenderOutcome::NotFound(id.clone());
        };

        surface.set_text(
            DocumentTitle,
            &format!("{} | {}", product.name, self.options.site_name),
        );
        surface.set_attr(MetaDescription, "content", &product.description);

        if surface.has(Breadcrumb) {
            surface.set_html(Breadcrumb, fragments::breadcrumb(&product.name));
        }

        surface.set_text(HeroTitle, &product.name);
        surface.set_text(HeroSubtitle, &product.subtitle);

        if surface.has(Gallery) {
            surface.set_html(Gallery, fragments::gallery_image(product));
        }
        if surface.has(Description) {
            surface.set_html(Description, fragments::description_block(product));
        }

        self.render_purchase(product, surface);

        if product.technical_details.is_some() && surface.has(SpecsList) {
            surface.set_html(
                SpecsList,
                fragments::spec_items(product.technical_entries()),
            );
        }
        if let Some(key_features) = &product.key_features
            && surface.has(FeaturesList)
        {
            surface.set_html(FeaturesList, fragments::key_feature_items(key_features));
        }
        if surface.has(TagsContainer) {
            surface.set_html(TagsContainer, fragments::tag_items(&product.tags));
        }

        self.render_related(catalog, product, surface);
        RenderOutcome::Detail(id.clone())
    }

    fn render_purchase(&self, product: &ProductRecord, surface: &mut dyn RenderSurface) {
        use RenderTarget::*;

        surface.set_text(Price, &format_optional_price(product.display_price()));
        surface.set_attr(BuyButton, "href", &product.fab_url);

        if let Some(url) = product.user_guide_url()
            && surface.has(PurchaseCard)
            && surface.has(BuyButton)
        {
            surface.insert_after(BuyButton, fragments::user_guide_button(url));
        }
    }

    /// Replace the whole body with the not-found notice.
    pub fn render_not_found(&self, surface: &mut dyn RenderSurface) {
        surface.replace_body(fragments::not_found_notice());
    }

    /// Fill the product grid with cards; returns the number of cards.
    ///
    /// Returns 0 without touching the page when the grid hook is absent.
    pub fn render_grid<'a, I>(&self, products: I, surface: &mut dyn RenderSurface) -> usize
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        if !surface.has(RenderTarget::ProductGrid) {
            return 0;
        }
        let products: Vec<&ProductRecord> = products.into_iter().collect();
        surface.set_html(
            RenderTarget::ProductGrid,
            fragments::product_cards(products.iter().copied(), Some(self.options.card_tag_limit)),
        );
        products.len()
    }

    /// Fill the related products grid, or hide the section when nothing is
    /// related. Returns the number of related cards.
    pub fn render_related(
        &self,
        catalog: &ProductCatalog,
        product: &ProductRecord,
        surface: &mut dyn RenderSurface,
    ) -> usize {
        if !surface.has(RenderTarget::RelatedGrid) {
            return 0;
        }

        let related = catalog.related_to(product, self.options.related_limit);
        if related.is_empty() {
            surface.hide(RenderTarget::RelatedSection);
            return 0;
        }

        surface.set_html(
            RenderTarget::RelatedGrid,
            fragments::product_cards(related.iter().copied(), None),
        );
        related.len()
    }

    /// Fill stat widgets by position and the about text.
    ///
    /// Widgets beyond the available stats keep their content.
    pub fn render_homepage_metadata(
        &self,
        metadata: &CatalogMetadata,
        surface: &mut dyn RenderSurface,
    ) {
        let slots = surface.stat_slots();
        for (i, stat) in metadata.stats.iter().enumerate().take(slots) {
            surface.set_text(RenderTarget::StatValue(i), &stat.value_text());
            surface.set_text(RenderTarget::StatLabel(i), &stat.label);
        }

        if let Some(about) = metadata.about() {
            surface.set_text(RenderTarget::AboutText, about);
        }
    }
}
