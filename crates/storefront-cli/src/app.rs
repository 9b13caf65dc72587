//! One page view: load the catalog, then render.

use storefront_catalog::{CatalogSource, ProductCatalog, source_for};
use storefront_core::{SiteConfig, StorefrontConfig};
use storefront_render::{
    PageLocation, PageRenderer, PageState, RenderOptions, RenderOutcome, RenderSurface,
};

/// Renderer settings derived from the `[site]` config table.
pub fn render_options(site: &SiteConfig) -> RenderOptions {
    RenderOptions {
        site_name: site.name.clone(),
        related_limit: site.related_limit,
        card_tag_limit: site.card_tag_limit,
    }
}

/// Drives a page view over a configured catalog source.
///
/// Owned by the caller; each [`App::run`] starts from an empty catalog.
#[derive(Debug)]
pub struct App {
    config: StorefrontConfig,
    renderer: PageRenderer,
    catalog: ProductCatalog,
    state: PageState,
}

impl App {
    /// Create an app for the given configuration.
    pub fn new(config: StorefrontConfig) -> Self {
        let renderer = PageRenderer::new(render_options(&config.site));
        Self {
            config,
            renderer,
            catalog: ProductCatalog::new(),
            state: PageState::Idle,
        }
    }

    /// The configuration this app was built with.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Catalog from the most recent run; empty before the first run or
    /// after a failed load.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// State reached by the most recent run.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Load the catalog from the configured source and render `location`.
    pub async fn run(
        &mut self,
        location: &PageLocation,
        surface: &mut dyn RenderSurface,
    ) -> RenderOutcome {
        match source_for(&self.config.catalog.source) {
            Ok(source) => self.run_with(source.as_ref(), location, surface).await,
            Err(e) => {
                log::error!("{e}");
                self.catalog = ProductCatalog::new();
                self.state = PageState::Failed;
                RenderOutcome::Failed
            }
        }
    }

    /// Like [`App::run`], with an explicit catalog source.
    pub async fn run_with(
        &mut self,
        source: &dyn CatalogSource,
        location: &PageLocation,
        surface: &mut dyn RenderSurface,
    ) -> RenderOutcome {
        self.state = PageState::Loading;
        self.catalog = ProductCatalog::new();

        if !self.catalog.load(source).await {
            self.state = PageState::Failed;
            return RenderOutcome::Failed;
        }

        let outcome = self.renderer.dispatch(&self.catalog, location, surface);
        self.state = outcome.state();
        log::info!("Rendered {} ({})", location.path(), self.state);
        outcome
    }
}
