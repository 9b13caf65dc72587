//! In-memory render surface that produces static HTML documents.
//!
//! A [`PageSurface`] starts from a layout ([`PageKind`]) whose hooks hold
//! placeholder content, the same content a visitor sees when the catalog
//! cannot be loaded. The renderer then overwrites hooks, and
//! [`PageSurface::to_html`] emits the finished document.
//!
//! ```rust
//! use storefront_render::page::{PageKind, PageSurface};
//! use storefront_render::surface::{RenderSurface, RenderTarget};
//!
//! let mut page = PageSurface::new(PageKind::Product).without(RenderTarget::Gallery);
//! page.set_text(RenderTarget::HeroTitle, "Lemon <Pack>");
//! page.set_text(RenderTarget::Gallery, "ignored");
//!
//! assert!(!page.has(RenderTarget::Gallery));
//! assert!(page.to_html().contains("<h1>Lemon &lt;Pack&gt;</h1>"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::markup::{Markup, escape_html};
use crate::surface::{RenderSurface, RenderTarget};

/// Stat widgets on the default homepage layout.
pub const DEFAULT_STAT_SLOTS: usize = 4;

/// Page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Homepage: stat widgets, product grid, about section.
    Home {
        /// Number of stat widgets.
        stat_slots: usize,
    },
    /// Product detail page.
    Product,
    /// No hooks at all; add them with [`PageSurface::with_target`].
    Bare,
}

impl PageKind {
    /// Homepage with the default number of stat widgets.
    pub fn home() -> Self {
        Self::Home {
            stat_slots: DEFAULT_STAT_SLOTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Html(Markup),
}

impl Content {
    fn to_markup(&self) -> Markup {
        match self {
            Self::Text(t) => Markup::text(t),
            Self::Html(m) => m.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    content: Content,
    attrs: Vec<(String, String)>,
    hidden: bool,
    after: Vec<Markup>,
}

impl Slot {
    fn text(text: &str) -> Self {
        Self {
            content: Content::Text(text.to_string()),
            attrs: Vec::new(),
            hidden: false,
            after: Vec::new(),
        }
    }

    fn html(html: &str) -> Self {
        Self {
            content: Content::Html(Markup::trusted(html)),
            ..Self::text("")
        }
    }

    fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }
}

/// A static page held in memory.
#[derive(Debug, Clone)]
pub struct PageSurface {
    kind: PageKind,
    slots: BTreeMap<RenderTarget, Slot>,
    stat_slots: usize,
    body: Option<Markup>,
}

impl PageSurface {
    /// Create a page with every hook of the layout, holding placeholders.
    pub fn new(kind: PageKind) -> Self {
        use RenderTarget::*;

        let mut slots = BTreeMap::new();
        let mut stat_slots = 0;
        match kind {
            PageKind::Home { stat_slots: n } => {
                stat_slots = n;
                slots.insert(DocumentTitle, Slot::text("Storefront"));
                slots.insert(MetaDescription, Slot::text("").with_attr("content", ""));
                slots.insert(
                    ProductGrid,
                    Slot::html("<p class=\"loading\">Loading products...</p>"),
                );
                for i in 0..n {
                    slots.insert(StatValue(i), Slot::text("—"));
                    slots.insert(StatLabel(i), Slot::text("Loading"));
                }
                slots.insert(AboutText, Slot::text("Loading..."));
            }
            PageKind::Product => {
                slots.insert(DocumentTitle, Slot::text("Product"));
                slots.insert(MetaDescription, Slot::text("").with_attr("content", ""));
                slots.insert(Breadcrumb, Slot::html("<a href=\"index.html\">Home</a>"));
                slots.insert(HeroTitle, Slot::text("Loading..."));
                slots.insert(HeroSubtitle, Slot::text(""));
                slots.insert(Gallery, Slot::text(""));
                slots.insert(
                    Description,
                    Slot::html("<p>Loading product details...</p>"),
                );
                slots.insert(Price, Slot::text("—"));
                slots.insert(PurchaseCard, Slot::text(""));
                slots.insert(BuyButton, Slot::text("Buy Now").with_attr("href", "#"));
                slots.insert(SpecsList, Slot::text(""));
                slots.insert(FeaturesList, Slot::text(""));
                slots.insert(TagsContainer, Slot::text(""));
                slots.insert(RelatedSection, Slot::html("<h2>Related Products</h2>"));
                slots.insert(RelatedGrid, Slot::text(""));
            }
            PageKind::Bare => {}
        }

        Self {
            kind,
            slots,
            stat_slots,
            body: None,
        }
    }

    /// Remove a hook, modelling a page that lacks it.
    pub fn without(mut self, target: RenderTarget) -> Self {
        self.slots.remove(&target);
        self
    }

    /// Add an empty hook.
    pub fn with_target(mut self, target: RenderTarget) -> Self {
        self.slots.entry(target).or_insert_with(|| Slot::text(""));
        self
    }

    /// Set the placeholder document title.
    pub fn titled(mut self, title: &str) -> Self {
        if let Some(slot) = self.slots.get_mut(&RenderTarget::DocumentTitle) {
            slot.content = Content::Text(title.to_string());
        }
        self
    }

    /// The page layout.
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Current content of a hook as markup text.
    pub fn content(&self, target: RenderTarget) -> Option<String> {
        self.slots
            .get(&target)
            .map(|slot| slot.content.to_markup().into_string())
    }

    /// Current value of an attribute on a hook.
    pub fn attr(&self, target: RenderTarget, name: &str) -> Option<&str> {
        self.slots.get(&target).and_then(|slot| {
            slot.attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        })
    }

    /// Whether a hook has been hidden.
    pub fn is_hidden(&self, target: RenderTarget) -> bool {
        self.slots.get(&target).is_some_and(|slot| slot.hidden)
    }

    /// Markup inserted after a hook.
    pub fn inserted_after(&self, target: RenderTarget) -> &[Markup] {
        self.slots
            .get(&target)
            .map(|slot| slot.after.as_slice())
            .unwrap_or(&[])
    }

    /// Replacement body, if the body was replaced.
    pub fn body(&self) -> Option<&Markup> {
        self.body.as_ref()
    }

    // ------------------------------------------------------------------------
    // Document emission
    // ------------------------------------------------------------------------

    /// Emit the complete HTML document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        if let Some(title) = self.slots.get(&RenderTarget::DocumentTitle) {
            let _ = writeln!(out, "    <title>{}</title>", title.content.to_markup());
        }
        if self.slots.contains_key(&RenderTarget::MetaDescription) {
            let content = self
                .attr(RenderTarget::MetaDescription, "content")
                .unwrap_or("");
            let _ = writeln!(
                out,
                "    <meta name=\"description\" content=\"{}\">",
                escape_html(content)
            );
        }
        out.push_str("    <link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n");

        match &self.body {
            Some(body) => out.push_str(body.as_str()),
            None => out.push_str(&self.layout_body()),
        }

        out.push_str("\n</body>\n</html>\n");
        out
    }

    fn layout_body(&self) -> String {
        use RenderTarget::*;

        match self.kind {
            PageKind::Home { .. } => {
                let stats: String = (0..self.stat_slots)
                    .map(|i| {
                        format!(
                            "<div class=\"stat-item\">{}{}</div>",
                            self.node(StatValue(i), "h3", ""),
                            self.node(StatLabel(i), "p", "")
                        )
                    })
                    .collect();
                format!(
                    "<main>\n\
                     <section class=\"stats\"><div class=\"container\">{stats}</div></section>\n\
                     <section class=\"products\" id=\"products\"><div class=\"container\"><h2>Products</h2>{grid}</div></section>\n\
                     <section class=\"about\"><div class=\"container\">{about}</div></section>\n\
                     </main>",
                    grid = self.node(ProductGrid, "div", "product-grid"),
                    about = self.node(AboutText, "p", ""),
                )
            }
            PageKind::Product => {
                let purchase = self.wrap(
                    PurchaseCard,
                    "aside",
                    "purchase-card",
                    format!(
                        "<div class=\"price-section\">{}</div>{}",
                        self.node(Price, "span", "price"),
                        self.node(BuyButton, "a", "btn btn-primary btn-block")
                    ),
                );
                let related = self.wrap(
                    RelatedSection,
                    "section",
                    "related-products",
                    self.node(RelatedGrid, "div", "product-grid"),
                );
                format!(
                    "<main class=\"product-page\"><div class=\"container\">\n\
                     {breadcrumb}\n\
                     <section class=\"product-hero\">{title}{subtitle}</section>\n\
                     <div class=\"product-layout\">{gallery}{description}{purchase}</div>\n\
                     <div class=\"product-specs\">{specs}{features}{tags}</div>\n\
                     {related}\n\
                     </div></main>",
                    breadcrumb = self.node(Breadcrumb, "nav", "breadcrumb"),
                    title = self.node(HeroTitle, "h1", ""),
                    subtitle = self.node(HeroSubtitle, "p", "subtitle"),
                    gallery = self.node(Gallery, "div", "product-gallery"),
                    description = self.node(Description, "div", "product-description"),
                    specs = self.node(SpecsList, "ul", "specs-list"),
                    features = self.node(FeaturesList, "ul", "features-list"),
                    tags = self.node(TagsContainer, "div", "tags-container"),
                )
            }
            PageKind::Bare => self
                .slots
                .keys()
                .filter(|t| !matches!(t, DocumentTitle | MetaDescription))
                .map(|t| self.node(*t, "div", ""))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Emit a hook's element with its content, or nothing if absent.
    fn node(&self, target: RenderTarget, tag: &str, class: &str) -> String {
        match self.slots.get(&target) {
            Some(slot) => self.element(slot, tag, class, String::new()),
            None => String::new(),
        }
    }

    /// Emit a container hook around `inner`; without the hook only `inner`
    /// is emitted.
    fn wrap(&self, target: RenderTarget, tag: &str, class: &str, inner: String) -> String {
        match self.slots.get(&target) {
            Some(slot) => self.element(slot, tag, class, inner),
            None => inner,
        }
    }

    fn element(&self, slot: &Slot, tag: &str, class: &str, inner: String) -> String {
        let mut out = format!("<{tag}");
        if !class.is_empty() {
            let _ = write!(out, " class=\"{class}\"");
        }
        for (name, value) in &slot.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        if slot.hidden {
            out.push_str(" style=\"display: none\"");
        }
        let _ = write!(out, ">{}{inner}</{tag}>", slot.content.to_markup());
        for extra in &slot.after {
            out.push_str(extra.as_str());
        }
        out
    }
}

impl RenderSurface for PageSurface {
    fn has(&self, target: RenderTarget) -> bool {
        self.slots.contains_key(&target)
    }

    fn set_text(&mut self, target: RenderTarget, text: &str) {
        if let Some(slot) = self.slots.get_mut(&target) {
            slot.content = Content::Text(text.to_string());
        }
    }

    fn set_html(&mut self, target: RenderTarget, html: Markup) {
        if let Some(slot) = self.slots.get_mut(&target) {
            slot.content = Content::Html(html);
        }
    }

    fn set_attr(&mut self, target: RenderTarget, name: &str, value: &str) {
        if let Some(slot) = self.slots.get_mut(&target) {
            match slot.attrs.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => slot.attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn insert_after(&mut self, target: RenderTarget, html: Markup) {
        if let Some(slot) = self.slots.get_mut(&target) {
            // Newest insert sits directly after the element.
            slot.after.insert(0, html);
        }
    }

    fn hide(&mut self, target: RenderTarget) {
        if let Some(slot) = self.slots.get_mut(&target) {
            slot.hidden = true;
        }
    }

    fn replace_body(&mut self, html: Markup) {
        self.body = Some(html);
    }

    fn stat_slots(&self) -> usize {
        self.stat_slots
    }
}
