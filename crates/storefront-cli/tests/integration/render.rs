//! Integration tests for complete page views.

use storefront_cli::App;
use storefront_cli::commands::{cmd_render, render_page};
use storefront_cli::error::Error;
use storefront_render::{PageState, RenderOutcome};

use crate::common::{CATALOG_JSON, TestHarness, serve_once};

// ----------------------------------------------------------------------------
// Homepage
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_homepage_renders_grid_and_metadata() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (outcome, html) = render_page(&mut app, "index.html").await;

    assert_eq!(outcome, RenderOutcome::Grid { cards: 4 });
    assert_eq!(app.state(), PageState::GridMode);
    assert_eq!(html.matches("class=\"product-card\"").count(), 4);
    assert!(html.contains("<title>MythicLemon</title>"));
    assert!(html.contains("href=\"product.html?id=lemon-1\""));
    assert!(html.contains("href=\"product.html?id=42\""));
    assert!(html.contains("From $49.99"));
    assert!(html.contains("From $0.99"));
    assert!(html.contains("<h3>120+</h3><p>Assets</p>"));
    assert!(html.contains("<h3>4</h3><p>Packs</p>"));
    assert!(html.contains("<p>Handmade game assets.</p>"));
}

#[tokio::test]
async fn test_homepage_extra_stat_widgets_untouched() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "/").await;

    assert_eq!(html.matches("<h3>—</h3><p>Loading</p>").count(), 2);
}

#[tokio::test]
async fn test_homepage_card_tags_limited() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "index.html").await;

    assert!(html.contains("<span class=\"tag\">nature</span>"));
    assert!(!html.contains("<span class=\"tag\">extra</span>"));
}

#[tokio::test]
async fn test_empty_catalog_renders_zero_cards() {
    let harness = TestHarness::with_catalog(r#"{"products": [], "metadata": {}}"#);
    let mut app = App::new(harness.config());

    let (outcome, html) = render_page(&mut app, "index.html").await;

    assert_eq!(outcome, RenderOutcome::Grid { cards: 0 });
    assert!(html.contains("<div class=\"product-grid\"></div>"));
    assert!(html.contains("<p>Loading...</p>"));
}

// ----------------------------------------------------------------------------
// Detail page
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_detail_page_renders_product() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (outcome, html) = render_page(&mut app, "product.html?id=lemon-1").await;

    assert_eq!(outcome, RenderOutcome::Detail("lemon-1".into()));
    assert!(html.contains("<title>Lemon Pack | MythicLemon</title>"));
    assert!(html.contains("<meta name=\"description\" content=\"A full lemon grove.\">"));
    assert!(html.contains("<h1>Lemon Pack</h1>"));
    assert!(html.contains("<span class=\"price\">$9.99 to $19.99</span>"));
    assert!(html.contains("href=\"https://fab.example/lemon\""));
    assert!(html.contains("📄 View User Guide</a>"));
    assert!(html.contains("<li>✓ Nanite ready</li><li>✓ PBR textures</li>"));
    assert!(html.contains("<div class=\"map-item\"><h4>Grove</h4><p>Daylight</p></div>"));
}

#[tokio::test]
async fn test_detail_specs_keep_document_order() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "product.html?id=lemon-1").await;

    assert!(html.contains(
        "<li><strong>Triangles:</strong> 120k</li>\
         <li><strong>Texture Size:</strong> 4K</li>\
         <li><strong>LODs:</strong> 3</li>"
    ));
}

#[tokio::test]
async fn test_detail_related_products_share_category() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "product.html?id=lemon-1").await;

    let related = html
        .split("class=\"related-products\"")
        .nth(1)
        .expect("related section");
    assert_eq!(related.matches("class=\"product-card\"").count(), 2);
    assert!(related.contains("Lime Pack"));
    assert!(related.contains("Numbered Pack"));
    assert!(!related.contains("Anvil"));
    assert!(!related.contains("product-features"));
}

#[tokio::test]
async fn test_detail_without_related_hides_section() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "product.html?id=anvil-1").await;

    assert!(html.contains("<section class=\"related-products\" style=\"display: none\">"));
    assert!(!html.contains("View User Guide"));
}

#[tokio::test]
async fn test_unknown_id_renders_not_found() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (outcome, html) = render_page(&mut app, "product.html?id=missing").await;

    assert_eq!(outcome, RenderOutcome::NotFound("missing".into()));
    assert!(html.contains("<h1>Product Not Found</h1>"));
    assert!(html.contains("<a href=\"index.html\">Return to Homepage</a>"));
    assert!(!html.contains("product-hero"));
    assert!(!html.contains("related-products"));
}

#[tokio::test]
async fn test_numeric_id_not_reachable_from_url() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (outcome, _) = render_page(&mut app, "product.html?id=42").await;

    assert_eq!(outcome, RenderOutcome::NotFound("42".into()));
}

#[tokio::test]
async fn test_empty_id_on_product_page_is_skipped() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.config());

    let (outcome, html) = render_page(&mut app, "product.html?id=").await;

    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(app.state(), PageState::Idle);
    assert!(html.contains("<h1>Loading...</h1>"));
}

#[tokio::test]
async fn test_catalog_markup_is_escaped() {
    let harness = TestHarness::with_catalog(
        r#"{
            "products": [{
                "id": "x\"><script>",
                "name": "<script>alert(1)</script>",
                "shortDescription": "<b>bold</b>",
                "tags": ["<i>"]
            }],
            "metadata": {"description": "<img src=x onerror=alert(1)>"}
        }"#,
    );
    let mut app = App::new(harness.config());

    let (_, html) = render_page(&mut app, "index.html").await;

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>bold</b>"));
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("href=\"product.html?id=x%22%3E%3Cscript%3E\""));
}

// ----------------------------------------------------------------------------
// Load failures and output
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_load_failure_keeps_placeholders() {
    let harness = TestHarness::new();
    let mut app = App::new(harness.missing_catalog_config());

    let (outcome, html) = render_page(&mut app, "index.html").await;

    assert_eq!(outcome, RenderOutcome::Failed);
    assert_eq!(app.state(), PageState::Failed);
    assert!(app.catalog().is_empty());
    assert!(html.contains("Loading products..."));
    assert_eq!(html.matches("<h3>—</h3>").count(), 4);
}

#[tokio::test]
async fn test_malformed_catalog_is_load_failure() {
    let harness = TestHarness::with_catalog(r#"{"products": [{"name": "no id"}]}"#);
    let mut app = App::new(harness.config());

    let (outcome, _) = render_page(&mut app, "product.html?id=x").await;

    assert_eq!(outcome, RenderOutcome::Failed);
}

#[tokio::test]
async fn test_cmd_render_writes_output_file() {
    let harness = TestHarness::new();
    let out = harness.path("site/product.html");

    let outcome = cmd_render(harness.config(), "product.html?id=lime-1", Some(&out))
        .await
        .expect("render should succeed");

    assert_eq!(outcome, RenderOutcome::Detail("lime-1".into()));
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<span class=\"price\">$19.99</span>"));
}

#[tokio::test]
async fn test_cmd_render_load_failure_still_writes_page() {
    let harness = TestHarness::new();
    let out = harness.path("index.html");

    let result = cmd_render(harness.missing_catalog_config(), "index.html", Some(&out)).await;

    assert!(matches!(result, Err(Error::LoadFailed { .. })));
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Loading products..."));
}

// ----------------------------------------------------------------------------
// HTTP source
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_homepage_from_http_catalog() {
    let base = serve_once("200 OK", CATALOG_JSON).await;
    let harness = TestHarness::new();
    let mut config = harness.config();
    config.catalog.source = format!("{base}/products.json");
    let mut app = App::new(config);

    let (outcome, _) = render_page(&mut app, "index.html").await;

    assert_eq!(outcome, RenderOutcome::Grid { cards: 4 });
}

#[tokio::test]
async fn test_http_error_status_is_load_failure() {
    let base = serve_once("404 Not Found", "{}").await;
    let harness = TestHarness::new();
    let mut config = harness.config();
    config.catalog.source = format!("{base}/products.json");
    let mut app = App::new(config);

    let (outcome, _) = render_page(&mut app, "index.html").await;

    assert_eq!(outcome, RenderOutcome::Failed);
}
