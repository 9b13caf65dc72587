//! Integration tests for catalog listing.

use clap::Parser;
use storefront_cli::cli::Args;
use storefront_cli::commands::{list_lines, load_catalog, run};
use storefront_cli::error::Error;
use storefront_core::StorefrontConfig;

use crate::common::TestHarness;

#[tokio::test]
async fn test_list_all_products() {
    let harness = TestHarness::new();
    let catalog = load_catalog(&harness.config()).await.unwrap();

    assert_eq!(
        list_lines(&catalog, false, None),
        vec![
            "lemon-1\tLemon Pack\t$9.99 to $19.99",
            "lime-1\tLime Pack\t$19.99",
            "anvil-1\tAnvil\t$0.99",
            "42\tNumbered Pack\t$4.99",
        ]
    );
}

#[tokio::test]
async fn test_list_featured() {
    let harness = TestHarness::new();
    let catalog = load_catalog(&harness.config()).await.unwrap();

    let lines = list_lines(&catalog, true, None);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("lemon-1\t"));
    assert!(lines[1].starts_with("anvil-1\t"));
}

#[tokio::test]
async fn test_list_by_category() {
    let harness = TestHarness::new();
    let catalog = load_catalog(&harness.config()).await.unwrap();

    assert_eq!(list_lines(&catalog, false, Some("environments")).len(), 3);
    assert_eq!(list_lines(&catalog, true, Some("tools")).len(), 1);
    assert!(list_lines(&catalog, false, Some("weapons")).is_empty());
}

#[tokio::test]
async fn test_load_catalog_reports_missing_file() {
    let harness = TestHarness::new();
    let result = load_catalog(&harness.missing_catalog_config()).await;

    assert!(matches!(
        result,
        Err(Error::Core(storefront_core::Error::IoWithPath { .. }))
    ));
}

#[tokio::test]
async fn test_load_catalog_reports_malformed_json() {
    let harness = TestHarness::with_catalog("{\"products\": ");
    let result = load_catalog(&harness.config()).await;

    assert!(matches!(
        result,
        Err(Error::Core(storefront_core::Error::Json(_)))
    ));
}

#[tokio::test]
async fn test_load_catalog_rejects_unsupported_scheme() {
    let mut config = StorefrontConfig::default();
    config.catalog.source = "ftp://cdn.example.com/products.json".to_string();

    let result = load_catalog(&config).await;

    assert!(matches!(
        result,
        Err(Error::Core(storefront_core::Error::Catalog { .. }))
    ));
}

#[tokio::test]
async fn test_run_list_with_catalog_flag() {
    let harness = TestHarness::new();
    let catalog = harness.catalog_path.display().to_string();
    let args = Args::try_parse_from(["storefront", "list", "--catalog", &catalog]).unwrap();

    assert!(run(args, Ok(StorefrontConfig::default())).await.is_ok());
}

#[tokio::test]
async fn test_run_list_needs_config() {
    let args = Args::try_parse_from(["storefront", "list"]).unwrap();
    let result = run(args, Err(storefront_core::Error::config("broken"))).await;

    assert!(matches!(result, Err(Error::Core(_))));
}

#[tokio::test]
async fn test_run_price_ignores_config_error() {
    let args = Args::try_parse_from(["storefront", "price", "$49.50"]).unwrap();
    let result = run(args, Err(storefront_core::Error::config("broken"))).await;

    assert!(result.is_ok());
}
