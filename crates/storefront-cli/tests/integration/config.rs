//! Integration tests for config file handling.

use storefront_cli::cli::ConfigAction;
use storefront_cli::commands::{cmd_config_init, handle_config_command};
use storefront_core::StorefrontConfig;

use crate::common::TestHarness;

#[test]
fn test_init_writes_loadable_defaults() {
    let harness = TestHarness::new();
    let path = harness.path("config.toml");
    let path_str = path.display().to_string();

    let written = cmd_config_init(Some(&path_str), false).unwrap();

    assert_eq!(written, path);
    let config = StorefrontConfig::load(Some(&path_str)).unwrap();
    assert_eq!(config.site, StorefrontConfig::default().site);
    assert_eq!(config.logging, StorefrontConfig::default().logging);
}

#[test]
fn test_init_creates_parent_directories() {
    let harness = TestHarness::new();
    let path = harness.path("nested/dir/config.toml");

    cmd_config_init(Some(&path.display().to_string()), false).unwrap();

    assert!(path.exists());
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let harness = TestHarness::new();
    let path = harness.path("config.toml");
    std::fs::write(&path, "[site]\nname = \"Custom\"\n").unwrap();
    let path_str = path.display().to_string();

    let err = cmd_config_init(Some(&path_str), false).unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("Custom"));

    cmd_config_init(Some(&path_str), true).unwrap();
    assert!(!std::fs::read_to_string(&path).unwrap().contains("Custom"));
}

#[test]
fn test_custom_config_file_is_loaded() {
    let harness = TestHarness::new();
    let path = harness.path("config.toml");
    std::fs::write(
        &path,
        "[catalog]\nsource = \"data/catalog.json\"\n\n[site]\nname = \"Acme\"\nrelated_limit = 1\n",
    )
    .unwrap();

    let config = StorefrontConfig::load(Some(&path.display().to_string())).unwrap();

    assert_eq!(config.site.name, "Acme");
    assert_eq!(config.site.related_limit, 1);
    assert_eq!(config.site.card_tag_limit, 3);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let harness = TestHarness::new();
    let path = harness.path("absent.toml").display().to_string();

    assert!(StorefrontConfig::load(Some(&path)).is_err());
}

#[test]
fn test_show_with_loaded_config() {
    let harness = TestHarness::new();
    assert!(handle_config_command(None, ConfigAction::Show, Ok(harness.config())).is_ok());
}
