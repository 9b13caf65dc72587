//! Storefront configuration.
//!
//! Configuration lives in a TOML file with three tables:
//!
//! ```toml
//! [catalog]
//! source = "products.json"
//!
//! [site]
//! name = "MythicLemon"
//! related_limit = 3
//! card_tag_limit = 3
//!
//! [logging]
//! level = "info"
//! ```
//!
//! The file is located by, in order: an explicit path, the
//! `STOREFRONT_CONFIG` environment variable, then
//! `<config dir>/storefront/config.toml`. A missing file at the implicit
//! locations yields defaults. `STOREFRONT_CATALOG` overrides
//! `catalog.source` after the file is read.
//!
//! # Example
//!
//! ```rust
//! use storefront_core::StorefrontConfig;
//!
//! let config = StorefrontConfig::from_toml_str("[site]\nname = \"Acme\"\n").unwrap();
//! assert_eq!(config.site.name, "Acme");
//! assert_eq!(config.catalog.source, "products.json");
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "storefront";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

/// Environment variable overriding `catalog.source`.
pub const CATALOG_ENV: &str = "STOREFRONT_CATALOG";

/// Catalog document location used when nothing else is configured.
pub const DEFAULT_CATALOG_SOURCE: &str = "products.json";

// ============================================================================
// Config sections
// ============================================================================

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// File path or `http(s)://` URL of the catalog JSON document.
    pub source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
        }
    }
}

/// Site-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name appended to detail page titles.
    pub name: String,
    /// Maximum number of related products on a detail page.
    pub related_limit: usize,
    /// Maximum number of tags shown on a grid card.
    pub card_tag_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "MythicLemon".to_string(),
            related_limit: 3,
            card_tag_limit: 3,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ============================================================================
// StorefrontConfig
// ============================================================================

/// Complete Storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Catalog source settings.
    pub catalog: CatalogConfig,
    /// Site presentation settings.
    pub site: SiteConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path using the process environment.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_config_path_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolve the config file path with an injected environment lookup.
    pub fn resolve_config_path_with<F>(explicit: Option<&str>, env: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Some(path) = env(CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration using the process environment.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with_env(explicit, |key| std::env::var(key).ok())
    }

    /// Load configuration with an injected environment lookup.
    ///
    /// An explicitly named file must exist; implicit locations fall back
    /// to defaults when absent.
    pub fn load_with_env<F>(explicit: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let named = explicit.is_some() || env(CONFIG_ENV).is_some_and(|p| !p.trim().is_empty());
        let mut config = match Self::resolve_config_path_with(explicit, &env) {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                Self::from_toml_str(&content).map_err(|e| match e {
                    Error::Config { message } => {
                        Error::config(format!("{}: {message}", path.display()))
                    }
                    other => other,
                })?
            }
            Some(path) if named => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };

        if let Some(source) = env(CATALOG_ENV).filter(|s| !s.trim().is_empty()) {
            log::debug!("Catalog source overridden by {CATALOG_ENV}");
            config.catalog.source = source;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check values that would make rendering meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.source.trim().is_empty() {
            return Err(Error::config("catalog.source must not be empty"));
        }
        if self.site.name.trim().is_empty() {
            return Err(Error::config("site.name must not be empty"));
        }
        Ok(())
    }
}
