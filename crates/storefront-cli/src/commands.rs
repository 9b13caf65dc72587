//! Handler functions for CLI commands.

use std::io::Write;
use std::path::Path;

use storefront_catalog::{
    ProductCatalog, ProductRecord, format_optional_price, format_usd_price, source_for,
};
use storefront_core::StorefrontConfig;
use storefront_render::{DEFAULT_STAT_SLOTS, PageLocation, PageSurface, RenderOutcome};

use crate::app::App;
use crate::cli::{Args, Command, ConfigAction};
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run the parsed command.
///
/// `config` is the result of loading the configuration; commands that do
/// not need it run even when it failed to load.
pub async fn run(args: Args, config: storefront_core::Result<StorefrontConfig>) -> Result<()> {
    let config = config.map(|c| with_catalog_override(c, args.catalog));

    match args.command {
        Command::Render { url, out } => {
            cmd_render(config?, &url, out.as_deref()).await?;
        }
        Command::Price { raw } => cmd_price(&raw),
        Command::List { featured, category } => {
            cmd_list(&config?, featured, category.as_deref()).await?;
        }
        Command::Config { action } => {
            handle_config_command(args.config.as_deref(), action, config)?;
        }
    }
    Ok(())
}

/// Apply the `--catalog` flag on top of the loaded configuration.
pub fn with_catalog_override(
    mut config: StorefrontConfig,
    catalog: Option<String>,
) -> StorefrontConfig {
    if let Some(source) = catalog {
        config.catalog.source = source;
    }
    config
}

// ============================================================================
// render
// ============================================================================

/// Render one page view and return the outcome with the finished document.
///
/// The document is produced even when the catalog fails to load; it then
/// holds the layout's placeholders.
pub async fn render_page(app: &mut App, url: &str) -> (RenderOutcome, String) {
    let location = PageLocation::parse(url);
    let mut page =
        PageSurface::new(location.page_kind(DEFAULT_STAT_SLOTS)).titled(&app.config().site.name);
    let outcome = app.run(&location, &mut page).await;
    (outcome, page.to_html())
}

/// Render a page to `out` or stdout.
///
/// Fails with [`Error::LoadFailed`] after writing the placeholder page
/// when the catalog cannot be loaded.
pub async fn cmd_render(
    config: StorefrontConfig,
    url: &str,
    out: Option<&Path>,
) -> Result<RenderOutcome> {
    let mut app = App::new(config);
    let (outcome, html) = render_page(&mut app, url).await;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| storefront_core::Error::io_with_path(e, parent))?;
            }
            tokio::fs::write(path, &html)
                .await
                .map_err(|e| storefront_core::Error::io_with_path(e, path))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(storefront_core::Error::from)?;
        }
    }

    if outcome == RenderOutcome::Failed {
        return Err(Error::LoadFailed {
            location: app.config().catalog.source.clone(),
        });
    }
    Ok(outcome)
}

// ============================================================================
// price
// ============================================================================

/// Print the charm price for a raw price string.
pub fn cmd_price(raw: &str) {
    println!("{}", format_usd_price(raw));
}

// ============================================================================
// list
// ============================================================================

/// Load the configured catalog, propagating the failure cause.
pub async fn load_catalog(config: &StorefrontConfig) -> Result<ProductCatalog> {
    let source = source_for(&config.catalog.source)?;
    let mut catalog = ProductCatalog::new();
    catalog.try_load(source.as_ref()).await?;
    Ok(catalog)
}

/// `id<TAB>name<TAB>price` lines for the selected products, in catalog
/// order.
pub fn list_lines(
    catalog: &ProductCatalog,
    featured: bool,
    category: Option<&str>,
) -> Vec<String> {
    let products: Vec<&ProductRecord> = match (featured, category) {
        (true, None) => catalog.featured(),
        (true, Some(category)) => catalog
            .featured()
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        (false, Some(category)) => catalog.by_category(category),
        (false, None) => catalog.products().iter().collect(),
    };

    products
        .into_iter()
        .map(|p| {
            format!(
                "{}\t{}\t{}",
                p.id,
                p.name,
                format_optional_price(p.display_price())
            )
        })
        .collect()
}

/// Print the catalog listing.
pub async fn cmd_list(
    config: &StorefrontConfig,
    featured: bool,
    category: Option<&str>,
) -> Result<()> {
    let catalog = load_catalog(config).await?;
    for line in list_lines(&catalog, featured, category) {
        println!("{line}");
    }
    Ok(())
}

// ============================================================================
// config
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    config: storefront_core::Result<StorefrontConfig>,
) -> storefront_core::Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(&config?),
        ConfigAction::Init { force } => cmd_config_init(config_path, force).map(|_| ()),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> storefront_core::Result<()> {
    let path = StorefrontConfig::resolve_config_path(config_path).ok_or_else(|| {
        storefront_core::Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist, run `storefront config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config_show(config: &StorefrontConfig) -> storefront_core::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Create a config file with default values; returns where it was written.
pub fn cmd_config_init(
    config_path: Option<&str>,
    force: bool,
) -> storefront_core::Result<std::path::PathBuf> {
    use storefront_core::Error as CoreError;

    let path = StorefrontConfig::resolve_config_path(config_path)
        .ok_or_else(|| CoreError::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    let toml_str = StorefrontConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}
