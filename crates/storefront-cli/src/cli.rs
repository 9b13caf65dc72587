//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_render::location::HOME_PAGE;

/// Storefront - render a product catalog into static pages
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about = "Render a product catalog into static pages", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Catalog location (file path or http(s) URL), overrides the config
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one page view as an HTML document
    Render {
        /// Page URL, e.g. `product.html?id=lemon-1`
        #[arg(long, default_value = HOME_PAGE)]
        url: String,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the charm price for a raw price string
    Price {
        /// Raw price, e.g. `$49.50` or `$10 to $20`
        raw: String,
    },

    /// List catalog entries as `id<TAB>name<TAB>price`
    List {
        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only products in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Inspect or create the config file
    Config {
        /// What to do with the config file
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Create a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
