//! Common test utilities and harness for Storefront integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use storefront_core::StorefrontConfig;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Catalog with two categories, featured entries, a numeric id, and a
/// product carrying every optional section.
pub const CATALOG_JSON: &str = r#"{
    "products": [
        {
            "id": "lemon-1",
            "name": "Lemon Pack",
            "subtitle": "Citrus environment kit",
            "shortDescription": "Zesty props",
            "description": "A full lemon grove.",
            "category": "environments",
            "featured": true,
            "price": "$49.50",
            "priceRange": "$10 to $20",
            "image": "img/lemon.png",
            "tags": ["citrus", "props", "nature", "extra"],
            "features": [{"title": "Modular", "description": "Snap together"}],
            "detailedContent": [
                {"heading": "Included Maps", "items": [{"name": "Grove", "description": "Daylight"}]}
            ],
            "technicalDetails": {"Triangles": "120k", "Texture Size": "4K", "LODs": 3},
            "keyFeatures": ["Nanite ready", "PBR textures"],
            "userGuide": "https://docs.example/lemon",
            "fabUrl": "https://fab.example/lemon"
        },
        {
            "id": "lime-1",
            "name": "Lime Pack",
            "shortDescription": "Green props",
            "category": "environments",
            "price": "$19.99",
            "tags": ["citrus"],
            "fabUrl": "https://fab.example/lime"
        },
        {
            "id": "anvil-1",
            "name": "Anvil",
            "category": "tools",
            "featured": true,
            "price": "$0.20"
        },
        {
            "id": 42,
            "name": "Numbered Pack",
            "category": "environments",
            "price": "$5"
        }
    ],
    "metadata": {
        "stats": [
            {"value": "120+", "label": "Assets"},
            {"value": 4, "label": "Packs"}
        ],
        "description": "Handmade game assets."
    }
}"#;

/// Test harness holding a temporary directory with a catalog file.
pub struct TestHarness {
    /// Temporary directory, removed on drop
    pub dir: TempDir,
    /// Path of the catalog document
    pub catalog_path: PathBuf,
}

impl TestHarness {
    /// Creates a harness with the default fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog(CATALOG_JSON)
    }

    /// Creates a harness with custom catalog text.
    pub fn with_catalog(json: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog_path = dir.path().join("products.json");
        std::fs::write(&catalog_path, json).expect("write catalog");
        Self { dir, catalog_path }
    }

    /// Configuration pointing at the harness catalog.
    pub fn config(&self) -> StorefrontConfig {
        let mut config = StorefrontConfig::default();
        config.catalog.source = self.catalog_path.display().to_string();
        config
    }

    /// Configuration pointing at a catalog file that does not exist.
    pub fn missing_catalog_config(&self) -> StorefrontConfig {
        let mut config = StorefrontConfig::default();
        config.catalog.source = self.dir.path().join("missing.json").display().to_string();
        config
    }

    /// A path inside the harness directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve one HTTP response on a local port; returns the base URL.
///
/// The server answers a single request and exits.
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}
