use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default result size when neither the CLI nor the environment says
/// otherwise.
pub const DEFAULT_LIMIT: i64 = 3;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Path to the catalog JSON file (KINDRED_CATALOG, default ./catalog.json)
    pub catalog_path: PathBuf,
    /// Default number of related products to return (KINDRED_LIMIT, default 3)
    pub default_limit: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let catalog_path = env::var("KINDRED_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./catalog.json"));

        let default_limit = match env::var("KINDRED_LIMIT") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("KINDRED_LIMIT must be an integer, got {raw:?}")
            })?,
            Err(_) => DEFAULT_LIMIT,
        };

        Ok(Self {
            catalog_path,
            default_limit,
        })
    }

    /// Check that the catalog file exists.
    /// Call this before any operation that needs product records.
    pub fn require_catalog(&self) -> Result<()> {
        if !self.catalog_path.exists() {
            anyhow::bail!(
                "Catalog file not found at {}.\n\
                 Set KINDRED_CATALOG in your .env file or place catalog.json in the working directory.",
                self.catalog_path.display()
            );
        }
        Ok(())
    }
}
