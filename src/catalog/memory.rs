// In-memory catalog loaded from a JSON file.
//
// The whole catalog is deserialized once at startup; lookups afterwards are
// plain scans. Catalog order is preserved — it is the tie-break order the
// ranking engine's stable sort sees.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::record::ProductRecord;
use super::source::CatalogSource;

#[derive(Debug)]
pub struct MemoryCatalog {
    records: Vec<ProductRecord>,
}

impl MemoryCatalog {
    /// Build a catalog from already-materialized records (used by tests and
    /// embedding callers).
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// Load a catalog from a JSON file containing an array of products.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog file {}", path.display()))?;
        let records: Vec<ProductRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        info!(products = records.len(), path = %path.display(), "Loaded catalog");

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }
}

impl CatalogSource for MemoryCatalog {
    fn product(&self, id: &str) -> Result<Option<ProductRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn candidates(&self, category: &str, exclude_id: &str) -> Result<Vec<ProductRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.category == category && r.id != exclude_id)
            .cloned()
            .collect())
    }
}
