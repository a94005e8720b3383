// ProductRecord — the catalog's view of one product.
//
// Text fields default to empty strings on deserialization, so a record with
// a missing name or description still tokenizes (to an empty set in the
// worst case) instead of failing the whole catalog load.

use serde::{Deserialize, Serialize};

/// One product as stored in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Curated comparison keywords. Absent or empty means the record is
    /// compared on its free text instead.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub category: String,
    /// Display-only; the engine never reads this.
    #[serde(default)]
    pub price: Option<f64>,
}
