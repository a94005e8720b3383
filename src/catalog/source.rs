// Catalog trait — backend-agnostic interface for record lookup.
//
// Implementors: MemoryCatalog (JSON file loaded up front). The trait is
// synchronous: the engine is pure CPU work and every implementor materializes
// its records before request time, so there is nothing to await.
//
// Callers receive the trait by reference (constructor/parameter injection) —
// never a process-wide singleton — so the ranking engine under test depends
// on nothing but the records handed to it.

use anyhow::Result;

use super::record::ProductRecord;

pub trait CatalogSource: Send + Sync {
    /// Look up one product by id. `Ok(None)` means not found; the caller
    /// decides whether that is an error (it is, for a ranking target).
    fn product(&self, id: &str) -> Result<Option<ProductRecord>>;

    /// All products in a category except the excluded id — the candidate
    /// population for a ranking request, in catalog order.
    fn candidates(&self, category: &str, exclude_id: &str) -> Result<Vec<ProductRecord>>;
}
