// Catalog — the caller-side input adapter.
//
// The engine only ever sees fully materialized in-memory records; everything
// about where they come from lives here, behind the CatalogSource trait.

pub mod memory;
pub mod record;
pub mod source;

pub use memory::MemoryCatalog;
pub use record::ProductRecord;
pub use source::CatalogSource;
