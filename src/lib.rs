// Kindred: related-product ranking for storefront catalogs
//
// This is the library root. The `tokens`, `similarity`, and `ranking` modules
// form the scoring engine; `catalog` and `output` are the caller-side adapters
// that feed it records and render its results.

pub mod catalog;
pub mod config;
pub mod output;
pub mod ranking;
pub mod similarity;
pub mod tokens;
