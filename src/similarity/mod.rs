// Similarity — Jaccard scoring over token sets.

pub mod jaccard;

pub use jaccard::{jaccard_detailed, jaccard_score, SimilarityResult};
