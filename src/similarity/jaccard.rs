// Jaccard similarity for token sets.
//
// Compares two token sets by their overlap:
//
//   score = |A ∩ B| / |A ∪ B|
//
// This gives 0.0 for disjoint sets and 1.0 for identical non-empty sets.
// When the union is empty (both sets empty) the score is defined as 0.0, not
// 1.0 — two records with no tokens at all share nothing, and surfacing them
// as perfect matches would be worse than surfacing nothing.

use std::collections::HashSet;

use crate::tokens::TokenSet;

/// Full comparison of two token sets: the score plus the sets behind it,
/// kept so callers can explain a match ("shares: black, tee").
#[derive(Debug, Clone)]
pub struct SimilarityResult {
    /// Jaccard coefficient in [0.0, 1.0].
    pub score: f64,
    /// Tokens common to both sets.
    pub intersection: HashSet<String>,
    /// Tokens in either set.
    pub union: HashSet<String>,
}

/// Compare two token sets, returning the score with explanation data.
///
/// Symmetric: `jaccard_detailed(a, b)` and `jaccard_detailed(b, a)` always
/// agree. The counts are exact set sizes; the only floating-point step is the
/// final division.
pub fn jaccard_detailed(a: &TokenSet, b: &TokenSet) -> SimilarityResult {
    let intersection = a.intersection(b);
    let union = a.union(b);

    let score = if union.is_empty() {
        0.0
    } else {
        intersection.len() as f64 / union.len() as f64
    };

    SimilarityResult {
        score,
        intersection,
        union,
    }
}

/// Score-only variant for callers that don't need the explanation sets.
pub fn jaccard_score(a: &TokenSet, b: &TokenSet) -> f64 {
    jaccard_detailed(a, b).score
}
