// The related-item ranking engine.
//
// Given a target token source and a candidate population (already restricted
// by the caller to the comparison set — same category, target excluded), score
// every candidate against the target, drop zero-similarity candidates, order
// by score with a stable tie-break on input position, and truncate to the
// requested size.
//
// The engine is stateless and pure: no I/O, no shared state, no failure
// modes. All fallibility lives at the catalog boundary before this code runs.

use serde::Serialize;
use tracing::debug;

use crate::similarity::jaccard_detailed;
use crate::tokens::{TokenSet, TokenSource};

/// One candidate item: an opaque id owned by the caller, plus its resolved
/// token source.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub source: TokenSource,
}

/// One ranking request. Candidate order matters: it is the tie-break for
/// equal scores.
#[derive(Debug, Clone)]
pub struct RankingRequest {
    pub target: TokenSource,
    pub candidates: Vec<Candidate>,
    /// Maximum number of results. Negative values are treated as 0.
    pub limit: i64,
}

/// One scored output row. `common_tokens` is sorted so serialized output is
/// deterministic; the underlying comparison is still set-based.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: String,
    pub score: f64,
    pub common_tokens: Vec<String>,
    pub union_size: usize,
}

/// Score, filter, order, and truncate the candidates of one request.
///
/// Zero-score candidates (no shared tokens, or one/both token sets empty) are
/// excluded — every returned row has `score > 0`. The sort is stable, so
/// candidates with exactly equal scores keep the relative order they were
/// supplied in. A non-positive limit yields an empty result; so does an empty
/// candidate list. Neither is an error.
pub fn rank_related(request: &RankingRequest) -> Vec<RankedCandidate> {
    if request.candidates.is_empty() {
        return Vec::new();
    }

    let target_set = TokenSet::from_source(&request.target);

    let mut scored: Vec<RankedCandidate> = request
        .candidates
        .iter()
        .filter_map(|candidate| {
            let candidate_set = TokenSet::from_source(&candidate.source);
            let similarity = jaccard_detailed(&target_set, &candidate_set);
            if similarity.score == 0.0 {
                return None;
            }

            let mut common_tokens: Vec<String> = similarity.intersection.into_iter().collect();
            common_tokens.sort();

            Some(RankedCandidate {
                id: candidate.id.clone(),
                score: similarity.score,
                common_tokens,
                union_size: similarity.union.len(),
            })
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep input order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let limit = request.limit.max(0) as usize;
    scored.truncate(limit);

    debug!(
        candidates = request.candidates.len(),
        returned = scored.len(),
        limit,
        "Ranked related candidates"
    );

    scored
}
