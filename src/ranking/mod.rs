// Ranking — score, filter, order, and truncate candidates for one request.

pub mod engine;

pub use engine::{rank_related, Candidate, RankedCandidate, RankingRequest};
