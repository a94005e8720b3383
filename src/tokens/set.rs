// TokenSet — the normalized, order-independent representation of a record's
// textual identity.
//
// Every token is lower-cased and trimmed; tokens that normalize to the empty
// string are dropped; duplicates collapse. Iteration order is set order and
// carries no meaning — nothing downstream may rely on it.

use std::collections::HashSet;

use super::source::TokenSource;

/// A deduplicated set of normalized tokens for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    items: HashSet<String>,
}

impl TokenSet {
    /// Build a token set from a resolved source.
    ///
    /// Keywords are normalized individually and never re-split; free text is
    /// joined as `name + " " + description` and split on runs of whitespace.
    /// Pure and total — any well-formed source yields a set, possibly empty.
    pub fn from_source(source: &TokenSource) -> Self {
        match source {
            TokenSource::Keywords(keywords) => {
                Self::from_tokens(keywords.iter().map(String::as_str))
            }
            TokenSource::FreeText { name, description } => {
                let text = format!("{name} {description}");
                Self::from_tokens(text.split_whitespace())
            }
        }
    }

    /// Normalize and collect raw tokens into a set.
    fn from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Self {
        let items = tokens
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.items.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Tokens present in both sets.
    pub fn intersection(&self, other: &TokenSet) -> HashSet<String> {
        self.items.intersection(&other.items).cloned().collect()
    }

    /// Tokens present in either set.
    pub fn union(&self, other: &TokenSet) -> HashSet<String> {
        self.items.union(&other.items).cloned().collect()
    }
}
