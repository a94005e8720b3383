// TokenSource — where a record's comparison tokens come from.
//
// A product with curated keywords is compared on those keywords; one without
// falls back to its free text. The decision is made once, here, so the
// fallback policy is explicit and testable rather than buried in the
// tokenizer's branching.

use crate::catalog::record::ProductRecord;

/// The resolved origin of a record's tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenSource {
    /// Curated keyword list, used verbatim (each keyword normalized
    /// individually, never re-split on whitespace).
    Keywords(Vec<String>),
    /// No usable keywords — tokenize `name + " " + description` instead.
    FreeText { name: String, description: String },
}

impl TokenSource {
    /// Resolve the token source for a record.
    ///
    /// Keywords win when the list is present and non-empty; an absent or
    /// empty list falls back to free text. Missing text fields are already
    /// empty strings at this point (see `ProductRecord`), so resolution
    /// never fails.
    pub fn resolve(record: &ProductRecord) -> Self {
        match &record.keywords {
            Some(keywords) if !keywords.is_empty() => Self::Keywords(keywords.clone()),
            _ => Self::FreeText {
                name: record.name.clone(),
                description: record.description.clone(),
            },
        }
    }
}
