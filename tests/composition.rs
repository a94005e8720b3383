// Composition tests — verifying the full caller flow chains correctly.
//
// These tests exercise the data path the CLI drives:
//   Catalog -> TokenSource -> RankingRequest -> rank_related
// with an in-memory catalog, no filesystem or environment access.

use kindred::catalog::{CatalogSource, MemoryCatalog, ProductRecord};
use kindred::ranking::{rank_related, Candidate, RankingRequest};
use kindred::tokens::TokenSource;

fn product(
    id: &str,
    name: &str,
    keywords: Option<&[&str]>,
    category: &str,
) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        keywords: keywords.map(|ks| ks.iter().map(|k| k.to_string()).collect()),
        category: category.to_string(),
        price: Some(19.99),
    }
}

fn tshirt_catalog() -> MemoryCatalog {
    MemoryCatalog::from_records(vec![
        product("t1", "Black Cotton Round Neck T shirt", None, "shirts"),
        product("t2", "White Oversized Graphic Tee", None, "shirts"),
        product("t3", "Blue Sports Dry-fit T shirt", None, "shirts"),
        product("t4", "Streetwear Urban Black Tee", None, "shirts"),
        product(
            "t5",
            "Dark Green black t shirt Long Sleeve Tee",
            None,
            "shirts",
        ),
        product("s1", "Classic Leather Boot", None, "shoes"),
    ])
}

fn build_request(
    catalog: &MemoryCatalog,
    target_id: &str,
    limit: i64,
) -> (ProductRecord, RankingRequest) {
    let target = catalog.product(target_id).unwrap().unwrap();
    let candidates = catalog.candidates(&target.category, &target.id).unwrap();
    let request = RankingRequest {
        target: TokenSource::resolve(&target),
        candidates: candidates
            .iter()
            .map(|record| Candidate {
                id: record.id.clone(),
                source: TokenSource::resolve(record),
            })
            .collect(),
        limit,
    };
    (target, request)
}

// ============================================================
// Chain: catalog -> tokens -> ranking
// ============================================================

#[test]
fn black_tshirt_ranks_other_black_shirts_first() {
    let catalog = tshirt_catalog();
    let (_, request) = build_request(&catalog, "t1", 3);
    let ranked = rank_related(&request);

    assert!(!ranked.is_empty());
    assert!(ranked.len() <= 3);
    // Every shirt sharing "black"/"t"/"shirt" tokens beats the unrelated ones;
    // t5 shares black, t, shirt with the target
    assert!(ranked.iter().any(|r| r.id == "t5"));
    // The shoes product is in another category and never even a candidate
    assert!(ranked.iter().all(|r| r.id != "s1"));
    // All scores positive and descending
    assert!(ranked.iter().all(|r| r.score > 0.0));
    for window in ranked.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}

#[test]
fn curated_keywords_override_free_text_in_the_full_flow() {
    let catalog = MemoryCatalog::from_records(vec![
        product("a", "Completely Unrelated Name", Some(&["black", "tee"]), "shirts"),
        product("b", "Another Odd Name", Some(&["black", "tee"]), "shirts"),
        product("c", "Black Tee", Some(&["ceramic", "mug"]), "shirts"),
    ]);
    let (_, request) = build_request(&catalog, "a", 5);
    let ranked = rank_related(&request);

    // b matches a perfectly on keywords despite dissimilar names;
    // c's name would match but its keywords rule
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "b");
    assert_eq!(ranked[0].score, 1.0);
}

#[test]
fn category_with_single_product_yields_empty_result() {
    let catalog = tshirt_catalog();
    let (_, request) = build_request(&catalog, "s1", 3);
    assert!(rank_related(&request).is_empty());
}

#[test]
fn limit_bounds_the_end_to_end_result() {
    let catalog = tshirt_catalog();
    let (_, request) = build_request(&catalog, "t1", 1);
    assert!(rank_related(&request).len() <= 1);
}

#[test]
fn missing_target_is_caught_before_the_engine_runs() {
    let catalog = tshirt_catalog();
    // The caller boundary: a missing id is Ok(None), turned into a
    // user-facing error by the CLI before any ranking happens.
    assert!(catalog.product("nope").unwrap().is_none());
}

#[test]
fn ranked_output_serializes_for_the_json_flag() {
    let catalog = tshirt_catalog();
    let (_, request) = build_request(&catalog, "t1", 3);
    let ranked = rank_related(&request);
    let json = serde_json::to_string_pretty(&ranked).unwrap();
    assert!(json.contains("\"score\""));
    assert!(json.contains("\"common_tokens\""));
}
