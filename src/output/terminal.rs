// Colored terminal output for related-product lists and token sets.
//
// This module handles all terminal-specific formatting: colors, score bars,
// tables. The main.rs display paths delegate here.

use colored::Colorize;

use crate::catalog::ProductRecord;
use crate::ranking::RankedCandidate;
use crate::tokens::{TokenSet, TokenSource};

/// Display a ranked related-product list in the terminal.
///
/// `resolve_name` maps a candidate id to its display name — display fields
/// are the catalog's concern, the ranked rows only carry ids.
pub fn display_related_list(
    target: &ProductRecord,
    ranked: &[RankedCandidate],
    resolve_name: impl Fn(&str) -> Option<String>,
) {
    if ranked.is_empty() {
        println!(
            "No related products found for {} in category {:?}.",
            target.name.bold(),
            target.category
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== Related to \"{}\" ({} results) ===", target.name, ranked.len()).bold()
    );
    println!();

    let bar_width: usize = 20;

    for (i, row) in ranked.iter().enumerate() {
        let name = resolve_name(&row.id).unwrap_or_else(|| row.id.clone());

        let filled = (row.score * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if row.score >= 0.5 {
            bar.bright_green()
        } else if row.score >= 0.2 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<40} {} {:.3}",
            i + 1,
            name.bold(),
            colored_bar,
            row.score
        );
        println!(
            "      Shares: {}  (union of {} tokens)",
            row.common_tokens.join(", ").dimmed(),
            row.union_size
        );
        println!();
    }
}

/// Display which token source a record resolved to and the resulting set.
pub fn display_token_set(record: &ProductRecord, source: &TokenSource, set: &TokenSet) {
    println!("\n{}", format!("=== Tokens for \"{}\" ===", record.name).bold());

    match source {
        TokenSource::Keywords(keywords) => {
            println!("  Source: {} ({} keywords)", "curated keywords".bright_green(), keywords.len());
        }
        TokenSource::FreeText { .. } => {
            println!("  Source: {}", "name + description fallback".bright_yellow());
        }
    }

    let mut tokens: Vec<&str> = set.iter().collect();
    tokens.sort_unstable();
    println!("  Tokens ({}): {}", set.len(), tokens.join(", ").dimmed());
}
