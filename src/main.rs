use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use kindred::catalog::{CatalogSource, MemoryCatalog};
use kindred::config::Config;
use kindred::output::terminal;
use kindred::ranking::{rank_related, Candidate, RankingRequest};
use kindred::tokens::{TokenSet, TokenSource};

/// Kindred: related-product ranking for storefront catalogs.
///
/// Finds the products most textually similar to a target product within its
/// category, scored by Jaccard similarity over normalized token sets.
#[derive(Parser)]
#[command(name = "kindred", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank products related to the given product
    Related {
        /// The product id to find related products for
        product_id: String,

        /// Max results to return (default: KINDRED_LIMIT or 3)
        #[arg(long)]
        limit: Option<i64>,

        /// Emit the ranked list as JSON instead of a formatted table
        #[arg(long)]
        json: bool,
    },

    /// Show a product's resolved token source and token set
    Tokens {
        /// The product id to tokenize
        product_id: String,
    },

    /// List catalog products
    List,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kindred=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Related {
            product_id,
            limit,
            json,
        } => {
            config.require_catalog()?;
            let catalog = MemoryCatalog::load(&config.catalog_path)?;

            // Target resolution is the one not-found boundary in the whole
            // feature; the engine itself never fails.
            let target = catalog
                .product(&product_id)?
                .ok_or_else(|| anyhow::anyhow!("Product not found: {product_id}"))?;

            let candidates = catalog.candidates(&target.category, &target.id)?;
            info!(
                product = %target.id,
                category = %target.category,
                candidates = candidates.len(),
                "Resolved ranking population"
            );

            let request = RankingRequest {
                target: TokenSource::resolve(&target),
                candidates: candidates
                    .iter()
                    .map(|record| Candidate {
                        id: record.id.clone(),
                        source: TokenSource::resolve(record),
                    })
                    .collect(),
                limit: limit.unwrap_or(config.default_limit),
            };

            let ranked = rank_related(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal::display_related_list(&target, &ranked, |id| {
                    catalog
                        .product(id)
                        .ok()
                        .flatten()
                        .map(|record| record.name)
                });
            }
        }

        Commands::Tokens { product_id } => {
            config.require_catalog()?;
            let catalog = MemoryCatalog::load(&config.catalog_path)?;

            let record = catalog
                .product(&product_id)?
                .ok_or_else(|| anyhow::anyhow!("Product not found: {product_id}"))?;

            let source = TokenSource::resolve(&record);
            let set = TokenSet::from_source(&source);
            terminal::display_token_set(&record, &source, &set);
        }

        Commands::List => {
            config.require_catalog()?;
            let catalog = MemoryCatalog::load(&config.catalog_path)?;

            println!(
                "\n{}",
                format!("=== Catalog ({} products) ===", catalog.len()).bold()
            );
            for record in catalog.records() {
                let keyword_count = record.keywords.as_deref().map_or(0, <[String]>::len);
                println!(
                    "  {:<12} {:<40} {:<12} {} keywords",
                    record.id.dimmed(),
                    record.name,
                    record.category,
                    keyword_count
                );
            }
        }
    }

    Ok(())
}
