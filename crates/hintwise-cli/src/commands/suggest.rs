//! Suggest command - rank a pool file against an unresolved name

use crate::pool::PoolFile;
use anyhow::{Context, Result};
use colored::*;
use hintwise_core::{Ranker, RankerOptions, Suggestion, UsagePosition};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the suggest command
#[derive(Debug, Clone)]
pub struct SuggestArgs {
    /// Unresolved name as written
    pub query: String,
    /// Pool file path
    pub pool: PathBuf,
    /// Syntactic position of the name
    pub usage: UsagePosition,
    /// Emit JSON instead of text
    pub json: bool,
    /// Ranking options after config and flag overrides
    pub options: RankerOptions,
}

/// Rank the pool and print the suggestions
pub fn run(args: SuggestArgs) -> Result<()> {
    let file = PoolFile::load(&args.pool)?;
    let pool = file
        .candidates()
        .with_context(|| format!("Invalid candidate in {}", args.pool.display()))?;

    info!(
        pool = pool.len(),
        symbols = file.symbol_count(),
        usage = %args.usage,
        "loaded candidate pool"
    );

    let ranker = Ranker::new(args.options);
    let suggestions = ranker.rank_in_context(&args.query, &pool, args.usage);

    if args.json {
        let json = serde_json::to_string_pretty(&suggestions)
            .context("Failed to serialize suggestions")?;
        println!("{}", json);
    } else {
        print_text(&args.query, &suggestions);
    }

    Ok(())
}

fn print_text(query: &str, suggestions: &[Suggestion<'_>]) {
    if suggestions.is_empty() {
        println!("no suggestions for '{}'", query);
        return;
    }

    for suggestion in suggestions {
        println!("{}", format_suggestion(suggestion));
    }
}

/// One text line per suggestion
fn format_suggestion(suggestion: &Suggestion<'_>) -> String {
    format!(
        "did you mean '{}'?  {} {:.4}  {} {:.4}  {} {}  {} {}",
        suggestion.key.green().bold(),
        "score".dimmed(),
        suggestion.final_score,
        "similarity".dimmed(),
        suggestion.similarity_score,
        "tier".dimmed(),
        suggestion.tier,
        suggestion.value.kind_label().dimmed(),
        suggestion.identity_key,
    )
}
