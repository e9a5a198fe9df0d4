use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::DiseaseCatalog;
use crate::cli::OutputFormat;
use crate::core::result::MatchResult;
use crate::core::types::Confidence;
use crate::matching::engine::{Resolver, ResolverConfig, DEFAULT_THRESHOLD};

#[derive(Args)]
pub struct ResolveArgs {
    /// Disease name to resolve (free text, typos tolerated)
    #[arg(required = true)]
    pub query: String,

    /// Minimum similarity score for a fuzzy match (exclusive, 0-100)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the query is empty.
pub fn run(args: &ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        DiseaseCatalog::load_from_file(path)?
    } else {
        DiseaseCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} diseases", catalog.len());
    }

    let config = ResolverConfig {
        threshold: args.threshold,
    };
    let resolver = Resolver::with_config(&catalog, config);
    let result = resolver.resolve(&args.query)?;

    match format {
        OutputFormat::Text => print_text_result(&args.query, &result, args.threshold),
        OutputFormat::Json => print_json_result(&args.query, &result, args.threshold)?,
        OutputFormat::Tsv => print_tsv_result(&args.query, &result),
    }

    Ok(())
}

fn print_text_result(query: &str, result: &MatchResult, threshold: f64) {
    match result {
        MatchResult::Exact { name, entry } => {
            println!("Query:      {query}");
            println!("Match:      {name} (EXACT)");
            println!("Confidence: {}", confidence_str(Confidence::Exact));
            println!("ICD-11:     {}", entry.icd11);
            println!("TM2:        {}", entry.tm2);
        }
        MatchResult::Fuzzy { name, entry, score } => {
            println!("Query:      {query}");
            println!("Match:      {name} (FUZZY, {score:.1}%)");
            println!(
                "Confidence: {}",
                confidence_str(Confidence::from_score(*score))
            );
            println!("ICD-11:     {}", entry.icd11);
            println!("TM2:        {}", entry.tm2);
            println!("\nDid you mean '{name}'?");
        }
        MatchResult::NotFound => {
            eprintln!("No match found for '{query}' above threshold {threshold:.0}.");
        }
    }
}

fn print_json_result(query: &str, result: &MatchResult, threshold: f64) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "query": query,
        "threshold": threshold,
        "result": result,
    });

    let confidence = match result {
        MatchResult::Exact { .. } => Some(Confidence::Exact),
        MatchResult::Fuzzy { score, .. } => Some(Confidence::from_score(*score)),
        MatchResult::NotFound => None,
    };
    if let Some(confidence) = confidence {
        output["confidence"] = serde_json::json!(confidence_str(confidence));
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(query: &str, result: &MatchResult) {
    println!("query\tmatch_type\tname\ticd11\ttm2\tscore\tconfidence");
    match result {
        MatchResult::Exact { name, entry } => {
            println!(
                "{query}\texact\t{name}\t{}\t{}\t100.0\t{}",
                entry.icd11,
                entry.tm2,
                confidence_str(Confidence::Exact)
            );
        }
        MatchResult::Fuzzy { name, entry, score } => {
            println!(
                "{query}\tfuzzy\t{name}\t{}\t{}\t{score:.1}\t{}",
                entry.icd11,
                entry.tm2,
                confidence_str(Confidence::from_score(*score))
            );
        }
        MatchResult::NotFound => {
            println!("{query}\tnot_found\t\t\t\t\t");
        }
    }
}

fn confidence_str(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Exact => "EXACT",
        Confidence::High => "HIGH",
        Confidence::Medium => "MEDIUM",
        Confidence::Low => "LOW",
    }
}
