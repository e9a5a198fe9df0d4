//! Command-line interface for dx-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve a free-text disease name to its ICD-11/TM2 codes
//! - **catalog**: List, show, export, update, or delete catalog entries
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Resolve a disease name (typos are fine)
//! dx-solver resolve "asthm"
//!
//! # JSON output for scripting
//! dx-solver resolve "diabetes" --format json
//!
//! # Require a stricter similarity score
//! dx-solver resolve "astma" --threshold 85
//!
//! # List the catalog
//! dx-solver catalog list
//!
//! # Update codes in a catalog file
//! dx-solver catalog update Asthma --icd11 CA23.1 --catalog diseases.json
//!
//! # Start web UI
//! dx-solver serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod resolve;

#[derive(Parser)]
#[command(name = "dx-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve free-text disease names to ICD-11 and TM2 clinical codes")]
#[command(
    long_about = "dx-solver maps free-text disease names to their ICD-11 biomedicine and TM2 traditional-medicine codes.\n\nQueries are matched against a catalog of canonical disease names:\n- Exact matches when the spelling is right\n- Fuzzy matches for typos, case differences, and reordered words\n- A similarity threshold below which no match is reported"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a disease name to its clinical codes
    Resolve(resolve::ResolveArgs),

    /// Manage the disease catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
