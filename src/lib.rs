//! # dx-solver
//!
//! A library for resolving free-text disease names to ICD-11 and TM2
//! clinical codes.
//!
//! Clinical text rarely spells disease names the way a terminology does:
//! queries arrive with typos ("astma"), case differences ("ASTHMA"), or
//! reordered words ("mellitus diabetes"). `dx-solver` matches such queries
//! against a catalog of canonical names and returns the coding pair for the
//! best candidate, or nothing when no candidate is close enough.
//!
//! ## Features
//!
//! - **Exact matching**: case-sensitive lookup short-circuits the fuzzy pass
//! - **Fuzzy matching**: token-based similarity tolerant of typos, case, and
//!   word order
//! - **Similarity threshold**: candidates must strictly beat a configurable
//!   score (default 70) to be reported
//! - **Deterministic ties**: equal scores resolve to the lexicographically
//!   smallest name
//! - **Dual coding**: every entry carries an ICD-11 MMS code and a TM2
//!   traditional-medicine code
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_solver::{DiseaseCatalog, MatchResult, Resolver};
//!
//! // Load the embedded catalog of known diseases
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! // Resolve a misspelled query
//! let resolver = Resolver::new(&catalog);
//! match resolver.resolve("astma").unwrap() {
//!     MatchResult::Exact { name, entry } => {
//!         println!("{name}: {} / {}", entry.icd11, entry.tm2);
//!     }
//!     MatchResult::Fuzzy { name, entry, score } => {
//!         println!("{name} ({score:.1}%): {} / {}", entry.icd11, entry.tm2);
//!     }
//!     MatchResult::NotFound => println!("no match"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Disease catalog storage and the shared concurrent handle
//! - [`core`]: Core data types for names, code entries, and match results
//! - [`matching`]: Resolution engine and similarity scoring
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server with FHIR-shaped responses

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::shared::{share, SharedCatalog};
pub use catalog::store::{CatalogError, DiseaseCatalog};
pub use core::result::MatchResult;
pub use core::types::{CodeEntry, CodeUpdate, Confidence, DiseaseName, QueryError};
pub use matching::engine::{Resolver, ResolverConfig, DEFAULT_THRESHOLD};
pub use matching::scoring::{SimilarityScorer, TokenSetScorer};
