//! Disease name resolution engine and similarity scoring.
//!
//! This module provides the core matching functionality:
//!
//! - [`Resolver`]: Main entry point for resolving a query string
//! - [`SimilarityScorer`]: Pluggable 0-100 similarity measure
//! - [`TokenSetScorer`]: Default scorer (token-set ratio family)
//!
//! ## Resolution Algorithm
//!
//! 1. **Validation**: empty or whitespace-only queries are rejected
//! 2. **Exact path**: case-sensitive lookup of the trimmed query
//! 3. **Fuzzy path**: every canonical name is scored; the best candidate is
//!    accepted only if its score is *strictly* greater than the threshold
//! 4. **Tie-break**: equal best scores go to the lexicographically smallest
//!    name, independent of scorer iteration order
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_solver::{DiseaseCatalog, MatchResult, Resolver};
//!
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! match resolver.resolve("asthm").unwrap() {
//!     MatchResult::Exact { name, entry } => println!("{name}: {}", entry.icd11),
//!     MatchResult::Fuzzy { name, score, .. } => println!("{name}? ({score:.1}%)"),
//!     MatchResult::NotFound => println!("no match"),
//! }
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{Resolver, ResolverConfig, DEFAULT_THRESHOLD};
pub use scoring::{SimilarityScorer, TokenSetScorer};
