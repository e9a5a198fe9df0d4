//! Core data types for disease name resolution.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`DiseaseName`]: Validated canonical key for a catalog entry
//! - [`CodeEntry`]: The ICD-11/TM2 coding pair associated with one name
//! - [`CodeUpdate`]: Partial field set for catalog mutations
//! - [`MatchResult`]: Outcome of a resolution attempt
//! - [`Confidence`]: Result classification derived from the similarity score
//!
//! ## Name Matching
//!
//! Canonical names are matched **exactly** (case-sensitive) first; only on a
//! miss does resolution fall through to fuzzy scoring. `Asthma` is an exact
//! hit, `asthma` is a (very high scoring) fuzzy one.

pub mod result;
pub mod types;

pub use result::MatchResult;
pub use types::{CodeEntry, CodeUpdate, Confidence, DiseaseName, QueryError};
