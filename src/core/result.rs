use serde::Serialize;

use crate::core::types::{CodeEntry, DiseaseName};

/// Outcome of resolving a query string against the catalog.
///
/// Only the single best candidate is ever reported. A fuzzy match carries the
/// similarity score that put it over the threshold; `NotFound` is a successful
/// resolution with no acceptable candidate, distinct from a query error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "match_type", rename_all = "snake_case")]
pub enum MatchResult {
    /// Query was identical to a canonical name (case-sensitive)
    Exact { name: DiseaseName, entry: CodeEntry },

    /// Best-scoring canonical name, accepted because `score` beat the threshold
    Fuzzy {
        name: DiseaseName,
        entry: CodeEntry,
        /// Similarity score in 0-100
        score: f64,
    },

    /// No candidate scored above the threshold
    NotFound,
}

impl MatchResult {
    /// The matched canonical name, if any.
    pub fn name(&self) -> Option<&DiseaseName> {
        match self {
            Self::Exact { name, .. } | Self::Fuzzy { name, .. } => Some(name),
            Self::NotFound => None,
        }
    }

    /// The matched code entry, if any.
    pub fn entry(&self) -> Option<&CodeEntry> {
        match self {
            Self::Exact { entry, .. } | Self::Fuzzy { entry, .. } => Some(entry),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}
