use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for queries that do not name a disease at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no disease provided")]
    Empty,
}

/// Canonical name of a disease in the catalog.
///
/// Names are case-sensitive: `Asthma` and `asthma` are different keys, and
/// only the former exists in the catalog. Construction trims surrounding
/// whitespace and rejects empty input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiseaseName(String);

impl DiseaseName {
    /// Create a validated name. Trims whitespace; empty input is rejected.
    pub fn new(s: impl Into<String>) -> Result<Self, QueryError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DiseaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Allows BTreeMap<DiseaseName, _> lookups by plain &str without cloning.
// Valid because DiseaseName's Ord is the Ord of its inner String.
impl std::borrow::Borrow<str> for DiseaseName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The pair of classification codes associated with one canonical name.
///
/// Both codes are always present: there is no partial entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// ICD-11 MMS code (primary classification system)
    pub icd11: String,

    /// Traditional Medicine Module 2 code (secondary classification system)
    pub tm2: String,
}

impl CodeEntry {
    pub fn new(icd11: impl Into<String>, tm2: impl Into<String>) -> Self {
        Self {
            icd11: icd11.into(),
            tm2: tm2.into(),
        }
    }
}

/// Partial field set for an update. An omitted field keeps its previous value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeUpdate {
    pub icd11: Option<String>,
    pub tm2: Option<String>,
}

/// Confidence level for a match, derived from the similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    /// Classify a 0-100 similarity score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 100.0 {
            Self::Exact
        } else if score >= 95.0 {
            Self::High
        } else if score >= 80.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_name_trims() {
        let name = DiseaseName::new("  Asthma  ").unwrap();
        assert_eq!(name.as_str(), "Asthma");
    }

    #[test]
    fn test_disease_name_rejects_empty() {
        assert_eq!(DiseaseName::new(""), Err(QueryError::Empty));
        assert_eq!(DiseaseName::new("   "), Err(QueryError::Empty));
    }

    #[test]
    fn test_disease_name_is_case_sensitive() {
        let upper = DiseaseName::new("Asthma").unwrap();
        let lower = DiseaseName::new("asthma").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_confidence_from_score() {
        assert_eq!(Confidence::from_score(100.0), Confidence::Exact);
        assert_eq!(Confidence::from_score(97.5), Confidence::High);
        assert_eq!(Confidence::from_score(85.0), Confidence::Medium);
        assert_eq!(Confidence::from_score(50.0), Confidence::Low);
    }
}
