use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::{CodeEntry, CodeUpdate, DiseaseName};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("disease '{name}' not found")]
    NotFound { name: String },

    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub diseases: BTreeMap<DiseaseName, CodeEntry>,
}

/// The disease catalog: canonical name -> coding pair.
///
/// Keys are ordered, so [`names`](Self::names) enumerates in a stable
/// lexicographic order. The catalog lives in memory only; it is seeded at
/// startup and any mutations are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct DiseaseCatalog {
    diseases: BTreeMap<DiseaseName, CodeEntry>,
}

impl DiseaseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            diseases: BTreeMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/diseases.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Ok(Self {
            diseases: data.diseases,
        })
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            diseases: self.diseases.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Exact, case-sensitive lookup. No side effects.
    pub fn get(&self, name: &str) -> Option<&CodeEntry> {
        self.diseases.get(name)
    }

    /// Snapshot of the current canonical names, in lexicographic order.
    ///
    /// The fuzzy pass scores against exactly this set, so it must reflect the
    /// catalog at the instant of the call.
    pub fn names(&self) -> Vec<DiseaseName> {
        self.diseases.keys().cloned().collect()
    }

    /// Ordered snapshot of all entries. Never fails.
    pub fn entries(&self) -> Vec<(DiseaseName, CodeEntry)> {
        self.diseases
            .iter()
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect()
    }

    /// Apply a partial update to an existing entry and return the new state.
    ///
    /// Omitted fields keep their previous value. A failed update leaves the
    /// catalog unchanged.
    pub fn update(&mut self, name: &str, update: CodeUpdate) -> Result<CodeEntry, CatalogError> {
        let entry = self
            .diseases
            .get_mut(name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })?;

        if let Some(icd11) = update.icd11 {
            entry.icd11 = icd11;
        }
        if let Some(tm2) = update.tm2 {
            entry.tm2 = tm2;
        }

        Ok(entry.clone())
    }

    /// Remove an entry. Deleting an absent name fails, so a second delete of
    /// the same name reports `NotFound`.
    pub fn delete(&mut self, name: &str) -> Result<(), CatalogError> {
        self.diseases
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Number of diseases in catalog
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> DiseaseCatalog {
        DiseaseCatalog::from_json(
            r#"{
                "version": "1.0.0",
                "created_at": "2026-01-01T00:00:00Z",
                "diseases": {
                    "Asthma": {"icd11": "CA23", "tm2": "TM2-404"},
                    "Fever": {"icd11": "MG21", "tm2": "TM2-210"}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_embedded_catalog_has_seed_entries() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();

        let asthma = catalog.get("Asthma");
        assert!(asthma.is_some());
        let asthma = asthma.unwrap();
        assert_eq!(asthma.icd11, "CA23");
        assert_eq!(asthma.tm2, "TM2-404");
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let catalog = small_catalog();
        assert!(catalog.get("Asthma").is_some());
        assert!(catalog.get("asthma").is_none());
    }

    #[test]
    fn test_names_are_ordered() {
        let catalog = small_catalog();
        let names: Vec<String> = catalog
            .names()
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Asthma", "Fever"]);
    }

    #[test]
    fn test_partial_update_keeps_omitted_field() {
        let mut catalog = small_catalog();

        let updated = catalog
            .update(
                "Asthma",
                CodeUpdate {
                    icd11: Some("X1".to_string()),
                    tm2: None,
                },
            )
            .unwrap();

        assert_eq!(updated.icd11, "X1");
        assert_eq!(updated.tm2, "TM2-404");

        // Round-trip get reflects only the changed field
        let entry = catalog.get("Asthma").unwrap();
        assert_eq!(entry.icd11, "X1");
        assert_eq!(entry.tm2, "TM2-404");
    }

    #[test]
    fn test_update_unknown_name_fails_without_side_effects() {
        let mut catalog = small_catalog();
        let before = catalog.entries();

        let result = catalog.update(
            "Unknown",
            CodeUpdate {
                icd11: Some("X1".to_string()),
                tm2: None,
            },
        );
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
        assert_eq!(catalog.entries(), before);
    }

    #[test]
    fn test_double_delete_fails_second_time() {
        let mut catalog = small_catalog();

        catalog.delete("Fever").unwrap();
        assert!(catalog.get("Fever").is_none());

        let second = catalog.delete("Fever");
        assert!(matches!(second, Err(CatalogError::NotFound { .. })));

        // State after the first delete is stable under repeated get
        assert!(catalog.get("Fever").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = small_catalog();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"diseases\""));

        let reloaded = DiseaseCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.entries(), catalog.entries());
    }
}
