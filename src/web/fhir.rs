//! FHIR-shaped response envelopes for the HTTP API.
//!
//! The API speaks a small subset of FHIR R4: `Condition` for a resolved
//! disease, `OperationOutcome` for errors and mutation acknowledgements, and
//! `Bundle` for the catalog listing. Only the fields the API actually emits
//! are modeled.

use serde::Serialize;

use crate::core::types::CodeEntry;

/// ICD-11 coding system URL
pub const ICD11_SYSTEM: &str = "http://id.who.int/icd/release/11";

/// TM2 coding system URL
pub const TM2_SYSTEM: &str = "http://example.org/tm2";

/// Placeholder subject every Condition is attached to
pub const SUBJECT_REFERENCE: &str = "Patient/P12345";

#[derive(Debug, Clone, Serialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectReference {
    pub reference: String,
}

/// FHIR Condition resource carrying the ICD-11 and TM2 codings for a disease.
#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    #[serde(rename = "resourceType")]
    pub resource_type: &'static str,

    /// `cond-<lowercased name>`
    pub id: String,

    /// Present only for fuzzy matches: "Did you mean '<name>'?"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub code: CodeableConcept,
    pub subject: SubjectReference,
}

impl Condition {
    /// Build a Condition for a catalog entry. `note` carries the fuzzy-match
    /// suggestion and is omitted for exact matches.
    pub fn for_disease(name: &str, entry: &CodeEntry, note: Option<String>) -> Self {
        Self {
            resource_type: "Condition",
            id: format!("cond-{}", name.to_lowercase()),
            note,
            code: CodeableConcept {
                coding: vec![
                    Coding {
                        system: ICD11_SYSTEM.to_string(),
                        code: entry.icd11.clone(),
                        display: name.to_string(),
                    },
                    Coding {
                        system: TM2_SYSTEM.to_string(),
                        code: entry.tm2.clone(),
                        display: format!("{name} (TM2)"),
                    },
                ],
            },
            subject: SubjectReference {
                reference: SUBJECT_REFERENCE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueDetails {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: &'static str,
    pub code: &'static str,
    pub details: IssueDetails,
}

/// FHIR OperationOutcome: errors and mutation acknowledgements.
#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcome {
    #[serde(rename = "resourceType")]
    pub resource_type: &'static str,
    pub issue: Vec<Issue>,
}

impl OperationOutcome {
    fn single(severity: &'static str, code: &'static str, text: impl Into<String>) -> Self {
        Self {
            resource_type: "OperationOutcome",
            issue: vec![Issue {
                severity,
                code,
                details: IssueDetails { text: text.into() },
            }],
        }
    }

    /// severity=error, e.g. codes `invalid` and `not-found`
    pub fn error(code: &'static str, text: impl Into<String>) -> Self {
        Self::single("error", code, text)
    }

    /// severity=information, e.g. codes `updated` and `deleted`
    pub fn information(code: &'static str, text: impl Into<String>) -> Self {
        Self::single("information", code, text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BundleEntry {
    pub resource: Condition,
}

/// FHIR Bundle of type `collection` wrapping the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: &'static str,

    #[serde(rename = "type")]
    pub bundle_type: &'static str,

    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    pub fn collection(conditions: Vec<Condition>) -> Self {
        Self {
            resource_type: "Bundle",
            bundle_type: "collection",
            entry: conditions
                .into_iter()
                .map(|resource| BundleEntry { resource })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CodeEntry {
        CodeEntry::new("CA23", "TM2-404")
    }

    #[test]
    fn test_condition_shape() {
        let condition = Condition::for_disease("Asthma", &entry(), None);
        let json = serde_json::to_value(&condition).unwrap();

        assert_eq!(json["resourceType"], "Condition");
        assert_eq!(json["id"], "cond-asthma");
        assert_eq!(json["subject"]["reference"], "Patient/P12345");
        assert_eq!(json["code"]["coding"][0]["system"], ICD11_SYSTEM);
        assert_eq!(json["code"]["coding"][0]["code"], "CA23");
        assert_eq!(json["code"]["coding"][0]["display"], "Asthma");
        assert_eq!(json["code"]["coding"][1]["system"], TM2_SYSTEM);
        assert_eq!(json["code"]["coding"][1]["code"], "TM2-404");
        assert_eq!(json["code"]["coding"][1]["display"], "Asthma (TM2)");
    }

    #[test]
    fn test_exact_condition_has_no_note() {
        let condition = Condition::for_disease("Asthma", &entry(), None);
        let json = serde_json::to_value(&condition).unwrap();
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_fuzzy_condition_carries_note() {
        let condition =
            Condition::for_disease("Asthma", &entry(), Some("Did you mean 'Asthma'?".to_string()));
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json["note"], "Did you mean 'Asthma'?");
    }

    #[test]
    fn test_operation_outcome_error() {
        let outcome = OperationOutcome::error("not-found", "Disease not found");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["resourceType"], "OperationOutcome");
        assert_eq!(json["issue"][0]["severity"], "error");
        assert_eq!(json["issue"][0]["code"], "not-found");
        assert_eq!(json["issue"][0]["details"]["text"], "Disease not found");
    }

    #[test]
    fn test_operation_outcome_information() {
        let outcome = OperationOutcome::information("updated", "Asthma updated successfully");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["issue"][0]["severity"], "information");
        assert_eq!(json["issue"][0]["code"], "updated");
    }

    #[test]
    fn test_bundle_collection() {
        let bundle = Bundle::collection(vec![
            Condition::for_disease("Asthma", &entry(), None),
            Condition::for_disease("Fever", &CodeEntry::new("MG21", "TM2-210"), None),
        ]);
        let json = serde_json::to_value(&bundle).unwrap();

        assert_eq!(json["resourceType"], "Bundle");
        assert_eq!(json["type"], "collection");
        assert_eq!(json["entry"].as_array().unwrap().len(), 2);
        assert_eq!(json["entry"][1]["resource"]["id"], "cond-fever");
    }
}
