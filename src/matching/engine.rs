use crate::catalog::store::DiseaseCatalog;
use crate::core::result::MatchResult;
use crate::core::types::{CodeEntry, DiseaseName, QueryError};
use crate::matching::scoring::{SimilarityScorer, TokenSetScorer};

/// Default minimum (exclusive) similarity score for accepting a fuzzy match
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Configuration for the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// A fuzzy candidate is accepted only if its score is strictly greater
    /// than this value. Equal-to-threshold does not match.
    pub threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Resolves a free-text query to a catalog entry.
///
/// Borrows the catalog for the duration of one query and never caches it, so
/// every call sees the catalog's current contents. Resolution itself has no
/// side effects.
pub struct Resolver<'a> {
    catalog: &'a DiseaseCatalog,
    scorer: Box<dyn SimilarityScorer>,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default scorer and threshold
    pub fn new(catalog: &'a DiseaseCatalog) -> Self {
        Self::with_config(catalog, ResolverConfig::default())
    }

    /// Create a resolver with a custom configuration
    pub fn with_config(catalog: &'a DiseaseCatalog, config: ResolverConfig) -> Self {
        Self {
            catalog,
            scorer: Box::new(TokenSetScorer),
            config,
        }
    }

    /// Swap in a different similarity scorer.
    ///
    /// Threshold comparison and tie-breaking are unaffected: they belong to
    /// the resolver, not the scorer.
    pub fn with_scorer(mut self, scorer: impl SimilarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Resolve a query string to the best catalog match.
    ///
    /// The trimmed query is first looked up exactly (case-sensitive). On a
    /// miss, every canonical name is scored and the single best candidate is
    /// accepted if it beats the threshold strictly. Ties at the best score go
    /// to the lexicographically smallest name, so results are deterministic
    /// regardless of scorer or iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for an empty or whitespace-only query.
    pub fn resolve(&self, query: &str) -> Result<MatchResult, QueryError> {
        let name = DiseaseName::new(query)?;

        // Exact path: never consults the scorer
        if let Some(entry) = self.catalog.get(name.as_str()) {
            return Ok(MatchResult::Exact {
                name,
                entry: entry.clone(),
            });
        }

        Ok(self.resolve_fuzzy(name.as_str()))
    }

    fn resolve_fuzzy(&self, query: &str) -> MatchResult {
        let mut best: Option<(DiseaseName, CodeEntry, f64)> = None;

        // An empty catalog yields no candidates and falls through to NotFound.
        for (candidate, entry) in self.catalog.entries() {
            let score = self.scorer.score(query, candidate.as_str());

            let replaces = match &best {
                None => true,
                // Strictly-higher score wins; an equal score wins only for a
                // lexicographically smaller name.
                Some((best_name, _, best_score)) => {
                    score > *best_score || (score == *best_score && candidate < *best_name)
                }
            };
            if replaces {
                best = Some((candidate, entry, score));
            }
        }

        match best {
            Some((name, entry, score)) if score > self.config.threshold => {
                tracing::debug!("fuzzy match '{query}' -> '{name}' ({score:.1})");
                MatchResult::Fuzzy { name, entry, score }
            }
            _ => MatchResult::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::DiseaseCatalog;

    fn make_catalog(entries: &[(&str, &str, &str)]) -> DiseaseCatalog {
        let diseases: Vec<String> = entries
            .iter()
            .map(|(name, icd11, tm2)| {
                format!(r#""{name}": {{"icd11": "{icd11}", "tm2": "{tm2}"}}"#)
            })
            .collect();
        let json = format!(
            r#"{{"version": "1.0.0", "created_at": "2026-01-01T00:00:00Z", "diseases": {{{}}}}}"#,
            diseases.join(",")
        );
        DiseaseCatalog::from_json(&json).unwrap()
    }

    fn seed_catalog() -> DiseaseCatalog {
        make_catalog(&[
            ("Asthma", "CA23", "TM2-404"),
            ("Diabetes mellitus", "5A11", "TM2-101"),
            ("Fever", "MG21", "TM2-210"),
        ])
    }

    #[test]
    fn test_exact_match() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        let result = resolver.resolve("Asthma").unwrap();
        match result {
            MatchResult::Exact { name, entry } => {
                assert_eq!(name.as_str(), "Asthma");
                assert_eq!(entry.icd11, "CA23");
            }
            other => panic!("expected exact match, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_match_trims_query() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        let result = resolver.resolve("  Fever  ").unwrap();
        assert!(matches!(result, MatchResult::Exact { .. }));
    }

    #[test]
    fn test_case_variant_goes_through_fuzzy_path() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        // Exact lookup is case-sensitive, so "asthma" misses and the fuzzy
        // pass picks it up at score 100.
        let result = resolver.resolve("asthma").unwrap();
        match result {
            MatchResult::Fuzzy { name, entry, score } => {
                assert_eq!(name.as_str(), "Asthma");
                assert_eq!(entry.tm2, "TM2-404");
                assert!(score >= DEFAULT_THRESHOLD);
            }
            other => panic!("expected fuzzy match, got {other:?}"),
        }
    }

    #[test]
    fn test_typo_resolves_fuzzily() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        let result = resolver.resolve("Astham").unwrap();
        match result {
            MatchResult::Fuzzy { name, score, .. } => {
                assert_eq!(name.as_str(), "Asthma");
                assert!(score > DEFAULT_THRESHOLD);
            }
            other => panic!("expected fuzzy match, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        assert_eq!(resolver.resolve("").unwrap_err(), QueryError::Empty);
        assert_eq!(resolver.resolve("   ").unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn test_unrelated_query_is_not_found() {
        let catalog = seed_catalog();
        let resolver = Resolver::new(&catalog);

        let result = resolver.resolve("Zzzzzzz").unwrap();
        assert_eq!(result, MatchResult::NotFound);
    }

    #[test]
    fn test_empty_catalog_is_not_found_not_a_panic() {
        let catalog = DiseaseCatalog::new();
        let resolver = Resolver::new(&catalog);

        let result = resolver.resolve("Asthma").unwrap();
        assert_eq!(result, MatchResult::NotFound);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        let catalog = seed_catalog();

        // "asthma" scores exactly 100 against "Asthma"; at threshold 100 the
        // strictly-greater rule must reject it.
        let at_boundary = Resolver::with_config(&catalog, ResolverConfig { threshold: 100.0 });
        assert_eq!(at_boundary.resolve("asthma").unwrap(), MatchResult::NotFound);

        let below_boundary = Resolver::with_config(&catalog, ResolverConfig { threshold: 99.9 });
        assert!(matches!(
            below_boundary.resolve("asthma").unwrap(),
            MatchResult::Fuzzy { .. }
        ));
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // "Crror" is one substitution away from both names, so they score
        // identically; the lexicographically smaller name must win.
        let catalog = make_catalog(&[("Brror", "B1", "TM2-002"), ("Arror", "A1", "TM2-001")]);
        let resolver = Resolver::new(&catalog);

        for _ in 0..10 {
            let result = resolver.resolve("Crror").unwrap();
            match &result {
                MatchResult::Fuzzy { name, .. } => assert_eq!(name.as_str(), "Arror"),
                other => panic!("expected fuzzy match, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_custom_scorer_is_pluggable() {
        struct FlatScorer(f64);
        impl SimilarityScorer for FlatScorer {
            fn score(&self, _query: &str, _candidate: &str) -> f64 {
                self.0
            }
        }

        let catalog = seed_catalog();

        // All candidates tie at 90: lexicographic tie-break picks "Asthma".
        let resolver = Resolver::new(&catalog).with_scorer(FlatScorer(90.0));
        match resolver.resolve("anything").unwrap() {
            MatchResult::Fuzzy { name, score, .. } => {
                assert_eq!(name.as_str(), "Asthma");
                assert!((score - 90.0).abs() < f64::EPSILON);
            }
            other => panic!("expected fuzzy match, got {other:?}"),
        }

        // A scorer pinned to the threshold never matches (exclusive bound).
        let resolver = Resolver::new(&catalog).with_scorer(FlatScorer(DEFAULT_THRESHOLD));
        assert_eq!(resolver.resolve("anything").unwrap(), MatchResult::NotFound);
    }
}
