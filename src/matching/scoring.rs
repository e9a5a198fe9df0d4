use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Pluggable similarity measure between a query and one candidate name.
///
/// Implementations return a score in 0-100. The threshold comparison and the
/// tie-break rule live in the [`Resolver`](crate::matching::engine::Resolver),
/// not here, so swapping the scorer never changes acceptance semantics.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// Default scorer: token-based similarity tolerant of reordering, case
/// differences, and minor edits.
///
/// Both strings are normalized (lowercased, whitespace collapsed), then the
/// score is the maximum of the plain, token-sorted, and token-set pairings
/// under `rapidfuzz::fuzz::ratio`. Reordered words compare equal after token
/// sorting; subset phrases score high through the token-set pairing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetScorer;

impl SimilarityScorer for TokenSetScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let a = normalize(query);
        let b = normalize(candidate);

        let plain = ratio(&a, &b);
        let sorted = ratio(&token_sort(&a), &token_sort(&b));
        let set = token_set_ratio(&a, &b);

        plain.max(sorted).max(set)
    }
}

fn ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Normalize a string for comparison.
///
/// - Trims whitespace
/// - Converts to lowercase
/// - Collapses runs of whitespace to single spaces
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rejoin the words of an already-normalized string in sorted order.
fn token_sort(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split(' ').collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-set ratio over an already-normalized pair.
///
/// Splits both sides into unique-token sets, then compares the shared-token
/// string against each side's "shared + remainder" string and the remainders
/// against each other, taking the best pairing. This is what lets
/// "mellitus diabetes" score 100 against "Diabetes mellitus".
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split(' ').filter(|t| !t.is_empty()).collect();
    let tokens_b: BTreeSet<&str> = b.split(' ').filter(|t| !t.is_empty()).collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let sect = intersection.join(" ");
    let sect_plus_a = join_parts(&sect, &only_a);
    let sect_plus_b = join_parts(&sect, &only_b);

    ratio(&sect, &sect_plus_a)
        .max(ratio(&sect, &sect_plus_b))
        .max(ratio(&sect_plus_a, &sect_plus_b))
}

fn join_parts(sect: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        sect.to_string()
    } else if sect.is_empty() {
        rest.join(" ")
    } else {
        format!("{sect} {}", rest.join(" "))
    }
}
