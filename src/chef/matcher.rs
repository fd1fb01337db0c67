//! Fuzzy matching of free-text preferences against catalog names.
//!
//! Scoring is behind the [`Similarity`] trait. The reference scorer is
//! [`RatcliffObershelp`] (the "gestalt pattern matching" ratio); the `strsim`
//! scorers are available as alternatives and selected via [`SimilarityKind`].

use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::IngredientCatalog;
use crate::models::IngredientFact;

/// A string similarity score in `[0, 1]`.
pub trait Similarity {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Ratio of matched characters: `2 * M / (len(a) + len(b))`.
///
/// `M` is found by taking the longest common contiguous block (earliest in `a`,
/// then earliest in `b`) and recursing on the unmatched pieces either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatcliffObershelp;

impl Similarity for RatcliffObershelp {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matching_characters(&a, &b) as f64 / total as f64
    }
}

/// Sum of all matching block sizes.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut best = (alo, blo, 0);
    let mut prev = vec![0usize; width];

    for i in alo..ahi {
        let mut cur = vec![0usize; width];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = prev[j - blo] + 1;
                cur[j - blo + 1] = k;
                // Strictly greater keeps the earliest block on ties
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        prev = cur;
    }

    best
}

/// Jaro-Winkler similarity from `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

/// Levenshtein distance normalized to a similarity, from `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl Similarity for NormalizedLevenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Runtime choice of scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityKind {
    #[default]
    RatcliffObershelp,
    JaroWinkler,
    Levenshtein,
}

impl Similarity for SimilarityKind {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityKind::RatcliffObershelp => RatcliffObershelp.similarity(a, b),
            SimilarityKind::JaroWinkler => JaroWinkler.similarity(a, b),
            SimilarityKind::Levenshtein => NormalizedLevenshtein.similarity(a, b),
        }
    }
}

/// A catalog entry selected by a preference token.
#[derive(Debug, Clone)]
pub struct ScoredMatch<'c> {
    pub token: String,
    pub fact: &'c IngredientFact,
    pub score: f64,
}

/// Every catalog entry whose similarity to some token meets `threshold`.
///
/// Tokens are lowercased whitespace-separated words of `user_text`. Results are in
/// first-match order (token order, then catalog order) and deduplicated by name;
/// each entry carries the score from the token that first selected it.
pub fn score_matches<'c, S: Similarity + ?Sized>(
    user_text: &str,
    catalog: &'c IngredientCatalog,
    threshold: f64,
    similarity: &S,
) -> Vec<ScoredMatch<'c>> {
    let lowered = user_text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for token in lowered.split_whitespace() {
        for fact in catalog.all() {
            if seen.contains(fact.name.as_str()) {
                continue;
            }
            let score = similarity.similarity(token, &fact.name.to_lowercase());
            if score >= threshold {
                seen.insert(fact.name.as_str());
                matched.push(ScoredMatch {
                    token: token.to_string(),
                    fact,
                    score,
                });
            }
        }
    }

    matched
}

/// Catalog entries matching `user_text`; an empty result is a normal outcome.
pub fn find_matches<'c, S: Similarity + ?Sized>(
    user_text: &str,
    catalog: &'c IngredientCatalog,
    threshold: f64,
    similarity: &S,
) -> Vec<&'c IngredientFact> {
    score_matches(user_text, catalog, threshold, similarity)
        .into_iter()
        .map(|m| m.fact)
        .collect()
}
