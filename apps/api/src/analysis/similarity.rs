#![allow(dead_code)]

//! String similarity seam — swappable fuzzy-matching strategies on a 0–100
//! scale.
//!
//! `AppState` holds an `Arc<dyn StringSimilarity>`, so the matching strategy
//! (edit-distance ratio, Jaro-Winkler, something phonetic later) can be
//! swapped at startup without touching the skill extractor or the ATS
//! coverage engine.

use std::cmp::Ordering;

/// Normalized similarity between two strings on a 0–100 scale.
/// 100 means identical, 0 means nothing in common.
pub trait StringSimilarity: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Levenshtein edit-distance ratio. Default strategy: resumes contain typos
/// and formatting variants, and a high acceptance bar over this ratio trades
/// recall for precision.
pub struct LevenshteinRatio;

impl StringSimilarity for LevenshteinRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }
}

/// Jaro-Winkler alternative. More forgiving on transpositions and shared
/// prefixes; not the default.
pub struct JaroWinklerRatio;

impl StringSimilarity for JaroWinklerRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b) * 100.0
    }
}

/// Best-scoring candidate for `target`, or `None` when `candidates` is empty.
pub fn best_match<'a, I>(
    target: &str,
    candidates: I,
    similarity: &dyn StringSimilarity,
) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| (candidate, similarity.ratio(target, candidate)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
}
