//! ATS keyword coverage between a resume and a job description.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::preprocess::tokenize;
use crate::analysis::similarity::{best_match, StringSimilarity};

/// Minimum fuzzy ratio (0–100) for a near-miss term to count as present.
pub const MIN_COVERAGE_SCORE: f64 = 90.0;

/// Keyword-set overlap: rounded percentage plus sorted present/missing lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    pub percent: u32,
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

/// Computes keyword coverage of the job description by the resume. Every
/// distinct JD term counts as present on a verbatim hit, or on the best
/// fuzzy candidate at or above `min_fuzzy_score`; otherwise it is missing.
/// A job description that yields no terms is 0% coverage, not an error.
pub fn coverage(
    resume_text: &str,
    jd_text: &str,
    similarity: &dyn StringSimilarity,
    min_fuzzy_score: f64,
) -> CoverageResult {
    let resume_terms: BTreeSet<String> = tokenize(resume_text).into_iter().collect();
    let jd_terms: BTreeSet<String> = tokenize(jd_text).into_iter().collect();

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for term in &jd_terms {
        if resume_terms.contains(term) {
            present.push(term.clone());
            continue;
        }
        let fuzzy_hit = best_match(term, resume_terms.iter().map(String::as_str), similarity)
            .is_some_and(|(_, score)| score >= min_fuzzy_score);
        if fuzzy_hit {
            present.push(term.clone());
        } else {
            missing.push(term.clone());
        }
    }

    let percent = if jd_terms.is_empty() {
        0
    } else {
        (100.0 * present.len() as f64 / jd_terms.len() as f64).round() as u32
    };

    // Iteration over the BTreeSet already yields sorted output.
    CoverageResult {
        percent,
        present,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::similarity::LevenshteinRatio;

    fn cover(resume: &str, jd: &str) -> CoverageResult {
        coverage(resume, jd, &LevenshteinRatio, MIN_COVERAGE_SCORE)
    }

    #[test]
    fn test_partial_overlap_scenario() {
        let result = cover("I know python well", "Python SQL Docker");
        assert_eq!(result.present, vec!["python"]);
        assert_eq!(result.missing, vec!["docker", "sql"]);
        assert_eq!(result.percent, 33);
    }

    #[test]
    fn test_jd_against_itself_is_full_coverage() {
        let jd = "Senior engineer building distributed systems with Rust and Kubernetes";
        let result = cover(jd, jd);
        assert_eq!(result.percent, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_jd_is_zero_percent() {
        let result = cover("python sql docker", "");
        assert_eq!(result.percent, 0);
        assert!(result.present.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = cover("", "Python SQL Docker");
        assert_eq!(result.percent, 0);
        assert_eq!(result.missing, vec!["docker", "python", "sql"]);
    }

    #[test]
    fn test_fuzzy_near_miss_counts_as_present() {
        // "javascrpt" in the resume covers the JD's "javascript" at ratio 90.
        let result = cover("wrote javascrpt services", "JavaScript experience");
        assert!(result.present.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_lists_are_sorted() {
        let result = cover("zebra apple", "zebra apple mango banana");
        let mut present = result.present.clone();
        present.sort();
        assert_eq!(result.present, present);
        let mut missing = result.missing.clone();
        missing.sort();
        assert_eq!(result.missing, missing);
    }
}
