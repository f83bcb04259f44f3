//! Canonical skill vocabulary and fuzzy skill extraction.
//!
//! The vocabulary is the deduplicated, sorted union of categorized skill
//! lists. It is built once at startup and read-shared across all concurrent
//! analyses.

use std::collections::{BTreeSet, HashSet};

use crate::analysis::similarity::{best_match, StringSimilarity};

/// Minimum fuzzy ratio (0–100) for a non-exact token to count as a skill hit.
/// Below this bar unrelated short words start colliding, so the threshold
/// trades recall for precision.
pub const MIN_SKILL_SCORE: f64 = 90.0;

const PROGRAMMING: &[&str] = &[
    "python", "java", "c++", "javascript", "typescript", "sql", "bash", "powershell",
];
const DATA: &[&str] = &[
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "matplotlib", "seaborn",
    "statistics", "eda", "ml", "nlp", "computer vision", "xgboost", "lightgbm",
];
const WEB: &[&str] = &[
    "react", "node", "django", "flask", "fastapi", "laravel", "wordpress", "tailwind", "next.js",
];
const MOBILE: &[&str] = &["android", "kotlin", "flutter", "swift", "xcode"];
const CLOUD: &[&str] = &[
    "aws", "gcp", "azure", "docker", "kubernetes", "git", "linux", "ci/cd",
];
const UIUX: &[&str] = &[
    "figma", "adobe xd", "wireframing", "prototyping", "usability testing",
];

/// Canonical skill vocabulary.
///
/// Known limitation, preserved on purpose: multi-word entries ("computer
/// vision", "adobe xd") and entries with non-alphabetic characters ("c++",
/// "ci/cd", "next.js") cannot match single alphabetic tokens verbatim and
/// only participate through the fuzzy path, which rarely clears the
/// threshold. Catching them would need phrase-aware tokenization.
pub struct SkillBank {
    canon: Vec<String>,
}

impl SkillBank {
    /// Builds the vocabulary from the built-in categorized skill bank.
    pub fn builtin() -> Self {
        let canon: BTreeSet<String> = [PROGRAMMING, DATA, WEB, MOBILE, CLOUD, UIUX]
            .iter()
            .flat_map(|category| category.iter().map(|s| s.to_string()))
            .collect();
        Self {
            canon: canon.into_iter().collect(),
        }
    }

    /// The sorted, deduplicated canonical skill names.
    pub fn canonical(&self) -> &[String] {
        &self.canon
    }
}

/// Matches tokens against the canonical vocabulary: verbatim token-set hit
/// first, otherwise the best fuzzy candidate at or above `min_score`.
/// Returns the sorted set of found canonical names; idempotent over the same
/// token sequence.
pub fn extract_skills(
    tokens: &[String],
    bank: &SkillBank,
    similarity: &dyn StringSimilarity,
    min_score: f64,
) -> Vec<String> {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let mut found = Vec::new();
    for skill in bank.canonical() {
        if token_set.contains(skill.as_str()) {
            found.push(skill.clone());
            continue;
        }
        if let Some((_, score)) = best_match(skill, token_set.iter().copied(), similarity) {
            if score >= min_score {
                found.push(skill.clone());
            }
        }
    }
    // `canon` is sorted, so `found` already is.
    found
}
