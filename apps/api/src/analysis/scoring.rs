//! Rubric scoring over detected sections.

use serde::{Deserialize, Serialize};

use crate::analysis::preprocess::{SectionKey, SectionMap};

/// Fixed rubric, evaluated in order. Weights sum to 100.
const RUBRIC: &[(SectionKey, u32)] = &[
    (SectionKey::Summary, 15),
    (SectionKey::Experience, 25),
    (SectionKey::Education, 15),
    (SectionKey::Skills, 20),
    (SectionKey::Projects, 15),
    (SectionKey::Achievements, 10),
];

/// One rubric criterion: section key, whether it was present, its weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub key: SectionKey,
    pub present: bool,
    pub weight: u32,
}

/// Capped total plus the per-criterion breakdown in rubric order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: u32,
    pub details: Vec<ScoreDetail>,
}

/// Sums the weights of present sections. The cap at 100 is defensive; with
/// this rubric the natural maximum is already 100.
pub fn score_resume(sections: &SectionMap) -> ScoreResult {
    let mut details = Vec::with_capacity(RUBRIC.len());
    let mut total = 0;
    for &(key, weight) in RUBRIC {
        let present = sections.has(key);
        if present {
            total += weight;
        }
        details.push(ScoreDetail {
            key,
            present,
            weight,
        });
    }
    ScoreResult {
        total: total.min(100),
        details,
    }
}
