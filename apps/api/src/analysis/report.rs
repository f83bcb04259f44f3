//! End-to-end analysis orchestration.
//!
//! `analyze_resume` wires the pure pipeline stages together:
//! text → sectionize → {score, tokenize → skills → tracks} → optional ATS
//! coverage → suggestions. Every invocation builds fresh values from its
//! inputs and the shared read-only configuration; nothing is retained
//! between calls.

use serde::{Deserialize, Serialize};

use crate::analysis::ats::{coverage, CoverageResult, MIN_COVERAGE_SCORE};
use crate::analysis::preprocess::{sectionize, tokenize};
use crate::analysis::profile::{candidate_level, detect_basic_fields, BasicFields, CandidateLevel};
use crate::analysis::recommend::{recommendations_for, Recommendation};
use crate::analysis::scoring::{score_resume, ScoreDetail};
use crate::analysis::similarity::StringSimilarity;
use crate::analysis::skills::{extract_skills, SkillBank, MIN_SKILL_SCORE};
use crate::analysis::suggestions::suggest;
use crate::analysis::tracks::{suggested_track, top_tracks, TrackMap, TrackScore};

/// Number of ranked tracks returned in a report.
const TOP_TRACK_COUNT: usize = 3;

/// Structured result of one full analysis. Plain data, transport-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u32,
    pub score_details: Vec<ScoreDetail>,
    pub detected_skills: Vec<String>,
    pub suggested_track: String,
    pub tracks: Vec<TrackScore>,
    pub pages: usize,
    pub candidate_level: CandidateLevel,
    pub basic_fields: BasicFields,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats: Option<CoverageResult>,
    pub suggestions: Vec<String>,
}

/// Runs the whole pipeline over extracted resume text and an optional job
/// description. Never fails: empty or malformed text degrades to an empty
/// report (score 0, no skills, maximal suggestions).
pub fn analyze_resume(
    resume_text: &str,
    jd_text: Option<&str>,
    pages: usize,
    bank: &SkillBank,
    track_map: &TrackMap,
    similarity: &dyn StringSimilarity,
) -> AnalysisReport {
    let sections = sectionize(resume_text);
    let score = score_resume(&sections);

    let tokens = tokenize(sections.full_text());
    let detected_skills = extract_skills(&tokens, bank, similarity, MIN_SKILL_SCORE);

    let tracks = top_tracks(&detected_skills, track_map, TOP_TRACK_COUNT);
    let track = suggested_track(&tracks, &detected_skills);

    let ats = jd_text
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| coverage(sections.full_text(), jd, similarity, MIN_COVERAGE_SCORE));
    let missing = ats.as_ref().map(|c| c.missing.as_slice()).unwrap_or(&[]);

    let suggestions = suggest(&sections, &detected_skills, missing);
    let basic_fields = detect_basic_fields(resume_text);
    let recommendation = recommendations_for(&track);

    AnalysisReport {
        score: score.total,
        score_details: score.details,
        detected_skills,
        suggested_track: track,
        tracks,
        pages,
        candidate_level: candidate_level(pages),
        basic_fields,
        recommendation,
        ats,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::similarity::LevenshteinRatio;

    const RESUME: &str = "Jane Doe\njane@example.com\nSummary\nBackend engineer.\nExperience\nBuilt APIs in Python and React.\nEducation\nBS Computer Science";

    fn analyze(resume: &str, jd: Option<&str>, pages: usize) -> AnalysisReport {
        analyze_resume(
            resume,
            jd,
            pages,
            &SkillBank::builtin(),
            &TrackMap::builtin(),
            &LevenshteinRatio,
        )
    }

    #[test]
    fn test_full_pipeline_without_jd() {
        let report = analyze(RESUME, None, 1);
        assert_eq!(report.score, 55, "summary + experience + education");
        assert!(report.detected_skills.contains(&"python".to_string()));
        assert!(report.detected_skills.contains(&"react".to_string()));
        assert_eq!(report.suggested_track, "Web Development");
        assert_eq!(report.tracks.len(), 3);
        assert!(report.ats.is_none());
        assert_eq!(report.basic_fields.email.as_deref(), Some("jane@example.com"));
        assert_eq!(report.candidate_level, CandidateLevel::Fresher);
        assert!(!report.recommendation.skills.is_empty());
    }

    #[test]
    fn test_jd_produces_ats_block_and_keyword_suggestions() {
        let report = analyze(RESUME, Some("Python SQL Docker"), 1);
        let ats = report.ats.expect("ats block expected when a JD is given");
        assert_eq!(ats.percent, 33);
        assert_eq!(ats.present, vec!["python"]);
        assert_eq!(ats.missing, vec!["docker", "sql"]);
        assert!(report
            .suggestions
            .iter()
            .any(|m| m.contains("ATS keywords") && m.contains("docker")));
    }

    #[test]
    fn test_blank_jd_is_treated_as_absent() {
        let report = analyze(RESUME, Some("   \n "), 1);
        assert!(report.ats.is_none());
    }

    #[test]
    fn test_empty_resume_degrades_instead_of_failing() {
        let report = analyze("", None, 1);
        assert_eq!(report.score, 0);
        assert!(report.detected_skills.is_empty());
        assert_eq!(report.suggested_track, "General Software");
        assert_eq!(report.suggestions.len(), 4);
        assert!(report.recommendation.skills.is_empty());
    }

    #[test]
    fn test_pages_drive_candidate_level() {
        assert_eq!(analyze(RESUME, None, 2).candidate_level, CandidateLevel::Intermediate);
        assert_eq!(analyze(RESUME, None, 4).candidate_level, CandidateLevel::Experienced);
    }
}
