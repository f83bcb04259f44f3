//! Flat record handed to the persistence collaborator.
//!
//! The core produces compatible field values without depending on any
//! storage schema; list fields are flattened to comma-separated strings the
//! way downstream reporting expects them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::report::AnalysisReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_score: u32,
    pub timestamp: DateTime<Utc>,
    pub page_count: usize,
    pub predicted_field: String,
    pub candidate_level: String,
    pub skills: String,
    pub recommended_skills: String,
    pub recommended_courses: String,
}

impl AnalysisRecord {
    /// Flattens a report into the persistence shape. Id and timestamp are
    /// passed in so the flattening itself stays pure and testable.
    pub fn from_report(report: &AnalysisReport, id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            name: report.basic_fields.name.clone().unwrap_or_default(),
            email: report.basic_fields.email.clone().unwrap_or_default(),
            resume_score: report.score,
            timestamp,
            page_count: report.pages,
            predicted_field: report.suggested_track.clone(),
            candidate_level: report.candidate_level.as_str().to_string(),
            skills: report.detected_skills.join(", "),
            recommended_skills: report.recommendation.skills.join(", "),
            recommended_courses: report
                .recommendation
                .courses
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::analyze_resume;
    use crate::analysis::similarity::LevenshteinRatio;
    use crate::analysis::skills::SkillBank;
    use crate::analysis::tracks::TrackMap;

    #[test]
    fn test_record_flattens_report_fields() {
        let report = analyze_resume(
            "Jane Doe\njane@example.com\nExperience\nBuilt APIs in Python and React.",
            None,
            2,
            &SkillBank::builtin(),
            &TrackMap::builtin(),
            &LevenshteinRatio,
        );
        let id = Uuid::nil();
        let ts = DateTime::<Utc>::UNIX_EPOCH;
        let record = AnalysisRecord::from_report(&report, id, ts);
        assert_eq!(record.id, id);
        assert_eq!(record.timestamp, ts);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.resume_score, report.score);
        assert_eq!(record.page_count, 2);
        assert_eq!(record.candidate_level, "Intermediate");
        assert!(record.skills.contains("python"));
        assert!(record.skills.contains("react"));
        assert_eq!(record.predicted_field, "Web Development");
    }

    #[test]
    fn test_missing_contact_fields_flatten_to_empty_strings() {
        let report = analyze_resume(
            "",
            None,
            1,
            &SkillBank::builtin(),
            &TrackMap::builtin(),
            &LevenshteinRatio,
        );
        let record = AnalysisRecord::from_report(&report, Uuid::nil(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.skills, "");
    }
}
