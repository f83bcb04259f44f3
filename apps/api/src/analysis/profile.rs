//! Contact-field detection and the page-count experience heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("email pattern is valid"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s()\-]{8,}\d").expect("phone pattern is valid"));

/// Best-effort contact fields pulled from raw resume text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// First email and phone match anywhere in the text; the name guess is the
/// first line when it has a plausible length (3–60 characters).
pub fn detect_basic_fields(text: &str) -> BasicFields {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE.find(text).map(|m| m.as_str().to_string());
    let first_line = text.lines().next().unwrap_or("").trim();
    let name = (3..=60)
        .contains(&first_line.chars().count())
        .then(|| first_line.to_string());
    BasicFields { name, email, phone }
}

/// Experience level inferred from page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateLevel {
    Fresher,
    Intermediate,
    Experienced,
}

impl CandidateLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateLevel::Fresher => "Fresher",
            CandidateLevel::Intermediate => "Intermediate",
            CandidateLevel::Experienced => "Experienced",
        }
    }
}

/// One page reads as a fresher profile, two as intermediate, more as
/// experienced. Zero pages (nothing extracted) counts as one.
pub fn candidate_level(pages: usize) -> CandidateLevel {
    match pages {
        0 | 1 => CandidateLevel::Fresher,
        2 => CandidateLevel::Intermediate,
        _ => CandidateLevel::Experienced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_email_and_phone() {
        let fields = detect_basic_fields(
            "Jane Doe\njane.doe@example.com | +1 (555) 123-4567\nExperience\n...",
        );
        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(fields.phone.as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let fields = detect_basic_fields("no contact details here at all");
        assert!(fields.email.is_none());
        assert!(fields.phone.is_none());
    }

    #[test]
    fn test_overlong_first_line_is_not_a_name() {
        let long_line = "x".repeat(80);
        let fields = detect_basic_fields(&long_line);
        assert!(fields.name.is_none());
    }

    #[test]
    fn test_empty_text_yields_default_fields() {
        let fields = detect_basic_fields("");
        assert!(fields.name.is_none());
        assert!(fields.email.is_none());
        assert!(fields.phone.is_none());
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(candidate_level(0), CandidateLevel::Fresher);
        assert_eq!(candidate_level(1), CandidateLevel::Fresher);
        assert_eq!(candidate_level(2), CandidateLevel::Intermediate);
        assert_eq!(candidate_level(3), CandidateLevel::Experienced);
        assert_eq!(candidate_level(10), CandidateLevel::Experienced);
    }
}
