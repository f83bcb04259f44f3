//! Human-readable improvement suggestions from section and keyword gaps.

use crate::analysis::preprocess::{SectionKey, SectionMap};

/// At most this many missing keywords are named in the ATS suggestion.
const MAX_LISTED_KEYWORDS: usize = 15;

/// Pure rule evaluation in fixed order: missing summary, missing projects,
/// missing achievements, missing ATS keywords, no skills found. Only
/// triggered messages are returned; an empty list means no actionable gaps.
pub fn suggest(
    sections: &SectionMap,
    skills_found: &[String],
    missing_keywords: &[String],
) -> Vec<String> {
    let mut msgs = Vec::new();
    if !sections.has(SectionKey::Summary) {
        msgs.push(
            "Add a brief **Summary/Objective** with your target role and 2–3 achievements."
                .to_string(),
        );
    }
    if !sections.has(SectionKey::Projects) {
        msgs.push(
            "Include **2–3 key projects** with tech stack, your role, and measurable outcomes."
                .to_string(),
        );
    }
    if !sections.has(SectionKey::Achievements) {
        msgs.push("List **Achievements** with numbers (e.g., improved X by Y%).".to_string());
    }
    if !missing_keywords.is_empty() {
        let listed = missing_keywords
            .iter()
            .take(MAX_LISTED_KEYWORDS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        msgs.push(format!("Missing **ATS keywords** from JD: {listed} …"));
    }
    if skills_found.is_empty() {
        msgs.push(
            "Populate the **Skills** section with tools/libraries you actually used.".to_string(),
        );
    }
    msgs
}
