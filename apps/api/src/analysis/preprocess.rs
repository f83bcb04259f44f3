//! Text preprocessing — Unicode normalization, tokenization, and section
//! detection over raw resume text.
//!
//! Everything here is a pure function: no I/O, no shared mutable state, and
//! no failure mode. Empty or garbage input degrades to empty output, because
//! resume text is adversarial by nature and must never abort an analysis.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Closed set of resume section labels. `Other` collects every line seen
/// before the first recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Achievements,
    Other,
}

/// Header-detection patterns, tested per line in this priority order.
/// The skills/projects/achievements patterns carry word boundaries on both
/// sides so fragments like "skillset" never register as a header.
static SECTION_PATTERNS: Lazy<Vec<(SectionKey, Regex)>> = Lazy::new(|| {
    [
        (SectionKey::Summary, r"(summary|objective)\b"),
        (SectionKey::Experience, r"(experience|work history)\b"),
        (SectionKey::Education, r"(education|academics)\b"),
        (SectionKey::Skills, r"\bskills?\b"),
        (SectionKey::Projects, r"\bprojects?\b"),
        (SectionKey::Achievements, r"\bachievements?\b"),
    ]
    .into_iter()
    .map(|(key, pattern)| {
        (
            key,
            Regex::new(pattern).expect("section header pattern is valid"),
        )
    })
    .collect()
});

static HORIZONTAL_WS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("whitespace pattern is valid"));

/// Fixed English stop-word set. Tokens are already lowercase and purely
/// alphabetic when checked against this table.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will",
    "just", "don", "should", "now", "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn",
    "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn", "weren",
    "won", "wouldn",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Applies Unicode NFKC normalization, collapses runs of spaces/tabs to a
/// single space, and trims. Newlines survive so line structure is preserved
/// for the sectionizer.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    HORIZONTAL_WS.replace_all(&composed, " ").trim().to_string()
}

/// Lowercases, splits on non-alphabetic boundaries, and keeps tokens that are
/// longer than two characters and not stop words. Deterministic; empty input
/// yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|&w| w.chars().count() > 2 && !STOP_WORD_SET.contains(w))
        .map(str::to_string)
        .collect()
}

/// Sectioned view of a resume. Every line of the source lands in exactly one
/// bucket; the normalized full text is kept alongside for whole-document
/// passes (tokenization, ATS coverage).
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    full: String,
    sections: HashMap<SectionKey, String>,
}

impl SectionMap {
    /// The normalized full document text.
    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Accumulated text for a section, if any line was assigned to it.
    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(String::as_str)
    }

    /// Presence check: the section exists and accumulated non-empty text.
    /// Callers must treat absence as "not present".
    pub fn has(&self, key: SectionKey) -> bool {
        self.get(key).is_some_and(|text| !text.is_empty())
    }

    #[cfg(test)]
    fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// Splits normalized text into named sections by scanning for header
/// patterns line by line. The cursor starts at `Other`; a matching line
/// flushes the running buffer into the previous section and opens a new one
/// that begins with the header line itself. A section headed more than once
/// accumulates, it is never overwritten.
pub fn sectionize(text: &str) -> SectionMap {
    let full = normalize_text(text);
    let mut sections: HashMap<SectionKey, String> = HashMap::new();
    let mut current = SectionKey::Other;
    let mut buf: Vec<&str> = Vec::new();

    fn flush(sections: &mut HashMap<SectionKey, String>, current: SectionKey, buf: &mut Vec<&str>) {
        if buf.is_empty() {
            return;
        }
        let chunk = buf.join("\n");
        let entry = sections.entry(current).or_default();
        if !entry.is_empty() {
            entry.push('\n');
        }
        entry.push_str(chunk.trim());
        buf.clear();
    }

    for line in full.lines() {
        let low = line.trim().to_lowercase();
        let header = SECTION_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(&low))
            .map(|(key, _)| *key);
        match header {
            Some(key) => {
                flush(&mut sections, current, &mut buf);
                current = key;
                buf.push(line);
            }
            None => buf.push(line),
        }
    }
    flush(&mut sections, current, &mut buf);

    SectionMap { full, sections }
}
