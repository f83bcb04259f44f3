//! Career-track classification — map-driven ranking plus the legacy
//! priority-list fallback.
//!
//! The two strategies coexist on purpose and can disagree. Policy: the
//! map-driven ranking wins unless its top score is zero, in which case the
//! legacy keyword groups get the last word. `suggested_track` encodes that
//! rule; nothing merges the strategies silently.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One track: a career-category label and the canonical skills defining it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDefinition {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered track definitions. Order matters: ranking ties are broken by map
/// order, so the external file format is a JSON array, not an object.
#[derive(Debug, Clone)]
pub struct TrackMap {
    tracks: Vec<TrackDefinition>,
}

impl TrackMap {
    /// Built-in default map, used whenever the external one is unavailable
    /// or malformed.
    pub fn builtin() -> Self {
        const DEFAULTS: &[(&str, &[&str])] = &[
            (
                "Web Development",
                &["react", "node", "django", "flask", "javascript", "html", "css", "nextjs"],
            ),
            (
                "Data Science",
                &["pandas", "numpy", "scikit-learn", "matplotlib", "seaborn", "sql"],
            ),
            ("AI/ML", &["tensorflow", "pytorch", "nlp", "cv", "llm", "transformers"]),
            (
                "Cloud/DevOps",
                &["aws", "gcp", "azure", "docker", "kubernetes", "terraform"],
            ),
            ("Mobile", &["android", "kotlin", "flutter", "swift"]),
            ("UI/UX", &["figma", "wireframing", "prototyping"]),
        ];
        Self {
            tracks: DEFAULTS
                .iter()
                .map(|(name, skills)| TrackDefinition {
                    name: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Loads track definitions from a JSON array of `{name, skills}` entries.
    /// Any failure (missing file, bad JSON, empty array) recovers locally to
    /// the built-in default; configuration problems never surface as errors.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("track map {} unreadable ({e}); using built-in default", path.display());
                return Self::builtin();
            }
        };
        match serde_json::from_str::<Vec<TrackDefinition>>(&raw) {
            Ok(tracks) if !tracks.is_empty() => Self { tracks },
            Ok(_) => {
                warn!("track map {} is empty; using built-in default", path.display());
                Self::builtin()
            }
            Err(e) => {
                warn!("track map {} is malformed ({e}); using built-in default", path.display());
                Self::builtin()
            }
        }
    }

    pub fn tracks(&self) -> &[TrackDefinition] {
        &self.tracks
    }
}

/// One ranked track with its overlap score and matched-skill evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackScore {
    pub name: String,
    pub score: usize,
    pub matched: Vec<String>,
}

/// Ranks every track by case-insensitive overlap between the detected skills
/// and the track's canonical list. Descending by score; the sort is stable,
/// so ties keep map order.
pub fn rank_tracks(skills: &[String], map: &TrackMap) -> Vec<TrackScore> {
    let detected: BTreeSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let mut scored: Vec<TrackScore> = map
        .tracks()
        .iter()
        .map(|track| {
            let matched: Vec<String> = track
                .skills
                .iter()
                .map(|s| s.to_lowercase())
                .filter(|s| detected.contains(s))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            TrackScore {
                name: track.name.clone(),
                score: matched.len(),
                matched,
            }
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// The first `k` entries of the full ranking.
pub fn top_tracks(skills: &[String], map: &TrackMap, k: usize) -> Vec<TrackScore> {
    let mut ranked = rank_tracks(skills, map);
    ranked.truncate(k);
    ranked
}

/// Legacy single-best inference: fixed priority list of keyword groups,
/// first group with any hit wins. Kept for backward compatibility; callers
/// should prefer the map-driven ranking and only fall back here.
pub fn infer_track(skills: &[String]) -> &'static str {
    const GROUPS: &[(&[&str], &str)] = &[
        (&["tensorflow", "pytorch", "scikit-learn", "ml"], "Data Science / ML"),
        (&["react", "django", "flask", "node"], "Web Development"),
        (&["android", "kotlin", "flutter", "swift"], "Mobile"),
        (&["figma", "wireframing", "prototyping"], "UI/UX"),
    ];
    for (group, label) in GROUPS {
        if skills.iter().any(|s| group.contains(&s.as_str())) {
            return label;
        }
    }
    "General Software"
}

/// Fallback policy: the map-driven winner, unless the whole ranking came up
/// zero, then the legacy strategy decides.
pub fn suggested_track(ranking: &[TrackScore], skills: &[String]) -> String {
    match ranking.first() {
        Some(top) if top.score > 0 => top.name.clone(),
        _ => infer_track(skills).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn two_track_map() -> TrackMap {
        TrackMap {
            tracks: vec![
                TrackDefinition {
                    name: "Web Development".to_string(),
                    skills: vec!["react".to_string(), "node".to_string()],
                },
                TrackDefinition {
                    name: "Data Science".to_string(),
                    skills: vec!["python".to_string(), "pandas".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_tie_broken_by_map_order() {
        let ranking = top_tracks(&detected(&["python", "react"]), &two_track_map(), 2);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Web Development");
        assert_eq!(ranking[0].score, 1);
        assert_eq!(ranking[0].matched, vec!["react"]);
        assert_eq!(ranking[1].name, "Data Science");
        assert_eq!(ranking[1].score, 1);
        assert_eq!(ranking[1].matched, vec!["python"]);
    }

    #[test]
    fn test_top_tracks_truncates_to_k() {
        let ranking = top_tracks(&detected(&["python"]), &TrackMap::builtin(), 3);
        assert_eq!(ranking.len(), 3);
    }

    #[test]
    fn test_ranking_is_sorted_descending() {
        let ranking = rank_tracks(&detected(&["react", "node", "python"]), &two_track_map());
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_matched_is_subset_of_detected_and_track() {
        let skills = detected(&["react", "docker", "figma"]);
        for entry in rank_tracks(&skills, &TrackMap::builtin()) {
            let track_skills: Vec<String> = TrackMap::builtin()
                .tracks()
                .iter()
                .find(|t| t.name == entry.name)
                .map(|t| t.skills.clone())
                .unwrap();
            for m in &entry.matched {
                assert!(skills.contains(m), "{m} not in detected skills");
                assert!(track_skills.contains(m), "{m} not in track {}", entry.name);
            }
        }
    }

    #[test]
    fn test_overlap_is_case_insensitive() {
        let ranking = rank_tracks(&detected(&["React", "NODE"]), &two_track_map());
        assert_eq!(ranking[0].score, 2);
    }

    #[test]
    fn test_infer_track_priority_order() {
        // ML group outranks web even when both hit.
        assert_eq!(infer_track(&detected(&["react", "pytorch"])), "Data Science / ML");
        assert_eq!(infer_track(&detected(&["react"])), "Web Development");
        assert_eq!(infer_track(&detected(&["kotlin"])), "Mobile");
        assert_eq!(infer_track(&detected(&["figma"])), "UI/UX");
        assert_eq!(infer_track(&detected(&[])), "General Software");
    }

    #[test]
    fn test_suggested_track_prefers_map_winner() {
        let ranking = rank_tracks(&detected(&["react"]), &two_track_map());
        assert_eq!(suggested_track(&ranking, &detected(&["react"])), "Web Development");
    }

    #[test]
    fn test_suggested_track_falls_back_to_legacy_on_zero_score() {
        // "ml" is in no built-in track list but triggers the legacy ML group.
        let skills = detected(&["ml"]);
        let ranking = rank_tracks(&skills, &TrackMap::builtin());
        assert_eq!(ranking[0].score, 0);
        assert_eq!(suggested_track(&ranking, &skills), "Data Science / ML");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_builtin() {
        let map = TrackMap::load("/nonexistent/tracks.json");
        assert_eq!(map.tracks().len(), TrackMap::builtin().tracks().len());
    }
}
