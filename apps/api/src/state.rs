use std::sync::Arc;

use crate::analysis::similarity::StringSimilarity;
use crate::analysis::skills::SkillBank;
use crate::analysis::tracks::TrackMap;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything analysis-related is immutable after startup and
/// read-shared across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Canonical skill vocabulary, built once per process lifetime.
    pub skills: Arc<SkillBank>,
    /// Track definitions — external file or built-in fallback.
    pub tracks: Arc<TrackMap>,
    /// Pluggable similarity strategy. Default: LevenshteinRatio.
    pub similarity: Arc<dyn StringSimilarity>,
}
