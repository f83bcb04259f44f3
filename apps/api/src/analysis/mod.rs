//! Core resume-analysis pipeline: preprocessing, sectionizing, scoring,
//! skill extraction, track classification, ATS coverage, and suggestions.
//! Pure functions over immutable inputs; the HTTP layer lives in `handlers`.

pub mod ats;
pub mod handlers;
pub mod preprocess;
pub mod profile;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod similarity;
pub mod skills;
pub mod suggestions;
pub mod tracks;
