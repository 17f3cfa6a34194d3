use serde::{Deserialize, Serialize};

/// Final output of the scoring pipeline, returned to API callers.
///
/// `match_score` is always within 0–100; skill lists and tips are present
/// even when empty. The preference fields only appear when a preference
/// merge produced something, and `error` only on parser degradation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub tailoring_tips: Vec<String>,
    pub fit_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_insights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_warnings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
