use serde::{Deserialize, Serialize};

/// A user's declared job-search preferences, captured at onboarding.
///
/// Every field is optional on the wire and defaults to empty/false — a
/// partially filled preference set must never fail scoring, it just
/// contributes less.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    /// Declared value-tags, e.g. "Career Growth". Order matters for scoring.
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub subfield: String,
    #[serde(default)]
    pub specialization: String,
    /// Preferred locations, checked in declaration order (first match wins).
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_preference: bool,
    /// Target role-level label, e.g. "Senior" or "Entry Level".
    #[serde(default)]
    pub role_level: String,
}
