//! Result parser — recovers a structured analysis from free-form model output.
//!
//! Models asked for "JSON only" still wrap the object in markdown fences or
//! conversational text often enough that a layered extraction is required.
//! Three strategies are tried in order — fenced code block, greedy `{...}`
//! span, whole trimmed string — and the first successful parse wins. A string
//! that defeats all three degrades to a zero-score error payload instead of
//! failing the request.

use serde::{Deserialize, Serialize};

/// Marker placed in the `error` field when every extraction strategy fails.
pub const PARSE_FAILURE_MARKER: &str = "Data Science Logic Failed: Invalid LLM Output Format";

/// The analysis object the match prompt instructs the model to return.
/// Every field is defaulted so a partially filled object still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysis {
    #[serde(default)]
    pub match_score: i64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub tailoring_tips: Vec<String>,
    #[serde(default)]
    pub fit_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one extraction attempt.
enum ParseOutcome {
    Success(RawAnalysis),
    Failure(String),
}

/// Parses raw model output, degrading to an error payload when no strategy
/// yields valid JSON. Never fails.
pub fn parse_raw_analysis(raw: &str) -> RawAnalysis {
    let candidates = [fenced_block(raw), brace_span(raw), Some(raw.trim())];

    let mut last_cause = "no JSON object found in response".to_string();

    for candidate in candidates.into_iter().flatten() {
        match attempt(candidate) {
            ParseOutcome::Success(analysis) => return analysis,
            ParseOutcome::Failure(cause) => last_cause = cause,
        }
    }

    RawAnalysis {
        match_score: 0,
        fit_summary: format!("Parsing Error: {last_cause}"),
        error: Some(PARSE_FAILURE_MARKER.to_string()),
        ..Default::default()
    }
}

fn attempt(candidate: &str) -> ParseOutcome {
    match serde_json::from_str::<RawAnalysis>(candidate) {
        Ok(analysis) => ParseOutcome::Success(analysis),
        Err(e) => ParseOutcome::Failure(e.to_string()),
    }
}

/// Strategy 1: the JSON object inside a ``` or ```json fenced block.
fn fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let after_tag = after_fence.strip_prefix("json").unwrap_or(after_fence);
    let end = after_tag.find("```")?;
    let inner = &after_tag[..end];
    brace_span(inner)
}

/// Strategy 2: the greedy span from the first `{` to the last `}`.
fn brace_span(raw: &str) -> Option<&str> {
    let open = raw.find('{')?;
    let close = raw.rfind('}')?;
    if close < open {
        return None;
    }
    Some(&raw[open..=close])
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BODY: &str = r#"{
        "match_score": 82,
        "matched_skills": ["Rust", "SQL"],
        "missing_skills": ["Kubernetes"],
        "tailoring_tips": ["Update Skills section to include Kubernetes because the JD requires it."],
        "fit_summary": "Strong systems candidate."
    }"#;

    fn assert_valid(analysis: &RawAnalysis) {
        assert_eq!(analysis.match_score, 82);
        assert_eq!(analysis.matched_skills, vec!["Rust", "SQL"]);
        assert_eq!(analysis.missing_skills, vec!["Kubernetes"]);
        assert_eq!(analysis.fit_summary, "Strong systems candidate.");
        assert!(analysis.error.is_none());
    }

    #[test]
    fn test_parses_fenced_json_block() {
        let raw = format!("Here is the analysis:\n```json\n{VALID_BODY}\n```\nHope this helps!");
        assert_valid(&parse_raw_analysis(&raw));
    }

    #[test]
    fn test_parses_untagged_fenced_block() {
        let raw = format!("```\n{VALID_BODY}\n```");
        assert_valid(&parse_raw_analysis(&raw));
    }

    #[test]
    fn test_parses_bare_object_in_prose() {
        let raw = format!("Sure! {VALID_BODY} Let me know if you need more.");
        assert_valid(&parse_raw_analysis(&raw));
    }

    #[test]
    fn test_parses_raw_json_directly() {
        assert_valid(&parse_raw_analysis(VALID_BODY));
    }

    #[test]
    fn test_all_three_framings_parse_identically() {
        let fenced = parse_raw_analysis(&format!("```json\n{VALID_BODY}\n```"));
        let prose = parse_raw_analysis(&format!("analysis: {VALID_BODY}"));
        let bare = parse_raw_analysis(VALID_BODY);
        assert_eq!(fenced, prose);
        assert_eq!(prose, bare);
    }

    #[test]
    fn test_non_json_degrades_to_error_payload() {
        let analysis = parse_raw_analysis("not json at all");
        assert_eq!(analysis.match_score, 0);
        assert_eq!(analysis.error.as_deref(), Some(PARSE_FAILURE_MARKER));
        assert!(analysis.fit_summary.starts_with("Parsing Error:"));
        assert!(analysis.matched_skills.is_empty());
    }

    #[test]
    fn test_broken_fenced_block_falls_through_to_bare_object() {
        // The fence holds garbage but a valid object follows it.
        let raw = format!("```json\nnot-an-object\n```\n{VALID_BODY}");
        // First '{' in the whole string belongs to the valid body here.
        assert_valid(&parse_raw_analysis(&raw));
    }

    #[test]
    fn test_missing_fields_default() {
        let analysis = parse_raw_analysis(r#"{"match_score": 40}"#);
        assert_eq!(analysis.match_score, 40);
        assert!(analysis.matched_skills.is_empty());
        assert_eq!(analysis.fit_summary, "");
        assert!(analysis.error.is_none());
    }

    #[test]
    fn test_json_scalar_is_not_an_analysis() {
        let analysis = parse_raw_analysis("42");
        assert_eq!(analysis.error.as_deref(), Some(PARSE_FAILURE_MARKER));
    }

    #[test]
    fn test_transport_error_string_degrades() {
        let analysis = parse_raw_analysis("OpenRouter Error: connection timed out");
        assert_eq!(analysis.match_score, 0);
        assert!(analysis.error.is_some());
    }

    #[test]
    fn test_brace_span_requires_ordered_braces() {
        assert!(brace_span("} no object {").is_none());
        assert_eq!(brace_span("a {1} b"), Some("{1}"));
    }
}
