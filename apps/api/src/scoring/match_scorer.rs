//! Match scorer — orchestrates one LLM analysis call, defensively parses the
//! response, and merges the preference boost into a bounded final report.
//!
//! Failure model (by contract, `score` never returns Err):
//! - scrape-error postings short-circuit to a fixed zero-score report,
//! - a failed chat call feeds its error string to the parser, which degrades,
//! - absent preferences simply contribute nothing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm_client::ChatProvider;
use crate::models::job::JobPosting;
use crate::models::preferences::PreferenceSet;
use crate::models::report::MatchReport;
use crate::scoring::parser::{parse_raw_analysis, RawAnalysis};
use crate::scoring::preference_boost::compute_boost;
use crate::scoring::prompts::{MATCH_ANALYSIS_PROMPT_TEMPLATE, MATCH_ANALYSIS_SYSTEM};

/// How much of the JD body and resume text is embedded in the prompt.
const PROMPT_EXCERPT_CHARS: usize = 2000;

/// Resume-to-job match scorer. Holds no request-scoped state; safe to share
/// across arbitrarily many concurrent requests.
#[derive(Clone)]
pub struct MatchScorer {
    chat: Option<Arc<dyn ChatProvider>>,
}

impl MatchScorer {
    /// Without a chat provider the scorer serves a fixed mock analysis, so
    /// the whole pipeline stays testable (and demoable) offline.
    pub fn new(chat: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { chat }
    }

    /// Scores a resume against a job posting, applying the preference boost
    /// when preferences are supplied. Always returns a well-formed report.
    pub async fn score(
        &self,
        resume_text: &str,
        job: &JobPosting,
        prefs: Option<&PreferenceSet>,
    ) -> MatchReport {
        if job.is_scrape_failure() {
            return scrape_failure_report();
        }

        let base = match &self.chat {
            None => mock_analysis(),
            Some(chat) => {
                let prompt = build_prompt(resume_text, job);
                let raw = match chat.chat(&prompt, MATCH_ANALYSIS_SYSTEM).await {
                    Ok(text) => text,
                    // A transport failure degrades through the parser rather
                    // than propagating: the error string is not JSON.
                    Err(e) => {
                        warn!("chat call failed, degrading: {e}");
                        e.to_string()
                    }
                };
                parse_raw_analysis(&raw)
            }
        };

        let mut report = into_report(base);

        if prefs.is_some() {
            let pref_result = compute_boost(job, prefs);
            debug!(boost = pref_result.boost, "preference boost computed");

            report.match_score = (report.match_score + pref_result.boost).min(100);

            if !pref_result.insights.is_empty() {
                report.preference_insights = Some(pref_result.insights);
            }
            if !pref_result.warnings.is_empty() {
                report.preference_warnings = Some(pref_result.warnings);
            }
            if pref_result.boost > 0 {
                report
                    .fit_summary
                    .push_str(&format!(" (+{} preference boost)", pref_result.boost));
            }
        }

        report
    }
}

fn build_prompt(resume_text: &str, job: &JobPosting) -> String {
    MATCH_ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_title}", &job.title)
        .replace("{jd_excerpt}", truncate_chars(&job.raw_text, PROMPT_EXCERPT_CHARS))
        .replace(
            "{resume_excerpt}",
            truncate_chars(resume_text, PROMPT_EXCERPT_CHARS),
        )
}

/// Truncates to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Fixed report for postings whose title carries the scrape-error sentinel.
fn scrape_failure_report() -> MatchReport {
    MatchReport {
        match_score: 0,
        matched_skills: vec![],
        missing_skills: vec![],
        tailoring_tips: vec!["Job scraping failed. Please check the URL.".to_string()],
        fit_summary: "Analysis failed due to invalid job description.".to_string(),
        preference_insights: None,
        preference_warnings: None,
        error: None,
    }
}

/// Deterministic analysis served when no chat provider is configured.
fn mock_analysis() -> RawAnalysis {
    RawAnalysis {
        match_score: 75,
        matched_skills: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "API Design".to_string(),
        ],
        missing_skills: vec![
            "Docker".to_string(),
            "Kubernetes".to_string(),
            "AWS Lambda".to_string(),
        ],
        tailoring_tips: vec![
            "Update Skills section to include Docker to match infrastructure requirements."
                .to_string(),
            "Quantify your API impact in your current role.".to_string(),
            "Add a project involving Cloud services.".to_string(),
        ],
        fit_summary: "Strong backend candidate lacking specific DevOps and Cloud keywords."
            .to_string(),
        error: None,
    }
}

fn into_report(raw: RawAnalysis) -> MatchReport {
    MatchReport {
        match_score: raw.match_score.clamp(0, 100) as u32,
        matched_skills: raw.matched_skills,
        missing_skills: raw.missing_skills,
        tailoring_tips: raw.tailoring_tips,
        fit_summary: raw.fit_summary,
        preference_insights: None,
        preference_warnings: None,
        error: raw.error,
    }
}
