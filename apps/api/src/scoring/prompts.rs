// LLM prompt constants for the scoring module. The field names and the tip
// template below are a data contract with the result parser — change both
// together or not at all.

/// System prompt for match analysis — enforces JSON-only output.
pub const MATCH_ANALYSIS_SYSTEM: &str = "You are a professional career assistant.";

/// Match analysis prompt template.
/// Replace `{job_title}`, `{jd_excerpt}`, `{resume_excerpt}` before sending.
pub const MATCH_ANALYSIS_PROMPT_TEMPLATE: &str = r#"
Role: Expert ATS (Applicant Tracking System) Optimization Engineer.
Task: Provide a high-fidelity match analysis between the Resume and Job Description.

[CONTEXT]
JOB TITLE: {job_title}
JD CONTENT (Truncated): {jd_excerpt}
USER RESUME: {resume_excerpt}

[ANALYSIS REQUIREMENTS]
1. IDENTIFY: Top 5 matched technical skills/keywords.
2. IDENTIFY: Top 5 missing technical skills/keywords required by the JD.
3. ADVISE: 3 specific, actionable tailoring tips using the format: "Update [Section] to include [Skill/Action] because [Reason]."
4. SCORE: 0-100 based on core technical alignment.

[REQUIRED OUTPUT FORMAT - JSON ONLY]
{
    "match_score": (int),
    "matched_skills": ["skill1", "skill2"],
    "missing_skills": ["keyword1", "keyword2"],
    "tailoring_tips": [
        "Tip 1...",
        "Tip 2...",
        "Tip 3..."
    ],
    "fit_summary": "One sentence data-driven explanation of the match."
}

Constraint: Return ONLY valid JSON. No conversational text.
"#;
