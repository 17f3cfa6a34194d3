//! Preference booster — pure rule engine turning a job posting plus declared
//! user preferences into a bounded score boost and human-readable insights.
//!
//! No I/O and no hidden state: `compute_boost` is a pure function of its
//! inputs, safe to call from any number of concurrent requests. Absent or
//! malformed preference fields contribute nothing rather than erroring.
//!
//! Rule caps: field/subfield/specialization +8, location/remote +5,
//! role level +4, values +3; the total is capped at 20 once, at the end.

use serde::Serialize;

use crate::models::job::JobPosting;
use crate::models::preferences::PreferenceSet;

/// Maximum total boost a preference set can contribute.
pub const MAX_BOOST: u32 = 20;

/// Keywords signalling that a posting allows remote work.
const REMOTE_KEYWORDS: [&str; 5] = ["remote", "work from home", "wfh", "distributed", "anywhere"];

/// Output of one boost computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoostResult {
    pub boost: u32,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Static keyword tables
// ────────────────────────────────────────────────────────────────────────────

/// Role-level categories. `ALL` declaration order is load-bearing: the
/// mismatch warning cites the FIRST other category whose keyword appears in
/// the job title, scanned in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLevel {
    Entry,
    Mid,
    Senior,
    LeadPrincipal,
    Executive,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 5] = [
        RoleLevel::Entry,
        RoleLevel::Mid,
        RoleLevel::Senior,
        RoleLevel::LeadPrincipal,
        RoleLevel::Executive,
    ];

    /// Canonical lowercase key a user's declared level is matched against.
    pub fn key(self) -> &'static str {
        match self {
            RoleLevel::Entry => "entry level",
            RoleLevel::Mid => "mid-level",
            RoleLevel::Senior => "senior",
            RoleLevel::LeadPrincipal => "lead/principal",
            RoleLevel::Executive => "executive/director",
        }
    }

    /// Display label used in mismatch warnings.
    pub fn display(self) -> &'static str {
        match self {
            RoleLevel::Entry => "Entry Level",
            RoleLevel::Mid => "Mid-Level",
            RoleLevel::Senior => "Senior",
            RoleLevel::LeadPrincipal => "Lead/Principal",
            RoleLevel::Executive => "Executive/Director",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RoleLevel::Entry => &["entry", "junior", "associate", "graduate"],
            RoleLevel::Mid => &["mid", "intermediate", "engineer ii", "engineer 2"],
            RoleLevel::Senior => &["senior", "sr.", "lead engineer", "staff"],
            RoleLevel::LeadPrincipal => &["lead", "principal", "architect", "staff engineer"],
            RoleLevel::Executive => &[
                "director",
                "vp",
                "vice president",
                "executive",
                "head of",
                "chief",
            ],
        }
    }

    /// Parses a user-declared level label; unrecognized labels are ignored.
    pub fn parse(label: &str) -> Option<RoleLevel> {
        let label = label.to_lowercase();
        RoleLevel::ALL.into_iter().find(|level| level.key() == label)
    }
}

/// The eight value categories users can declare at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    Compensation,
    WorkLifeBalance,
    CareerGrowth,
    Culture,
    Impact,
    Flexibility,
    Benefits,
    JobSecurity,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 8] = [
        ValueCategory::Compensation,
        ValueCategory::WorkLifeBalance,
        ValueCategory::CareerGrowth,
        ValueCategory::Culture,
        ValueCategory::Impact,
        ValueCategory::Flexibility,
        ValueCategory::Benefits,
        ValueCategory::JobSecurity,
    ];

    /// Canonical lowercase key a declared value-tag is matched against.
    pub fn key(self) -> &'static str {
        match self {
            ValueCategory::Compensation => "competitive compensation",
            ValueCategory::WorkLifeBalance => "work-life balance",
            ValueCategory::CareerGrowth => "career growth",
            ValueCategory::Culture => "company culture",
            ValueCategory::Impact => "making impact",
            ValueCategory::Flexibility => "flexibility",
            ValueCategory::Benefits => "benefits & perks",
            ValueCategory::JobSecurity => "job security",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ValueCategory::Compensation => &[
                "competitive salary",
                "competitive compensation",
                "competitive pay",
                "equity",
                "stock options",
            ],
            ValueCategory::WorkLifeBalance => &[
                "work-life balance",
                "flexible hours",
                "work life balance",
                "flexible schedule",
            ],
            ValueCategory::CareerGrowth => &[
                "career growth",
                "professional development",
                "learning",
                "advancement",
                "promotion",
            ],
            ValueCategory::Culture => &[
                "culture",
                "team environment",
                "collaborative",
                "inclusive",
                "diversity",
            ],
            ValueCategory::Impact => &[
                "impact",
                "mission",
                "meaningful work",
                "change lives",
                "make a difference",
            ],
            ValueCategory::Flexibility => &[
                "flexible",
                "flexibility",
                "hybrid",
                "remote options",
                "work from anywhere",
            ],
            ValueCategory::Benefits => &[
                "benefits",
                "health insurance",
                "dental",
                "401k",
                "pto",
                "vacation",
                "perks",
            ],
            ValueCategory::JobSecurity => &[
                "stable",
                "established",
                "fortune 500",
                "publicly traded",
                "security",
            ],
        }
    }

    pub fn parse(label: &str) -> Option<ValueCategory> {
        let label = label.to_lowercase();
        ValueCategory::ALL
            .into_iter()
            .find(|category| category.key() == label)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Boost computation
// ────────────────────────────────────────────────────────────────────────────

/// Computes the preference boost for a job posting. Absent preferences yield
/// a zero boost with empty insight/warning lists; this function never fails.
pub fn compute_boost(job: &JobPosting, prefs: Option<&PreferenceSet>) -> BoostResult {
    let Some(prefs) = prefs else {
        return BoostResult::default();
    };

    let mut boost: u32 = 0;
    let mut insights = Vec::new();
    let mut warnings = Vec::new();

    let job_text = job.raw_text.to_lowercase();
    let job_title = job.title.to_lowercase();
    let job_location = job
        .location
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    // 1. Field / subfield / specialization (up to +8). Independent checks.
    let field = prefs.field.to_lowercase();
    let subfield = prefs.subfield.to_lowercase();
    let specialization = prefs.specialization.to_lowercase();

    if !field.is_empty() && job_text.contains(&field) {
        boost += 3;
        insights.push(format!(
            "✓ This role aligns with your {} field preference",
            prefs.field
        ));
    }
    if !subfield.is_empty() && job_text.contains(&subfield) {
        boost += 3;
        insights.push(format!("✓ Matches your {} expertise", prefs.subfield));
    }
    if !specialization.is_empty() && job_text.contains(&specialization) {
        boost += 2;
        insights.push(format!(
            "✓ Perfect fit for your {} specialization",
            prefs.specialization
        ));
    }

    // 2. Location (up to +5). First declared location to match wins.
    let mut location_matched = false;
    for loc in &prefs.locations {
        let loc = loc.to_lowercase();
        if !loc.is_empty() && (job_location.contains(&loc) || job_text.contains(&loc)) {
            boost += 3;
            insights.push(format!("✓ Location match: {}", title_case(&loc)));
            location_matched = true;
            break;
        }
    }

    let is_remote_job = REMOTE_KEYWORDS.iter().any(|kw| job_text.contains(kw));

    if prefs.remote_preference && is_remote_job {
        boost += 2;
        insights.push("✓ Remote work available - matches your preference".to_string());
    } else if prefs.remote_preference && !is_remote_job && !location_matched {
        warnings.push("⚠ This role appears to be on-site, but you prefer remote work".to_string());
    } else if !prefs.remote_preference && is_remote_job {
        insights.push("ℹ This role offers remote work flexibility".to_string());
    }

    // 3. Role level (up to +4).
    if let Some(target) = RoleLevel::parse(&prefs.role_level) {
        let target_hit = target
            .keywords()
            .iter()
            .any(|kw| job_title.contains(kw) || job_text.contains(kw));

        if target_hit {
            boost += 4;
            insights.push(format!(
                "✓ Role level matches your {} target",
                prefs.role_level
            ));
        } else {
            // First other category whose keyword appears in the TITLE wins.
            for level in RoleLevel::ALL {
                if level == target {
                    continue;
                }
                if level.keywords().iter().any(|kw| job_title.contains(kw)) {
                    warnings.push(format!(
                        "⚠ This appears to be a {} role, but you're targeting {}",
                        level.display(),
                        prefs.role_level
                    ));
                    break;
                }
            }
        }
    }

    // 4. Values alignment (up to +3). One insight citing the count, not the list.
    let values_matched = prefs
        .values
        .iter()
        .filter_map(|v| ValueCategory::parse(v))
        .filter(|category| category.keywords().iter().any(|kw| job_text.contains(kw)))
        .count() as u32;

    if values_matched > 0 {
        boost += values_matched.min(3);
        insights.push(format!(
            "✓ Job description mentions {values_matched} of your core values"
        ));
    }

    BoostResult {
        boost: boost.min(MAX_BOOST),
        insights,
        warnings,
    }
}

/// Title-cases a lowercased string word-by-word ("new york" → "New York").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphabetic();
    }
    out
}
