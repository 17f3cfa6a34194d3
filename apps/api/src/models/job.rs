use serde::{Deserialize, Serialize};

/// A scraped or manually entered job posting. Read-only input to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub raw_text: String,
    pub url: Option<String>,
}

/// Scrapers signal failure by setting a title starting with "Error"
/// instead of returning a distinct error type. External callers depend on
/// the literal prefix, so the convention is kept but confined to this helper.
const SCRAPE_ERROR_PREFIX: &str = "Error";

impl JobPosting {
    pub fn is_scrape_failure(&self) -> bool {
        self.title.starts_with(SCRAPE_ERROR_PREFIX)
    }
}
