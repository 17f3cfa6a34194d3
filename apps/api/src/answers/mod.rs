//! Application-answer generation: one LLM call that drafts a STAR-method
//! response to an application question from the candidate's profile.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::ChatProvider;
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;
use crate::answers::prompts::{ANSWER_PROMPT_TEMPLATE, ANSWER_SYSTEM};

/// How many of the most recent roles are fed into the prompt.
const MAX_EXPERIENCES: usize = 2;

/// Drafts an answer to an application question. Without a chat provider a
/// fixed placeholder is returned so the endpoint stays usable offline.
pub async fn generate_answer(
    question: &str,
    job: &JobPosting,
    profile: &UserProfile,
    chat: Option<&dyn ChatProvider>,
) -> Result<String, AppError> {
    let Some(chat) = chat else {
        return Ok("AI Client not configured.".to_string());
    };

    let prompt = build_prompt(question, job, profile);
    let answer = chat
        .chat(&prompt, ANSWER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Answer generation failed: {e}")))?;

    Ok(answer.trim().to_string())
}

fn build_prompt(question: &str, job: &JobPosting, profile: &UserProfile) -> String {
    let mut work_context = String::new();
    for exp in profile.work_history.iter().take(MAX_EXPERIENCES) {
        work_context.push_str(&format!(
            "- {} at {}: {}\n",
            exp.role,
            exp.company,
            exp.description.as_deref().unwrap_or("")
        ));
    }

    ANSWER_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{job_title}", &job.title)
        .replace("{company}", &job.company)
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{work_context}", &work_context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{PersonalInfo, WorkExperience};

    fn profile() -> UserProfile {
        UserProfile {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                linkedin_url: None,
                portfolio_url: None,
            },
            work_history: vec![
                WorkExperience {
                    company: "Acme".to_string(),
                    role: "Backend Engineer".to_string(),
                    duration: None,
                    description: Some("Built payment APIs".to_string()),
                },
                WorkExperience {
                    company: "Globex".to_string(),
                    role: "SRE".to_string(),
                    duration: None,
                    description: None,
                },
                WorkExperience {
                    company: "Initech".to_string(),
                    role: "Intern".to_string(),
                    duration: None,
                    description: Some("Should not appear".to_string()),
                },
            ],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            education: vec![],
        }
    }

    fn job() -> JobPosting {
        JobPosting {
            title: "Senior Engineer".to_string(),
            company: "Hooli".to_string(),
            location: None,
            raw_text: "jd".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_prompt_embeds_top_two_experiences_only() {
        let prompt = build_prompt("Why us?", &job(), &profile());
        assert!(prompt.contains("Backend Engineer at Acme: Built payment APIs"));
        assert!(prompt.contains("SRE at Globex:"));
        assert!(!prompt.contains("Initech"));
        assert!(prompt.contains("TARGET JOB: Senior Engineer at Hooli"));
        assert!(prompt.contains("USER SKILLS: Rust, SQL"));
    }

    #[tokio::test]
    async fn test_without_provider_returns_placeholder() {
        let answer = generate_answer("Why us?", &job(), &profile(), None)
            .await
            .unwrap();
        assert_eq!(answer, "AI Client not configured.");
    }
}
