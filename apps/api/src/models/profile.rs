use serde::{Deserialize, Serialize};

/// A single prior role in the user's work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
}

/// Candidate profile supplied with answer-generation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_history: Vec<WorkExperience>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_minimal_fields_deserializes() {
        let json = r#"{
            "personal_info": {"name": "Ada Lovelace", "email": "ada@example.com"}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.personal_info.name, "Ada Lovelace");
        assert!(profile.work_history.is_empty());
        assert!(profile.skills.is_empty());
    }
}
