use serde::Deserialize;

/// Read-only snapshot of the document served by `GET /api/users/profile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The exact document the API serves by default.
    const SAMPLE_PROFILE_JSON: &str = include_str!("../../../api/fixtures/sample_profile.json");

    #[test]
    fn test_accepts_api_sample_profile() {
        let profile: Profile = serde_json::from_str(SAMPLE_PROFILE_JSON).unwrap();
        assert_eq!(profile.name, "Dhanunjaya");
        assert_eq!(profile.role, "DevOps Engineer");
        assert_eq!(
            profile.skills,
            vec!["React", "Node.js", "Material UI", "SQL", "Docker"]
        );
        assert_eq!(profile.projects.len(), 2);
        assert_eq!(profile.projects[0].title, "Complete DevSecOps End to End");
        assert_eq!(
            profile.projects[1].link,
            "https://github.com/devopswithdj/terraform-zero-to-hero.git"
        );
    }

    #[test]
    fn test_rejects_document_missing_a_field() {
        let without_projects = r#"{"name": "A", "role": "B", "about": "", "skills": []}"#;
        assert!(serde_json::from_str::<Profile>(without_projects).is_err());
    }
}
