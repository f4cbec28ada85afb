use serde::{Deserialize, Serialize};

/// The portfolio owner's document. Field names are the wire contract of
/// `GET /api/users/profile`; `skills` and `projects` keep their source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Used verbatim as the hyperlink target.
    pub link: String,
}

impl Profile {
    /// The built-in profile served when no `PROFILE_PATH` is configured.
    pub fn sample() -> Self {
        Profile {
            name: "Dhanunjaya".to_string(),
            role: "DevOps Engineer".to_string(),
            about: "Passionate about building scalable web applications and working with cutting-edge technologies.".to_string(),
            skills: ["React", "Node.js", "Material UI", "SQL", "Docker"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects: vec![
                Project {
                    title: "Complete DevSecOps End to End".to_string(),
                    description: "Tic-Tac-Toe game implementing React, Node, Testing, Docker, CI/CD, Argocd, K8s".to_string(),
                    link: "https://github.com/devopswithdj/devsecops-demo.git".to_string(),
                },
                Project {
                    title: "Terraform Zero to Hero".to_string(),
                    description: "A Learning oriented repository to learn Terraform from scratch to advanced concepts.".to_string(),
                    link: "https://github.com/devopswithdj/terraform-zero-to-hero.git".to_string(),
                },
            ],
        }
    }

    /// Names the first required field that is blank, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.role.trim().is_empty() {
            Some("role")
        } else {
            None
        }
    }
}
