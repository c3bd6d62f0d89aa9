//! Resume content structures consumed by the matching engine
//!
//! These are read-only views supplied by the persistence layer. Sections may
//! be empty; scoring degrades through neutral defaults rather than erroring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
}

impl ResumeContent {
    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }

    pub fn has_education(&self) -> bool {
        !self.education.is_empty()
    }

    /// Declared skill names, lowercased for matching.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.to_lowercase()).collect()
    }

    /// All free text on the resume, concatenated for keyword extraction.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.summary];

        for entry in &self.experience {
            parts.push(&entry.position);
            parts.push(&entry.description);
            parts.extend(entry.bullets.iter().map(|b| b.as_str()));
        }

        for project in &self.projects {
            parts.push(&project.description);
            parts.extend(project.technologies.iter().map(|t| t.as_str()));
        }

        parts.extend(self.skills.iter().map(|s| s.name.as_str()));

        parts
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ExperienceEntry {
    /// Position, description, and bullets joined into one searchable block.
    pub fn combined_text(&self) -> String {
        let mut parts = vec![self.position.as_str(), self.description.as_str()];
        parts.extend(self.bullets.iter().map(|b| b.as_str()));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ResumeContent {
        ResumeContent {
            summary: "Backend engineer focused on distributed systems".to_string(),
            experience: vec![ExperienceEntry {
                position: "Software Engineer".to_string(),
                description: "Built payment services in Python".to_string(),
                bullets: vec!["Reduced latency by 40%".to_string()],
            }],
            projects: vec![ProjectEntry {
                description: "Log aggregation pipeline".to_string(),
                technologies: vec!["Kafka".to_string(), "Rust".to_string()],
            }],
            skills: vec![SkillEntry {
                name: "Python".to_string(),
            }],
            education: vec![EducationEntry {
                institution: "State University".to_string(),
                degree: "BSc Computer Science".to_string(),
            }],
        }
    }

    #[test]
    fn test_full_text_includes_all_sections() {
        let resume = sample_resume();
        let text = resume.full_text();

        assert!(text.contains("distributed systems"));
        assert!(text.contains("payment services"));
        assert!(text.contains("Reduced latency"));
        assert!(text.contains("Kafka"));
        assert!(text.contains("Python"));
    }

    #[test]
    fn test_empty_resume_degrades() {
        let resume = ResumeContent::default();

        assert!(!resume.has_summary());
        assert!(!resume.has_education());
        assert!(resume.full_text().is_empty());
        assert!(resume.skill_names().is_empty());
    }

    #[test]
    fn test_skill_names_lowercased() {
        let resume = sample_resume();
        assert_eq!(resume.skill_names(), vec!["python".to_string()]);
    }

    #[test]
    fn test_combined_experience_text() {
        let resume = sample_resume();
        let text = resume.experience[0].combined_text();

        assert!(text.contains("Software Engineer"));
        assert!(text.contains("payment services"));
        assert!(text.contains("Reduced latency"));
    }
}
