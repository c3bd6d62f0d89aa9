//! Static skill and seniority reference data
//!
//! Recognition is a membership/substring test over flat data tables;
//! extending coverage is a data change, not a code change.

use crate::error::{MatcherError, Result};
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;

/// Common technical skill names: languages, frameworks, platforms.
const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
    "spring",
    "rails",
    "node",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "kafka",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "linux",
    "git",
    "graphql",
    "machine learning",
];

const SENIORITY_MARKERS: &[&str] = &["senior", "junior", "lead", "principal", "staff"];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "collaboration",
    "mentoring",
    "adaptability",
    "creativity",
    "initiative",
    "organized",
];

const QUALIFICATION_MARKERS: &[&str] = &[
    "bachelor",
    "bachelors",
    "master",
    "masters",
    "phd",
    "doctorate",
    "degree",
    "certification",
    "certified",
];

pub struct SkillTaxonomy {
    skills: HashSet<String>,
    skill_matcher: AhoCorasick,
    soft_skills: HashSet<String>,
    qualification_markers: HashSet<String>,
    years_regex: Regex,
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new().expect("Failed to build default skill taxonomy")
    }
}

impl SkillTaxonomy {
    pub fn new() -> Result<Self> {
        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(TECHNICAL_SKILLS)
            .map_err(|e| MatcherError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            skills: TECHNICAL_SKILLS.iter().map(|s| s.to_string()).collect(),
            skill_matcher,
            soft_skills: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
            qualification_markers: QUALIFICATION_MARKERS.iter().map(|s| s.to_string()).collect(),
            years_regex: Regex::new(r"\d+\s*years?").expect("Invalid years regex"),
        })
    }

    /// Exact membership, or a known skill appearing inside a longer term
    /// ("senior python developer").
    pub fn is_known_skill(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.skills.contains(&lowered) || self.skill_matcher.is_match(lowered.as_str())
    }

    pub fn is_soft_skill(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.soft_skills.contains(&lowered)
            || self.soft_skills.iter().any(|s| lowered.contains(s.as_str()))
    }

    /// Degree names, certification words, or an "N years" experience demand.
    pub fn is_qualification(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.qualification_markers.contains(&lowered)
            || self
                .qualification_markers
                .iter()
                .any(|m| lowered.contains(m.as_str()))
            || self.years_regex.is_match(&lowered)
    }

    pub fn seniority_markers(&self) -> &'static [&'static str] {
        SENIORITY_MARKERS
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skills() {
        let taxonomy = SkillTaxonomy::new().unwrap();

        assert!(taxonomy.is_known_skill("python"));
        assert!(taxonomy.is_known_skill("AWS"));
        assert!(taxonomy.is_known_skill("machine learning"));
        assert!(!taxonomy.is_known_skill("negotiation"));
    }

    #[test]
    fn test_substring_skill_match() {
        let taxonomy = SkillTaxonomy::new().unwrap();

        assert!(taxonomy.is_known_skill("python3"));
        assert!(taxonomy.is_known_skill("aws lambda"));
    }

    #[test]
    fn test_soft_skills() {
        let taxonomy = SkillTaxonomy::new().unwrap();

        assert!(taxonomy.is_soft_skill("leadership"));
        assert!(taxonomy.is_soft_skill("Teamwork"));
        assert!(!taxonomy.is_soft_skill("python"));
    }

    #[test]
    fn test_qualifications() {
        let taxonomy = SkillTaxonomy::new().unwrap();

        assert!(taxonomy.is_qualification("bachelor"));
        assert!(taxonomy.is_qualification("certification"));
        assert!(taxonomy.is_qualification("5 years"));
        assert!(taxonomy.is_qualification("10+ years"));
        assert!(!taxonomy.is_qualification("python"));
    }

    #[test]
    fn test_seniority_markers() {
        let taxonomy = SkillTaxonomy::new().unwrap();
        let markers = taxonomy.seniority_markers();

        assert!(markers.contains(&"senior"));
        assert!(markers.contains(&"lead"));
    }
}
