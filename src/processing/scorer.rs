//! Weighted composite scoring across keyword, skill, experience, and
//! education dimensions

use crate::config::ScoringConfig;
use crate::processing::keyword_extractor::Keyword;
use crate::processing::matcher::KeywordMatches;
use crate::resume::ResumeContent;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Per-dimension scores, each in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub overall: u8,
}

pub struct Scorer {
    weights: ScoringConfig,
    degree_regex: Regex,
}

impl Scorer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self {
            weights,
            degree_regex: Regex::new(r"(?i)bachelor|master|phd|degree").expect("Invalid degree regex"),
        }
    }

    /// Score every dimension and combine. Also returns the keyword score,
    /// which feeds the overall weighting but is not a section of its own.
    pub fn score(
        &self,
        resume: &ResumeContent,
        job_text: &str,
        job_keywords: &[Keyword],
        keyword_matches: &KeywordMatches,
        skill_matches: &KeywordMatches,
    ) -> (SectionScores, u8) {
        let keyword_score = Self::ratio_score(
            keyword_matches.matched.len(),
            keyword_matches.matched.len() + keyword_matches.missing.len(),
        );
        let skill_score = Self::ratio_score(
            skill_matches.matched.len(),
            skill_matches.matched.len() + skill_matches.missing.len(),
        );
        let experience_score = Self::experience_score(resume, job_keywords);
        let education_score = self.education_score(resume, job_text);

        let overall = self.overall(keyword_score, skill_score, experience_score, education_score);

        (
            SectionScores {
                skills: skill_score,
                experience: experience_score,
                education: education_score,
                overall,
            },
            keyword_score,
        )
    }

    pub fn requires_degree(&self, job_text: &str) -> bool {
        self.degree_regex.is_match(job_text)
    }

    /// matched/total as a 0..=100 score; an empty denominator scores 0.
    fn ratio_score(matched: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        (matched as f32 / total as f32 * 100.0).round() as u8
    }

    /// Fraction of experience entries mentioning at least one job keyword.
    /// Zero entries is scored neutrally, not as a mismatch.
    fn experience_score(resume: &ResumeContent, job_keywords: &[Keyword]) -> u8 {
        if resume.experience.is_empty() {
            return 50;
        }

        let relevant = resume
            .experience
            .iter()
            .filter(|entry| {
                let text = entry.combined_text().to_lowercase();
                job_keywords.iter().any(|k| text.contains(&k.word))
            })
            .count();

        Self::ratio_score(relevant, resume.experience.len())
    }

    /// 100 when a demanded degree is present, 0 when demanded and absent,
    /// 50 when the job text never asks for one.
    fn education_score(&self, resume: &ResumeContent, job_text: &str) -> u8 {
        if !self.requires_degree(job_text) {
            return 50;
        }

        if resume.has_education() {
            100
        } else {
            0
        }
    }

    fn overall(&self, keyword: u8, skill: u8, experience: u8, education: u8) -> u8 {
        let weighted = keyword as f32 * self.weights.keyword_weight
            + skill as f32 * self.weights.skill_weight
            + experience as f32 * self.weights.experience_weight
            + education as f32 * self.weights.education_weight;

        weighted.round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keyword_extractor::KeywordCategory;
    use crate::resume::{EducationEntry, ExperienceEntry};

    fn keyword(word: &str) -> Keyword {
        Keyword {
            word: word.to_string(),
            frequency: 1,
            score: 1.0,
            category: KeywordCategory::Other,
        }
    }

    fn scorer() -> Scorer {
        Scorer::new(crate::Config::default().scoring)
    }

    #[test]
    fn test_ratio_score_zero_denominator() {
        assert_eq!(Scorer::ratio_score(0, 0), 0);
        assert_eq!(Scorer::ratio_score(1, 2), 50);
        assert_eq!(Scorer::ratio_score(2, 2), 100);
    }

    #[test]
    fn test_experience_neutral_default() {
        let resume = ResumeContent::default();
        let score = Scorer::experience_score(&resume, &[keyword("python")]);

        assert_eq!(score, 50);
    }

    #[test]
    fn test_experience_entry_matching() {
        let resume = ResumeContent {
            experience: vec![
                ExperienceEntry {
                    position: "Engineer".to_string(),
                    description: "Python services".to_string(),
                    bullets: vec![],
                },
                ExperienceEntry {
                    position: "Barista".to_string(),
                    description: "Coffee".to_string(),
                    bullets: vec![],
                },
            ],
            ..ResumeContent::default()
        };

        let score = Scorer::experience_score(&resume, &[keyword("python")]);
        assert_eq!(score, 50);
    }

    #[test]
    fn test_education_score_states() {
        let scorer = scorer();
        let with_education = ResumeContent {
            education: vec![EducationEntry::default()],
            ..ResumeContent::default()
        };
        let without_education = ResumeContent::default();

        let demanding = "Bachelor degree required";
        let silent = "Great engineering culture";

        assert_eq!(scorer.education_score(&with_education, demanding), 100);
        assert_eq!(scorer.education_score(&without_education, demanding), 0);
        assert_eq!(scorer.education_score(&with_education, silent), 50);
        assert_eq!(scorer.education_score(&without_education, silent), 50);
    }

    #[test]
    fn test_overall_weighting() {
        let scorer = scorer();

        // 0.30*100 + 0.35*100 + 0.25*100 + 0.10*100 = 100
        assert_eq!(scorer.overall(100, 100, 100, 100), 100);
        assert_eq!(scorer.overall(0, 0, 0, 0), 0);
        // 0.30*10 + 0.35*50 + 0.25*100 + 0.10*50 = 50.5 -> 51
        assert_eq!(scorer.overall(10, 50, 100, 50), 51);
    }

    #[test]
    fn test_all_scores_bounded() {
        let scorer = scorer();
        let resume = ResumeContent::default();
        let keywords = vec![keyword("python"), keyword("aws")];
        let matches = KeywordMatches {
            matched: vec!["python".to_string()],
            missing: vec!["aws".to_string()],
        };
        let skills = KeywordMatches::default();

        let (scores, keyword_score) = scorer.score(&resume, "any text", &keywords, &matches, &skills);

        assert!(keyword_score <= 100);
        assert!(scores.skills <= 100);
        assert!(scores.experience <= 100);
        assert!(scores.education <= 100);
        assert!(scores.overall <= 100);
    }
}
