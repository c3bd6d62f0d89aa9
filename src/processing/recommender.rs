//! Rule-based recommendation generation
//!
//! An ordered table of (predicate, factory) pairs. Evaluation order is the
//! output order; rules fire independently and at most once each.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Skills,
    Keywords,
    Summary,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationCategory::Skills => write!(f, "skills"),
            RecommendationCategory::Keywords => write!(f, "keywords"),
            RecommendationCategory::Summary => write!(f, "summary"),
            RecommendationCategory::Experience => write!(f, "experience"),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Everything the rule table is allowed to look at.
pub struct RecommendationContext<'a> {
    pub missing_skills: &'a [String],
    pub missing_keywords: &'a [String],
    pub experience_score: u8,
    pub has_summary: bool,
    pub job_text_lower: String,
    pub resume_tokens: &'a HashSet<String>,
}

type Predicate = fn(&RecommendationContext) -> bool;
type Factory = fn(&RecommendationContext) -> Recommendation;

const RULES: &[(Predicate, Factory)] = &[
    (
        |ctx| !ctx.missing_skills.is_empty(),
        |ctx| Recommendation {
            category: RecommendationCategory::Skills,
            priority: Priority::High,
            suggestion: format!(
                "Add these missing skills to your resume: {}",
                first_items(ctx.missing_skills, 5)
            ),
        },
    ),
    (
        |ctx| ctx.missing_keywords.len() > 3,
        |ctx| Recommendation {
            category: RecommendationCategory::Keywords,
            priority: Priority::High,
            suggestion: format!(
                "Incorporate these keywords from the job description: {}",
                first_items(ctx.missing_keywords, 5)
            ),
        },
    ),
    (
        |ctx| !ctx.has_summary,
        |_| Recommendation {
            category: RecommendationCategory::Summary,
            priority: Priority::Medium,
            suggestion: "Add a professional summary tailored to the role".to_string(),
        },
    ),
    (
        |ctx| ctx.experience_score < 50,
        |_| Recommendation {
            category: RecommendationCategory::Experience,
            priority: Priority::High,
            suggestion: "Emphasize experiences that align with job requirements".to_string(),
        },
    ),
    (
        |ctx| ctx.job_mentions("team") && !ctx.resume_mentions("team"),
        |_| Recommendation {
            category: RecommendationCategory::Experience,
            priority: Priority::Medium,
            suggestion: "Highlight teamwork and collaboration in your experience".to_string(),
        },
    ),
    (
        |ctx| ctx.job_mentions("lead") && !ctx.resume_mentions("lead"),
        |_| Recommendation {
            category: RecommendationCategory::Experience,
            priority: Priority::Medium,
            suggestion: "Emphasize leadership roles and responsibilities".to_string(),
        },
    ),
];

impl RecommendationContext<'_> {
    fn job_mentions(&self, term: &str) -> bool {
        self.job_text_lower.contains(term)
    }

    fn resume_mentions(&self, term: &str) -> bool {
        self.resume_tokens.iter().any(|token| token.contains(term))
    }
}

pub fn generate(ctx: &RecommendationContext) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|(predicate, _)| predicate(ctx))
        .map(|(_, factory)| factory(ctx))
        .collect()
}

fn first_items(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
