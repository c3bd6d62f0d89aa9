//! Set-overlap matching between job keywords and resume content

use crate::processing::keyword_extractor::{Keyword, KeywordCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Disjoint, exhaustive partition of the job keyword set, in extraction
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// A job keyword matches when its word appears verbatim among the resume's
/// extracted tokens or its declared skill names. Case has already been
/// normalized on both sides; no fuzzy matching.
pub fn match_keywords(
    job_keywords: &[Keyword],
    resume_tokens: &HashSet<String>,
    resume_skills: &[String],
) -> KeywordMatches {
    let skill_set: HashSet<&str> = resume_skills.iter().map(|s| s.as_str()).collect();
    let mut matches = KeywordMatches::default();

    for keyword in job_keywords {
        if resume_tokens.contains(&keyword.word) || skill_set.contains(keyword.word.as_str()) {
            matches.matched.push(keyword.word.clone());
        } else {
            matches.missing.push(keyword.word.clone());
        }
    }

    matches
}

/// The same partition restricted to keywords recognized as technical skills.
pub fn match_skills(job_keywords: &[Keyword], matched: &[String]) -> KeywordMatches {
    let matched_set: HashSet<&str> = matched.iter().map(|s| s.as_str()).collect();
    let mut matches = KeywordMatches::default();

    for keyword in job_keywords {
        if keyword.category != KeywordCategory::Technical {
            continue;
        }

        if matched_set.contains(keyword.word.as_str()) {
            matches.matched.push(keyword.word.clone());
        } else {
            matches.missing.push(keyword.word.clone());
        }
    }

    matches
}
