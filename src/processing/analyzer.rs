//! Match engine coordinating extraction, matching, scoring, and
//! recommendations

use crate::cache::{fingerprint, CacheStats, ResultCache};
use crate::config::Config;
use crate::error::{MatcherError, Result};
use crate::processing::keyword_extractor::{
    Keyword, KeywordCategory, KeywordExtractor, RequirementTiers,
};
use crate::processing::matcher::{match_keywords, match_skills};
use crate::processing::recommender::{self, Recommendation, RecommendationContext};
use crate::processing::scorer::{Scorer, SectionScores};
use crate::processing::text_processor::TextProcessor;
use crate::resume::ResumeContent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Full extraction result for a block of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordExtraction {
    pub keywords: Vec<Keyword>,
    pub top_keywords: Vec<String>,
    pub by_category: KeywordsByCategory,
    pub requirements: RequirementTiers,
    pub seniority: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsByCategory {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub qualifications: Vec<String>,
}

/// Outcome of matching one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub section_scores: SectionScores,
    pub recommendations: Vec<Recommendation>,
}

/// Stateless per invocation; the extraction and match caches are the only
/// shared state, and their entries are immutable once written, so the
/// engine is safe to share across threads behind `&self`.
pub struct MatchEngine {
    config: Config,
    processor: TextProcessor,
    extractor: KeywordExtractor,
    scorer: Scorer,
    extraction_cache: ResultCache<KeywordExtraction>,
    match_cache: ResultCache<MatchResult>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(Config::default()).expect("Default engine config is valid")
    }
}

impl MatchEngine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let ttl = Duration::from_secs(config.cache.ttl_secs);

        Ok(Self {
            processor: TextProcessor::new(),
            extractor: KeywordExtractor::new(config.extraction.tier_window)?,
            scorer: Scorer::new(config.scoring.clone()),
            extraction_cache: ResultCache::new(ttl),
            match_cache: ResultCache::new(ttl),
            config,
        })
    }

    /// Extract and classify keywords from free text. Empty input is an
    /// input error; text that merely yields no keywords is not.
    pub fn extract_keywords(
        &self,
        text: &str,
        top_n: Option<usize>,
    ) -> Result<KeywordExtraction> {
        if text.trim().is_empty() {
            return Err(MatcherError::InvalidInput(
                "Job description text is empty".to_string(),
            ));
        }

        let top_n = top_n.unwrap_or(self.config.extraction.top_keywords);
        let normalized = self.processor.normalize_words(text).join(" ");
        let key = fingerprint(&["extract", &normalized, &top_n.to_string()]);

        if self.config.cache.enabled {
            if let Some(cached) = self.extraction_cache.get(&key) {
                log::debug!("Extraction cache hit");
                return Ok(cached);
            }
        }

        let keywords = if self.config.extraction.include_phrases {
            self.extractor
                .extract_with_phrases(text, top_n, self.config.extraction.max_phrase_len)
        } else {
            self.extractor.extract(text, top_n)
        };
        log::debug!("Extracted {} keywords", keywords.len());

        let extraction = KeywordExtraction {
            top_keywords: keywords.iter().map(|k| k.word.clone()).collect(),
            by_category: Self::group_by_category(&keywords),
            requirements: self.extractor.requirement_tiers(text, &keywords),
            seniority: self.extractor.seniority_in(text),
            keywords,
        };

        if self.config.cache.enabled {
            self.extraction_cache.put(key, extraction.clone());
        }

        Ok(extraction)
    }

    /// Match a resume against a job description and produce the composite
    /// score, matched/missing partitions, and recommendations.
    pub fn match_resume_to_job(
        &self,
        resume: &ResumeContent,
        job_text: &str,
    ) -> Result<MatchResult> {
        if job_text.trim().is_empty() {
            return Err(MatcherError::InvalidInput(
                "Job description text is empty".to_string(),
            ));
        }

        let normalized = self.processor.normalize_words(job_text).join(" ");
        let resume_json = serde_json::to_string(resume)?;
        let key = fingerprint(&["match", &normalized, &resume_json]);

        if self.config.cache.enabled {
            if let Some(cached) = self.match_cache.get(&key) {
                log::debug!("Match cache hit");
                return Ok(cached);
            }
        }

        let extraction = self.extract_keywords(job_text, None)?;

        let resume_tokens: HashSet<String> =
            self.processor.tokenize(&resume.full_text()).into_iter().collect();
        let resume_skills = resume.skill_names();

        let keyword_matches = match_keywords(&extraction.keywords, &resume_tokens, &resume_skills);
        let skill_matches = match_skills(&extraction.keywords, &keyword_matches.matched);

        let (section_scores, _keyword_score) = self.scorer.score(
            resume,
            job_text,
            &extraction.keywords,
            &keyword_matches,
            &skill_matches,
        );

        let recommendations = recommender::generate(&RecommendationContext {
            missing_skills: &skill_matches.missing,
            missing_keywords: &keyword_matches.missing,
            experience_score: section_scores.experience,
            has_summary: resume.has_summary(),
            job_text_lower: job_text.to_lowercase(),
            resume_tokens: &resume_tokens,
        });

        let result = MatchResult {
            match_score: section_scores.overall,
            matched_skills: skill_matches.matched,
            missing_skills: skill_matches.missing,
            matched_keywords: keyword_matches.matched,
            missing_keywords: keyword_matches.missing,
            section_scores,
            recommendations,
        };

        log::info!(
            "Scored resume against job: {} ({} matched / {} missing keywords)",
            result.match_score,
            result.matched_keywords.len(),
            result.missing_keywords.len(),
        );

        if self.config.cache.enabled {
            self.match_cache.put(key, result.clone());
        }

        Ok(result)
    }

    pub fn jaccard_similarity(&self, text1: &str, text2: &str) -> f32 {
        self.processor.jaccard_similarity(text1, text2)
    }

    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.extraction_cache.stats(), self.match_cache.stats())
    }

    pub fn clear_caches(&self) {
        self.extraction_cache.clear();
        self.match_cache.clear();
    }

    fn group_by_category(keywords: &[Keyword]) -> KeywordsByCategory {
        let mut by_category = KeywordsByCategory::default();

        for keyword in keywords {
            match keyword.category {
                KeywordCategory::Technical => by_category.technical.push(keyword.word.clone()),
                KeywordCategory::SoftSkill => by_category.soft_skills.push(keyword.word.clone()),
                KeywordCategory::Qualification => {
                    by_category.qualifications.push(keyword.word.clone())
                }
                KeywordCategory::Other => {}
            }
        }

        by_category
    }
}
