//! Frequency-ranked keyword extraction with category and requirement-tier
//! classification

use crate::error::Result;
use crate::processing::taxonomy::SkillTaxonomy;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MUST_HAVE_INDICATORS: &[&str] = &[
    "required",
    "require",
    "requires",
    "must",
    "mandatory",
    "essential",
];

const PREFERRED_INDICATORS: &[&str] = &["preferred", "preferably", "desired", "desirable"];

const NICE_TO_HAVE_INDICATORS: &[&str] = &["nice", "bonus", "plus", "optional"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub frequency: usize,
    pub score: f32,
    pub category: KeywordCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Qualification,
    Other,
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordCategory::Technical => write!(f, "technical"),
            KeywordCategory::SoftSkill => write!(f, "soft skill"),
            KeywordCategory::Qualification => write!(f, "qualification"),
            KeywordCategory::Other => write!(f, "other"),
        }
    }
}

/// Partial partition of extracted keywords by nearby requirement phrasing.
/// A keyword lands in at most one tier; most get none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementTiers {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub preferred: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    MustHave,
    NiceToHave,
    Preferred,
}

pub struct KeywordExtractor {
    processor: TextProcessor,
    taxonomy: SkillTaxonomy,
    tier_window: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(8).expect("Failed to build default keyword extractor")
    }
}

impl KeywordExtractor {
    pub fn new(tier_window: usize) -> Result<Self> {
        Ok(Self {
            processor: TextProcessor::new(),
            taxonomy: SkillTaxonomy::new()?,
            tier_window,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Extract the top `top_n` single-word keywords, ranked by frequency
    /// with ties broken by first occurrence.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<Keyword> {
        let tokens = self.processor.tokenize_indexed(text);
        self.rank(Self::count_terms(tokens.into_iter()), top_n)
    }

    /// Extraction that additionally ranks bigrams and trigrams built from
    /// tokens adjacent in the raw word stream (a dropped stopword breaks
    /// the window).
    pub fn extract_with_phrases(&self, text: &str, top_n: usize, max_phrase_len: usize) -> Vec<Keyword> {
        let tokens = self.processor.tokenize_indexed(text);
        let mut counts = Self::count_terms(tokens.iter().cloned());

        for len in 2..=max_phrase_len.max(2) {
            for window in tokens.windows(len) {
                let adjacent = window
                    .windows(2)
                    .all(|pair| pair[1].1 == pair[0].1 + 1);
                if !adjacent {
                    continue;
                }

                let phrase = window
                    .iter()
                    .map(|(word, _)| word.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let first_pos = window[0].1;

                let entry = counts.entry(phrase).or_insert((0, first_pos));
                entry.0 += 1;
                entry.1 = entry.1.min(first_pos);
            }
        }

        self.rank(counts, top_n)
    }

    /// Scan a window of words around each keyword occurrence for tier
    /// phrasing. Windows never cross sentence boundaries, and the first
    /// indicator found wins, so a keyword never lands in two tiers.
    pub fn requirement_tiers(&self, text: &str, keywords: &[Keyword]) -> RequirementTiers {
        let sentences: Vec<Vec<String>> = self
            .processor
            .split_sentences(text)
            .iter()
            .map(|s| self.processor.normalize_words(s))
            .collect();
        let mut tiers = RequirementTiers::default();

        for keyword in keywords {
            let parts: Vec<&str> = keyword.word.split(' ').collect();
            let tier = sentences
                .iter()
                .find_map(|sentence| self.tier_for(sentence, &parts));

            match tier {
                Some(Tier::MustHave) => tiers.must_have.push(keyword.word.clone()),
                Some(Tier::NiceToHave) => tiers.nice_to_have.push(keyword.word.clone()),
                Some(Tier::Preferred) => tiers.preferred.push(keyword.word.clone()),
                None => {}
            }
        }

        tiers
    }

    /// Seniority markers present in the text, in taxonomy order.
    pub fn seniority_in(&self, text: &str) -> Vec<String> {
        let words = self.processor.normalize_words(text);

        self.taxonomy
            .seniority_markers()
            .iter()
            .filter(|marker| words.iter().any(|w| w == *marker))
            .map(|marker| marker.to_string())
            .collect()
    }

    fn count_terms<I>(tokens: I) -> HashMap<String, (usize, usize)>
    where
        I: Iterator<Item = (String, usize)>,
    {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (word, pos) in tokens {
            let entry = counts.entry(word).or_insert((0, pos));
            entry.0 += 1;
            entry.1 = entry.1.min(pos);
        }

        counts
    }

    fn rank(&self, counts: HashMap<String, (usize, usize)>, top_n: usize) -> Vec<Keyword> {
        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(word, (frequency, first_pos))| (word, frequency, first_pos))
            .collect();

        // A phrase and its leading word can share frequency and first
        // position; the final word comparison keeps the order total.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)).then(a.0.cmp(&b.0)));
        ranked.truncate(top_n);

        ranked
            .into_iter()
            .map(|(word, frequency, first_pos)| Keyword {
                score: Self::rank_score(frequency, first_pos),
                category: self.categorize(&word),
                word,
                frequency,
            })
            .collect()
    }

    /// Frequency dominates; an earlier first occurrence adds a bonus in
    /// (0, 1], so the score orders exactly like the ranking.
    fn rank_score(frequency: usize, first_pos: usize) -> f32 {
        frequency as f32 + 1.0 / (1.0 + first_pos as f32)
    }

    fn categorize(&self, word: &str) -> KeywordCategory {
        if self.taxonomy.is_known_skill(word) {
            KeywordCategory::Technical
        } else if self.taxonomy.is_soft_skill(word) {
            KeywordCategory::SoftSkill
        } else if self.taxonomy.is_qualification(word) {
            KeywordCategory::Qualification
        } else {
            KeywordCategory::Other
        }
    }

    fn tier_for(&self, words: &[String], parts: &[&str]) -> Option<Tier> {
        for start in Self::occurrences(words, parts) {
            let from = start.saturating_sub(self.tier_window);
            let to = (start + parts.len() + self.tier_window).min(words.len());

            for word in &words[from..to] {
                if let Some(tier) = Self::indicator_tier(word) {
                    return Some(tier);
                }
            }
        }

        None
    }

    fn occurrences(words: &[String], parts: &[&str]) -> Vec<usize> {
        if parts.is_empty() || words.len() < parts.len() {
            return Vec::new();
        }

        (0..=words.len() - parts.len())
            .filter(|&start| {
                parts
                    .iter()
                    .enumerate()
                    .all(|(offset, part)| words[start + offset] == *part)
            })
            .collect()
    }

    fn indicator_tier(word: &str) -> Option<Tier> {
        if MUST_HAVE_INDICATORS.contains(&word) {
            Some(Tier::MustHave)
        } else if PREFERRED_INDICATORS.contains(&word) {
            Some(Tier::Preferred)
        } else if NICE_TO_HAVE_INDICATORS.contains(&word) {
            Some(Tier::NiceToHave)
        } else {
            None
        }
    }
}
