//! Text normalization and tokenization

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextProcessor {
    stop_words: HashSet<String>,
    non_word_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            non_word_regex: Regex::new(r"[^\w]+").expect("Invalid non-word regex"),
        }
    }

    /// Lowercase word stream with punctuation stripped. No stopword or
    /// length filtering; positions in this stream anchor tier windows and
    /// phrase adjacency.
    pub fn normalize_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.non_word_regex.replace_all(&lowered, " ");

        cleaned.unicode_words().map(|w| w.to_string()).collect()
    }

    /// Tokenize for keyword extraction: normalized words minus stopwords
    /// and words of length <= 2. Empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_indexed(text)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Tokenize while keeping each token's index in the raw word stream.
    pub fn tokenize_indexed(&self, text: &str) -> Vec<(String, usize)> {
        self.normalize_words(text)
            .into_iter()
            .enumerate()
            .filter(|(_, word)| word.len() > 2 && !self.stop_words.contains(word))
            .map(|(idx, word)| (word, idx))
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Split text into sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Jaccard similarity over the two texts' word sets. Identical non-empty
    /// strings score 1.0; an empty union scores 0.0 rather than dividing.
    pub fn jaccard_similarity(&self, text1: &str, text2: &str) -> f32 {
        let words1 = self.normalize_words(text1);
        let words2 = self.normalize_words(text2);

        let set1: HashSet<&String> = words1.iter().collect();
        let set2: HashSet<&String> = words2.iter().collect();

        let union = set1.union(&set2).count();
        if union == 0 {
            return 0.0;
        }

        let intersection = set1.intersection(&set2).count();
        intersection as f32 / union as f32
    }

    /// Articles, prepositions, common conjunctions, pronouns, and forms of
    /// "to be". Intentionally free of content words like "team" or "lead".
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            // articles
            "a", "an", "the",
            // forms of "to be" and common auxiliaries
            "am", "is", "are", "was", "were", "be", "been", "being",
            "do", "does", "did", "have", "has", "had",
            "will", "would", "shall", "should", "can", "could", "may", "might", "must",
            // prepositions
            "of", "in", "on", "at", "by", "for", "with", "from", "to", "into",
            "onto", "over", "under", "about", "after", "before", "between",
            "through", "during", "above", "below", "off", "out", "up", "down",
            // conjunctions
            "and", "or", "but", "nor", "so", "yet", "if", "than", "then",
            "because", "while", "when", "where", "that", "which", "who", "whom",
            // pronouns and determiners
            "it", "its", "this", "these", "those", "they", "them", "their",
            "we", "our", "you", "your", "he", "she", "his", "her",
            // frequent fillers
            "as", "not", "all", "any", "each", "other", "such", "own", "same",
            "also", "both", "more", "most", "some", "very",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}
