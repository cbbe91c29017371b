use std::collections::HashSet;

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Average reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 225;

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Rough complexity bucket of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Complexity {
    #[display(fmt = "Simple")]
    Simple,
    #[display(fmt = "Moderate")]
    Moderate,
    #[display(fmt = "Complex")]
    Complex,
}

impl Complexity {
    /// Bucket an additive score in `0..=4`
    fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Complexity::Simple,
            2 => Complexity::Moderate,
            _ => Complexity::Complex,
        }
    }
}

/// Vocabulary metrics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LanguageMetrics {
    /// Distinct words after lowercasing and stripping non-word characters
    pub unique_words: usize,

    /// `unique_words / word_count`, rounded to two decimals
    pub lexical_diversity: f64,
}

/// Readability and size statistics for one document
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentStatistics {
    /// Estimated reading time in minutes
    pub reading_time: usize,

    pub total_chars: usize,

    pub word_count: usize,

    /// Number of `\n`-separated segments, empty lines included
    pub line_count: usize,

    pub paragraph_count: usize,

    pub sentence_count: usize,

    /// Rounded to one decimal
    pub average_words_per_sentence: f64,

    /// Rounded to one decimal
    pub average_chars_per_word: f64,

    pub complexity: Complexity,

    pub language_metrics: LanguageMetrics,
}

impl DocumentStatistics {
    /// Statistics of an empty or whitespace-only document
    pub fn empty() -> Self {
        Self {
            reading_time: 0,
            total_chars: 0,
            word_count: 0,
            line_count: 0,
            paragraph_count: 0,
            sentence_count: 0,
            average_words_per_sentence: 0.0,
            average_chars_per_word: 0.0,
            complexity: Complexity::Simple,
            language_metrics: LanguageMetrics::default(),
        }
    }
}

/// Compute readability statistics for a document.
///
/// Empty and whitespace-only input yields all zeros, including a reading
/// time of 0, while any other input reads for at least one minute.
pub fn compute_statistics(text: &str) -> DocumentStatistics {
    if text.trim().is_empty() {
        return DocumentStatistics::empty();
    }

    let total_chars = text.chars().count();
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let line_count = text.split('\n').count();
    let paragraph_count = PARAGRAPH_BREAK
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .count();
    let sentence_count = SENTENCE_END.find_iter(text).count().max(1);

    let average_words_per_sentence = round_to(word_count as f64 / sentence_count as f64, 1);
    let average_chars_per_word = if word_count > 0 {
        round_to(total_chars as f64 / word_count as f64, 1)
    } else {
        0.0
    };

    let unique_words = words
        .iter()
        .map(|word| NON_WORD.replace_all(&word.to_lowercase(), "").into_owned())
        .collect::<HashSet<_>>()
        .len();
    let lexical_diversity = if word_count > 0 {
        round_to(unique_words as f64 / word_count as f64, 2)
    } else {
        0.0
    };

    let score = u8::from(average_words_per_sentence > 20.0)
        + u8::from(average_chars_per_word > 6.0)
        + u8::from(lexical_diversity > 0.7)
        + u8::from(sentence_count > 50);

    DocumentStatistics {
        reading_time: word_count.div_ceil(WORDS_PER_MINUTE).max(1),
        total_chars,
        word_count,
        line_count,
        paragraph_count,
        sentence_count,
        average_words_per_sentence,
        average_chars_per_word,
        complexity: Complexity::from_score(score),
        language_metrics: LanguageMetrics {
            unique_words,
            lexical_diversity,
        },
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
