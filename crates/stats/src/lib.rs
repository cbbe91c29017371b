// Readability statistics for Diffl
// This crate derives word, sentence and paragraph metrics from one document

mod statistics;

pub use statistics::{
    compute_statistics, Complexity, DocumentStatistics, LanguageMetrics, WORDS_PER_MINUTE,
};
