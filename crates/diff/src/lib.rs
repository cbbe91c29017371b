// Document comparison library for Diffl
// This crate computes line and character diffs between two documents,
// pairs edited lines, and classifies how much changed

mod char_diff;
mod comparison;
mod config;
mod edit;
mod line_diff;
mod pairing;
mod similarity;
mod summary;

pub use char_diff::{diff_chars, diff_chars_with};
pub use comparison::{compare, ComparisonResult};
pub use config::DiffConfig;
pub use edit::{new_text, old_text, EditOperation, EditTag};
pub use line_diff::{diff_lines, diff_lines_with, normalize_whitespace};
pub use pairing::{flatten_units, pair_modifications, LineUnit, LineUnitKind, MODIFICATION_THRESHOLD};
pub use similarity::{levenshtein, similarity, similarity_ratio, similarity_with};
pub use summary::{ChangeSummary, ChangeType, ContentSummary};

// Re-exported so callers can pick an algorithm without depending on similar
pub use similar::Algorithm;
