use similar::Algorithm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::comparison::{compare, ComparisonResult};

/// Options for comparing two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffConfig {
    /// The diff algorithm used for both character and line scripts
    pub algorithm: Algorithm,

    /// Match lines (and score whole-document similarity) on
    /// whitespace-normalized text
    pub ignore_whitespace: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Myers,
            ignore_whitespace: false,
        }
    }
}

impl DiffConfig {
    /// Set the diff algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set whether whitespace differences are ignored
    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Compare two documents with this configuration
    pub fn compare(&self, old_text: &str, new_text: &str) -> ComparisonResult {
        compare(old_text, new_text, self)
    }
}
