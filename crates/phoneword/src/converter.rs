//! Conversion engine: validation, splitting and word-pair assembly

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::combinations::all_combinations;
use crate::dictionary::Dictionary;
use crate::error::ConvertError;
use crate::keypad::WORD_MIN_LENGTH;
use crate::number::{PhoneNumber, Split};

// ============================================================================
// Result Types
// ============================================================================

/// One rendering of a number as two adjacent dictionary words
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl std::fmt::Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}

/// Every word pair produced by a single split
///
/// `pairs` is the full cross-product of the first segment's words and the
/// second segment's words, first word varying slowest. Never empty when it
/// appears in a [`ResultSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitMatches {
    pub boundary: usize,
    pub first_len: usize,
    pub second_len: usize,
    pub pairs: Vec<WordPair>,
}

/// Non-empty per-split match lists, ordered by increasing split boundary
pub type ResultSet = Vec<SplitMatches>;

// ============================================================================
// Converter
// ============================================================================

/// Converts telephone numbers into dictionary word pairs
///
/// Holds nothing but a shared, read-only [`Dictionary`], so a single
/// converter (or clones of it) can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Converter {
    dictionary: Arc<Dictionary>,
}

impl Converter {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Validates `input` and converts it
    ///
    /// Fails with [`ConvertError::InvalidNumber`] before any work is done if
    /// the number is not exactly 10 keypad digits. An empty result is not an
    /// error.
    pub fn convert(&self, input: &str) -> Result<ResultSet, ConvertError> {
        let number = PhoneNumber::parse(input)?;
        Ok(self.convert_number(&number))
    }

    /// Numeric counterpart of [`Converter::convert`]
    pub fn convert_u64(&self, number: u64) -> Result<ResultSet, ConvertError> {
        let number = PhoneNumber::from_u64(number)?;
        Ok(self.convert_number(&number))
    }

    /// Converts an already validated number
    pub fn convert_number(&self, number: &PhoneNumber) -> ResultSet {
        number
            .splits()
            .filter_map(|split| self.matches_for(split))
            .collect()
    }

    fn matches_for(&self, split: Split<'_>) -> Option<SplitMatches> {
        let first_words = self.words_for(split.first());
        let second_words = self.words_for(split.second());

        let pairs: Vec<WordPair> = first_words
            .iter()
            .flat_map(|first| {
                second_words
                    .iter()
                    .map(move |second| WordPair::new(first.as_str(), second.as_str()))
            })
            .collect();

        debug!(
            boundary = split.boundary,
            first = split.first(),
            second = split.second(),
            first_words = first_words.len(),
            second_words = second_words.len(),
            pairs = pairs.len(),
            "split converted"
        );

        if pairs.is_empty() {
            return None;
        }

        Some(SplitMatches {
            boundary: split.boundary,
            first_len: split.first().len(),
            second_len: split.second().len(),
            pairs,
        })
    }

    /// Dictionary words spelled by a digit segment, in enumeration order
    pub fn words_for(&self, segment: &str) -> Vec<String> {
        all_combinations(segment)
            .filter(|candidate| candidate.len() >= WORD_MIN_LENGTH)
            .filter(|candidate| self.dictionary.contains(candidate))
            .inspect(|word| trace!(segment, word = word.as_str(), "dictionary match"))
            .collect()
    }
}
