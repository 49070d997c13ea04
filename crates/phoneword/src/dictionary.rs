//! Sorted, read-only word list with binary-search membership

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::DictionaryError;

/// Immutable, lexicographically sorted list of uppercase words
///
/// Built once before any conversion runs and shared read-only afterwards
/// (typically behind an `Arc`). Membership is an exact, case-sensitive
/// binary search, so the list must stay sorted for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Wraps a word list that is already sorted
    ///
    /// The list is checked, never re-sorted: an out-of-order or repeated word
    /// is reported with its 1-based position.
    ///
    /// ```
    /// use phoneword::Dictionary;
    ///
    /// let words = vec!["CAT".to_string(), "DOG".to_string()];
    /// assert!(Dictionary::from_sorted(words).is_ok());
    ///
    /// let words = vec!["DOG".to_string(), "CAT".to_string()];
    /// assert!(Dictionary::from_sorted(words).is_err());
    /// ```
    pub fn from_sorted(words: Vec<String>) -> Result<Self, DictionaryError> {
        if let Some(i) = words.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(DictionaryError::Unsorted {
                line: i + 2,
                previous: words[i].clone(),
                word: words[i + 1].clone(),
            });
        }

        Ok(Self { words })
    }

    /// Normalizes raw words into a dictionary
    ///
    /// Each word is trimmed and uppercased, blank entries are dropped, and
    /// the result is sorted and deduplicated.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// Parses newline-delimited text, one word per line
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Parses newline-delimited text that must already be sorted and
    /// uppercase; lines are only trimmed
    pub fn parse_sorted(text: &str) -> Result<Self, DictionaryError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Self::from_sorted(words)
    }

    /// Loads and normalizes a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let dictionary = Self::parse(&read(path)?);
        info!(path = ?path, words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Loads a dictionary file that must already be sorted
    pub fn load_sorted(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let dictionary = Self::parse_sorted(&read(path)?)?;
        info!(path = ?path, words = dictionary.len(), "loaded pre-sorted dictionary");
        Ok(dictionary)
    }

    /// Exact membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    debug!(path = ?path, "reading dictionary");
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
