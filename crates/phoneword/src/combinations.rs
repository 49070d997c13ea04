//! Lazy letter-combination expansion of digit segments

use crate::keypad::letters_for;

/// Lazy iterator over every letter string a digit segment spells
///
/// For segment `"23"`, yields: `AD` → `AE` → `AF` → `BD` → ... → `CF`
///
/// The first digit varies slowest and the last digit fastest, like an
/// odometer. Only one cursor per digit is held, so a 7-digit segment of
/// sevens and nines (4^7 strings) never sits in memory at once.
///
/// Cloning yields an independent iterator from the same position, so an
/// untouched clone restarts the enumeration.
///
/// # Examples
///
/// ```
/// use phoneword::all_combinations;
///
/// let words: Vec<String> = all_combinations("22").collect();
/// assert_eq!(words, vec!["AA", "AB", "AC", "BA", "BB", "BC", "CA", "CB", "CC"]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    keys: Vec<&'static [char]>,
    cursor: Vec<usize>,
    total: Option<usize>,
    remaining: usize,
}

/// Expands a digit segment into all of its letter combinations
///
/// A segment that is empty or contains a character without keypad letters
/// yields nothing. So does a segment too long for its combination count to
/// fit in a `usize`; [`Combinations::total`] returns `None` for it.
pub fn all_combinations(segment: &str) -> Combinations {
    Combinations::new(segment)
}

impl Combinations {
    pub fn new(segment: &str) -> Self {
        let keys: Option<Vec<&'static [char]>> = segment.chars().map(letters_for).collect();
        let keys = keys.unwrap_or_default();
        let total = count(&keys);

        Self {
            cursor: vec![0; keys.len()],
            keys,
            total,
            remaining: total.unwrap_or(0),
        }
    }

    /// Total number of combinations for the segment, regardless of progress
    ///
    /// `None` when the count overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    fn current(&self) -> String {
        self.keys
            .iter()
            .zip(&self.cursor)
            .map(|(letters, &i)| letters[i])
            .collect()
    }

    /// Rolls the cursor forward one position, rightmost digit first
    fn advance(&mut self) {
        for (pos, letters) in self.keys.iter().enumerate().rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < letters.len() {
                return;
            }
            self.cursor[pos] = 0;
        }
    }
}

fn count(keys: &[&'static [char]]) -> Option<usize> {
    if keys.is_empty() {
        return Some(0);
    }
    keys.iter()
        .try_fold(1usize, |acc, letters| acc.checked_mul(letters.len()))
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let word = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}

impl std::iter::FusedIterator for Combinations {}
