//! Validated telephone numbers and their word splits

use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, InvalidNumberReason};
use crate::keypad::{is_keypad_digit, NUMBER_LENGTH, WORD_MIN_LENGTH};

/// A telephone number made of exactly 10 keypad digits (`'2'..='9'`)
///
/// The only way to obtain one is through validation, so every segment cut
/// from it expands through the keypad without failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates a number given as text
    ///
    /// Surrounding whitespace is ignored. Checks run in a fixed order and the
    /// first failure wins: too short, contains '0', contains '1', too long,
    /// any other non-keypad character.
    ///
    /// ```
    /// use phoneword::{InvalidNumberReason, PhoneNumber};
    ///
    /// assert!(PhoneNumber::parse("2282668687").is_ok());
    ///
    /// let err = PhoneNumber::parse("2034567890").unwrap_err();
    /// assert_eq!(err.reason(), &InvalidNumberReason::ContainsZero);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConvertError> {
        let number = input.trim();
        validate(number).map_err(ConvertError::InvalidNumber)?;
        Ok(Self(number.to_string()))
    }

    /// Validates a number given as an integer
    ///
    /// The integer is rendered in canonical decimal form first. A number that
    /// only fits in 10 digits with a leading zero cannot be represented here
    /// and fails as too short.
    pub fn from_u64(number: u64) -> Result<Self, ConvertError> {
        Self::parse(&number.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All ways to cut the number into two segments of at least 3 digits
    pub fn splits(&self) -> Splits<'_> {
        Splits {
            number: &self.0,
            boundary: WORD_MIN_LENGTH - 1,
        }
    }
}

fn validate(number: &str) -> Result<(), InvalidNumberReason> {
    let length = number.chars().count();

    if length < NUMBER_LENGTH {
        return Err(InvalidNumberReason::TooShort);
    }
    if number.contains('0') {
        return Err(InvalidNumberReason::ContainsZero);
    }
    if number.contains('1') {
        return Err(InvalidNumberReason::ContainsOne);
    }
    if length > NUMBER_LENGTH {
        return Err(InvalidNumberReason::TooLong);
    }
    if let Some(c) = number.chars().find(|&c| !is_keypad_digit(c)) {
        return Err(InvalidNumberReason::InvalidCharacter(c));
    }

    Ok(())
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ConvertError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = ConvertError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Splits
// ============================================================================

/// One partition of a number into two adjacent segments
///
/// `boundary` is the 0-indexed position of the last digit of the first
/// segment, so it ranges over `2..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub boundary: usize,
    first: &'a str,
    second: &'a str,
}

impl<'a> Split<'a> {
    pub fn first(&self) -> &'a str {
        self.first
    }

    pub fn second(&self) -> &'a str {
        self.second
    }
}

/// Iterator over the five splits of a number: 3+7, 4+6, 5+5, 6+4, 7+3
#[derive(Debug, Clone)]
pub struct Splits<'a> {
    number: &'a str,
    boundary: usize,
}

impl<'a> Iterator for Splits<'a> {
    type Item = Split<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.boundary + WORD_MIN_LENGTH >= NUMBER_LENGTH {
            return None;
        }

        let boundary = self.boundary;
        self.boundary += 1;

        // ASCII digits only, so byte offsets are char offsets
        let (first, second) = self.number.split_at(boundary + 1);
        Some(Split {
            boundary,
            first,
            second,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> InvalidNumberReason {
        PhoneNumber::parse(input).unwrap_err().reason().clone()
    }

    #[test]
    fn test_valid_number() {
        let number = PhoneNumber::parse("6686787825").unwrap();
        assert_eq!(number.as_str(), "6686787825");
        assert_eq!(number.to_string(), "6686787825");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let number = PhoneNumber::parse("  2282668687\n").unwrap();
        assert_eq!(number.as_str(), "2282668687");
    }

    #[test]
    fn test_too_short() {
        assert_eq!(reason("123456789"), InvalidNumberReason::TooShort);
        assert_eq!(reason(""), InvalidNumberReason::TooShort);
        assert_eq!(reason("22334"), InvalidNumberReason::TooShort);
    }

    #[test]
    fn test_disallowed_digits() {
        assert_eq!(reason("2034567892"), InvalidNumberReason::ContainsZero);
        assert_eq!(reason("2134567892"), InvalidNumberReason::ContainsOne);
        // '0' is reported before '1'
        assert_eq!(reason("2134567890"), InvalidNumberReason::ContainsZero);
    }

    #[test]
    fn test_too_long() {
        assert_eq!(reason("22822822822"), InvalidNumberReason::TooLong);
        // disallowed digits still win over length
        assert_eq!(reason("228228228221"), InvalidNumberReason::ContainsOne);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(reason("228-266-868"), InvalidNumberReason::TooLong);
        assert_eq!(reason("228266868a"), InvalidNumberReason::InvalidCharacter('a'));
        assert_eq!(reason("22826 6868"), InvalidNumberReason::InvalidCharacter(' '));
    }

    #[test]
    fn test_from_u64() {
        let number = PhoneNumber::from_u64(2_282_668_687).unwrap();
        assert_eq!(number.as_str(), "2282668687");

        let err = PhoneNumber::from_u64(228_266_868).unwrap_err();
        assert_eq!(err.reason(), &InvalidNumberReason::TooShort);

        assert!(PhoneNumber::try_from(9_999_999_999u64).is_ok());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: PhoneNumber = "2282668687".parse().unwrap();
        let converted = PhoneNumber::try_from("2282668687").unwrap();
        assert_eq!(parsed, converted);
    }

    #[test]
    fn test_splits() {
        let number = PhoneNumber::parse("2282668687").unwrap();
        let splits: Vec<(usize, &str, &str)> = number
            .splits()
            .map(|s| (s.boundary, s.first(), s.second()))
            .collect();

        assert_eq!(
            splits,
            vec![
                (2, "228", "2668687"),
                (3, "2282", "668687"),
                (4, "22826", "68687"),
                (5, "228266", "8687"),
                (6, "2282668", "687"),
            ]
        );
    }

    #[test]
    fn test_split_lengths() {
        let number = PhoneNumber::parse("2345678923").unwrap();
        let lengths: Vec<(usize, usize)> = number
            .splits()
            .map(|s| (s.first().len(), s.second().len()))
            .collect();
        assert_eq!(lengths, vec![(3, 7), (4, 6), (5, 5), (6, 4), (7, 3)]);
    }
}
