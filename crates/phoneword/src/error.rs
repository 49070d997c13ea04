//! Error types for number validation and dictionary construction

use std::path::PathBuf;

/// Why a telephone number was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNumberReason {
    /// Fewer than 10 characters
    TooShort,
    /// Contains the digit '0', which carries no letters
    ContainsZero,
    /// Contains the digit '1', which carries no letters
    ContainsOne,
    /// More than 10 characters
    TooLong,
    /// A character that is not a keypad digit
    InvalidCharacter(char),
}

impl std::fmt::Display for InvalidNumberReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort | Self::TooLong => write!(f, "number should contain 10 digits"),
            Self::ContainsZero => write!(f, "number shouldn't contain digit '0'"),
            Self::ContainsOne => write!(f, "number shouldn't contain digit '1'"),
            Self::InvalidCharacter(c) => write!(f, "number shouldn't contain {:?}", c),
        }
    }
}

/// Error types for conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input failed validation before any conversion ran
    #[error("invalid number: {0}")]
    InvalidNumber(InvalidNumberReason),
}

impl ConvertError {
    pub fn reason(&self) -> &InvalidNumberReason {
        match self {
            Self::InvalidNumber(reason) => reason,
        }
    }
}

/// Error types for dictionary construction
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Failed to read the dictionary file
    #[error("failed to read dictionary {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pre-sorted word list was out of order or held a duplicate
    #[error("dictionary is not sorted: {word:?} on line {line} does not come after {previous:?}")]
    Unsorted {
        line: usize,
        previous: String,
        word: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_messages() {
        let err = ConvertError::InvalidNumber(InvalidNumberReason::TooShort);
        assert_eq!(err.to_string(), "invalid number: number should contain 10 digits");

        let err = ConvertError::InvalidNumber(InvalidNumberReason::ContainsZero);
        assert_eq!(err.to_string(), "invalid number: number shouldn't contain digit '0'");

        let err = ConvertError::InvalidNumber(InvalidNumberReason::ContainsOne);
        assert_eq!(err.to_string(), "invalid number: number shouldn't contain digit '1'");

        let err = ConvertError::InvalidNumber(InvalidNumberReason::InvalidCharacter('-'));
        assert_eq!(err.to_string(), "invalid number: number shouldn't contain '-'");
        assert_eq!(err.reason(), &InvalidNumberReason::InvalidCharacter('-'));
    }

    #[test]
    fn test_unsorted_message() {
        let err = DictionaryError::Unsorted {
            line: 3,
            previous: "DOG".to_string(),
            word: "CAT".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dictionary is not sorted: \"CAT\" on line 3 does not come after \"DOG\""
        );
    }
}
