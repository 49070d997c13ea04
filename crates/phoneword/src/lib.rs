//! # Phoneword
//!
//! Converts a 10-digit telephone number into every pair of dictionary words
//! it spells on a standard telephone keypad.
//!
//! ## How a conversion works
//!
//! - The number is validated at a typed boundary ([`PhoneNumber`])
//! - It is split at every boundary that leaves at least 3 digits on each side
//!   (`3+7`, `4+6`, `5+5`, `6+4`, `7+3`)
//! - Each segment is expanded lazily into letter strings ([`Combinations`])
//! - Only strings found in the [`Dictionary`] survive
//! - Each split contributes the cross-product of its surviving words, or
//!   nothing at all
//!
//! ## Example
//!
//! ```
//! use phoneword::{Converter, Dictionary};
//! use std::sync::Arc;
//!
//! let dictionary = Dictionary::parse("motor\nnouns\nonto\nstruck\ntruck\n");
//! let converter = Converter::new(Arc::new(dictionary));
//!
//! let results = converter.convert("6686787825").unwrap();
//! assert_eq!(results.len(), 2);
//!
//! // 4 + 6
//! assert_eq!(results[0].pairs[0].first, "ONTO");
//! assert_eq!(results[0].pairs[0].second, "STRUCK");
//!
//! // 5 + 5
//! assert_eq!(results[1].pairs[0].first, "MOTOR");
//! assert_eq!(results[1].pairs[1].first, "NOUNS");
//! assert_eq!(results[1].pairs[1].second, "TRUCK");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod combinations;
pub mod converter;
pub mod dictionary;
pub mod error;
pub mod keypad;
pub mod number;

// ============================================================================
// Re-exports
// ============================================================================

pub use combinations::{all_combinations, Combinations};
pub use converter::{Converter, ResultSet, SplitMatches, WordPair};
pub use dictionary::Dictionary;
pub use error::{ConvertError, DictionaryError, InvalidNumberReason};
pub use keypad::{is_keypad_digit, letters_for, NUMBER_LENGTH, WORD_MIN_LENGTH};
pub use number::{PhoneNumber, Split, Splits};
