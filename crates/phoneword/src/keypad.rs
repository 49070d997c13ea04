//! Telephone keypad letter mapping

/// Number of digits in a convertible telephone number
pub const NUMBER_LENGTH: usize = 10;

/// Shortest segment (and therefore word) a number may be split into
pub const WORD_MIN_LENGTH: usize = 3;

const KEY_2: [char; 3] = ['A', 'B', 'C'];
const KEY_3: [char; 3] = ['D', 'E', 'F'];
const KEY_4: [char; 3] = ['G', 'H', 'I'];
const KEY_5: [char; 3] = ['J', 'K', 'L'];
const KEY_6: [char; 3] = ['M', 'N', 'O'];
const KEY_7: [char; 4] = ['P', 'Q', 'R', 'S'];
const KEY_8: [char; 3] = ['T', 'U', 'V'];
const KEY_9: [char; 4] = ['W', 'X', 'Y', 'Z'];

/// Returns the uppercase letters printed on a keypad digit, in keypad order
///
/// Only `'2'..='9'` carry letters; every other character returns `None`.
///
/// ```
/// use phoneword::letters_for;
///
/// assert_eq!(letters_for('7'), Some(&['P', 'Q', 'R', 'S'][..]));
/// assert_eq!(letters_for('1'), None);
/// ```
pub fn letters_for(digit: char) -> Option<&'static [char]> {
    match digit {
        '2' => Some(&KEY_2),
        '3' => Some(&KEY_3),
        '4' => Some(&KEY_4),
        '5' => Some(&KEY_5),
        '6' => Some(&KEY_6),
        '7' => Some(&KEY_7),
        '8' => Some(&KEY_8),
        '9' => Some(&KEY_9),
        _ => None,
    }
}

pub fn is_keypad_digit(c: char) -> bool {
    letters_for(c).is_some()
}
