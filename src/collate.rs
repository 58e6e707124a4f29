//! Esperanto alphabetical ordering.
//!
//! Strings are trimmed and lower-cased, then compared letter by letter over
//! the alphabet below. Space sorts first so that "a b" precedes "ab", and
//! hyphen second so that affixes precede words. The letters missing from
//! Esperanto (q, w, x, y) keep their Latin positions so foreign terms still
//! sort sensibly.
//!
//! When two strings first differ at a position where neither character is
//! in the alphabet, the rest of both strings is compared by code point and
//! that decides the order.
//!
//! ```
//! use std::cmp::Ordering;
//! use vortaro::collate::compare;
//!
//! assert_eq!(compare("adiaŭ", "ĉielo"), Ordering::Less);
//! assert_eq!(compare("ĉielo", "dento"), Ordering::Less);
//! assert_eq!(compare("sal", "saluto"), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// Collation alphabet, lowest first.
pub const ALPHABET: [char; 34] = [
    ' ', '-', 'a', 'b', 'c', 'ĉ', 'd', 'e', 'f', 'g', 'ĝ', 'h', 'ĥ', 'i', 'j', 'ĵ', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 'ŝ', 't', 'u', 'ŭ', 'v', 'w', 'x', 'y', 'z',
];

/// One position of a [`SortKey`].
///
/// Letters sort before raw text, which mirrors "the in-alphabet character
/// sorts first".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum KeyPart {
    /// Index into [`ALPHABET`].
    Letter(u8),
    /// Remainder of the string from the first character outside the
    /// alphabet. Always the last part of a key.
    Raw(String),
}

/// Precomputed key whose `Ord` matches [`compare`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<KeyPart>);

fn alphabet_index(c: char) -> Option<u8> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u8)
}

/// Build the sort key for a string.
pub fn sort_key(s: &str) -> SortKey {
    let folded = s.trim().to_lowercase();
    let mut parts = Vec::with_capacity(folded.len());

    for (offset, c) in folded.char_indices() {
        match alphabet_index(c) {
            Some(index) => parts.push(KeyPart::Letter(index)),
            None => {
                parts.push(KeyPart::Raw(folded[offset..].to_string()));
                break;
            }
        }
    }

    SortKey(parts)
}

/// Compare two strings in Esperanto alphabetical order.
///
/// Total over all strings, including empty ones and ones with characters
/// outside the alphabet.
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort words in place, computing each key once.
pub fn sort_words<S: AsRef<str>>(words: &mut [S]) {
    words.sort_by_cached_key(|word| sort_key(word.as_ref()));
}
