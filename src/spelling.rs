//! Spelling suggestions against a known word list.
//!
//! Candidates are every string one edit away from the input: adjacent
//! transpositions, deletions, insertions and replacements over the
//! Esperanto letters. Only candidates present in the word list are
//! suggested.
//!
//! ```
//! use vortaro::spelling::WordList;
//!
//! let words = WordList::from_words(["episodo", "epizodo", "periodo"]);
//! assert_eq!(words.suggest("episodo"), ["episodo", "epizodo"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// The 28 letters of the Esperanto alphabet, in order.
pub const LETTERS: [char; 28] = [
    'a', 'b', 'c', 'ĉ', 'd', 'e', 'f', 'g', 'ĝ', 'h', 'ĥ', 'i', 'j', 'ĵ', 'k', 'l', 'm', 'n', 'o',
    'p', 'r', 's', 'ŝ', 't', 'u', 'ŭ', 'v', 'z',
];

/// Every string one edit away from `word`, in generation order. May contain
/// duplicates.
pub fn variations(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = Vec::with_capacity(n.saturating_sub(1) + n + LETTERS.len() * (2 * n + 1));

    for i in 0..n.saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        out.push(swapped.into_iter().collect());
    }

    for i in 0..n {
        out.push(chars[..i].iter().chain(&chars[i + 1..]).collect());
    }

    for &letter in &LETTERS {
        for i in 0..=n {
            out.push(
                chars[..i]
                    .iter()
                    .chain(std::iter::once(&letter))
                    .chain(&chars[i..])
                    .collect(),
            );
        }
    }

    for i in 0..n {
        for &letter in LETTERS.iter().filter(|&&letter| letter != chars[i]) {
            let mut replaced = chars.clone();
            replaced[i] = letter;
            out.push(replaced.into_iter().collect());
        }
    }

    out
}

/// A read-only set of known words, loaded once and passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Read a newline separated list. Blank lines are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let list = Self::from_words(content.lines());
        debug!("Loaded {} words from {}", list.len(), path.as_ref().display());
        Ok(list)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_string())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Known words matching `word` or one edit away from it. The word
    /// itself comes first when known.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(word.to_string())
            .chain(variations(word))
            .filter(|candidate| self.contains(candidate) && seen.insert(candidate.clone()))
            .collect()
    }
}
