//! Text cleanup applied to every flattened string.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of ASCII whitespace collapsed to one space.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\t\r ]+").expect("valid whitespace pattern"));

/// Literal quotation glyphs and their canonical replacement.
const QUOTE_GLYPHS: &[(char, char)] = &[('„', '«'), ('“', '»'), ('”', '»')];

/// Abbreviations expanded in running text, applied in order.
const ABBREVIATIONS: &[(&str, &str)] = &[("p.p.", "parolante pri"), ("p. p.", "parolante pri")];

/// Normalize a raw flattened string.
///
/// Quotation glyphs are canonicalized to `«»`, literal `=` (inserted next to
/// references in the source) is dropped, whitespace runs collapse to single
/// spaces, the ends are trimmed and abbreviations are expanded.
///
/// ```
/// use vortaro::flatten::clean_string;
///
/// assert_eq!(clean_string("  foo \n  bar\t"), "foo bar");
/// ```
pub fn clean_string(raw: &str) -> String {
    let quoted: String = raw
        .chars()
        .filter(|c| *c != '=')
        .map(|c| {
            QUOTE_GLYPHS
                .iter()
                .find(|(alternate, _)| *alternate == c)
                .map_or(c, |(_, canonical)| *canonical)
        })
        .collect();

    let mut cleaned = WHITESPACE_RE.replace_all(&quoted, " ").trim().to_string();

    for (abbreviation, expansion) in ABBREVIATIONS {
        if cleaned.contains(abbreviation) {
            cleaned = cleaned.replace(abbreviation, expansion);
        }
    }

    cleaned
}
