//! Headword and root extraction.

use crate::error::{Error, Result};
use crate::flatten::{FlattenConfig, Flattener, clean_string};
use crate::markup::{MarkupNode, Tag};

/// Headwords whose comma is part of the term rather than a separator.
const UNSPLITTABLE_HEADWORDS: &[&str] = &["(n,p)-matrico"];

/// All spellings declared by a `<kap>`.
///
/// Officialness markers and attributions are ignored; variants inside
/// `<var>` are listed after the main spelling.
///
/// ```
/// use vortaro::dictionary::words_from_headword;
/// use vortaro::flatten::Flattener;
/// use vortaro::markup::parse_document;
///
/// let kap = parse_document("<kap>brazil<tld/>arbo, <var><kap>brazila <tld/>arbo</kap></var></kap>".as_bytes())?;
/// assert_eq!(
///     words_from_headword(&kap, &Flattener::new("nuks")),
///     ["brazilnuksarbo", "brazila nuksarbo"]
/// );
/// # Ok::<(), vortaro::Error>(())
/// ```
pub fn words_from_headword(headword: &MarkupNode, flattener: &Flattener<'_>) -> Vec<String> {
    let config = FlattenConfig::new().skipping([Tag::Official, Tag::Source]);
    let flat = flattener.flatten(headword, &config);

    if UNSPLITTABLE_HEADWORDS.contains(&flat.as_str()) {
        return vec![flat];
    }

    flat.split(',')
        .map(clean_string)
        .filter(|word| !word.is_empty())
        .collect()
}

/// The root shared by every entry of an article: the text of its first
/// `<rad>`.
pub fn article_root(article: &MarkupNode) -> Result<String> {
    let root = article
        .find(Tag::Root)
        .map(|rad| clean_string(rad.text_str()))
        .unwrap_or_default();

    if root.is_empty() {
        return Err(Error::MissingElement("rad".to_string()));
    }
    Ok(root)
}
