//! Dictionary records produced from articles.

use std::collections::BTreeMap;

use serde::Serialize;

use super::references::CrossReferences;

/// Translations keyed by language code, in document order per language.
pub type Translations = BTreeMap<String, Vec<String>>;

/// Append every translation in `other` after the ones already present.
pub(crate) fn merge_translations(into: &mut Translations, other: Translations) {
    for (language, texts) in other {
        into.entry(language).or_default().extend(texts);
    }
}

/// One usage example with its optional source attribution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Example {
    pub text: String,
    pub source: Option<String>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A sub-meaning nested under a [`Definition`]. Cannot nest further.
///
/// Equality covers the primary text and the examples only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Subdefinition {
    #[serde(rename = "primary definition")]
    pub primary: Option<String>,
    pub examples: Vec<Example>,
    pub remarks: Vec<String>,
    pub translations: Translations,
    #[serde(rename = "cross references", skip_serializing_if = "CrossReferences::is_empty")]
    pub cross_references: CrossReferences,
}

impl PartialEq for Subdefinition {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary && self.examples == other.examples
    }
}

/// One meaning of a word.
///
/// Equality covers the primary text, the subdefinitions and the examples;
/// remarks, translations and cross-references do not take part, so two
/// definitions differing only there are duplicates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Definition {
    #[serde(rename = "primary definition")]
    pub primary: Option<String>,
    pub examples: Vec<Example>,
    pub subdefinitions: Vec<Subdefinition>,
    pub remarks: Vec<String>,
    pub translations: Translations,
    #[serde(rename = "cross references", skip_serializing_if = "CrossReferences::is_empty")]
    pub cross_references: CrossReferences,
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary
            && self.subdefinitions == other.subdefinitions
            && self.examples == other.examples
    }
}

impl Definition {
    pub fn with_primary(primary: impl Into<String>) -> Self {
        Self {
            primary: Some(primary.into()),
            ..Self::default()
        }
    }

    /// No primary text, no subdefinitions and no examples.
    ///
    /// Cross-references alone do not make a definition worth keeping.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.subdefinitions.is_empty() && self.examples.is_empty()
    }
}

/// A word with its root and meanings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    #[serde(skip)]
    pub word: String,
    pub root: String,
    #[serde(rename = "primary")]
    pub is_primary: bool,
    pub definitions: Vec<Definition>,
}

impl Entry {
    pub fn new(word: impl Into<String>, root: impl Into<String>, definitions: Vec<Definition>) -> Self {
        Self {
            word: word.into(),
            root: root.into(),
            is_primary: false,
            definitions,
        }
    }
}

/// Keep the first of each group of equal definitions and drop empty ones.
pub(crate) fn deduplicate(definitions: Vec<Definition>) -> Vec<Definition> {
    let mut kept: Vec<Definition> = Vec::with_capacity(definitions.len());
    for definition in definitions {
        if !definition.is_empty() && !kept.contains(&definition) {
            kept.push(definition);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_remarks_and_translations() {
        let mut a = Definition::with_primary("Vidu: alia.");
        let mut b = a.clone();
        a.remarks.push("Rimarko: unu".to_string());
        b.translations
            .entry("en".to_string())
            .or_default()
            .push("other".to_string());
        assert_eq!(a, b);

        b.examples.push(Example::new("ekzemplo"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_empty() {
        assert!(Definition::default().is_empty());
        assert!(!Definition::with_primary("x").is_empty());

        let mut references_only = Definition::default();
        references_only.cross_references.synonyms.push("alia".to_string());
        assert!(references_only.is_empty());

        let mut with_sub = Definition::default();
        with_sub.subdefinitions.push(Subdefinition::default());
        assert!(!with_sub.is_empty());
    }

    #[test]
    fn test_deduplicate_keeps_first_and_drops_empty() {
        let mut first = Definition::with_primary("Unu.");
        first.remarks.push("Rimarko: a".to_string());
        let mut second = Definition::with_primary("Unu.");
        second.remarks.push("Rimarko: b".to_string());

        let kept = deduplicate(vec![
            Definition::default(),
            first,
            second,
            Definition::with_primary("Du."),
        ]);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].remarks, ["Rimarko: a"]);
        assert_eq!(kept[1].primary.as_deref(), Some("Du."));
    }

    #[test]
    fn test_merge_translations_appends() {
        let mut into = Translations::new();
        into.insert("de".to_string(), vec!["folgen".to_string()]);
        let mut other = Translations::new();
        other.insert("de".to_string(), vec!["nachfolgen".to_string()]);
        other.insert("fr".to_string(), vec!["suivre".to_string()]);

        merge_translations(&mut into, other);

        assert_eq!(into["de"], ["folgen", "nachfolgen"]);
        assert_eq!(into["fr"], ["suivre"]);
    }

    #[test]
    fn test_entry_json_shape() {
        let mut entry = Entry::new("saluto", "salut", vec![Definition::with_primary("Saluto.")]);
        entry.is_primary = true;
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["root"], "salut");
        assert_eq!(value["primary"], true);
        assert_eq!(value["definitions"][0]["primary definition"], "Saluto.");
        assert!(value["definitions"][0].get("cross references").is_none());
        assert!(value.get("word").is_none());
    }
}
