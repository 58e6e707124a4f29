//! Relation kinds carried by the `tip` attribute of `<ref>`/`<refgrp>`.

/// Semantic type of a cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `dif` - the word is defined at the target.
    Definition,
    /// `vid` - see also.
    SeeAlso,
    /// `sin`
    Synonym,
    /// `ant`
    Antonym,
    /// `super` - broader notion.
    Supernotion,
    /// `sub` - narrower notion.
    Subnotion,
    /// `prt` - the word names a part of the target.
    PartOf,
    /// `malprt` - the target is a part of the word.
    HasParts,
    /// `hom`
    Homonym,
    /// `lst` - link into a word list.
    List,
    /// `val` - value in a series.
    Value,
    /// `ekz` - reference to an example.
    Example,
    /// No `tip` attribute.
    Unlabeled,
}

impl RelationKind {
    /// Parse a `tip` attribute value. `None` means the value is outside the
    /// known vocabulary.
    pub fn from_attr(tip: Option<&str>) -> Option<RelationKind> {
        let Some(tip) = tip else {
            return Some(RelationKind::Unlabeled);
        };
        let kind = match tip.trim() {
            "dif" => RelationKind::Definition,
            "vid" => RelationKind::SeeAlso,
            "sin" => RelationKind::Synonym,
            "ant" => RelationKind::Antonym,
            "super" => RelationKind::Supernotion,
            "sub" => RelationKind::Subnotion,
            "prt" => RelationKind::PartOf,
            "malprt" => RelationKind::HasParts,
            "hom" => RelationKind::Homonym,
            "lst" => RelationKind::List,
            "val" => RelationKind::Value,
            "ekz" => RelationKind::Example,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds that are never collected as cross-references.
    pub fn is_discarded(self) -> bool {
        matches!(
            self,
            RelationKind::Homonym
                | RelationKind::List
                | RelationKind::Value
                | RelationKind::Example
                | RelationKind::Unlabeled
        )
    }

    /// Prefix phrase used when references are labeled.
    pub fn label(self, plural: bool) -> Option<&'static str> {
        let label = match (self, plural) {
            (RelationKind::Definition, _) => "Vidu: ",
            (RelationKind::SeeAlso, _) => "Vidu ankaŭ: ",
            (RelationKind::Synonym, false) => "Sinonimo: ",
            (RelationKind::Synonym, true) => "Sinonimoj: ",
            (RelationKind::Antonym, false) => "Antonimo: ",
            (RelationKind::Antonym, true) => "Antonimoj: ",
            (RelationKind::Supernotion, _) => "Supernocio: ",
            (RelationKind::Subnotion, _) => "Subnocio: ",
            (RelationKind::PartOf, _) => "Parto de: ",
            (RelationKind::HasParts, _) => "Havas kiel partojn: ",
            _ => return None,
        };
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr() {
        assert_eq!(RelationKind::from_attr(Some("dif")), Some(RelationKind::Definition));
        assert_eq!(RelationKind::from_attr(Some("malprt")), Some(RelationKind::HasParts));
        assert_eq!(RelationKind::from_attr(None), Some(RelationKind::Unlabeled));
        assert_eq!(RelationKind::from_attr(Some("bogus")), None);
    }

    #[test]
    fn test_discarded_kinds_have_no_label() {
        for kind in [RelationKind::Homonym, RelationKind::List, RelationKind::Unlabeled] {
            assert!(kind.is_discarded());
            assert_eq!(kind.label(false), None);
        }
    }

    #[test]
    fn test_plural_labels() {
        assert_eq!(RelationKind::Synonym.label(true), Some("Sinonimoj: "));
        assert_eq!(RelationKind::Antonym.label(false), Some("Antonimo: "));
        assert_eq!(RelationKind::Definition.label(true), Some("Vidu: "));
    }
}
