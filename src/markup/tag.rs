//! Maps ReVo element names to tag kinds.
//!
//! The article vocabulary is closed: anything not listed here is
//! `Tag::Other` and gets generic handling everywhere.

/// Kind of a markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// `<vortaro>` - document root.
    Dictionary,
    /// `<art>` - one source record sharing a single root.
    Article,
    /// `<subart>` - grouping of entries inside an article.
    SubArticle,
    /// `<drv>` - a lexical entry (derivation).
    Entry,
    /// `<subdrv>` - grouped variant of the enclosing entry.
    SubEntry,
    /// `<kap>` - headword.
    Headword,
    /// `<rad>` - the article's root.
    Root,
    /// `<var>` - alternate spelling inside a headword.
    Variant,
    /// `<ofc>` - officialness marker.
    Official,
    /// `<snc>` - sense.
    Sense,
    /// `<subsnc>` - subsense.
    Subsense,
    /// `<dif>` - primary definition.
    Definition,
    /// `<ekz>` - example.
    Example,
    /// `<tld/>` - root substitution marker.
    RootMarker,
    /// `<ctl>` - quotation.
    Quotation,
    /// `<ind>` - index metadata wrapped around content.
    Index,
    /// `<rim>` - remark.
    Remark,
    /// `<bib>` - bibliographic abbreviation.
    Bibliography,
    /// `<ref>` - cross-reference.
    Reference,
    /// `<refgrp>` - group of cross-references sharing a kind.
    ReferenceGroup,
    /// `<klr>` - explanatory clarification.
    Clarification,
    /// `<fnt>` - source attribution (footnote).
    Source,
    /// `<aut>` - author inside an attribution.
    Author,
    /// `<vrk>` - work inside an attribution.
    Work,
    /// `<lok>` - location inside an attribution.
    Location,
    /// `<gra>` - grammar annotation.
    Grammar,
    /// `<vspec>` - verb specification inside `<gra>`.
    VerbSpec,
    /// `<uzo>` - usage label.
    Usage,
    /// `<trd>` - translation.
    Translation,
    /// `<trdgrp>` - group of translations sharing a language.
    TranslationGroup,
    /// Any element outside the vocabulary above.
    #[default]
    Other,
}

impl Tag {
    /// Map an element name to its tag kind.
    pub fn from_name(name: &str) -> Tag {
        match name {
            "vortaro" => Tag::Dictionary,
            "art" => Tag::Article,
            "subart" => Tag::SubArticle,
            "drv" => Tag::Entry,
            "subdrv" => Tag::SubEntry,
            "kap" => Tag::Headword,
            "rad" => Tag::Root,
            "var" => Tag::Variant,
            "ofc" => Tag::Official,
            "snc" => Tag::Sense,
            "subsnc" => Tag::Subsense,
            "dif" => Tag::Definition,
            "ekz" => Tag::Example,
            "tld" => Tag::RootMarker,
            "ctl" => Tag::Quotation,
            "ind" => Tag::Index,
            "rim" => Tag::Remark,
            "bib" => Tag::Bibliography,
            "ref" => Tag::Reference,
            "refgrp" => Tag::ReferenceGroup,
            "klr" => Tag::Clarification,
            "fnt" => Tag::Source,
            "aut" => Tag::Author,
            "vrk" => Tag::Work,
            "lok" => Tag::Location,
            "gra" => Tag::Grammar,
            "vspec" => Tag::VerbSpec,
            "uzo" => Tag::Usage,
            "trd" => Tag::Translation,
            "trdgrp" => Tag::TranslationGroup,
            _ => Tag::Other,
        }
    }

    /// True for `<ref>` and `<refgrp>`.
    pub fn is_reference(self) -> bool {
        matches!(self, Tag::Reference | Tag::ReferenceGroup)
    }
}
