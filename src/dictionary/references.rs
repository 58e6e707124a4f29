//! Cross-reference collection.
//!
//! References are sorted into eight buckets by their relation kind.
//! Homonym, list, value, example and unlabeled references are dropped; a
//! kind outside the vocabulary fails the whole record.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::flatten::FlattenConfig;
use crate::markup::{MarkupNode, RelationKind, Tag};

use super::EntryContext;

/// Referenced words grouped by relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossReferences {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see: Vec<String>,
    #[serde(rename = "see also", skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supernotions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnotions: Vec<String>,
    #[serde(rename = "part of", skip_serializing_if = "Vec::is_empty")]
    pub part_of: Vec<String>,
    #[serde(rename = "has parts", skip_serializing_if = "Vec::is_empty")]
    pub has_parts: Vec<String>,
}

impl CrossReferences {
    pub fn is_empty(&self) -> bool {
        self.buckets().iter().all(|bucket| bucket.is_empty())
    }

    fn bucket_mut(&mut self, kind: RelationKind) -> Option<&mut Vec<String>> {
        let bucket = match kind {
            RelationKind::Definition => &mut self.see,
            RelationKind::SeeAlso => &mut self.see_also,
            RelationKind::Synonym => &mut self.synonyms,
            RelationKind::Antonym => &mut self.antonyms,
            RelationKind::Supernotion => &mut self.supernotions,
            RelationKind::Subnotion => &mut self.subnotions,
            RelationKind::PartOf => &mut self.part_of,
            RelationKind::HasParts => &mut self.has_parts,
            _ => return None,
        };
        Some(bucket)
    }

    fn buckets(&self) -> [&Vec<String>; 8] {
        [
            &self.see,
            &self.see_also,
            &self.synonyms,
            &self.antonyms,
            &self.supernotions,
            &self.subnotions,
            &self.part_of,
            &self.has_parts,
        ]
    }

    /// Record one `<ref>` or `<refgrp>` under `kind`.
    ///
    /// A group contributes one item per member reference.
    pub(crate) fn add(&mut self, kind: RelationKind, node: &MarkupNode, ctx: &EntryContext<'_>) {
        let Some(bucket) = self.bucket_mut(kind) else {
            return;
        };

        let config = FlattenConfig::new().skipping([Tag::Source]);
        let members: Vec<&MarkupNode> = match node.tag {
            Tag::ReferenceGroup if node.child(Tag::Reference).is_some() => {
                node.children_with(Tag::Reference).collect()
            }
            _ => vec![node],
        };

        bucket.extend(
            members
                .into_iter()
                .map(|member| ctx.flattener.flatten(member, &config))
                .filter(|text| !text.is_empty()),
        );
    }

    /// Classify and record every reference that is a direct child of `node`.
    pub(crate) fn collect_children(
        &mut self,
        node: &MarkupNode,
        ctx: &EntryContext<'_>,
    ) -> Result<()> {
        for reference in node.children.iter().filter(|child| child.tag.is_reference()) {
            let kind = relation_of(reference, ctx)?;
            self.add(kind, reference, ctx);
        }
        Ok(())
    }
}

/// The relation kind of a reference node.
pub(crate) fn relation_of(node: &MarkupNode, ctx: &EntryContext<'_>) -> Result<RelationKind> {
    let tip = node.attr("tip");
    RelationKind::from_attr(tip).ok_or_else(|| Error::UnknownRelation {
        kind: tip.unwrap_or_default().to_string(),
        headword: ctx.headword.to_string(),
    })
}
