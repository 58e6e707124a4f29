//! Definition assembly for one `<drv>`.
//!
//! A derivation yields its Definitions in this order:
//!
//! 1. `<dif>` children of the entry itself
//! 2. one Definition per `<snc>`, with `<subsnc>` as Subdefinitions
//! 3. one Definition per entry-level `<ref>`/`<refgrp>`
//!
//! Sub-entries (`<subdrv>`) are then folded into the first Definition, and
//! entry-level remarks, examples and translations are attached to it.

use log::warn;

use crate::error::Result;
use crate::flatten::FlattenConfig;
use crate::markup::{MarkupNode, RelationKind, Tag};

use super::EntryContext;
use super::examples::collect_examples;
use super::model::{Definition, Example, Subdefinition, Translations, deduplicate, merge_translations};
use super::references::{CrossReferences, relation_of};
use super::translations::collect_translations;

/// Relation kinds not turned into Definitions when found directly under a
/// `<drv>`. They still count inside senses.
const ENTRY_LEVEL_EXCLUDED: [RelationKind; 2] = [RelationKind::PartOf, RelationKind::Subnotion];

const FIGURATIVE_NOTE: &str = "(figure) ";

/// Everything a sense or subsense contributes, before nesting.
#[derive(Debug, Default)]
struct SenseParts {
    primary: Option<String>,
    examples: Vec<Example>,
    remarks: Vec<String>,
    translations: Translations,
    cross_references: CrossReferences,
}

impl SenseParts {
    fn into_definition(self) -> Definition {
        Definition {
            primary: self.primary,
            examples: self.examples,
            remarks: self.remarks,
            translations: self.translations,
            cross_references: self.cross_references,
            subdefinitions: Vec::new(),
        }
    }

    fn into_subdefinition(self) -> Subdefinition {
        Subdefinition {
            primary: self.primary,
            examples: self.examples,
            remarks: self.remarks,
            translations: self.translations,
            cross_references: self.cross_references,
        }
    }
}

/// Build the deduplicated Definitions of one `<drv>`.
///
/// Entry-level data is attached only to a Definition that is kept.
pub(crate) fn entry_definitions(entry: &MarkupNode, ctx: &EntryContext<'_>) -> Result<Vec<Definition>> {
    let mut definitions = Vec::new();

    for dif in entry.children_with(Tag::Definition) {
        if let Some(text) = primary_text(dif, ctx) {
            definitions.push(Definition::with_primary(with_notes(entry, None, text)));
        }
    }

    for sense in entry.children_with(Tag::Sense) {
        definitions.push(sense_definition(sense, entry, ctx)?);
    }

    for reference in entry.children.iter().filter(|child| child.tag.is_reference()) {
        let kind = relation_of(reference, ctx)?;
        if kind.is_discarded() || ENTRY_LEVEL_EXCLUDED.contains(&kind) {
            continue;
        }
        let Some(text) = reference_text(reference, ctx) else {
            continue;
        };
        let mut definition = Definition::with_primary(text);
        definition.cross_references.add(kind, reference, ctx);
        definitions.push(definition);
    }

    // Entry-level data must land on a Definition that is kept.
    let mut definitions = deduplicate(definitions);
    fold_sub_entries(entry, &mut definitions, ctx)?;
    attach_entry_level(entry, &mut definitions, ctx)?;

    Ok(definitions)
}

fn sense_definition(
    sense: &MarkupNode,
    entry: &MarkupNode,
    ctx: &EntryContext<'_>,
) -> Result<Definition> {
    let mut definition = sense_parts(sense, Some(entry), ctx)?.into_definition();

    for subsense in sense.children_with(Tag::Subsense) {
        definition
            .subdefinitions
            .push(sense_parts(subsense, None, ctx)?.into_subdefinition());
    }

    if definition.primary.is_none() && definition.subdefinitions.is_empty() {
        warn!("No definition found for a sense of {:?}", ctx.headword);
    }

    Ok(definition)
}

/// Collect the parts of a `<snc>`, `<subsnc>` or `<subdrv>`.
///
/// Notes are looked up on `node`; transitivity falls back to `parent`.
fn sense_parts(
    node: &MarkupNode,
    parent: Option<&MarkupNode>,
    ctx: &EntryContext<'_>,
) -> Result<SenseParts> {
    let mut primary = node.child(Tag::Definition).and_then(|dif| primary_text(dif, ctx));

    if primary.is_none() {
        for reference in node.children.iter().filter(|child| child.tag.is_reference()) {
            if relation_of(reference, ctx)?.is_discarded() {
                continue;
            }
            primary = reference_text(reference, ctx);
            if primary.is_some() {
                break;
            }
        }
    }

    let mut parts = SenseParts {
        primary: primary.map(|text| with_notes(node, parent, text)),
        examples: collect_examples(node, ctx),
        remarks: remarks_of(node, ctx),
        ..SenseParts::default()
    };
    collect_translations(node, ctx, &mut parts.translations)?;
    parts.cross_references.collect_children(node, ctx)?;

    Ok(parts)
}

/// Fold `<subdrv>` children into the Definitions built so far.
///
/// With at least one Definition, each sub-entry adds Subdefinitions to the
/// first one. Otherwise a single Definition is made from the sub-entries'
/// definition texts.
fn fold_sub_entries(
    entry: &MarkupNode,
    definitions: &mut Vec<Definition>,
    ctx: &EntryContext<'_>,
) -> Result<()> {
    let sub_entries: Vec<&MarkupNode> = entry.children_with(Tag::SubEntry).collect();
    if sub_entries.is_empty() {
        return Ok(());
    }

    if let Some(first) = definitions.first_mut() {
        for sub_entry in sub_entries {
            if sub_entry.child(Tag::Definition).is_none() && sub_entry.child(Tag::Sense).is_none() {
                warn!(
                    "Dropping sub-entry of {:?} without a definition or sense",
                    ctx.headword
                );
                continue;
            }
            if sub_entry.child(Tag::Definition).is_some() {
                first
                    .subdefinitions
                    .push(sense_parts(sub_entry, Some(entry), ctx)?.into_subdefinition());
            }
            for sense in sub_entry.children_with(Tag::Sense) {
                first
                    .subdefinitions
                    .push(sense_parts(sense, Some(sub_entry), ctx)?.into_subdefinition());
            }
        }
        return Ok(());
    }

    let texts: Vec<String> = sub_entries
        .iter()
        .flat_map(|sub_entry| sub_entry.children_with(Tag::Definition))
        .filter_map(|dif| primary_text(dif, ctx))
        .collect();

    let mut synthesized = Definition::default();
    if !texts.is_empty() {
        synthesized.primary = Some(texts.join(" "));
    }
    for sub_entry in sub_entries {
        synthesized.examples.extend(collect_examples(sub_entry, ctx));
        synthesized.remarks.extend(remarks_of(sub_entry, ctx));
        collect_translations(sub_entry, ctx, &mut synthesized.translations)?;
        synthesized.cross_references.collect_children(sub_entry, ctx)?;
    }

    if synthesized.is_empty() {
        warn!("Dropping sub-entries of {:?}: no definition text", ctx.headword);
    } else {
        definitions.push(synthesized);
    }

    Ok(())
}

/// Attach remarks, examples and translations found directly under the
/// `<drv>` to its first Definition.
fn attach_entry_level(
    entry: &MarkupNode,
    definitions: &mut [Definition],
    ctx: &EntryContext<'_>,
) -> Result<()> {
    let remarks = remarks_of(entry, ctx);
    let examples = collect_examples(entry, ctx);
    let mut translations = Translations::new();
    collect_translations(entry, ctx, &mut translations)?;

    if remarks.is_empty() && examples.is_empty() && translations.is_empty() {
        return Ok(());
    }

    match definitions.first_mut() {
        Some(first) => {
            first.remarks.extend(remarks);
            first.examples.extend(examples);
            merge_translations(&mut first.translations, translations);
        }
        None => warn!(
            "Dropping remarks, examples or translations of {:?}: no definition to attach them to",
            ctx.headword
        ),
    }

    Ok(())
}

/// Flatten a `<dif>` without its examples. A closing colon, which
/// introduces the examples, becomes a period.
fn primary_text(dif: &MarkupNode, ctx: &EntryContext<'_>) -> Option<String> {
    let config = FlattenConfig::new().skipping([Tag::Example, Tag::Source]);
    let flat = ctx.flattener.flatten(dif, &config);

    let text = match flat.strip_suffix(':') {
        Some(rest) => format!("{}.", rest.trim_end()),
        None => flat,
    };
    (!text.is_empty()).then_some(text)
}

/// Labeled text of a reference standing in for a definition, e.g.
/// "Vidu: alia vorto."
fn reference_text(reference: &MarkupNode, ctx: &EntryContext<'_>) -> Option<String> {
    let config = FlattenConfig::new().labeled().skipping([Tag::Source]);
    let mut text = ctx.flattener.flatten(reference, &config);
    if text.is_empty() {
        return None;
    }
    if !text.ends_with('.') {
        text.push('.');
    }
    Some(text)
}

fn remarks_of(node: &MarkupNode, ctx: &EntryContext<'_>) -> Vec<String> {
    let config = FlattenConfig::new().skipping([Tag::Author, Tag::Source]);
    node.children_with(Tag::Remark)
        .map(|remark| ctx.flattener.flatten(remark, &config))
        .filter(|text| !text.is_empty())
        .collect()
}

fn transitivity(node: &MarkupNode) -> Option<&'static str> {
    let code = node
        .children_with(Tag::Grammar)
        .find_map(|gra| gra.child(Tag::VerbSpec))?;

    match code.text_str().trim() {
        "tr" => Some("(transitiva)"),
        "ntr" => Some("(netransitiva)"),
        "sensubjekta" | "sensubjekte" => Some("(sensubjekta)"),
        _ => None,
    }
}

fn is_figurative(node: &MarkupNode) -> bool {
    node.children_with(Tag::Usage)
        .any(|uzo| uzo.text_str().trim().eq_ignore_ascii_case("fig"))
}

/// Prefix `text` with the transitivity and figurative notes of `node`.
fn with_notes(node: &MarkupNode, parent: Option<&MarkupNode>, text: String) -> String {
    let transitivity = transitivity(node).or_else(|| parent.and_then(transitivity));
    let figurative = is_figurative(node);

    if transitivity.is_none() && !figurative {
        return text;
    }

    let mut out = String::new();
    if let Some(note) = transitivity {
        out.push_str(note);
        out.push(' ');
    }
    if figurative {
        out.push_str(FIGURATIVE_NOTE);
    }
    out.push_str(&text);
    out
}
