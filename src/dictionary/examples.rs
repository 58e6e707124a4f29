//! Example extraction and joining.
//!
//! Articles often split one example over several `<ekz>` nodes, each ending
//! in a comma except the last:
//!
//! ```text
//! <ekz><tld/>i al si plezuron<fnt>Z</fnt>;</ekz>
//! <ekz><tld/>i instruon<fnt>Z</fnt>,</ekz>
//! <ekz>amikecon<fnt>Z</fnt>,</ekz>
//! ```
//!
//! Fragments are therefore buffered until one does not end in a comma.

use log::warn;

use crate::flatten::{FlattenConfig, clean_string};
use crate::markup::{MarkupNode, Tag};

use super::EntryContext;
use super::model::Example;

/// Example nodes belonging to `scope`: its direct `<ekz>` children and the
/// ones inside its direct `<dif>` children. Subsenses keep their own.
pub(crate) fn example_nodes(scope: &MarkupNode) -> Vec<&MarkupNode> {
    let mut nodes = Vec::new();
    for child in &scope.children {
        match child.tag {
            Tag::Example => nodes.push(child),
            Tag::Definition => nodes.extend(
                child
                    .descendants()
                    .filter(|node| node.tag == Tag::Example),
            ),
            _ => {}
        }
    }
    nodes
}

/// Flatten one `<ekz>` into a fragment.
///
/// Attribution, clarifications, usage labels and translations are dropped,
/// as is one trailing `;` or `.`. Fragments without any letter (pure
/// reference lists) yield `None`.
pub(crate) fn flatten_example(node: &MarkupNode, ctx: &EntryContext<'_>) -> Option<Example> {
    let config = FlattenConfig::new().skipping([
        Tag::Source,
        Tag::Clarification,
        Tag::Usage,
        Tag::Translation,
        Tag::TranslationGroup,
    ]);

    let flat = ctx.flattener.flatten(node, &config);
    let text = flat
        .strip_suffix([';', '.'])
        .map_or(flat.as_str(), str::trim_end);

    if !text.chars().any(char::is_alphabetic) {
        return None;
    }

    Some(Example {
        text: text.to_string(),
        source: node
            .child(Tag::Source)
            .map(|source| attribution(source, ctx))
            .filter(|source| !source.is_empty()),
    })
}

/// Render a `<fnt>` as a comma separated attribution.
pub(crate) fn attribution(source: &MarkupNode, ctx: &EntryContext<'_>) -> String {
    let config = FlattenConfig::new();
    if source.children.is_empty() {
        return ctx.flattener.flatten(source, &config);
    }

    let mut parts = vec![clean_string(source.text_str())];
    parts.extend(
        source
            .children
            .iter()
            .map(|child| ctx.flattener.flatten(child, &config)),
    );
    parts.retain(|part| !part.is_empty());
    parts.join(", ")
}

/// Join comma-terminated fragments into complete examples.
///
/// A joined example takes the source of its last fragment that has one. A
/// buffer still open at the end is logged and dropped.
pub(crate) fn join_examples(fragments: Vec<Example>, headword: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut buffer = String::new();
    let mut source: Option<String> = None;

    for fragment in fragments {
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(&fragment.text);
        if fragment.source.is_some() {
            source = fragment.source;
        }

        if !buffer.ends_with(',') {
            examples.push(Example {
                text: clean_string(&buffer),
                source: source.take(),
            });
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        warn!("Dropping example ending in a comma for {headword:?}: {buffer:?}");
    }

    examples
}

/// Flatten and join every example that belongs to `scope`.
pub(crate) fn collect_examples(scope: &MarkupNode, ctx: &EntryContext<'_>) -> Vec<Example> {
    let fragments = example_nodes(scope)
        .into_iter()
        .filter_map(|node| flatten_example(node, ctx))
        .collect();
    join_examples(fragments, ctx.headword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::Flattener;
    use crate::markup::parse_document;

    fn examples(xml: &str, root: &str) -> Vec<Example> {
        let node = parse_document(xml.as_bytes()).unwrap();
        let ctx = EntryContext::new(Flattener::new(root), "test");
        collect_examples(&node, &ctx)
    }

    #[test]
    fn test_comma_fragments_join() {
        let result = examples(
            "<snc><dif>Io.<ekz>foo,</ekz><ekz>bar,</ekz><ekz>baz.</ekz></dif></snc>",
            "x",
        );
        assert_eq!(result, [Example::new("foo, bar, baz")]);
    }

    #[test]
    fn test_series_split_on_semicolons() {
        let result = examples(
            "<dif><ekz>simpla <tld/>o;</ekz><ekz>la bildoj de la <tld/>oj;</ekz><ekz><tld/>ordo.</ekz></dif>",
            "vort",
        );
        let texts: Vec<&str> = result.iter().map(|e| e.text.as_str()).collect();
        // Scope is the <dif> itself here, so only direct children count.
        assert_eq!(texts, ["simpla vorto", "la bildoj de la vortoj", "vortordo"]);
    }

    #[test]
    fn test_reference_only_example_dropped() {
        let result = examples(
            r#"<snc><ekz><ref tip="sub" cel="a">1</ref>, <ref tip="sub" cel="b">2</ref></ekz><ekz>bona.</ekz></snc>"#,
            "x",
        );
        assert_eq!(result, [Example::new("bona")]);
    }

    #[test]
    fn test_dangling_comma_dropped() {
        let result = examples("<snc><ekz>unu;</ekz><ekz>du,</ekz></snc>", "x");
        assert_eq!(result, [Example::new("unu")]);
    }

    #[test]
    fn test_source_attribution() {
        let result = examples(
            "<snc><ekz>ne <tld/>u aliajn diojn<fnt><bib>MT</bib><lok>Rea 6:14</lok></fnt>;</ekz></snc>",
            "sekv",
        );
        assert_eq!(
            result,
            [Example::new("ne sekvu aliajn diojn").with_source("La Malnova Testamento, Rea 6:14")]
        );
    }

    #[test]
    fn test_subsense_examples_not_collected() {
        let result = examples(
            "<snc><ekz>unu.</ekz><subsnc><dif>Io.<ekz>du.</ekz></dif></subsnc></snc>",
            "x",
        );
        assert_eq!(result, [Example::new("unu")]);
    }

    #[test]
    fn test_clarification_and_translation_skipped() {
        let result = examples(
            r#"<snc><ekz><ind><tld/>oriĉa</ind> <klr>[la varmego]</klr> sukceso. <trd lng="fr">riche</trd></ekz></snc>"#,
            "sekv",
        );
        assert_eq!(result, [Example::new("sekvoriĉa sukceso")]);
    }
}
