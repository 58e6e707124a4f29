//! Translation collection from `<trd>` and `<trdgrp>` children.

use crate::error::{Error, Result};
use crate::flatten::FlattenConfig;
use crate::markup::{MarkupNode, Tag};

use super::EntryContext;
use super::model::Translations;

fn language_of(node: &MarkupNode, element: &'static str) -> Result<String> {
    node.attr("lng")
        .map(|lng| lng.trim().to_string())
        .ok_or(Error::MissingAttribute {
            element,
            attribute: "lng",
        })
}

/// Append the translations that are direct children of `node`.
///
/// A group shares one language across its members; each member loses a
/// single trailing semicolon.
pub(crate) fn collect_translations(
    node: &MarkupNode,
    ctx: &EntryContext<'_>,
    into: &mut Translations,
) -> Result<()> {
    let config = FlattenConfig::new().skipping([Tag::Source]);

    for child in &node.children {
        match child.tag {
            Tag::Translation => {
                let language = language_of(child, "trd")?;
                let text = ctx.flattener.flatten(child, &config);
                if !text.is_empty() {
                    into.entry(language).or_default().push(text);
                }
            }
            Tag::TranslationGroup => {
                let language = language_of(child, "trdgrp")?;
                for member in child.children_with(Tag::Translation) {
                    let text = ctx.flattener.flatten(member, &config);
                    let text = text.strip_suffix(';').map_or(text.as_str(), str::trim_end);
                    if !text.is_empty() {
                        into.entry(language.clone())
                            .or_default()
                            .push(text.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::Flattener;
    use crate::markup::parse_document;

    fn translations(xml: &str) -> Result<Translations> {
        let node = parse_document(xml.as_bytes()).unwrap();
        let ctx = EntryContext::new(Flattener::new("sekv"), "sekvi");
        let mut into = Translations::new();
        collect_translations(&node, &ctx, &mut into)?;
        Ok(into)
    }

    #[test]
    fn test_single_and_grouped() {
        let result = translations(
            r#"<snc>
                <trd lng="fr">suivre</trd>
                <trdgrp lng="de"><trd>folgen;</trd> <trd>nachgehen</trd></trdgrp>
                <trd lng="fr">venir après</trd>
            </snc>"#,
        )
        .unwrap();

        assert_eq!(result["fr"], ["suivre", "venir après"]);
        assert_eq!(result["de"], ["folgen", "nachgehen"]);
    }

    #[test]
    fn test_only_direct_children() {
        let result =
            translations(r#"<snc><ekz>io<trd lng="en">something</trd></ekz></snc>"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_keeps_index_content() {
        let result =
            translations(r#"<snc><trd lng="fr">riche de <ind>conséquences</ind></trd></snc>"#)
                .unwrap();
        assert_eq!(result["fr"], ["riche de conséquences"]);
    }

    #[test]
    fn test_missing_language_is_an_error() {
        assert!(matches!(
            translations("<snc><trd>x</trd></snc>"),
            Err(Error::MissingAttribute { element: "trd", .. })
        ));
    }
}
