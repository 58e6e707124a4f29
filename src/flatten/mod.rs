//! Tree flattener: turns a markup subtree into one line of clean text.
//!
//! Every node is rendered by the handler registered for its [`Tag`]; tags
//! without special rules share the generic handler, which emits the node's
//! leading text followed by its children. A child's tail is appended right
//! after the child, since it belongs to the parent's text stream.
//!
//! # Example
//!
//! ```
//! use vortaro::flatten::{FlattenConfig, Flattener};
//! use vortaro::markup::parse_document;
//!
//! let node = parse_document("<ekz><ctl>popolo</ctl> estas ar<tld/>o.</ekz>".as_bytes())?;
//! let flattener = Flattener::new("vort");
//! assert_eq!(flattener.flatten(&node, &FlattenConfig::new()), "«popolo» estas arvorto.");
//! # Ok::<(), vortaro::Error>(())
//! ```

mod bibliography;
mod clean;

use std::collections::HashSet;

use crate::markup::{MarkupNode, RelationKind, Tag};

pub use bibliography::expand_bibliography_abbreviation;
pub use clean::clean_string;

const REMARK_LABEL: &str = "Rimarko: ";

/// Options for one flatten call.
#[derive(Debug, Clone, Default)]
pub struct FlattenConfig {
    /// Tags whose subtree is omitted. The tail after a skipped element is
    /// still emitted.
    pub skip_tags: HashSet<Tag>,
    /// Prefix `<ref>`/`<refgrp>` output with a relation phrase such as
    /// "Vidu: ".
    pub label_references: bool,
}

impl FlattenConfig {
    /// Nothing skipped, references unlabeled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tags to the skip set.
    pub fn skipping(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.skip_tags.extend(tags);
        self
    }

    /// Turn on reference labels.
    pub fn labeled(mut self) -> Self {
        self.label_references = true;
        self
    }

    pub fn skips(&self, tag: Tag) -> bool {
        self.skip_tags.contains(&tag)
    }

    fn unlabeled(&self) -> Self {
        Self {
            skip_tags: self.skip_tags.clone(),
            label_references: false,
        }
    }
}

/// Renders one node (without its tail).
type Handler = fn(&Flattener<'_>, &MarkupNode, &FlattenConfig) -> String;

/// Dispatch table from tag kind to handler.
fn handler_for(tag: Tag) -> Handler {
    match tag {
        Tag::RootMarker => render_root_marker,
        Tag::Quotation => render_quotation,
        Tag::Remark => render_remark,
        Tag::Bibliography => render_bibliography,
        Tag::Reference | Tag::ReferenceGroup => render_reference,
        // Index and clarification nodes keep their content as-is.
        _ => render_generic,
    }
}

/// Flattens subtrees of one article, substituting its root for `<tld/>`.
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'a> {
    root: &'a str,
}

impl<'a> Flattener<'a> {
    pub fn new(root: &'a str) -> Self {
        Self { root }
    }

    /// The root substituted for `<tld/>`.
    pub fn root(&self) -> &'a str {
        self.root
    }

    /// Flatten `node` and its descendants into clean text.
    ///
    /// The skip set applies to descendants only; `node` itself is always
    /// rendered, and its own tail is not part of the result.
    pub fn flatten(&self, node: &MarkupNode, config: &FlattenConfig) -> String {
        clean_string(&self.render(node, config))
    }

    fn render(&self, node: &MarkupNode, config: &FlattenConfig) -> String {
        handler_for(node.tag)(self, node, config)
    }

    fn push_children(&self, node: &MarkupNode, config: &FlattenConfig, out: &mut String) {
        for child in &node.children {
            if !config.skips(child.tag) {
                out.push_str(&self.render(child, config));
            }
            if let Some(tail) = &child.tail {
                out.push_str(tail);
            }
        }
    }

    /// The root with its first letter replaced, as `<tld lit="S"/>` asks.
    fn root_with_letter(&self, letter: Option<&str>) -> String {
        match letter {
            Some(letter) => {
                let mut chars = self.root.chars();
                chars.next();
                format!("{letter}{}", chars.as_str())
            }
            None => self.root.to_string(),
        }
    }
}

fn render_generic(flattener: &Flattener<'_>, node: &MarkupNode, config: &FlattenConfig) -> String {
    let mut out = node.text_str().to_string();
    flattener.push_children(node, config, &mut out);
    out
}

fn render_root_marker(
    flattener: &Flattener<'_>,
    node: &MarkupNode,
    config: &FlattenConfig,
) -> String {
    let mut out = flattener.root_with_letter(node.attr("lit"));
    out.push_str(&render_generic(flattener, node, config));
    out
}

fn render_quotation(flattener: &Flattener<'_>, node: &MarkupNode, config: &FlattenConfig) -> String {
    format!("«{}»", render_generic(flattener, node, config))
}

fn render_remark(flattener: &Flattener<'_>, node: &MarkupNode, config: &FlattenConfig) -> String {
    format!("{REMARK_LABEL}{}", render_generic(flattener, node, config))
}

fn render_bibliography(
    flattener: &Flattener<'_>,
    node: &MarkupNode,
    config: &FlattenConfig,
) -> String {
    let mut out = match node.text.as_deref() {
        Some(text) if !text.trim().is_empty() => expand_bibliography_abbreviation(text),
        _ => String::new(),
    };
    flattener.push_children(node, config, &mut out);
    out
}

fn render_reference(flattener: &Flattener<'_>, node: &MarkupNode, config: &FlattenConfig) -> String {
    if !config.label_references {
        return render_generic(flattener, node, config);
    }

    // A group with literal leading text already reads as prose.
    if node.tag == Tag::ReferenceGroup && !node.text_str().trim().is_empty() {
        return render_generic(flattener, node, config);
    }

    let plural = node.tag == Tag::ReferenceGroup && node.children_with(Tag::Reference).count() > 1;
    let label = RelationKind::from_attr(node.attr("tip")).and_then(|kind| kind.label(plural));

    // Nested references are never labeled a second time.
    let content = render_generic(flattener, node, &config.unlabeled());
    match label {
        Some(label) => format!("{label}{}", content.trim_start()),
        None => content,
    }
}
