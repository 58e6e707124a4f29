//! Owned markup tree for ReVo articles.
//!
//! Nodes follow the lxml text model: `text` is the text before the first
//! child, and each child's `tail` is the text that follows it inside the
//! parent.

mod parser;
mod relation;
mod tag;

pub use parser::parse_document;
pub use relation::RelationKind;
pub use tag::Tag;

/// One element of a parsed article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupNode {
    pub tag: Tag,
    /// Raw element name as it appeared in the source.
    pub name: String,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Create an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            tag: Tag::from_name(&name),
            name,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Leading text, or the empty string.
    pub fn text_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children of a given kind, in document order.
    pub fn children_with(&self, tag: Tag) -> impl Iterator<Item = &MarkupNode> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// First direct child of a given kind.
    pub fn child(&self, tag: Tag) -> Option<&MarkupNode> {
        self.children_with(tag).next()
    }

    /// All descendants in document order, not including `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant of a given kind, in document order.
    pub fn find(&self, tag: Tag) -> Option<&MarkupNode> {
        self.descendants().find(|node| node.tag == tag)
    }
}

/// Pre-order iterator over a node's descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarkupNode {
        MarkupNode::new("drv")
            .with_attr("mrk", "salut.0o")
            .with_child(MarkupNode::new("kap").with_child(MarkupNode::new("tld").with_tail("o")))
            .with_child(
                MarkupNode::new("snc")
                    .with_child(MarkupNode::new("dif").with_text("Saluto."))
                    .with_child(MarkupNode::new("ekz").with_text("saluton!")),
            )
    }

    #[test]
    fn test_new_maps_tag() {
        assert_eq!(MarkupNode::new("snc").tag, Tag::Sense);
        assert_eq!(MarkupNode::new("frm").tag, Tag::Other);
        assert_eq!(MarkupNode::new("frm").name, "frm");
    }

    #[test]
    fn test_attr_lookup() {
        let node = sample();
        assert_eq!(node.attr("mrk"), Some("salut.0o"));
        assert_eq!(node.attr("tip"), None);
    }

    #[test]
    fn test_descendants_preorder() {
        let node = sample();
        let names: Vec<&str> = node.descendants().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["kap", "tld", "snc", "dif", "ekz"]);
    }

    #[test]
    fn test_find_and_child() {
        let node = sample();
        assert!(node.child(Tag::Definition).is_none());
        assert_eq!(node.find(Tag::Definition).map(|n| n.text_str()), Some("Saluto."));
        assert!(node.find(Tag::RootMarker).is_some());
        assert!(node.find(Tag::Remark).is_none());
    }
}
