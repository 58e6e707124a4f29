//! Builds a [`MarkupNode`] tree from article XML with quick-xml.

use std::borrow::Cow;

use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::escape::unescape_with;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::util::{declared_encoding, decode_text};

use super::MarkupNode;

/// Letter and punctuation entities declared by the ReVo DTD.
///
/// The DTD itself is never loaded, so every entity an article may use has to
/// be listed here.
const REVO_ENTITIES: &[(&str, &str)] = &[
    ("ccirc", "ĉ"),
    ("Ccirc", "Ĉ"),
    ("gcirc", "ĝ"),
    ("Gcirc", "Ĝ"),
    ("hcirc", "ĥ"),
    ("Hcirc", "Ĥ"),
    ("jcirc", "ĵ"),
    ("Jcirc", "Ĵ"),
    ("scirc", "ŝ"),
    ("Scirc", "Ŝ"),
    ("ubreve", "ŭ"),
    ("Ubreve", "Ŭ"),
    ("leftquot", "\u{201e}"),
    ("rightquot", "\u{201c}"),
    ("nbsp", "\u{a0}"),
    ("mdash", "—"),
    ("ndash", "–"),
    ("dash", "–"),
    ("deg", "°"),
    ("aacute", "á"),
    ("agrave", "à"),
    ("acirc", "â"),
    ("auml", "ä"),
    ("Auml", "Ä"),
    ("aring", "å"),
    ("aelig", "æ"),
    ("ccedil", "ç"),
    ("eacute", "é"),
    ("Eacute", "É"),
    ("egrave", "è"),
    ("ecirc", "ê"),
    ("euml", "ë"),
    ("iacute", "í"),
    ("icirc", "î"),
    ("iuml", "ï"),
    ("ntilde", "ñ"),
    ("oacute", "ó"),
    ("ocirc", "ô"),
    ("ouml", "ö"),
    ("Ouml", "Ö"),
    ("oslash", "ø"),
    ("szlig", "ß"),
    ("uacute", "ú"),
    ("ucirc", "û"),
    ("uuml", "ü"),
    ("Uuml", "Ü"),
];

/// Parse an article document into a tree rooted at its document element.
///
/// Comments, processing instructions and the DOCTYPE are dropped. Entity
/// references are resolved against the XML built-ins, numeric character
/// references and [`REVO_ENTITIES`]; unknown entities are logged and dropped.
pub fn parse_document(bytes: &[u8]) -> Result<MarkupNode> {
    let content = decode_text(bytes, declared_encoding(bytes));
    let mut reader = Reader::from_str(&content);

    // Bottom of the stack collects the document element.
    let mut stack: Vec<MarkupNode> = vec![MarkupNode::new("#document")];

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from(&e)),
            Event::Empty(e) => {
                let node = element_from(&e);
                append_child(&mut stack, node);
            }
            Event::End(e) => {
                if stack.len() < 2 {
                    return Err(Error::MalformedXml(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                if let Some(node) = stack.pop() {
                    append_child(&mut stack, node);
                }
            }
            Event::Text(e) => append_text(&mut stack, &String::from_utf8_lossy(e.as_ref())),
            Event::CData(e) => append_text(&mut stack, &String::from_utf8_lossy(e.as_ref())),
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                match resolve_entity(&entity) {
                    Some(resolved) => append_text(&mut stack, &resolved),
                    None => warn!("Dropping unknown entity &{entity};"),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(Error::MalformedXml(format!(
            "{} element(s) left open at end of document",
            stack.len() - 1
        )));
    }

    stack
        .pop()
        .and_then(|document| document.children.into_iter().next())
        .ok_or_else(|| Error::MalformedXml("document has no root element".to_string()))
}

fn element_from(start: &BytesStart) -> MarkupNode {
    let mut node = MarkupNode::new(String::from_utf8_lossy(start.name().as_ref()));

    for attr in start.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = match unescape_with(&raw, named_entity) {
            Ok(value) => value.into_owned(),
            Err(e) => {
                debug!("Keeping raw value of attribute {key:?}: {e}");
                raw.to_string()
            }
        };
        node.attributes.push((key, value));
    }

    node
}

fn append_child(stack: &mut [MarkupNode], node: MarkupNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Text goes to the open element's `text` until it has a child, then to the
/// last child's `tail`.
fn append_text(stack: &mut [MarkupNode], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    let slot = match parent.children.last_mut() {
        Some(child) => &mut child.tail,
        None => &mut parent.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}

fn named_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "apos" => Some("'"),
        "quot" => Some("\""),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        _ => REVO_ENTITIES
            .iter()
            .find(|(name, _)| *name == entity)
            .map(|(_, value)| *value),
    }
}

/// Resolve a named or numeric entity reference.
fn resolve_entity(entity: &str) -> Option<Cow<'static, str>> {
    if let Some(value) = named_entity(entity) {
        return Some(Cow::Borrowed(value));
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(Cow::Owned(c.to_string()));
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(Cow::Owned(c.to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Tag;

    #[test]
    fn test_text_and_tail_placement() {
        let root = parse_document(b"<kap>brazil<tld/>arbo, <var>x</var> fino</kap>").unwrap();
        assert_eq!(root.tag, Tag::Headword);
        assert_eq!(root.text.as_deref(), Some("brazil"));
        assert_eq!(root.children[0].tag, Tag::RootMarker);
        assert_eq!(root.children[0].tail.as_deref(), Some("arbo, "));
        assert_eq!(root.children[1].text.as_deref(), Some("x"));
        assert_eq!(root.children[1].tail.as_deref(), Some(" fino"));
    }

    #[test]
    fn test_revo_entities_resolved() {
        let root =
            parse_document(b"<dif>movi&gcirc;anta a&ubreve; &Ccirc;e &#265; &#x109;</dif>").unwrap();
        assert_eq!(root.text_str(), "moviĝanta aŭ Ĉe ĉ ĉ");
    }

    #[test]
    fn test_unknown_entity_dropped() {
        let root = parse_document(b"<lok>&Jug; 4:10</lok>").unwrap();
        assert_eq!(root.text_str(), " 4:10");
    }

    #[test]
    fn test_attributes_and_doctype() {
        let xml = br#"<?xml version="1.0"?>
<!DOCTYPE vortaro SYSTEM "../dtd/vokoxml.dtd">
<vortaro><art><kap><tld lit="S"/>lando</kap><ref tip="dif" cel="a.0o">a</ref></art></vortaro>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.tag, Tag::Dictionary);
        let tld = root.find(Tag::RootMarker).unwrap();
        assert_eq!(tld.attr("lit"), Some("S"));
        let reference = root.find(Tag::Reference).unwrap();
        assert_eq!(reference.attr("tip"), Some("dif"));
        assert_eq!(reference.attr("cel"), Some("a.0o"));
    }

    #[test]
    fn test_comments_dropped() {
        let root = parse_document(b"<dif>unu <!-- noto --> du</dif>").unwrap();
        assert_eq!(root.text_str(), "unu  du");
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(parse_document(b"<drv><snc></drv>").is_err());
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(matches!(parse_document(b"   "), Err(Error::MalformedXml(_))));
    }
}
