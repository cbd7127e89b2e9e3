//! Owned element tree built from `quick_xml` events.
//!
//! Nodes are stored in document order, so a linear scan of the arena is a
//! pre-order walk of the tree.

use crate::error::ConversionError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Handle to an element inside an [`XmlDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug)]
struct ElementNode {
    local_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Content>,
}

/// Parsed XML document with path-style queries on local element names
#[derive(Debug)]
pub struct XmlDocument {
    nodes: Vec<ElementNode>,
}

impl XmlDocument {
    /// Parse a complete document.
    pub fn parse(xml: &str) -> Result<Self, ConversionError> {
        let mut reader = Reader::from_str(xml);
        // Whitespace is kept so mixed content like `Run <code>x</code> now` reads naturally
        reader.config_mut().trim_text(false);

        let mut nodes: Vec<ElementNode> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();

        loop {
            let event = reader.read_event().map_err(|e| {
                ConversionError::xml_parse(reader.error_position() as u64, &e.to_string())
            })?;

            match event {
                Event::Start(start) => {
                    let id = push_element(&mut nodes, &stack, &start, &reader)?;
                    stack.push(id);
                }
                Event::Empty(start) => {
                    push_element(&mut nodes, &stack, &start, &reader)?;
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(text) => {
                    let value = text.unescape().map_err(|e| {
                        ConversionError::xml_parse(reader.buffer_position() as u64, &e.to_string())
                    })?;
                    append_text(&mut nodes, &stack, &value);
                }
                Event::CData(data) => {
                    let bytes = data.into_inner();
                    append_text(&mut nodes, &stack, &String::from_utf8_lossy(&bytes));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ConversionError::xml_parse(
                reader.buffer_position() as u64,
                "unexpected end of document, unclosed element",
            ));
        }

        if nodes.is_empty() {
            return Err(ConversionError::EmptyDocument);
        }

        Ok(Self { nodes })
    }

    /// Local name of an element
    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].local_name
    }

    /// All elements named `name` anywhere in the document (`//name`)
    pub fn descendants(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.local_name == name)
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    /// First element named `name` in document order
    pub fn first_descendant(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.local_name == name)
            .map(NodeId)
    }

    /// Direct children of `node` named `name` (`./name`)
    pub fn children(&self, node: NodeId, name: &str) -> Vec<NodeId> {
        self.child_elements(node)
            .filter(|child| self.name(*child) == name)
            .collect()
    }

    pub fn first_child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.child_elements(node)
            .find(|child| self.name(*child) == name)
    }

    /// Attribute value by local name
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of `node` and all of its descendants
    pub fn inner_text(&self, node: NodeId) -> String {
        let mut text = String::new();
        // (element, next child index)
        let mut stack = vec![(node, 0usize)];

        while let Some((current, index)) = stack.pop() {
            let Some(content) = self.nodes[current.0].children.get(index) else {
                continue;
            };
            stack.push((current, index + 1));

            match content {
                Content::Text(value) => text.push_str(value),
                Content::Element(child) => stack.push((*child, 0)),
            }
        }

        text
    }

    fn child_elements(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[node.0]
            .children
            .iter()
            .filter_map(|content| match content {
                Content::Element(child) => Some(*child),
                Content::Text(_) => None,
            })
    }
}

fn push_element(
    nodes: &mut Vec<ElementNode>,
    stack: &[NodeId],
    start: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<NodeId, ConversionError> {
    if stack.is_empty() && !nodes.is_empty() {
        return Err(ConversionError::xml_parse(
            reader.buffer_position() as u64,
            "multiple root elements",
        ));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            ConversionError::xml_parse(reader.buffer_position() as u64, &e.to_string())
        })?;
        let value = attr.unescape_value().map_err(|e| {
            ConversionError::xml_parse(reader.buffer_position() as u64, &e.to_string())
        })?;
        attributes.push((
            String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
            value.into_owned(),
        ));
    }

    let id = NodeId(nodes.len());
    nodes.push(ElementNode {
        local_name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    });

    if let Some(parent) = stack.last() {
        nodes[parent.0].children.push(Content::Element(id));
    }

    Ok(id)
}

fn append_text(nodes: &mut [ElementNode], stack: &[NodeId], value: &str) {
    // Text outside the document element is ignored
    if let Some(parent) = stack.last() {
        nodes[parent.0].children.push(Content::Text(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<arf:asset-report-collection xmlns:arf="urn:arf" xmlns:xccdf-1.2="urn:xccdf">
  <xccdf-1.2:Rule id="rule_a" selected="true">
    <xccdf-1.2:title>Title &amp; more</xccdf-1.2:title>
    <xccdf-1.2:reference href="http://nvlpubs.nist.gov/nistpubs/x">AC-1</xccdf-1.2:reference>
  </xccdf-1.2:Rule>
  <xccdf-1.2:Rule id="rule_b"/>
  <target>host<b>-01</b></target>
  <note><![CDATA[<raw>]]></note>
</arf:asset-report-collection>"#;

    #[test]
    fn test_local_name_queries() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();

        assert_eq!(doc.name(NodeId(0)), "asset-report-collection");
        let rules = doc.descendants("Rule");
        assert_eq!(rules.len(), 2);
        assert_eq!(doc.attr(rules[0], "id"), Some("rule_a"));
        assert_eq!(doc.attr(rules[1], "id"), Some("rule_b"));
        assert_eq!(doc.attr(rules[1], "selected"), None);
    }

    #[test]
    fn test_children_and_text() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let rule = doc.descendants("Rule")[0];

        let title = doc.first_child(rule, "title").unwrap();
        assert_eq!(doc.inner_text(title), "Title & more");
        assert_eq!(doc.children(rule, "reference").len(), 1);
        assert!(doc.first_child(rule, "description").is_none());
    }

    #[test]
    fn test_mixed_content_keeps_spacing() {
        let doc = XmlDocument::parse("<d>Run <code>chmod</code> now</d>").unwrap();
        assert_eq!(doc.inner_text(NodeId(0)), "Run chmod now");
    }

    #[test]
    fn test_inner_text_spans_descendants() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let target = doc.first_descendant("target").unwrap();
        assert_eq!(doc.inner_text(target), "host-01");

        let note = doc.first_descendant("note").unwrap();
        assert_eq!(doc.inner_text(note), "<raw>");
    }

    #[test]
    fn test_deeply_nested_text() {
        let depth = 200_000;
        let xml = format!(
            "<a><target>{}x{}</target></a>",
            "<b>".repeat(depth),
            "</b>".repeat(depth)
        );
        let doc = XmlDocument::parse(&xml).unwrap();
        let target = doc.first_descendant("target").unwrap();
        assert_eq!(doc.inner_text(target), "x");
    }

    #[test]
    fn test_malformed_xml() {
        assert_matches!(
            XmlDocument::parse("<a><b></a>"),
            Err(ConversionError::XmlParse { .. })
        );
        assert_matches!(
            XmlDocument::parse("<a><b>"),
            Err(ConversionError::XmlParse { .. })
        );
    }

    #[test]
    fn test_empty_document() {
        assert_matches!(
            XmlDocument::parse("<?xml version=\"1.0\"?>"),
            Err(ConversionError::EmptyDocument)
        );
        assert_matches!(XmlDocument::parse(""), Err(ConversionError::EmptyDocument));
    }
}
