//! Minimal in-memory DOM for the rendered page.
//!
//! # Design
//! The tree is built from typed nodes; text stays data until
//! [`Element::to_html`] serializes it, escaping text and attribute values
//! at that single point (`html-escape`), so a book title can never carry
//! markup into the document. Nodes are plain data with owned fields, same
//! as the HTTP types.

use std::fmt::Write;

/// One node in the page tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a tag, attributes in insertion order, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Tags serialized without a closing tag. Only the ones this page uses.
const VOID_TAGS: &[&str] = &["input", "br"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute. Last write wins on duplicate names.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder: append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Drop all children, the `innerHTML = ''` of this tree.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Child elements in order, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            // Attribute names come from this crate; values may be anything.
            let _ = write!(
                out,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_structure() {
        let tree = Element::new("div")
            .attr("id", "outer")
            .child(Element::new("p").text("hello"));
        assert_eq!(tree.to_html(), r#"<div id="outer"><p>hello</p></div>"#);
    }

    #[test]
    fn text_is_escaped_on_serialization() {
        let tree = Element::new("h5").text("<script>alert(1)</script>");
        let html = tree.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let tree = Element::new("div").attr("title", r#"a"b"#);
        assert_eq!(tree.to_html(), r#"<div title="a&quot;b"></div>"#);
    }

    #[test]
    fn tree_holds_raw_text_until_serialized() {
        let tree = Element::new("p").text("<b>raw</b>");
        assert_eq!(tree.text_content(), "<b>raw</b>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let input = Element::new("input").attr("id", "title").attr("value", "x");
        assert_eq!(input.to_html(), r#"<input id="title" value="x">"#);
    }

    #[test]
    fn clear_children_empties_the_subtree() {
        let mut tree = Element::new("div").child(Element::new("p").text("gone"));
        tree.clear_children();
        assert!(tree.children.is_empty());
        assert_eq!(tree.to_html(), "<div></div>");
    }

    #[test]
    fn set_attr_overwrites_existing_value() {
        let mut element = Element::new("input");
        element.set_attr("value", "first");
        element.set_attr("value", "second");
        assert_eq!(element.get_attr("value"), Some("second"));
        assert_eq!(element.attrs.len(), 1);
    }

    #[test]
    fn text_content_concatenates_in_document_order() {
        let tree = Element::new("div")
            .child(Element::new("h5").text("Title"))
            .child(Element::new("p").text("Author"));
        assert_eq!(tree.text_content(), "TitleAuthor");
    }

    #[test]
    fn child_elements_skips_text_nodes() {
        let tree = Element::new("div")
            .text("loose")
            .child(Element::new("p"))
            .child(Element::new("span"));
        let tags: Vec<&str> = tree.child_elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["p", "span"]);
    }
}
