//! In-memory document tree
//!
//! An arena of elements rooted at `html > head, body`, implementing the
//! [`Document`] primitives so charts can be rendered without a browser and
//! then written out as an HTML page.

use crate::document::Document;
use bar_chart_shared::{BarChartError, BarChartResult};
use std::fmt::Write;

/// Elements that never have children
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Handle to an element in a [`DomTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Child {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<Child>,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
        }
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Arena-backed document. Elements are never removed, so a [`NodeId`] stays
/// valid for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Element>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    title: NodeId,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create an empty page: `html > head (meta, title), body`
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: vec![Element::new("html", None)],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            title: NodeId(0),
        };
        tree.head = tree.push_element(tree.root, "head");
        let meta = tree.push_element(tree.head, "meta");
        tree.nodes[meta.0]
            .attributes
            .push(("charset".to_string(), "utf-8".to_string()));
        tree.title = tree.push_element(tree.head, "title");
        tree.body = tree.push_element(tree.root, "body");
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of elements in the tree, including `html`, `head` and `body`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the text of the page `<title>`
    pub fn set_title(&mut self, title: &str) {
        self.nodes[self.title.0].children = vec![Child::Text(title.to_string())];
    }

    fn push_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag, Some(parent)));
        self.nodes[parent.0].children.push(Child::Element(id));
        id
    }

    fn element(&self, node: NodeId) -> BarChartResult<&Element> {
        self.nodes
            .get(node.0)
            .ok_or(BarChartError::InvalidNode { id: node.0 })
    }

    fn element_mut(&mut self, node: NodeId) -> BarChartResult<&mut Element> {
        self.nodes
            .get_mut(node.0)
            .ok_or(BarChartError::InvalidNode { id: node.0 })
    }

    /// Set an attribute, replacing any previous value. Setting `style`
    /// replaces all inline style properties.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> BarChartResult<()> {
        let element = self.element_mut(node)?;
        let name = name.to_ascii_lowercase();

        if name == "style" {
            element.styles = value
                .split(';')
                .filter_map(|decl| decl.split_once(':'))
                .map(|(prop, val)| (prop.trim().to_string(), val.trim().to_string()))
                .filter(|(prop, _)| !prop.is_empty())
                .collect();
            return Ok(());
        }

        match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element.attributes.push((name, value.to_string())),
        }
        Ok(())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node.0)?.attribute(name)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|e| e.tag.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    /// Element children in document order
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0)
            .map(|e| {
                e.children
                    .iter()
                    .filter_map(|child| match child {
                        Child::Element(id) => Some(*id),
                        Child::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(node.0)?
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Inline style properties in the order they were first set
    pub fn styles(&self, node: NodeId) -> &[(String, String)] {
        self.nodes
            .get(node.0)
            .map(|e| e.styles.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.nodes.get(node.0) else {
            return;
        };
        for child in &element.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(id) => self.collect_text(*id, out),
            }
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let element = &self.nodes[node.0];
        if let Some(id) = selector.strip_prefix('#') {
            element.attribute("id") == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            element
                .attribute("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
        } else {
            element.tag.eq_ignore_ascii_case(selector)
        }
    }

    /// All elements matching a simple selector (`tag`, `#id` or `.class`),
    /// in document order
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.matches(node, selector) {
                found.push(node);
            }
            // Reverse so the first child is visited next
            stack.extend(self.children(node).into_iter().rev());
        }
        found
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Serialize an element and its subtree
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_element(node, &mut out);
        out
    }

    /// Serialize the whole document as an HTML page
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.outer_html(self.root))
    }

    fn write_element(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.nodes.get(node.0) else {
            return;
        };

        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }
        if !element.styles.is_empty() {
            let style = element
                .styles
                .iter()
                .map(|(prop, value)| format!("{prop}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", escape_attribute(&style));
        }
        out.push('>');

        if element.is_void() {
            return;
        }

        for child in &element.children {
            match child {
                Child::Text(text) => out.push_str(&escape_text(text)),
                Child::Element(id) => self.write_element(*id, out),
            }
        }

        let _ = write!(out, "</{}>", element.tag);
    }
}

impl Document for DomTree {
    type Node = NodeId;

    fn mount_point(&self, selector: &str) -> BarChartResult<NodeId> {
        self.query_selector(selector)
            .ok_or_else(|| BarChartError::MountPointNotFound {
                selector: selector.to_string(),
            })
    }

    fn append_element(&mut self, parent: &NodeId, tag: &str) -> BarChartResult<NodeId> {
        let element = self.element(*parent)?;
        if element.is_void() {
            return Err(BarChartError::InvalidContainer {
                message: format!("<{}> cannot have children", element.tag),
            });
        }
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(BarChartError::InvalidContainer {
                message: format!("Invalid tag name {tag:?}"),
            });
        }
        Ok(self.push_element(*parent, tag))
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> BarChartResult<()> {
        let element = self.element_mut(*node)?;
        match element.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element
                .styles
                .push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> BarChartResult<()> {
        let detached = {
            let element = self.element_mut(*node)?;
            std::mem::replace(&mut element.children, vec![Child::Text(text.to_string())])
        };
        for child in detached {
            if let Child::Element(id) = child {
                self.nodes[id.0].parent = None;
            }
        }
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
