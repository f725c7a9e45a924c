//! Retained drawing surface.
//!
//! Drawing code appends tagged primitives (`rect`, `text`, `g`, ...) under a
//! parent node, the same way a DOM selection appends children. The
//! [`SvgDocument`] implementation keeps the tree in memory and serializes it
//! to an SVG string once rendering is done.

use std::fmt::Write;

/// Handle to a node previously appended to a surface.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle, half-open on its right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A drawing primitive with attributes and optional text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set(name, value.to_string());
        self
    }

    /// Numeric attribute, written without trailing zeros.
    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

/// Something the heat map can be drawn onto.
pub trait Surface {
    /// The container every top-level primitive is appended to.
    fn root(&self) -> NodeId;

    /// Append `element` as the last child of `parent`.
    fn append(&mut self, parent: NodeId, element: Element) -> NodeId;

    /// Set or replace one attribute on an existing node.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: String);

    /// Remove every child of `node`.
    fn clear_children(&mut self, node: NodeId);
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    children: Vec<NodeId>,
}

/// In-memory SVG tree.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    // slots released by `clear_children`, handed out again by `append`
    free: Vec<NodeId>,
}

impl SvgDocument {
    /// Create a document whose root `svg` element has the given size.
    pub fn new(width: f64, height: f64) -> Self {
        let root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .num("width", width)
            .num("height", height)
            .attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)));
        SvgDocument {
            nodes: vec![Node {
                element: root,
                children: Vec::new(),
            }],
            free: Vec::new(),
        }
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node).map(|n| &n.element)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of attached primitives below the root.
    pub fn len(&self) -> usize {
        self.descendants(self.root()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Number of node slots held by the document, attached or free.
    pub fn allocated(&self) -> usize {
        self.nodes.len()
    }

    /// First attached node whose `id` attribute matches.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.nodes[n].element.get("id") == Some(id))
    }

    /// Every attached node carrying `class`, in document order.
    pub fn select_all(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| self.nodes[n].element.has_class(class))
            .collect()
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Serialize the tree to SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root(), 0);
        out
    }

    fn write_node(&self, out: &mut String, node: NodeId, depth: usize) {
        let Node { element, children } = &self.nodes[node];
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, element.tag);
        for (name, value) in &element.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        match (&element.text, children.is_empty()) {
            (None, true) => {
                let _ = writeln!(out, "/>");
            }
            (text, _) => {
                out.push('>');
                if let Some(text) = text {
                    out.push_str(&escape(text));
                }
                if !children.is_empty() {
                    out.push('\n');
                    for &child in children {
                        self.write_node(out, child, depth + 1);
                    }
                    out.push_str(&indent);
                }
                let _ = writeln!(out, "</{}>", element.tag);
            }
        }
    }
}

impl Surface for SvgDocument {
    fn root(&self) -> NodeId {
        0
    }

    fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let node = Node {
            element,
            children: Vec::new(),
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[parent].children.push(id);
        id
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: String) {
        self.nodes[node].element.set(name, value);
    }

    fn clear_children(&mut self, node: NodeId) {
        let released = self.descendants(node);
        self.nodes[node].children.clear();
        self.free.extend(released);
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(70.0), "70");
        assert_eq!(fmt_num(38.333333), "38.333");
        assert_eq!(fmt_num(4.5), "4.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn test_append_and_select() {
        let mut doc = SvgDocument::new(100.0, 50.0);
        assert!(doc.is_empty());
        let group = doc.append(doc.root(), Element::new("g").attr("id", "legend"));
        doc.append(group, Element::new("rect").attr("class", "colorRect"));
        doc.append(group, Element::new("rect").attr("class", "colorRect wide"));
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.find_by_id("legend"), Some(group));
        assert_eq!(doc.select_all("colorRect").len(), 2);
        assert_eq!(doc.select_all("wide").len(), 1);
    }

    #[test]
    fn test_clear_children_detaches_subtree() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let group = doc.append(doc.root(), Element::new("g"));
        let text = doc.append(group, Element::new("text").attr("class", "line"));
        doc.append(text, Element::new("tspan"));
        doc.clear_children(group);
        assert!(doc.children(group).is_empty());
        assert!(doc.select_all("line").is_empty());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_cleared_slots_are_reused() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let group = doc.append(doc.root(), Element::new("g"));
        for _ in 0..3 {
            doc.append(group, Element::new("rect"));
        }
        let allocated = doc.allocated();
        for _ in 0..100 {
            doc.clear_children(group);
            for _ in 0..3 {
                doc.append(group, Element::new("rect"));
            }
        }
        assert_eq!(doc.allocated(), allocated);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_serialize_escapes_text() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.append(doc.root(), Element::new("text").num("x", 1.5).text("a < b & c"));
        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\""));
        assert!(svg.contains("<text x=\"1.5\">a &lt; b &amp; c</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let g = doc.append(doc.root(), Element::new("g").attr("visibility", "hidden"));
        doc.set_attribute(g, "visibility", "visible".to_string());
        let element = doc.element(g).unwrap();
        assert_eq!(element.get("visibility"), Some("visible"));
        assert_eq!(element.attrs.len(), 1);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(15.0, 12.0)));
        assert_eq!(rect.center(), Point::new(12.5, 12.5));
    }
}
