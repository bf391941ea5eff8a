//! Element tree
//!
//! Components render into a lightweight tree of [`Node`]s. An element carries
//! a tag, ordered attributes, a utility-class list, inline styles, children and
//! event handlers. The tree can be serialized to HTML and queried by
//! `data-testid`, which is how interactions are simulated without a browser.
//!
//! # Example
//!
//! ```ignore
//! use rayna_core::prelude::*;
//!
//! let ui = div()
//!     .class("flex items-center gap-2")
//!     .child(span().text("Hello"))
//!     .child(
//!         el("button")
//!             .test_id("save")
//!             .on_click(|_| println!("saved")),
//!     );
//!
//! let node = ui.into_node();
//! node.dispatch("save", EventContext::click());
//! println!("{}", node.to_html());
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::class::ClassList;
use crate::event::{EventContext, EventHandlers, EventKind};

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// SVG shapes self-close when they have no children
const SVG_SHAPES: &[&str] = &["circle", "path", "rect", "line", "polyline", "polygon"];

/// A node in the element tree
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted markup emitted verbatim (icon path data)
    Raw(String),
}

/// An element with attributes, classes, styles, children and handlers
#[derive(Clone, Debug, Default)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, String>,
    classes: ClassList,
    styles: IndexMap<String, String>,
    children: Vec<Node>,
    handlers: EventHandlers,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }

    pub fn class_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    pub fn classes(mut self, classes: &ClassList) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr_if(self, condition: bool, name: &str, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `data-testid` used by [`Node::find_by_test_id`]
    pub fn test_id(self, id: impl Into<String>) -> Self {
        self.attr("data-testid", id)
    }

    pub fn style(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.styles.insert(name.into(), value.to_string());
        self
    }

    pub fn child(mut self, child: impl ElementBuilder) -> Self {
        self.children.push(child.into_node());
        self
    }

    pub fn child_opt(self, child: Option<impl ElementBuilder>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children<I, B>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: ElementBuilder,
    {
        self.children
            .extend(children.into_iter().map(ElementBuilder::into_node));
        self
    }

    /// Append a text child
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.on(kind, handler);
        self
    }

    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventKind::Click, handler)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn get_style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }

    /// Concatenated text of every descendant
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    fn write_html(&self, out: &mut String, pretty: bool, depth: usize) {
        indent(out, pretty, depth);
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            html_escape::encode_double_quoted_attribute_to_string(self.classes.to_string(), out);
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            html_escape::encode_double_quoted_attribute_to_string(value, out);
            out.push('"');
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(" style=\"");
            html_escape::encode_double_quoted_attribute_to_string(&style, out);
            out.push('"');
        }

        let tag = self.tag.as_str();
        if VOID_TAGS.contains(&tag) {
            out.push('>');
            return;
        }
        if self.children.is_empty() && SVG_SHAPES.contains(&tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');

        for child in &self.children {
            child.write_html(out, pretty, depth + 1);
        }
        if !self.children.is_empty() {
            indent(out, pretty, depth);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.clone(),
            Node::Raw(_) => String::new(),
        }
    }

    /// Depth-first search for the element with the given `data-testid`
    pub fn find_by_test_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.get_attr("data-testid") == Some(id))
    }

    /// Depth-first search for the first element matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let el = self.as_element()?;
        if predicate(el) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find(predicate))
    }

    /// Every element matching `predicate`, in document order
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_matching(self, predicate, &mut found);
        found
    }

    /// Dispatch an event to the element with the given `data-testid`
    ///
    /// Returns `true` when at least one handler ran.
    pub fn dispatch(&self, test_id: &str, ctx: EventContext) -> bool {
        match self.find_by_test_id(test_id) {
            Some(el) => el.handlers.dispatch(&ctx) > 0,
            None => {
                tracing::debug!(test_id, "dispatch target not found");
                false
            }
        }
    }

    /// Compact HTML serialization
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, false, 0);
        out
    }

    /// Indented HTML serialization, one node per line
    pub fn to_html_pretty(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, true, 0);
        out.trim_start().to_string()
    }

    fn write_html(&self, out: &mut String, pretty: bool, depth: usize) {
        match self {
            Node::Element(el) => el.write_html(out, pretty, depth),
            Node::Text(text) => {
                indent(out, pretty, depth);
                html_escape::encode_text_to_string(text, out);
            }
            Node::Raw(markup) => {
                indent(out, pretty, depth);
                out.push_str(markup);
            }
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Raw(_) => {}
        }
    }
}

fn collect_matching<'a>(
    node: &'a Node,
    predicate: &dyn Fn(&Element) -> bool,
    found: &mut Vec<&'a Element>,
) {
    if let Node::Element(el) = node {
        if predicate(el) {
            found.push(el);
        }
        for child in &el.children {
            collect_matching(child, predicate, found);
        }
    }
}

fn indent(out: &mut String, pretty: bool, depth: usize) {
    if pretty {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
}

/// Escape text for use in HTML content and double-quoted attribute values
pub fn escape(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

// ============================================================================
// ElementBuilder
// ============================================================================

/// Anything that can render itself into a [`Node`]
///
/// Components implement `build` from their current configuration and state.
/// Rendering the same component twice yields two independent trees.
pub trait ElementBuilder {
    fn build(&self) -> Node;

    /// Consume the builder into a node
    fn into_node(self) -> Node
    where
        Self: Sized,
    {
        self.build()
    }
}

impl ElementBuilder for Node {
    fn build(&self) -> Node {
        self.clone()
    }

    fn into_node(self) -> Node {
        self
    }
}

impl ElementBuilder for Element {
    fn build(&self) -> Node {
        Node::Element(self.clone())
    }

    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl ElementBuilder for &str {
    fn build(&self) -> Node {
        Node::Text((*self).to_string())
    }
}

impl ElementBuilder for String {
    fn build(&self) -> Node {
        Node::Text(self.clone())
    }

    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

// ============================================================================
// Element constructors
// ============================================================================

/// Create an element with an arbitrary tag
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn p() -> Element {
    Element::new("p")
}

/// A bare text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Markup inserted without escaping
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

/// An `<svg>` with the given square view box and pixel size
pub fn svg(view_box: f32, size: f32) -> Element {
    Element::new("svg")
        .attr("viewBox", format!("0 0 {view_box} {view_box}"))
        .attr("width", size.to_string())
        .attr("height", size.to_string())
        .attr("fill", "none")
}

/// A `<circle>` centered at (`c`, `c`)
pub fn circle(c: f32, r: f32) -> Element {
    Element::new("circle")
        .attr("cx", c.to_string())
        .attr("cy", c.to_string())
        .attr("r", r.to_string())
}

pub fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_div_builder_html() {
        let node = div()
            .class("flex gap-2")
            .attr("role", "alert")
            .style("width", "272px")
            .child(span().text("Hi & bye"))
            .into_node();

        assert_eq!(
            node.to_html(),
            "<div class=\"flex gap-2\" role=\"alert\" style=\"width: 272px\"><span>Hi &amp; bye</span></div>"
        );
    }

    #[test]
    fn test_void_and_svg_tags() {
        let node = div()
            .child(el("input").attr("placeholder", "Placeholder"))
            .child(svg(20.0, 20.0).child(circle(10.0, 8.0)))
            .into_node();
        let html = node.to_html();
        assert!(html.contains("<input placeholder=\"Placeholder\">"));
        assert!(html.contains("<circle cx=\"10\" cy=\"10\" r=\"8\" />"));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_pretty_html_indents_children() {
        let node = div().child(p().text("a")).into_node();
        assert_eq!(node.to_html_pretty(), "<div>\n  <p>\n    a\n  </p>\n</div>");
    }

    #[test]
    fn test_find_and_dispatch() {
        let clicks = Rc::new(Cell::new(0));
        let c = Rc::clone(&clicks);
        let node = div()
            .child(
                el("button")
                    .test_id("go")
                    .on_click(move |_| c.set(c.get() + 1))
                    .text("Go"),
            )
            .into_node();

        assert_eq!(node.find_by_test_id("go").map(|e| e.tag()), Some("button"));
        assert!(node.dispatch("go", EventContext::click()));
        assert!(!node.dispatch("missing", EventContext::click()));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_find_all_in_document_order() {
        let node = div()
            .child(span().class("item").text("1"))
            .child(div().child(span().class("item").text("2")))
            .into_node();
        let items = node.find_all(&|el| el.has_class("item"));
        let texts: Vec<_> = items.iter().map(|e| e.text_content()).collect();
        assert_eq!(texts, vec!["1", "2"]);
        assert_eq!(node.text_content(), "12");
    }

    #[test]
    fn test_attribute_and_text_escaping() {
        let node = div()
            .attr("title", "say \"hi\" <now>")
            .child(span().text("a < b & c"))
            .into_node();
        let html = node.to_html();
        assert!(html.contains("title=\"say &quot;hi&quot; &lt;now&gt;\""));
        assert!(html.contains("<span>a &lt; b &amp; c</span>"));
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_raw_markup_is_not_escaped() {
        let node = svg(24.0, 16.0).child(raw("<path d=\"M5 12h14\"/>")).into_node();
        assert!(node.to_html().contains("<path d=\"M5 12h14\"/>"));
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn test_child_opt_and_children() {
        let node = div()
            .child_opt(None::<Element>)
            .children(["a", "b"])
            .into_node();
        assert_eq!(node.as_element().map(|e| e.child_nodes().len()), Some(2));
    }
}
