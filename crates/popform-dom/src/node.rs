#![forbid(unsafe_code)]

//! Typed markup fragments.
//!
//! A [`Node`] is the unit the content renderer produces: an element with
//! identifier, classes, attributes, inline styles, text, and children. Hosts
//! materialize the tree on mount; `to_markup` serializes it for backends that
//! consume markup text and for assertions in tests.

use std::fmt::Write as _;

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// A markup fragment: one element and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the element identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a class. Empty strings are dropped.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Append an optional class.
    pub fn maybe_class(self, class: Option<&str>) -> Self {
        match class {
            Some(c) => self.class(c),
            None => self,
        }
    }

    /// Append an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a valueless (boolean) attribute such as `checked`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), String::new()));
        self
    }

    /// Append an inline style declaration.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((name.into(), value.into()));
        self
    }

    /// Set the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    // --- Accessors for hosts ---

    /// Element tag.
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Element identifier, if set.
    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in application order.
    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    /// Attributes in application order.
    pub fn attr_list(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Look up an attribute by name.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Inline styles in application order.
    pub fn style_list(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Text content, if set.
    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements.
    pub fn child_list(&self) -> &[Node] {
        &self.children
    }

    /// Serialize the subtree to markup text.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        if !self.styles.is_empty() {
            let css: Vec<String> = self
                .styles
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            let _ = write!(out, " style=\"{}\"", escape_attr(&css.join("; ")));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn builder_accumulates_parts() {
        let node = Node::new("input")
            .id("name")
            .class("form-control")
            .attr("type", "text")
            .attr("placeholder", "Username");
        assert_eq!(node.tag_name(), "input");
        assert_eq!(node.id_value(), Some("name"));
        assert_eq!(node.class_list(), &["form-control".to_string()]);
        assert_eq!(node.attr_value("type"), Some("text"));
        assert_eq!(node.attr_value("missing"), None);
    }

    #[test]
    fn empty_class_is_dropped() {
        let node = Node::new("div").class("").maybe_class(None);
        assert!(node.class_list().is_empty());
    }

    #[test]
    fn maybe_class_appends_some() {
        let node = Node::new("div").maybe_class(Some("bg-light"));
        assert_eq!(node.class_list(), &["bg-light".to_string()]);
    }

    // --- Markup serialization ---

    #[test]
    fn markup_for_simple_element() {
        let node = Node::new("div").class("popover-arrow");
        assert_eq!(node.to_markup(), "<div class=\"popover-arrow\"></div>");
    }

    #[test]
    fn markup_for_void_element() {
        let node = Node::new("input").id("d").attr("type", "date");
        assert_eq!(node.to_markup(), "<input id=\"d\" type=\"date\">");
    }

    #[test]
    fn markup_includes_styles_and_flags() {
        let node = Node::new("input")
            .attr("type", "checkbox")
            .flag("checked")
            .style("top", "10px")
            .style("left", "20px");
        assert_eq!(
            node.to_markup(),
            "<input style=\"top: 10px; left: 20px\" type=\"checkbox\" checked>"
        );
    }

    #[test]
    fn markup_nests_children_in_order() {
        let node = Node::new("div")
            .child(Node::new("label").text("Name"))
            .child(Node::new("input").attr("type", "text"));
        assert_eq!(
            node.to_markup(),
            "<div><label>Name</label><input type=\"text\"></div>"
        );
    }

    #[test]
    fn markup_escapes_attr_and_text() {
        let node = Node::new("label")
            .attr("title", "a \"b\" <c>")
            .text("x & y < z");
        assert_eq!(
            node.to_markup(),
            "<label title=\"a &quot;b&quot; &lt;c&gt;\">x &amp; y &lt; z</label>"
        );
    }
}
