//! View tree
//!
//! This module defines the view nodes produced by rendering a rich-text
//! document. A view node is a renderable target plus an ordered attribute
//! map and children; the presentation layer maps each target onto its own
//! component or element.

use indexmap::IndexMap;

/// Heading level (h1-h6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Parse a heading tag name ("h1".."h6")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// The tag name for this level
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// A renderable target.
///
/// This is the entire rendering vocabulary: the transformer never produces
/// anything outside this set, and the presentation layer only needs to map
/// these targets onto its own components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Generic block container
    Container,
    /// Generic inline span (carries a style class for underline etc.)
    Span,
    /// Heading (h1-h6)
    Heading(HeadingLevel),
    /// Paragraph
    Paragraph,
    /// Block quote
    Blockquote,
    /// Ordered list
    OrderedList,
    /// Unordered list
    UnorderedList,
    /// List item
    ListItem,
    /// Anchor / link
    Anchor,
    /// Thematic break
    HorizontalRule,
    /// Hard line break
    LineBreak,
    /// Inline code span
    Code,
    /// Strong emphasis (bold)
    Strong,
    /// Emphasis (italic)
    Emphasis,
    /// Subscript
    Subscript,
    /// Superscript
    Superscript,
    /// Icon, parameterized by `name` and `class` attributes
    Icon,
    /// Alert box, parameterized by `variant`, `color` and optional `title`
    Alert,
}

impl Target {
    /// Stable lowercase name of this target.
    ///
    /// Used by unwrap patterns and by HTML serialization.
    pub fn name(&self) -> &'static str {
        match self {
            Target::Container => "div",
            Target::Span => "span",
            Target::Heading(level) => level.tag(),
            Target::Paragraph => "p",
            Target::Blockquote => "blockquote",
            Target::OrderedList => "ol",
            Target::UnorderedList => "ul",
            Target::ListItem => "li",
            Target::Anchor => "a",
            Target::HorizontalRule => "hr",
            Target::LineBreak => "br",
            Target::Code => "code",
            Target::Strong => "strong",
            Target::Emphasis => "em",
            Target::Subscript => "sub",
            Target::Superscript => "sup",
            Target::Icon => "icon",
            Target::Alert => "alert",
        }
    }

    /// Check if this target never carries children
    pub fn is_void(&self) -> bool {
        matches!(self, Target::HorizontalRule | Target::LineBreak)
    }
}

/// A child of a view node: a nested node or a plain text fragment
#[derive(Debug, Clone, PartialEq)]
pub enum ViewChild {
    /// Nested view node
    Element(ViewNode),
    /// Plain text fragment
    Text(String),
}

impl ViewChild {
    /// Create a text child
    pub fn text(content: &str) -> Self {
        ViewChild::Text(content.to_string())
    }

    /// Check if this child is an element
    pub fn is_element(&self) -> bool {
        matches!(self, ViewChild::Element(_))
    }

    /// Check if this child is a text fragment
    pub fn is_text(&self) -> bool {
        matches!(self, ViewChild::Text(_))
    }

    /// Get the element if this child is one
    pub fn as_element(&self) -> Option<&ViewNode> {
        match self {
            ViewChild::Element(node) => Some(node),
            ViewChild::Text(_) => None,
        }
    }

    /// Get all text content from this child and descendants
    pub fn text_content(&self) -> String {
        match self {
            ViewChild::Element(node) => node.text_content(),
            ViewChild::Text(text) => text.clone(),
        }
    }
}

/// A renderable view node.
///
/// View nodes are constructed fresh per render pass and have no identity
/// beyond it; they are plain data handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// The renderable target
    pub target: Target,

    /// Attributes in insertion order
    pub attrs: IndexMap<String, String>,

    /// Child nodes and text fragments
    pub children: Vec<ViewChild>,
}

impl ViewNode {
    /// Create a new empty node for a target
    pub fn new(target: Target) -> Self {
        Self {
            target,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a node with children
    pub fn with_children(target: Target, children: Vec<ViewChild>) -> Self {
        Self {
            target,
            attrs: IndexMap::new(),
            children,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Add a child
    pub fn add_child(&mut self, child: ViewChild) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|child| child.text_content())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Check if this node has neither children nor text
    pub fn is_blank(&self) -> bool {
        !self.target.is_void() && self.children.iter().all(|c| c.text_content().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = ViewNode::new(Target::Paragraph);
        assert_eq!(node.target.name(), "p");
        assert!(node.children.is_empty());
        assert!(node.is_blank());
    }

    #[test]
    fn test_attributes() {
        let mut node = ViewNode::new(Target::Anchor);
        node.set_attr("href", "https://example.com");
        node.set_attr("target", "_blank");

        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("target"), Some("_blank"));
        assert_eq!(node.attr("rel"), None);
        assert!(node.has_attr("href"));
        assert!(!node.has_attr("rel"));

        node.set_attr("target", "_self");
        assert_eq!(node.attr("target"), Some("_self"));
    }

    #[test]
    fn test_attribute_order() {
        let node = ViewNode::new(Target::Icon)
            .with_attr("name", "square")
            .with_attr("class", "checklist-icon");

        let keys: Vec<&String> = node.attrs.keys().collect();
        assert_eq!(keys, ["name", "class"]);
    }

    #[test]
    fn test_text_content() {
        let mut quote = ViewNode::new(Target::Blockquote);
        quote.add_child(ViewChild::text("Hello "));
        quote.add_child(ViewChild::Element(ViewNode::with_children(
            Target::Strong,
            vec![ViewChild::text("World")],
        )));

        assert_eq!(quote.text_content(), "Hello World");
        assert!(!quote.is_blank());
    }

    #[test]
    fn test_heading_tags() {
        assert_eq!(HeadingLevel::from_tag("h3"), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_tag("h7"), None);
        assert_eq!(Target::Heading(HeadingLevel::H6).name(), "h6");
    }

    #[test]
    fn test_void_targets() {
        assert!(Target::HorizontalRule.is_void());
        assert!(Target::LineBreak.is_void());
        assert!(!Target::Paragraph.is_void());
    }
}
