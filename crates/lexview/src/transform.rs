//! Node transformation.
//!
//! This module maps one serialized node to its rendered output. Dispatch is
//! total over the known node kinds; every unknown kind, tag or variant
//! degrades to empty output instead of an error, so documents written
//! against a newer editor schema keep rendering.

use lexview_core::{HeadingLevel, Target, ViewChild, ViewNode};

use crate::format::TextFormat;
use crate::node::{LinkFields, SerializedNode};
use crate::service::LexviewService;

/// The output of transforming one serialized node: nothing, a bare text
/// fragment, a single view node, or several.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// No output (silent omission)
    None,
    /// A bare text fragment
    Text(String),
    /// A single view node
    Node(ViewNode),
    /// Several view nodes, flattened into the parent sequence
    Many(Vec<ViewNode>),
}

impl Rendered {
    /// Check if this is the no-output case
    pub fn is_none(&self) -> bool {
        matches!(self, Rendered::None)
    }

    /// Get the view node if exactly one was produced
    pub fn as_node(&self) -> Option<&ViewNode> {
        match self {
            Rendered::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Consume into the view node if exactly one was produced
    pub fn into_node(self) -> Option<ViewNode> {
        match self {
            Rendered::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Flatten this output into a child sequence
    pub fn append_to(self, out: &mut Vec<ViewChild>) {
        match self {
            Rendered::None => {}
            Rendered::Text(text) => out.push(ViewChild::Text(text)),
            Rendered::Node(node) => out.push(ViewChild::Element(node)),
            Rendered::Many(nodes) => out.extend(nodes.into_iter().map(ViewChild::Element)),
        }
    }

    /// Flatten this output into a fresh child sequence
    pub fn into_children(self) -> Vec<ViewChild> {
        let mut out = Vec::new();
        self.append_to(&mut out);
        out
    }
}

/// Transform one serialized node into rendered output.
pub(crate) fn transform(node: &SerializedNode, service: &LexviewService) -> Rendered {
    match node {
        SerializedNode::Text { text, format } => transform_text(text, format),

        SerializedNode::LineBreak {} => Rendered::Node(ViewNode::new(Target::LineBreak)),

        SerializedNode::HorizontalRule {} => {
            Rendered::Node(ViewNode::new(Target::HorizontalRule))
        }

        SerializedNode::Heading { tag, children } => transform_heading(tag, children, service),

        SerializedNode::Paragraph { children } => Rendered::Node(ViewNode::with_children(
            Target::Paragraph,
            transform_children(children, service),
        )),

        SerializedNode::Quote { children } => Rendered::Node(ViewNode::with_children(
            Target::Blockquote,
            transform_children(children, service),
        )),

        SerializedNode::List { tag, children } => transform_list(tag, children, service),

        SerializedNode::ListItem { checked, children } => {
            transform_list_item(*checked, children, service)
        }

        SerializedNode::Link { fields, children } => transform_link(fields, children, service),

        SerializedNode::Block { fields } => service.blocks().dispatch(fields, service),

        SerializedNode::Unknown => Rendered::Text(String::new()),
    }
}

/// Transform a node sequence into a flattened child sequence, preserving order.
pub(crate) fn transform_children(
    children: &[SerializedNode],
    service: &LexviewService,
) -> Vec<ViewChild> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        transform(child, service).append_to(&mut out);
    }
    out
}

/// Wrap a text fragment according to its format flags.
///
/// The nesting order is fixed, outermost to innermost: bold, italic,
/// underline, subscript, superscript, strikethrough, inline code. Swapping
/// it would change the visual nesting of combined formats.
fn transform_text(text: &str, format: &TextFormat) -> Rendered {
    if format.is_plain() {
        return Rendered::Text(text.to_string());
    }

    let mut wraps: Vec<ViewNode> = Vec::new();
    if format.bold {
        wraps.push(ViewNode::new(Target::Strong));
    }
    if format.italic {
        wraps.push(ViewNode::new(Target::Emphasis));
    }
    if format.underline {
        wraps.push(ViewNode::new(Target::Span).with_attr("class", "underline"));
    }
    if format.subscript {
        wraps.push(ViewNode::new(Target::Subscript));
    }
    if format.superscript {
        wraps.push(ViewNode::new(Target::Superscript));
    }
    if format.strikethrough {
        wraps.push(ViewNode::new(Target::Span).with_attr("class", "line-through"));
    }
    if format.code {
        wraps.push(ViewNode::new(Target::Code));
    }

    let mut current = ViewChild::Text(text.to_string());
    for mut wrap in wraps.into_iter().rev() {
        wrap.add_child(current);
        current = ViewChild::Element(wrap);
    }

    match current {
        ViewChild::Element(node) => Rendered::Node(node),
        ViewChild::Text(text) => Rendered::Text(text),
    }
}

fn transform_heading(
    tag: &str,
    children: &[SerializedNode],
    service: &LexviewService,
) -> Rendered {
    match HeadingLevel::from_tag(tag) {
        Some(level) => Rendered::Node(ViewNode::with_children(
            Target::Heading(level),
            transform_children(children, service),
        )),
        None => {
            tracing::trace!(tag, "unknown heading tag, skipping");
            Rendered::None
        }
    }
}

fn transform_list(tag: &str, children: &[SerializedNode], service: &LexviewService) -> Rendered {
    match tag {
        "ol" => Rendered::Node(ViewNode::with_children(
            Target::OrderedList,
            transform_children(children, service),
        )),
        "ul" => {
            let mut list = ViewNode::with_children(
                Target::UnorderedList,
                transform_children(children, service),
            );
            if is_checklist(children) {
                list.set_attr("class", "list-none");
            }
            Rendered::Node(list)
        }
        _ => {
            tracing::trace!(tag, "unknown list tag, skipping");
            Rendered::None
        }
    }
}

/// A list is a checklist when any direct item declares a `checked` field;
/// the list node itself carries no such marker.
fn is_checklist(children: &[SerializedNode]) -> bool {
    children.iter().any(|child| {
        matches!(
            child,
            SerializedNode::ListItem {
                checked: Some(_),
                ..
            }
        )
    })
}

fn transform_list_item(
    checked: Option<bool>,
    children: &[SerializedNode],
    service: &LexviewService,
) -> Rendered {
    let mut item = ViewNode::new(Target::ListItem);

    if let Some(checked) = checked {
        item.set_attr("role", "checkbox");
        item.set_attr("aria-checked", if checked { "true" } else { "false" });

        let icon = ViewNode::new(Target::Icon)
            .with_attr("name", if checked { "square-check" } else { "square" })
            .with_attr("class", "checklist-icon");
        item.add_child(ViewChild::Element(icon));
    }

    item.children
        .extend(transform_children(children, service));
    Rendered::Node(item)
}

fn transform_link(
    fields: &LinkFields,
    children: &[SerializedNode],
    service: &LexviewService,
) -> Rendered {
    match fields.link_type.as_str() {
        "custom" => {
            let mut anchor =
                ViewNode::with_children(Target::Anchor, transform_children(children, service));
            if let Some(url) = &fields.url {
                anchor.set_attr("href", url);
            }
            let target = if fields.new_tab.unwrap_or(false) {
                "_blank"
            } else {
                "_self"
            };
            anchor.set_attr("target", target);
            Rendered::Node(anchor)
        }
        "internal" => {
            let mut anchor =
                ViewNode::with_children(Target::Anchor, transform_children(children, service));
            if let Some(url) = &fields.url {
                anchor.set_attr("href", url);
            }
            Rendered::Node(anchor)
        }
        other => {
            tracing::trace!(link_type = other, "unknown link type, skipping");
            Rendered::None
        }
    }
}
