//! View tree serialization
//!
//! Converts a view tree into an HTML string. Most targets map directly to
//! their tag name; icon and alert are component-like targets and serialize
//! through class conventions instead of custom elements.

use crate::ast::{Target, ViewChild, ViewNode};

/// Serialize a view node to an HTML string
pub fn to_html(node: &ViewNode) -> String {
    let mut output = String::with_capacity(256);
    write_node(node, &mut output);
    output
}

fn write_node(node: &ViewNode, out: &mut String) {
    match node.target {
        Target::Icon => write_icon(node, out),
        Target::Alert => write_alert(node, out),
        _ => write_element(node, out),
    }
}

fn write_element(node: &ViewNode, out: &mut String) {
    let tag = node.target.name();

    out.push('<');
    out.push_str(tag);
    write_attrs(node, out);
    out.push('>');

    if node.target.is_void() {
        return;
    }

    write_children(&node.children, out);

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attrs(node: &ViewNode, out: &mut String) {
    for (name, value) in &node.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

fn write_children(children: &[ViewChild], out: &mut String) {
    for child in children {
        match child {
            ViewChild::Element(node) => write_node(node, out),
            ViewChild::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

/// Icons render as an empty span carrying the style class and icon name
fn write_icon(node: &ViewNode, out: &mut String) {
    out.push_str("<span");
    if let Some(class) = node.attr("class") {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(class));
        out.push('"');
    }
    if let Some(name) = node.attr("name") {
        out.push_str(" data-icon=\"");
        out.push_str(&escape_attr(name));
        out.push('"');
    }
    out.push_str("></span>");
}

/// Alerts render as a classed div with an optional leading title
fn write_alert(node: &ViewNode, out: &mut String) {
    out.push_str("<div class=\"alert");
    if let Some(variant) = node.attr("variant") {
        if !variant.is_empty() {
            out.push_str(" alert-");
            out.push_str(&escape_attr(variant));
        }
    }
    if let Some(color) = node.attr("color") {
        if !color.is_empty() {
            out.push_str(" alert-");
            out.push_str(&escape_attr(color));
        }
    }
    out.push_str("\">");

    if let Some(title) = node.attr("title") {
        out.push_str("<div class=\"alert-title\">");
        out.push_str(&escape_text(title));
        out.push_str("</div>");
    }

    write_children(&node.children, out);
    out.push_str("</div>");
}

/// Escape text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
