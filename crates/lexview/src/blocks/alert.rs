//! Built-in alert block.

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;

use lexview_core::{Target, ViewNode};

use crate::blocks::BlockFields;
use crate::service::{LexviewService, RenderOptions};
use crate::transform::Rendered;
use crate::unwrap::PatternSet;

/// Alert fields as authored in the CMS.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AlertFields {
    variant: String,
    color: String,
    title: Option<String>,
    /// A full nested document root
    description: Value,
}

// The description is a complete document; stripping its paragraph shell
// keeps single-line alert bodies out of an extra paragraph wrapper.
static DESCRIPTION_OPTIONS: Lazy<RenderOptions> = Lazy::new(|| RenderOptions {
    unwrap: Some(PatternSet::new(["p"])),
});

pub(super) fn alert(fields: &BlockFields, service: &LexviewService) -> Rendered {
    let fields: AlertFields =
        serde_json::from_value(Value::Object(fields.clone())).unwrap_or_default();

    let mut node = ViewNode::new(Target::Alert);
    node.set_attr("variant", &fields.variant);
    node.set_attr("color", &fields.color);
    if let Some(title) = fields.title.as_deref().filter(|title| !title.is_empty()) {
        node.set_attr("title", title);
    }

    service
        .render_with(&fields.description, &DESCRIPTION_OPTIONS)
        .append_to(&mut node.children);

    Rendered::Node(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexview_core::ViewChild;
    use serde_json::json;

    fn render_alert(fields: Value) -> ViewNode {
        let service = LexviewService::new();
        let node = crate::SerializedNode::from_value(&json!({
            "type": "block",
            "fields": fields
        }));
        service
            .transform(&node)
            .into_node()
            .expect("alert renders one node")
    }

    #[test]
    fn test_variant_and_color_pass_through() {
        let alert = render_alert(json!({
            "blockType": "Alert",
            "variant": "outline",
            "color": "red",
            "description": {}
        }));
        assert_eq!(alert.target, Target::Alert);
        assert_eq!(alert.attr("variant"), Some("outline"));
        assert_eq!(alert.attr("color"), Some("red"));
    }

    #[test]
    fn test_title_slot_present_when_non_empty() {
        let alert = render_alert(json!({
            "blockType": "Alert",
            "variant": "solid",
            "color": "primary",
            "title": "Heads up",
            "description": {}
        }));
        assert_eq!(alert.attr("title"), Some("Heads up"));
    }

    #[test]
    fn test_title_slot_omitted_when_missing_or_empty() {
        let without = render_alert(json!({
            "blockType": "Alert",
            "variant": "solid",
            "color": "primary",
            "description": {}
        }));
        assert!(!without.has_attr("title"));

        let empty = render_alert(json!({
            "blockType": "Alert",
            "variant": "solid",
            "color": "primary",
            "title": "",
            "description": {}
        }));
        assert!(!empty.has_attr("title"));
    }

    #[test]
    fn test_description_paragraph_is_unwrapped() {
        let alert = render_alert(json!({
            "blockType": "Alert",
            "variant": "soft",
            "color": "primary",
            "description": {
                "root": {
                    "children": [
                        { "type": "paragraph", "children": [
                            { "type": "text", "text": "Hello" }
                        ] }
                    ]
                }
            }
        }));

        let body = alert.children[0].as_element().expect("description slot");
        assert_eq!(body.target, Target::Container);
        assert_eq!(body.children, vec![ViewChild::Text("Hello".to_string())]);
    }

    #[test]
    fn test_description_keeps_non_paragraph_content() {
        let alert = render_alert(json!({
            "blockType": "Alert",
            "variant": "soft",
            "color": "primary",
            "description": {
                "root": {
                    "children": [
                        { "type": "list", "tag": "ul", "children": [
                            { "type": "listitem", "children": [
                                { "type": "text", "text": "item" }
                            ] }
                        ] }
                    ]
                }
            }
        }));

        let body = alert.children[0].as_element().expect("description slot");
        let list = body.children[0].as_element().expect("list survives unwrap");
        assert_eq!(list.target, Target::UnorderedList);
    }

    #[test]
    fn test_nested_formatting_in_description() {
        let alert = render_alert(json!({
            "blockType": "Alert",
            "variant": "solid",
            "color": "red",
            "description": {
                "root": {
                    "children": [
                        { "type": "paragraph", "children": [
                            { "type": "text", "text": "really", "format": 1 }
                        ] }
                    ]
                }
            }
        }));

        let body = alert.children[0].as_element().expect("description slot");
        let strong = body.children[0].as_element().expect("bold text");
        assert_eq!(strong.target, Target::Strong);
        assert_eq!(strong.text_content(), "really");
    }
}
