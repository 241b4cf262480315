//! Serialized document nodes.
//!
//! This module models the JSON the CMS delivers: a tree of nodes
//! discriminated by a `type` field. The union is closed over the node kinds
//! the renderer understands, with an explicit `Unknown` fallback so that
//! documents written against a newer editor schema still deserialize.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::TextFormat;

/// One serialized rich-text node, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SerializedNode {
    /// Inline text with a format bitmask
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, deserialize_with = "crate::format::deserialize_lenient")]
        format: TextFormat,
    },

    /// Heading; `tag` is expected to be h1..h6 and is matched at transform time
    Heading {
        #[serde(default)]
        tag: String,
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    Paragraph {
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    Quote {
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    /// List; `tag` is expected to be ol or ul
    List {
        #[serde(default)]
        tag: String,
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    /// List item; a present `checked` field marks checklist membership
    ListItem {
        #[serde(default)]
        checked: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    Link {
        #[serde(default)]
        fields: LinkFields,
        #[serde(default, deserialize_with = "deserialize_children")]
        children: Vec<SerializedNode>,
    },

    // Braced so serde ignores the version/format bookkeeping the editor
    // attaches to every node.
    LineBreak {},

    HorizontalRule {},

    /// Embedded custom block; `fields.blockType` selects the handler
    Block {
        #[serde(default)]
        fields: serde_json::Map<String, Value>,
    },

    /// Any node kind this renderer does not know about
    #[serde(other)]
    Unknown,
}

impl SerializedNode {
    /// Decode a node from a JSON value.
    ///
    /// A value that does not deserialize as any known node kind degrades to
    /// [`SerializedNode::Unknown`]; sibling nodes are unaffected.
    pub fn from_value(value: &Value) -> Self {
        match Self::deserialize(value) {
            Ok(node) => node,
            Err(error) => {
                tracing::debug!(%error, "dropping malformed node");
                SerializedNode::Unknown
            }
        }
    }
}

/// Link payload under `fields`.
///
/// The CMS also attaches internal relation data (`doc`, `id`, …); those
/// fields are tolerated and ignored here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkFields {
    #[serde(rename = "linkType")]
    pub link_type: String,
    pub url: Option<String>,
    #[serde(rename = "newTab")]
    pub new_tab: Option<bool>,
}

/// Decode a `children` array one node at a time, so one malformed child
/// degrades to `Unknown` without taking its siblings down with it.
fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<SerializedNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.iter().map(SerializedNode::from_value).collect())
}
