//! LexviewService - the main entry point for document rendering.

use serde_json::Value;

use lexview_core::{Target, ViewNode};

use crate::blocks::{BlockFields, BlockRegistry};
use crate::node::SerializedNode;
use crate::transform::{self, Rendered};
use crate::unwrap::{unwrap_children, PatternSet};
use crate::Result;

/// Per-call rendering options, threaded through recursive renders.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Wrapper targets to strip from the top level of the rendered sequence
    pub unwrap: Option<PatternSet>,
}

/// The main service for rendering serialized documents to a view tree.
///
/// A service holds the block-handler registry and nothing else; renders are
/// pure and independent, so one service can serve any number of callers.
pub struct LexviewService {
    blocks: BlockRegistry,
}

impl LexviewService {
    /// Create a service with the built-in block handlers
    pub fn new() -> Self {
        Self {
            blocks: BlockRegistry::new(),
        }
    }

    /// Create a service with a prepared block registry
    pub fn with_registry(blocks: BlockRegistry) -> Self {
        Self { blocks }
    }

    /// Register a handler for a custom block type
    pub fn register_block<F>(&mut self, block_type: &str, handler: F) -> &mut Self
    where
        F: Fn(&BlockFields, &LexviewService) -> Rendered + Send + Sync + 'static,
    {
        self.blocks.register(block_type, handler);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Render a document with default options
    pub fn render(&self, content: &Value) -> Rendered {
        self.render_with(content, &RenderOptions::default())
    }

    /// Render a document.
    ///
    /// A non-object document renders as an empty text fragment; an object
    /// without a usable `root` renders as a single empty container. Any
    /// well-formed document renders as exactly one container node holding
    /// the transformed `root.children` sequence.
    pub fn render_with(&self, content: &Value, options: &RenderOptions) -> Rendered {
        let Value::Object(document) = content else {
            tracing::trace!("non-object document, rendering nothing");
            return Rendered::Text(String::new());
        };

        let children = match document.get("root").filter(|root| root.is_object()) {
            Some(root) => root
                .get("children")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            None => &[],
        };

        let mut sequence = Vec::with_capacity(children.len());
        for value in children {
            transform::transform(&SerializedNode::from_value(value), self).append_to(&mut sequence);
        }

        if let Some(patterns) = &options.unwrap {
            sequence = unwrap_children(sequence, patterns);
        }

        Rendered::Node(ViewNode::with_children(Target::Container, sequence))
    }

    /// Parse and render a raw JSON document body.
    ///
    /// Only a JSON syntax error is an error; a parsed value of an
    /// unexpected shape goes through the same tolerant render as
    /// [`render`](Self::render).
    pub fn render_str(&self, json: &str) -> Result<Rendered> {
        let content: Value = serde_json::from_str(json)?;
        Ok(self.render(&content))
    }

    /// Transform a single serialized node
    pub fn transform(&self, node: &SerializedNode) -> Rendered {
        transform::transform(node, self)
    }

    pub(crate) fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }
}

impl Default for LexviewService {
    fn default() -> Self {
        Self::new()
    }
}
