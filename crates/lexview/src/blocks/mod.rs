//! Block handler registry.
//!
//! The `block` node kind is the schema's designed extension seam: the CMS
//! side can introduce new embedded content types at any time, and rendered
//! documents must keep working. Handlers are looked up by the block's
//! `fields.blockType` tag; a block type with no registered handler renders
//! as nothing.

mod alert;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::service::LexviewService;
use crate::transform::Rendered;

/// The `fields` payload of a block node
pub type BlockFields = Map<String, Value>;

/// A block handler: the block's fields plus the service, for rendering
/// nested documents.
pub type BlockHandler = Box<dyn Fn(&BlockFields, &LexviewService) -> Rendered + Send + Sync>;

/// Registry of block handlers, in registration order.
pub struct BlockRegistry {
    handlers: IndexMap<String, BlockHandler>,
}

impl BlockRegistry {
    /// Create a registry with the built-in handlers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("Alert", alert::alert);
        registry
    }

    /// Create a registry with no handlers at all
    pub fn empty() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Register a handler for a block type, replacing any previous one
    pub fn register<F>(&mut self, block_type: &str, handler: F)
    where
        F: Fn(&BlockFields, &LexviewService) -> Rendered + Send + Sync + 'static,
    {
        self.handlers
            .insert(block_type.to_string(), Box::new(handler));
    }

    /// Check if a block type has a handler
    pub fn contains(&self, block_type: &str) -> bool {
        self.handlers.contains_key(block_type)
    }

    /// Registered block types, in registration order
    pub fn block_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Dispatch a block node to its handler.
    ///
    /// A missing `blockType` or an unregistered one yields no output.
    pub(crate) fn dispatch(&self, fields: &BlockFields, service: &LexviewService) -> Rendered {
        let Some(block_type) = fields.get("blockType").and_then(Value::as_str) else {
            tracing::trace!("block without blockType, skipping");
            return Rendered::None;
        };

        match self.handlers.get(block_type) {
            Some(handler) => handler(fields, service),
            None => {
                tracing::debug!(block_type, "no handler for block type, skipping");
                Rendered::None
            }
        }
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
