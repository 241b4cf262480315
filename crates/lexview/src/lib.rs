//! # lexview
//!
//! Render Lexical rich-text documents to a view tree.
//!
//! A block-based CMS editor serializes its documents as a JSON tree of
//! typed nodes. This crate walks that tree and produces a [`ViewNode`] tree
//! built from a fixed vocabulary of renderable targets, for a presentation
//! layer to map onto its own components.
//!
//! ## Design
//!
//! - **Schema tolerant**: unknown node types, heading/list tags, link types
//!   and block types render as nothing instead of failing; documents
//!   written against a newer editor schema keep working.
//! - **Extensible blocks**: embedded custom content dispatches through a
//!   handler registry, so new block types plug in without touching the
//!   transformer.
//! - **Pure**: rendering is a synchronous function of its input; no state
//!   is shared between renders.
//!
//! ## Example
//!
//! ```rust
//! use lexview::{to_html, LexviewService};
//! use serde_json::json;
//!
//! let service = LexviewService::new();
//!
//! let doc = json!({
//!     "root": {
//!         "children": [
//!             { "type": "paragraph", "children": [
//!                 { "type": "text", "text": "Hello", "format": 1 }
//!             ] }
//!         ]
//!     }
//! });
//!
//! let rendered = service.render(&doc);
//! let root = rendered.as_node().unwrap();
//! assert_eq!(to_html(root), "<div><p><strong>Hello</strong></p></div>");
//! ```

mod blocks;
mod format;
mod node;
mod service;
mod transform;
mod unwrap;

pub use blocks::{BlockFields, BlockHandler, BlockRegistry};
pub use format::{
    TextFormat, IS_BOLD, IS_CODE, IS_ITALIC, IS_STRIKETHROUGH, IS_SUBSCRIPT, IS_SUPERSCRIPT,
    IS_UNDERLINE,
};
pub use node::{LinkFields, SerializedNode};
pub use service::{LexviewService, RenderOptions};
pub use transform::Rendered;
pub use unwrap::{unwrap_children, PatternSet};

pub use lexview_core::{to_html, HeadingLevel, Target, ViewChild, ViewNode};

/// Error type for lexview operations
#[derive(Debug, thiserror::Error)]
pub enum LexviewError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexviewError>;
