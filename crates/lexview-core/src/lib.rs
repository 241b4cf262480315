//! lexview-core - view-tree model and serialization
//!
//! This crate provides the output-side data structures for rendering
//! rich-text documents: the fixed vocabulary of renderable targets, the
//! view node tree built from them, and HTML serialization of that tree.
//! It knows nothing about the serialized editor format; that lives in the
//! `lexview` crate.
//!
//! # Architecture
//!
//! ```text
//! Lexical JSON ──transform──▶ ┌───────────┐
//!                             │           │
//!                             │ View tree │ ──▶ HTML string
//! Custom blocks ─────────────▶│           │
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use lexview_core::{to_html, Target, ViewChild, ViewNode};
//!
//! let tree = ViewNode::with_children(
//!     Target::Paragraph,
//!     vec![
//!         ViewChild::Text("This is ".to_string()),
//!         ViewChild::Element(ViewNode::with_children(
//!             Target::Strong,
//!             vec![ViewChild::Text("bold".to_string())],
//!         )),
//!         ViewChild::Text(" text.".to_string()),
//!     ],
//! );
//!
//! assert_eq!(to_html(&tree), "<p>This is <strong>bold</strong> text.</p>");
//! ```

mod ast;
mod serialize;

pub use ast::{HeadingLevel, Target, ViewChild, ViewNode};
pub use serialize::to_html;
