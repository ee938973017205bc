//! mdfmt-core - Markdown document tree and rendering options
//!
//! This crate provides the data structures shared between a Markdown parser
//! and the `mdfmt` renderer: the node tree a parser produces and the
//! options that steer how it is written back out.
//!
//! # Architecture
//!
//! ```text
//!                   ┌───────────────┐
//! Markdown ──parser▶│ Document tree │ ──mdfmt──▶ canonical Markdown
//!                   └───────────────┘
//!                           ▲
//!                        Options
//! ```
//!
//! Leaf nodes reference the source through byte ranges, so the source text
//! must be supplied alongside the tree.
//!
//! # Example
//!
//! ```rust
//! use mdfmt_core::{Node, Options, Segment};
//!
//! let source = "# Hello World";
//! let doc = Node::document([Node::heading(
//!     1,
//!     vec![Segment::new(2, 13)],
//!     [Node::text(Segment::new(2, 13))],
//! )]);
//!
//! assert_eq!(doc.children.len(), 1);
//! assert_eq!(Segment::new(2, 13).value(source), "Hello World");
//! let _options = Options::default();
//! ```

mod ast;
mod options;

pub use ast::{Alignment, Attributes, LineBreak, Metadata, Node, NodeKind, Segment};
pub use options::{HeadingStyle, ListMarker, Options};
