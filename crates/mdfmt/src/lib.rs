//! # mdfmt
//!
//! Render a parsed Markdown document tree back to canonical Markdown.
//!
//! The parser is not part of this crate: it builds an [`mdfmt_core::Node`]
//! tree whose leaf text points into the original source, and `mdfmt`
//! writes that tree out in one consistent style: `_em_` and `**strong**`,
//! setext or ATX headings, aligned tables, normalized list markers and
//! typographic entities.
//!
//! ## Design
//!
//! - **Explicit options**: every call gets its [`Options`]; there is no
//!   global configuration.
//! - **Fail fast**: the first failed write ends the render with an error.
//!   Output already written is not retracted.
//! - **Scratch buffers**: container blocks (quotes, lists, footnotes,
//!   definitions, tables) render their children into a private buffer and
//!   re-indent or measure it before writing.
//!
//! ## Example
//!
//! ```rust
//! use mdfmt::{Formatter, Node, Segment};
//!
//! let source = "# Title\nSome *text*.";
//! let doc = Node::document([
//!     Node::heading(1, vec![Segment::new(2, 7)], [Node::text(Segment::new(2, 7))]),
//!     Node::paragraph([
//!         Node::text(Segment::new(8, 13)),
//!         Node::emphasis(1, [Node::text(Segment::new(14, 18))]),
//!         Node::text(Segment::new(19, 20)),
//!     ]),
//! ]);
//!
//! let markdown = Formatter::new().render_to_string(source, &doc).unwrap();
//! assert_eq!(markdown, "Title\n=====\n\nSome _text_.\n\n");
//! ```

mod attributes;
mod blocks;
mod entities;
mod metadata;
mod render;
mod service;
mod table;
mod utilities;

pub use attributes::format_attributes;
pub use entities::replace_entities;
pub use mdfmt_core::{
    Alignment, Attributes, HeadingStyle, LineBreak, ListMarker, Metadata, Node, NodeKind, Options,
    Segment,
};
pub use metadata::{MetadataEncoder, YamlEncoder};
pub use service::{render, render_to_string, Formatter};

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Metadata error: {0}")]
    Metadata(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
