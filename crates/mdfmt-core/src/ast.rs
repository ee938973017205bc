//! Markdown document tree
//!
//! This module defines the nodes a parser hands over for rendering.
//! Leaf text refers back into the original source through [`Segment`]s
//! instead of owning a copy; every node owns its children exclusively.

use indexmap::IndexMap;
use serde_yaml::Mapping;

/// Attributes attached to a node (`{#id .class key="value"}`)
///
/// `id` and `class` are ordinary entries; the renderer gives them their
/// shorthand form.
pub type Attributes = IndexMap<String, String>;

/// Front matter attached to the document root
pub type Metadata = Mapping;

/// A byte range `start..stop` into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub start: usize,
    pub stop: usize,
}

impl Segment {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Text covered by this segment.
    ///
    /// A range that falls outside the source or splits a character yields
    /// an empty string.
    pub fn value<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.stop).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column alignment of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment marker in the divider row
    #[default]
    None,
    Left,
    Right,
    Center,
}

/// How a text node ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Text continues on the same line
    #[default]
    None,
    /// Soft line break in the source
    Soft,
    /// Hard line break (`\` or two trailing spaces in the source)
    Hard,
}

/// The kind of a node together with its kind-specific fields
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root document, optionally carrying front matter
    Document { meta: Metadata },

    /// Heading with level (1-6) and the source lines of its text
    Heading { level: u8, lines: Vec<Segment> },

    Paragraph,

    /// Paragraph without surrounding blank lines (tight list items)
    TextBlock,

    Blockquote,

    /// Indented code block; lines include their line terminators
    CodeBlock { lines: Vec<Segment> },

    /// Fenced code block with optional info string
    FencedCodeBlock {
        info: Option<Segment>,
        lines: Vec<Segment>,
    },

    /// Raw HTML block with optional closing line
    HtmlBlock {
        lines: Vec<Segment>,
        closure: Option<Segment>,
    },

    ThematicBreak,

    /// Ordered or bullet list
    ///
    /// `marker` is the delimiter the source used: `-`, `*` or `+` for
    /// bullet lists, `.` or `)` for ordered lists.
    List {
        ordered: bool,
        start: u32,
        tight: bool,
        marker: char,
    },

    ListItem,

    /// Table; one alignment per column, fixed for the whole table
    Table { alignments: Vec<Alignment> },

    /// Table row; the first row of a table is its header
    TableRow,

    TableCell,

    FootnoteList,

    Footnote { index: usize },

    DefinitionList,

    DefinitionTerm,

    DefinitionDescription,

    LineBlock,

    /// Line of a line block, indented by `padding` spaces
    LineBlockItem { padding: usize },

    /// Text span of the source
    Text {
        segment: Segment,
        line_break: LineBreak,
    },

    /// Literal text not backed by the source; `code` marks code content
    String { value: String, code: bool },

    /// Emphasis (level 1) or strong emphasis (level 2)
    Emphasis { level: u8 },

    CodeSpan,

    Link {
        destination: String,
        title: Option<String>,
    },

    Image {
        destination: String,
        title: Option<String>,
    },

    /// `<url>` style link; `label` is the literal display text
    AutoLink { label: Segment },

    /// Inline raw HTML
    RawHtml { segments: Vec<Segment> },

    Strikethrough,

    TaskCheckBox { checked: bool },

    FootnoteLink { index: usize },

    FootnoteBacklink { index: usize },
}

impl NodeKind {
    /// Short name of the kind, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document { .. } => "Document",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::TextBlock => "TextBlock",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::CodeBlock { .. } => "CodeBlock",
            NodeKind::FencedCodeBlock { .. } => "FencedCodeBlock",
            NodeKind::HtmlBlock { .. } => "HtmlBlock",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Table { .. } => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::FootnoteList => "FootnoteList",
            NodeKind::Footnote { .. } => "Footnote",
            NodeKind::DefinitionList => "DefinitionList",
            NodeKind::DefinitionTerm => "DefinitionTerm",
            NodeKind::DefinitionDescription => "DefinitionDescription",
            NodeKind::LineBlock => "LineBlock",
            NodeKind::LineBlockItem { .. } => "LineBlockItem",
            NodeKind::Text { .. } => "Text",
            NodeKind::String { .. } => "String",
            NodeKind::Emphasis { .. } => "Emphasis",
            NodeKind::CodeSpan => "CodeSpan",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::AutoLink { .. } => "AutoLink",
            NodeKind::RawHtml { .. } => "RawHtml",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::TaskCheckBox { .. } => "TaskCheckBox",
            NodeKind::FootnoteLink { .. } => "FootnoteLink",
            NodeKind::FootnoteBacklink { .. } => "FootnoteBacklink",
        }
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node without attributes or children
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Replace the children of this node
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Append a single child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute, keeping the position of an existing one
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn document(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Document {
            meta: Metadata::new(),
        })
        .with_children(children)
    }

    pub fn document_with_meta(meta: Metadata, children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Document { meta }).with_children(children)
    }

    pub fn heading(level: u8, lines: Vec<Segment>, content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Heading { level, lines }).with_children(content)
    }

    pub fn paragraph(content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Paragraph).with_children(content)
    }

    pub fn text_block(content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::TextBlock).with_children(content)
    }

    pub fn blockquote(blocks: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Blockquote).with_children(blocks)
    }

    /// Bullet list
    pub fn bullet_list(marker: char, tight: bool, items: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::List {
            ordered: false,
            start: 0,
            tight,
            marker,
        })
        .with_children(items)
    }

    /// Ordered list starting at `start`
    pub fn ordered_list(
        start: u32,
        marker: char,
        tight: bool,
        items: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self::new(NodeKind::List {
            ordered: true,
            start,
            tight,
            marker,
        })
        .with_children(items)
    }

    pub fn list_item(blocks: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::ListItem).with_children(blocks)
    }

    /// Table whose first row is the header
    pub fn table(alignments: Vec<Alignment>, rows: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Table { alignments }).with_children(rows)
    }

    pub fn table_row(cells: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::TableRow).with_children(cells)
    }

    pub fn table_cell(content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::TableCell).with_children(content)
    }

    pub fn footnote(index: usize, blocks: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Footnote { index }).with_children(blocks)
    }

    /// Source text without a trailing line break
    pub fn text(segment: Segment) -> Self {
        Self::new(NodeKind::Text {
            segment,
            line_break: LineBreak::None,
        })
    }

    /// Source text followed by a line break
    pub fn text_with_break(segment: Segment, line_break: LineBreak) -> Self {
        Self::new(NodeKind::Text {
            segment,
            line_break,
        })
    }

    /// Literal text
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(NodeKind::String {
            value: value.into(),
            code: false,
        })
    }

    /// Literal code content (subject to entity normalization)
    pub fn code_string(value: impl Into<String>) -> Self {
        Self::new(NodeKind::String {
            value: value.into(),
            code: true,
        })
    }

    pub fn emphasis(level: u8, content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Emphasis { level }).with_children(content)
    }

    pub fn code_span(content: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::CodeSpan).with_children(content)
    }

    pub fn link(
        destination: impl Into<String>,
        title: Option<String>,
        content: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self::new(NodeKind::Link {
            destination: destination.into(),
            title,
        })
        .with_children(content)
    }

    pub fn image(
        destination: impl Into<String>,
        title: Option<String>,
        alt: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self::new(NodeKind::Image {
            destination: destination.into(),
            title,
        })
        .with_children(alt)
    }
}
