//! Document tree walker
//!
//! Every node is visited twice, on entry and on exit, and writes what its
//! kind needs at each point. Blockquotes, lists, footnotes, definition
//! descriptions and tables render their own children into a scratch buffer,
//! post-process it, and tell the walker to skip the regular descent.

use std::io::Write;

use log::debug;
use mdfmt_core::{Alignment, LineBreak, ListMarker, Node, NodeKind, Options};

use crate::attributes::format_attributes;
use crate::blocks::{write_hanging, write_quoted};
use crate::entities::replace_entities;
use crate::metadata::MetadataEncoder;
use crate::table::TableLayout;
use crate::utilities::{quote, repeat, underline_length};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkStatus {
    Continue,
    SkipChildren,
}

/// Position of a node among its siblings
#[derive(Debug, Clone, Copy, Default)]
struct Siblings<'n> {
    previous: Option<&'n Node>,
    has_next: bool,
}

pub(crate) struct Walker<'a> {
    source: &'a str,
    options: &'a Options,
    encoder: &'a dyn MetadataEncoder,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(source: &'a str, options: &'a Options, encoder: &'a dyn MetadataEncoder) -> Self {
        Self {
            source,
            options,
            encoder,
        }
    }

    /// Render `node` and its subtree
    pub(crate) fn render(&self, out: &mut dyn Write, node: &Node) -> Result<()> {
        self.walk(out, node, Siblings::default())
    }

    fn walk(&self, out: &mut dyn Write, node: &Node, siblings: Siblings<'_>) -> Result<()> {
        if self.enter(out, node, siblings)? == WalkStatus::Continue {
            self.walk_children(out, &node.children)?;
        }
        self.exit(out, node, siblings)
    }

    fn walk_children(&self, out: &mut dyn Write, children: &[Node]) -> Result<()> {
        for (i, child) in children.iter().enumerate() {
            let siblings = Siblings {
                previous: i.checked_sub(1).map(|p| &children[p]),
                has_next: i + 1 < children.len(),
            };
            self.walk(out, child, siblings)?;
        }
        Ok(())
    }

    /// Render `children` into a fresh scratch buffer
    fn scratch(&self, children: &[Node]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.walk_children(&mut buf, children)?;
        Ok(buf)
    }

    fn enter(&self, out: &mut dyn Write, node: &Node, siblings: Siblings<'_>) -> Result<WalkStatus> {
        let source = self.source;

        match &node.kind {
            NodeKind::Document { meta } => {
                if !meta.is_empty() {
                    debug!("writing metadata block with {} entries", meta.len());
                    out.write_all(b"---\n")?;
                    self.encoder.encode(out, meta)?;
                    out.write_all(b"---\n")?;
                }
            }

            NodeKind::Heading { level, .. } => {
                let level = clamp_level(*level);
                if !self.options.setext_heading(level) {
                    write!(out, "{} ", repeat("#", level as usize))?;
                }
            }

            NodeKind::Blockquote => {
                write_attribute_line(out, node)?;
                let content = self.scratch(&node.children)?;
                write_quoted(out, &content)?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::CodeBlock { lines } => {
                for line in lines {
                    out.write_all(b"    ")?;
                    out.write_all(line.value(source).as_bytes())?;
                }
                out.write_all(b"\n")?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::FencedCodeBlock { info, lines } => {
                out.write_all(self.options.fence.as_bytes())?;
                if let Some(info) = info {
                    out.write_all(info.value(source).as_bytes())?;
                }
                out.write_all(b"\n")?;
                for line in lines {
                    out.write_all(line.value(source).as_bytes())?;
                }
                out.write_all(self.options.fence.as_bytes())?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::HtmlBlock { lines, .. } => {
                for line in lines {
                    out.write_all(line.value(source).as_bytes())?;
                }
            }

            NodeKind::List {
                ordered,
                start,
                tight,
                marker,
            } => {
                write_attribute_line(out, node)?;
                self.write_list(out, &node.children, *ordered, *start, *tight, *marker)?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::Paragraph => {
                if matches!(siblings.previous, Some(prev) if prev.kind == NodeKind::TextBlock) {
                    out.write_all(b"\n")?;
                }
            }

            NodeKind::ThematicBreak => out.write_all(self.options.hr.as_bytes())?,

            NodeKind::Table { alignments } => {
                self.write_table(out, alignments, &node.children)?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::Footnote { index } => {
                write!(out, "[^{index}]: ")?;
                let content = self.scratch(&node.children)?;
                write_hanging(out, &content, "    ")?;
                out.write_all(b"\n\n")?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::FootnoteList => out.write_all(b"\n")?,

            NodeKind::DefinitionDescription => {
                out.write_all(b": ")?;
                let content = self.scratch(&node.children)?;
                write_hanging(out, &content, "  ")?;
                out.write_all(b"\n")?;
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::LineBlockItem { padding } => {
                write!(out, "| {}", repeat(" ", *padding))?;
            }

            NodeKind::Text {
                segment,
                line_break,
            } => {
                out.write_all(segment.value(source).as_bytes())?;
                match line_break {
                    LineBreak::None => {}
                    LineBreak::Hard => out.write_all(b"\\\n")?,
                    LineBreak::Soft if self.options.hard_wraps => out.write_all(b"\n")?,
                    LineBreak::Soft => out.write_all(b" ")?,
                }
            }

            NodeKind::String { value, code } => {
                if *code {
                    let value = replace_entities(value, &self.options.entity_replacements);
                    out.write_all(value.as_bytes())?;
                } else {
                    out.write_all(value.as_bytes())?;
                }
            }

            NodeKind::Emphasis { level } => out.write_all(emphasis_delimiter(*level).as_bytes())?,

            NodeKind::CodeSpan => out.write_all(b"`")?,

            NodeKind::Link { .. } => out.write_all(b"[")?,

            NodeKind::Image { .. } => out.write_all(b"![")?,

            NodeKind::AutoLink { label } => write!(out, "<{}>", label.value(source))?,

            NodeKind::RawHtml { segments } => {
                if !self.options.skip_raw_html {
                    for segment in segments {
                        out.write_all(segment.value(source).as_bytes())?;
                    }
                }
                return Ok(WalkStatus::SkipChildren);
            }

            NodeKind::Strikethrough => out.write_all(b"~~")?,

            NodeKind::TaskCheckBox { checked } => {
                out.write_all(if *checked { b"[x] " } else { b"[ ] " })?;
            }

            NodeKind::FootnoteLink { index } => write!(out, "[^{index}]")?,

            NodeKind::TextBlock
            | NodeKind::ListItem
            | NodeKind::TableRow
            | NodeKind::TableCell
            | NodeKind::DefinitionList
            | NodeKind::DefinitionTerm
            | NodeKind::LineBlock
            | NodeKind::FootnoteBacklink { .. } => {}
        }

        Ok(WalkStatus::Continue)
    }

    fn exit(&self, out: &mut dyn Write, node: &Node, siblings: Siblings<'_>) -> Result<()> {
        match &node.kind {
            NodeKind::Heading { level, lines } => {
                let level = clamp_level(*level);
                if let Some(attributes) = format_attributes(&node.attributes) {
                    write!(out, " {attributes}")?;
                }
                if self.options.setext_heading(level) {
                    let length = underline_length(lines, self.source, self.options.hard_wraps);
                    let underline = if level == 1 { "=" } else { "-" };
                    write!(out, "\n{}", repeat(underline, length))?;
                }
                out.write_all(b"\n\n")?;
            }

            NodeKind::Blockquote => out.write_all(b"\n\n")?,

            NodeKind::FencedCodeBlock { .. } | NodeKind::Paragraph | NodeKind::ThematicBreak => {
                if let Some(attributes) = format_attributes(&node.attributes) {
                    write!(out, "\n{attributes}")?;
                }
                out.write_all(b"\n\n")?;
            }

            NodeKind::HtmlBlock { closure, .. } => {
                if let Some(closure) = closure {
                    out.write_all(closure.value(self.source).as_bytes())?;
                }
                out.write_all(b"\n")?;
            }

            NodeKind::TextBlock => {
                if siblings.has_next && !node.children.is_empty() {
                    out.write_all(b"\n")?;
                }
            }

            NodeKind::Table { .. } => {
                write_attribute_line(out, node)?;
                out.write_all(b"\n")?;
            }

            NodeKind::FootnoteList | NodeKind::DefinitionList => {
                out.write_all(b"\n")?;
                write_attribute_line(out, node)?;
            }

            NodeKind::DefinitionTerm | NodeKind::LineBlock | NodeKind::LineBlockItem { .. } => {
                out.write_all(b"\n")?;
            }

            NodeKind::Emphasis { level } => out.write_all(emphasis_delimiter(*level).as_bytes())?,

            NodeKind::CodeSpan => out.write_all(b"`")?,

            NodeKind::Strikethrough => out.write_all(b"~~")?,

            NodeKind::Link { destination, title } | NodeKind::Image { destination, title } => {
                write!(out, "]({destination}")?;
                if let Some(title) = title {
                    write!(out, " {}", quote(title))?;
                }
                out.write_all(b")")?;
                if let Some(attributes) = format_attributes(&node.attributes) {
                    out.write_all(attributes.as_bytes())?;
                }
            }

            NodeKind::Document { .. }
            | NodeKind::CodeBlock { .. }
            | NodeKind::List { .. }
            | NodeKind::ListItem
            | NodeKind::TableRow
            | NodeKind::TableCell
            | NodeKind::Footnote { .. }
            | NodeKind::FootnoteBacklink { .. }
            | NodeKind::DefinitionDescription
            | NodeKind::Text { .. }
            | NodeKind::String { .. }
            | NodeKind::AutoLink { .. }
            | NodeKind::RawHtml { .. }
            | NodeKind::TaskCheckBox { .. }
            | NodeKind::FootnoteLink { .. } => {}
        }

        Ok(())
    }

    /// Write every list item with its marker and hanging indent
    fn write_list(
        &self,
        out: &mut dyn Write,
        items: &[Node],
        ordered: bool,
        start: u32,
        tight: bool,
        marker: char,
    ) -> Result<()> {
        let mut ordinal = start.max(1);
        let indent = if ordered { "   " } else { "  " };

        for item in items {
            let content = self.scratch(&item.children)?;

            if ordered {
                write!(out, "{ordinal}")?;
                ordinal = ordinal.saturating_add(1);
            }
            match self.options.list_marker {
                ListMarker::Preserve => write!(out, "{marker} ")?,
                ListMarker::Normalize if ordered => out.write_all(b". ")?,
                ListMarker::Normalize => out.write_all(b"- ")?,
            }

            write_hanging(out, &content, indent)?;
            out.write_all(b"\n")?;
            if !tight {
                out.write_all(b"\n")?;
            }
        }

        if tight {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Measure every cell, then write the aligned table
    fn write_table(&self, out: &mut dyn Write, alignments: &[Alignment], rows: &[Node]) -> Result<()> {
        let mut layout = TableLayout::new(alignments);

        for row in rows {
            let cells = row
                .children
                .iter()
                .map(|cell| -> Result<String> {
                    let content = self.scratch(&cell.children)?;
                    Ok(String::from_utf8_lossy(&content).into_owned())
                })
                .collect::<Result<Vec<_>>>()?;
            layout.push_row(cells);
        }

        layout.write(out)?;
        Ok(())
    }
}

fn clamp_level(level: u8) -> u8 {
    level.clamp(1, 6)
}

fn emphasis_delimiter(level: u8) -> &'static str {
    if level == 1 {
        "_"
    } else {
        "**"
    }
}

/// Write the node's attribute block on a line of its own
fn write_attribute_line(out: &mut dyn Write, node: &Node) -> Result<()> {
    if let Some(attributes) = format_attributes(&node.attributes) {
        writeln!(out, "{attributes}")?;
    }
    Ok(())
}
