//! Table layout
//!
//! Cells arrive pre-rendered. The layout records the widest cell of every
//! column (in characters), then writes each row padded to those widths with
//! a divider row after the header.

use std::io::{self, Write};

use log::{trace, warn};
use mdfmt_core::Alignment;

use crate::utilities::{repeat, rune_count};

/// Pre-rendered table cells with per-column widths
#[derive(Debug)]
pub struct TableLayout<'a> {
    alignments: &'a [Alignment],
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl<'a> TableLayout<'a> {
    pub fn new(alignments: &'a [Alignment]) -> Self {
        Self {
            alignments,
            widths: vec![0; alignments.len()],
            rows: Vec::new(),
        }
    }

    /// Add a row, normalized to the column count
    ///
    /// Missing cells are empty; cells past the last column are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        let columns = self.alignments.len();
        if cells.len() > columns {
            warn!(
                "table row has {} cells but only {} columns, dropping the rest",
                cells.len(),
                columns
            );
            cells.truncate(columns);
        }
        cells.resize(columns, String::new());

        for (width, cell) in self.widths.iter_mut().zip(&cells) {
            *width = (*width).max(rune_count(cell));
        }
        self.rows.push(cells);
    }

    /// Write all rows, with the divider after the first
    pub fn write(&self, out: &mut dyn Write) -> io::Result<()> {
        trace!(
            "table layout: {} rows, column widths {:?}",
            self.rows.len(),
            self.widths
        );

        for (i, row) in self.rows.iter().enumerate() {
            for ((cell, &width), &align) in row.iter().zip(&self.widths).zip(self.alignments) {
                let (left, right) = padding(cell, width, align);
                write!(out, "| {}{}{} ", repeat(" ", left), cell, repeat(" ", right))?;
            }
            out.write_all(b"|\n")?;

            if i == 0 {
                for (&width, &align) in self.widths.iter().zip(self.alignments) {
                    write!(out, "|{}", divider(align, width))?;
                }
                out.write_all(b"|\n")?;
            }
        }

        Ok(())
    }
}

/// Spaces before and after `cell` to fill `width`
///
/// Centered cells put the smaller half on the left.
fn padding(cell: &str, width: usize, align: Alignment) -> (usize, usize) {
    let fill = width.saturating_sub(rune_count(cell));
    match align {
        Alignment::Right => (fill, 0),
        Alignment::Center => (fill / 2, fill - fill / 2),
        Alignment::Left | Alignment::None => (0, fill),
    }
}

/// Divider segment of one column, without the leading `|`
///
/// Always `width + 2` characters wide so it lines up with `| cell `.
pub fn divider(align: Alignment, width: usize) -> String {
    match align {
        Alignment::Left => format!(":{}", repeat("-", width + 1)),
        Alignment::Right => format!("{}:", repeat("-", width + 1)),
        Alignment::Center => format!(":{}:", repeat("-", width)),
        Alignment::None => repeat("-", width + 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn written(layout: &TableLayout) -> String {
        let mut out = Vec::new();
        layout.write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case(Alignment::None, "-------")]
    #[case(Alignment::Left, ":------")]
    #[case(Alignment::Right, "------:")]
    #[case(Alignment::Center, ":-----:")]
    fn test_divider(#[case] align: Alignment, #[case] expected: &str) {
        assert_eq!(divider(align, 5), expected);
    }

    #[rstest]
    #[case(Alignment::None, (0, 3))]
    #[case(Alignment::Left, (0, 3))]
    #[case(Alignment::Right, (3, 0))]
    #[case(Alignment::Center, (1, 2))]
    fn test_padding(#[case] align: Alignment, #[case] expected: (usize, usize)) {
        assert_eq!(padding("ab", 5, align), expected);
    }

    #[test]
    fn test_widths_track_widest_cell() {
        let alignments = [Alignment::None, Alignment::None];
        let mut layout = TableLayout::new(&alignments);
        layout.push_row(row(&["a", "bb"]));
        layout.push_row(row(&["ccc", "d"]));

        assert_eq!(
            written(&layout),
            "| a   | bb |\n\
             |-----|----|\n\
             | ccc | d  |\n"
        );
    }

    #[test]
    fn test_write() {
        let alignments = [Alignment::Left, Alignment::Right];
        let mut layout = TableLayout::new(&alignments);
        layout.push_row(row(&["Name", "Qty"]));
        layout.push_row(row(&["Apple", "7"]));

        assert_eq!(
            written(&layout),
            "| Name  | Qty |\n\
             |:------|----:|\n\
             | Apple |   7 |\n"
        );
    }

    #[test]
    fn test_rows_are_normalized_to_column_count() {
        let alignments = [Alignment::None, Alignment::None];
        let mut layout = TableLayout::new(&alignments);
        layout.push_row(row(&["a", "b", "extra"]));
        layout.push_row(row(&["c"]));

        assert_eq!(
            written(&layout),
            "| a | b |\n\
             |---|---|\n\
             | c |   |\n"
        );
    }
}
