//! Re-indentation of pre-rendered block content.
//!
//! Container blocks render their children into a scratch buffer first.
//! The helpers here trim that buffer, split it into lines that keep their
//! terminators, and prefix or indent each line on its way to the output.

use std::io::{self, Write};

/// Trimmed lines of `content`, each keeping its trailing `\n`
///
/// Blank content yields a single empty line so the caller still writes
/// its marker.
pub fn content_lines(content: &[u8]) -> Vec<&[u8]> {
    let text = content.trim_ascii();
    if text.is_empty() {
        return vec![text];
    }
    text.split_inclusive(|&b| b == b'\n').collect()
}

/// Write `content` as block quote lines
///
/// Every line gets `>`; a space follows unless the line is blank or
/// already quoted.
pub fn write_quoted(out: &mut dyn Write, content: &[u8]) -> io::Result<()> {
    for line in content_lines(content) {
        out.write_all(b">")?;
        if !matches!(line.first(), None | Some(b'>') | Some(b'\n')) {
            out.write_all(b" ")?;
        }
        out.write_all(line)?;
    }
    Ok(())
}

/// Write `content` after an already written marker
///
/// The first line follows the marker; later non-blank lines are indented
/// by `indent`.
pub fn write_hanging(out: &mut dyn Write, content: &[u8], indent: &str) -> io::Result<()> {
    for (i, line) in content_lines(content).into_iter().enumerate() {
        if i > 0 && !matches!(line.first(), None | Some(b'\n')) {
            out.write_all(indent.as_bytes())?;
        }
        out.write_all(line)?;
    }
    Ok(())
}
