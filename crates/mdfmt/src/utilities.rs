//! Utility functions for measuring and quoting text.

use mdfmt_core::Segment;

/// Number of characters (not bytes) in `text`
pub fn rune_count(text: &str) -> usize {
    text.chars().count()
}

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Length of the setext underline for a heading written over `lines`
///
/// With hard wraps only the last visual line counts; otherwise the heading
/// is reflowed onto one line, so every line counts without its trailing
/// whitespace.
pub fn underline_length(lines: &[Segment], source: &str, hard_wraps: bool) -> usize {
    if hard_wraps {
        return lines
            .last()
            .map(|line| rune_count(line.value(source)))
            .unwrap_or(0);
    }

    lines
        .iter()
        .map(|line| rune_count(line.value(source).trim_end()))
        .sum()
}

/// Wrap a value in double quotes, escaping `\` and `"`
pub fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');

    for c in value.chars() {
        if matches!(c, '\\' | '"') {
            result.push('\\');
        }
        result.push(c);
    }

    result.push('"');
    result
}
