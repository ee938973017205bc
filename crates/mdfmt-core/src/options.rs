//! Configuration options for Markdown rendering

use indexmap::IndexMap;

/// Heading style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Use setext-style headings (underlined with = or -)
    /// Only works for h1 and h2, falls back to ATX for h3-h6
    #[default]
    Setext,
    /// Use ATX-style headings (prefixed with #)
    Atx,
}

/// List marker options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarker {
    /// Keep the marker character the source used
    #[default]
    Preserve,
    /// Use `-` for bullet lists and `.` for ordered lists
    Normalize,
}

/// Options for Markdown rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Drop inline raw HTML
    pub skip_raw_html: bool,

    /// Heading style (setext or atx)
    pub heading_style: HeadingStyle,

    /// Keep soft line breaks as newlines instead of reflowing them into spaces
    pub hard_wraps: bool,

    /// List marker policy
    pub list_marker: ListMarker,

    /// Fence string for fenced code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Named character references replaced inside code content
    pub entity_replacements: IndexMap<String, String>,
}

impl Options {
    /// Default replacements for typographic entities
    pub fn default_entity_replacements() -> IndexMap<String, String> {
        [
            ("&ldquo;", "\""),
            ("&rdquo;", "\""),
            ("&laquo;", "\""),
            ("&raquo;", "\""),
            ("&lsquo;", "'"),
            ("&rsquo;", "'"),
            ("&ndash;", "--"),
            ("&mdash;", "---"),
            ("&hellip;", "..."),
        ]
        .into_iter()
        .map(|(entity, replacement)| (entity.to_string(), replacement.to_string()))
        .collect()
    }

    /// Check if level `level` headings are written setext style
    pub fn setext_heading(&self, level: u8) -> bool {
        self.heading_style == HeadingStyle::Setext && level <= 2
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_raw_html: false,
            heading_style: HeadingStyle::Setext,
            hard_wraps: false,
            list_marker: ListMarker::Preserve,
            fence: "```".to_string(),
            hr: "----".to_string(),
            entity_replacements: Self::default_entity_replacements(),
        }
    }
}
