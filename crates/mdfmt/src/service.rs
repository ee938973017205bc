//! Formatter - the main entry point for rendering a document tree.

use std::io::Write;

use log::debug;
use mdfmt_core::{Node, Options};

use crate::metadata::{MetadataEncoder, YamlEncoder};
use crate::render::Walker;
use crate::Result;

/// Renders document trees as canonical Markdown
pub struct Formatter {
    options: Options,
    encoder: Box<dyn MetadataEncoder>,
}

impl Formatter {
    /// Create a new Formatter with default options
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a Formatter with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            encoder: Box::new(YamlEncoder),
        }
    }

    /// Use a different encoder for document metadata
    pub fn with_encoder(mut self, encoder: impl MetadataEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render `node` to `writer`
    ///
    /// `source` is the text the tree's segments point into. The first failed
    /// write stops the render; bytes already written stay in the writer.
    pub fn render<W: Write>(&self, mut writer: W, source: &str, node: &Node) -> Result<()> {
        render_with(&mut writer, source, node, &self.options, self.encoder.as_ref())
    }

    /// Render `node` into a new string
    pub fn render_to_string(&self, source: &str, node: &Node) -> Result<String> {
        let mut buf = Vec::with_capacity(source.len() + source.len() / 2);
        self.render(&mut buf, source, node)?;
        Ok(into_string(buf))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `node` to `writer` with the given options
pub fn render<W: Write>(mut writer: W, source: &str, node: &Node, options: &Options) -> Result<()> {
    render_with(&mut writer, source, node, options, &YamlEncoder)
}

/// Render `node` into a new string with the given options
pub fn render_to_string(source: &str, node: &Node, options: &Options) -> Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, source, node, options)?;
    Ok(into_string(buf))
}

fn render_with(
    out: &mut dyn Write,
    source: &str,
    node: &Node,
    options: &Options,
    encoder: &dyn MetadataEncoder,
) -> Result<()> {
    debug!(
        "rendering {} ({} bytes of source)",
        node.kind.name(),
        source.len()
    );
    Walker::new(source, options, encoder).render(out, node)
}

fn into_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;
    use mdfmt_core::{HeadingStyle, Metadata};
    use serde_yaml::Value;

    struct FailingEncoder;

    impl MetadataEncoder for FailingEncoder {
        fn encode(&self, _out: &mut dyn Write, _meta: &Metadata) -> Result<()> {
            Err(RenderError::Metadata("unsupported value".to_string()))
        }
    }

    fn meta_doc() -> Node {
        let mut meta = Metadata::new();
        meta.insert(Value::from("title"), Value::from("Notes"));
        Node::document_with_meta(meta, [Node::paragraph([Node::string("Body")])])
    }

    #[test]
    fn test_render_to_string() {
        let formatter = Formatter::new();
        let result = formatter
            .render_to_string("", &Node::paragraph([Node::string("Hello")]))
            .unwrap();
        assert_eq!(result, "Hello\n\n");
    }

    #[test]
    fn test_metadata_block() {
        let result = Formatter::new().render_to_string("", &meta_doc()).unwrap();
        assert_eq!(result, "---\ntitle: Notes\n---\nBody\n\n");
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let doc = Node::document([Node::paragraph([Node::string("Body")])]);
        assert_eq!(Formatter::new().render_to_string("", &doc).unwrap(), "Body\n\n");
    }

    #[test]
    fn test_metadata_failure_aborts() {
        let formatter = Formatter::new().with_encoder(FailingEncoder);
        let mut out = Vec::new();
        let err = formatter.render(&mut out, "", &meta_doc()).unwrap_err();

        assert!(matches!(err, RenderError::Metadata(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "---\n");
    }

    #[test]
    fn test_options_mut() {
        let mut formatter = Formatter::new();
        formatter.options_mut().heading_style = HeadingStyle::Atx;
        assert_eq!(formatter.options().heading_style, HeadingStyle::Atx);

        let heading = Node::heading(1, vec![], [Node::string("T")]);
        assert_eq!(formatter.render_to_string("", &heading).unwrap(), "# T\n\n");
    }

    #[test]
    fn test_free_render_writes_metadata_like_formatter() {
        let mut direct = Vec::new();
        render(&mut direct, "", &meta_doc(), &Options::default()).unwrap();

        let mut via_formatter = Vec::new();
        Formatter::new()
            .render(&mut via_formatter, "", &meta_doc())
            .unwrap();

        assert_eq!(direct, via_formatter);
        assert_eq!(String::from_utf8(direct).unwrap(), "---\ntitle: Notes\n---\nBody\n\n");
    }

    #[test]
    fn test_free_functions_match_formatter() {
        let node = Node::paragraph([Node::emphasis(2, [Node::string("b")])]);
        let options = Options::default();
        assert_eq!(
            render_to_string("", &node, &options).unwrap(),
            Formatter::with_options(options.clone())
                .render_to_string("", &node)
                .unwrap()
        );
    }
}
