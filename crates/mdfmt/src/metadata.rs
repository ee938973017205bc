//! Document metadata (front matter) encoding.

use std::io::Write;

use mdfmt_core::Metadata;

use crate::{RenderError, Result};

/// Writes the document's metadata mapping between the `---` fences
///
/// Any error aborts the render, exactly like a failed write.
pub trait MetadataEncoder: Send + Sync {
    fn encode(&self, out: &mut dyn Write, meta: &Metadata) -> Result<()>;
}

/// Encodes metadata as YAML
///
/// The mapping is serialized in full before anything is written, so a
/// failing sink surfaces as [`RenderError::Write`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEncoder;

impl MetadataEncoder for YamlEncoder {
    fn encode(&self, out: &mut dyn Write, meta: &Metadata) -> Result<()> {
        let yaml =
            serde_yaml::to_string(meta).map_err(|err| RenderError::Metadata(err.to_string()))?;
        out.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
