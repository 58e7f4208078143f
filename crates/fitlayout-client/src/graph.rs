//! Fetched graph snapshots
//!
//! The repository serializes graphs server-side; the client only ever
//! holds the serialized text together with the format it was requested
//! in. A snapshot is transient - replacing the artifact in the
//! repository does not update it.

use fitlayout_core::{ClientError, RdfFormat};
use std::fs;
use std::path::Path;

/// A serialized RDF graph snapshot fetched from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    format: RdfFormat,
    content: String,
}

impl GraphDocument {
    pub fn new(format: RdfFormat, content: String) -> Self {
        Self { format, content }
    }

    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// The serialized graph text, unmodified from the wire.
    pub fn render(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    /// Write the serialized text to `path`, overwriting existing content.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ClientError> {
        fs::write(path, &self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_returns_wire_text() {
        let doc = GraphDocument::new(RdfFormat::Turtle, "<a> <b> <c> .".to_string());
        assert_eq!(doc.render(), "<a> <b> <c> .");
        assert_eq!(doc.format(), RdfFormat::Turtle);
    }

    #[test]
    fn write_to_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.ttl");
        std::fs::write(&path, "stale content").unwrap();

        let doc = GraphDocument::new(RdfFormat::Turtle, "<a> <b> <c> .".to_string());
        doc.write_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<a> <b> <c> .");
    }
}
