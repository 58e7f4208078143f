//! Artifact model and well-known service descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository artifact reference: its IRI and declared RDF type.
///
/// The authoritative artifact graph lives in the remote repository; this
/// is only the listing entry resolved from a SPARQL query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub iri: String,
    pub artifact_type: String,
}

impl ArtifactRef {
    pub fn new<I: Into<String>, T: Into<String>>(iri: I, artifact_type: T) -> Self {
        Self {
            iri: iri.into(),
            artifact_type: artifact_type.into(),
        }
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.iri, self.artifact_type)
    }
}

/// Well-known remote service identifiers.
pub mod services {
    /// Renders a URL into a new Page artifact.
    pub const RENDER_PUPPETEER: &str = "FitLayout.Puppeteer";

    /// Segments a Page artifact into a new AreaTree artifact.
    pub const BASIC_AREAS: &str = "FitLayout.BasicAreas";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_iri_and_type() {
        let artifact = ArtifactRef::new(
            "http://fitlayout.github.io/resource/art1",
            "http://fitlayout.github.io/ontology/render.owl#Page",
        );
        let text = artifact.to_string();
        assert!(text.contains("resource/art1"));
        assert!(text.contains("render.owl#Page"));
    }

    #[test]
    fn serializes_to_json() {
        let artifact = ArtifactRef::new("http://x/a", "http://x/T");
        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["iri"], "http://x/a");
        assert_eq!(value["artifact_type"], "http://x/T");
    }
}
