//! RDF vocabulary constants and the canonical SPARQL prefix header
//!
//! Constants are organized by vocabulary:
//! - `rdf` / `rdfs` / `xsd` - the W3C base vocabularies
//! - `fl` - the FitLayout main ontology (artifact lifecycle)
//! - `b` - the rendering (box model) ontology
//! - `segm` - the segmentation ontology
//! - `r` - the resource namespace used for artifact IRIs

/// RDF vocabulary constants
pub mod rdf {
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants
pub mod rdfs {
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

/// XSD vocabulary constants
pub mod xsd {
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
}

/// FitLayout main ontology
pub mod fl {
    pub const NAMESPACE: &str = "http://fitlayout.github.io/ontology/fitlayout.owl#";

    /// fl:Artifact - the common superclass of every artifact type
    pub const ARTIFACT: &str = "http://fitlayout.github.io/ontology/fitlayout.owl#Artifact";

    /// fl:createdOn - artifact creation timestamp
    pub const CREATED_ON: &str = "http://fitlayout.github.io/ontology/fitlayout.owl#createdOn";
}

/// Rendering (box model) ontology
pub mod b {
    pub const NAMESPACE: &str = "http://fitlayout.github.io/ontology/render.owl#";

    /// b:Page - a rendered web page artifact
    pub const PAGE: &str = "http://fitlayout.github.io/ontology/render.owl#Page";

    /// b:pngImage - the rendered page screenshot payload
    pub const PNG_IMAGE: &str = "http://fitlayout.github.io/ontology/render.owl#pngImage";
}

/// Segmentation ontology
pub mod segm {
    pub const NAMESPACE: &str = "http://fitlayout.github.io/ontology/segmentation.owl#";

    /// segm:AreaTree - a page segmentation result artifact
    pub const AREA_TREE: &str = "http://fitlayout.github.io/ontology/segmentation.owl#AreaTree";
}

/// Resource namespace for artifact IRIs
pub mod r {
    pub const NAMESPACE: &str = "http://fitlayout.github.io/resource/";
}

/// Canonical namespace-prefix header, v1.
///
/// Prepended to SPARQL query bodies by the query builder. Covers the
/// artifact, box and segmentation vocabularies plus the W3C base set.
pub const DEFAULT_PREFIXES: &str = "\
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
PREFIX fl: <http://fitlayout.github.io/ontology/fitlayout.owl#>
PREFIX b: <http://fitlayout.github.io/ontology/render.owl#>
PREFIX segm: <http://fitlayout.github.io/ontology/segmentation.owl#>
PREFIX r: <http://fitlayout.github.io/resource/>
";

/// The canonical prefix header as an owned string.
pub fn default_prefix_string() -> String {
    DEFAULT_PREFIXES.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_header_covers_every_namespace() {
        for ns in [
            rdf::NAMESPACE,
            rdfs::NAMESPACE,
            xsd::NAMESPACE,
            fl::NAMESPACE,
            b::NAMESPACE,
            segm::NAMESPACE,
            r::NAMESPACE,
        ] {
            assert!(
                DEFAULT_PREFIXES.contains(ns),
                "prefix header missing namespace {ns}"
            );
        }
    }

    #[test]
    fn constants_live_in_their_namespace() {
        assert!(fl::ARTIFACT.starts_with(fl::NAMESPACE));
        assert!(b::PAGE.starts_with(b::NAMESPACE));
        assert!(b::PNG_IMAGE.starts_with(b::NAMESPACE));
        assert!(segm::AREA_TREE.starts_with(segm::NAMESPACE));
        assert!(rdf::TYPE.starts_with(rdf::NAMESPACE));
        assert!(rdfs::SUB_CLASS_OF.starts_with(rdfs::NAMESPACE));
    }
}
