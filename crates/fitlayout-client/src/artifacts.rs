//! Artifact directory: listing, resolution and whole-repository export
//!
//! Listing runs a SPARQL SELECT over every entity whose declared type is
//! a subclass of `fl:Artifact` and lazily maps the result bindings into
//! `(iri, type)` pairs. Pairs come back in whatever order the repository
//! returned them - no ordering is assumed or imposed - and the sequence
//! restarts by calling `artifacts` again. Fetch, image, info and delete
//! by IRI are direct repository operations on [`RepositoryClient`].

use crate::graph::GraphDocument;
use crate::query::artifact_list_query;
use crate::repository::RepositoryClient;
use fitlayout_core::{ArtifactRef, ClientError, RdfFormat};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Map one SPARQL JSON result binding to an artifact reference.
///
/// Bindings missing either variable are skipped rather than failing the
/// whole listing.
fn binding_to_ref(binding: &Value) -> Option<ArtifactRef> {
    let iri = binding.pointer("/artifact/value")?.as_str()?;
    let artifact_type = binding.pointer("/type/value")?.as_str()?;
    Some(ArtifactRef::new(iri, artifact_type))
}

/// Turn a SPARQL results document into a lazy sequence of artifact refs.
pub(crate) fn artifact_refs_from_results(
    results: Value,
) -> Result<impl Iterator<Item = ArtifactRef>, ClientError> {
    let bindings = results
        .pointer("/results/bindings")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| {
            ClientError::InvalidResponse("SPARQL results carry no bindings array".to_string())
        })?;
    Ok(bindings
        .into_iter()
        .filter_map(|binding| binding_to_ref(&binding)))
}

impl RepositoryClient {
    /// List artifacts in the repository, optionally constrained to one
    /// exact RDF type.
    pub fn artifacts(
        &self,
        type_filter: Option<&str>,
    ) -> Result<impl Iterator<Item = ArtifactRef>, ClientError> {
        debug!(?type_filter, "artifact listing");
        let results = self.query(&artifact_list_query(type_filter))?;
        artifact_refs_from_results(results)
    }

    /// Export the whole repository graph, optionally writing it to a file.
    ///
    /// The format name is resolved before anything else, so an unknown
    /// name performs zero HTTP calls.
    pub fn dump(
        &self,
        format_name: &str,
        output: Option<&Path>,
    ) -> Result<GraphDocument, ClientError> {
        let format = RdfFormat::from_name(format_name)?;
        let document = self.get_statements(format)?;
        if let Some(path) = output {
            document.write_to(path)?;
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sparql_results() -> Value {
        json!({
            "head": { "vars": ["artifact", "type"] },
            "results": {
                "bindings": [
                    {
                        "artifact": { "type": "uri", "value": "http://fitlayout.github.io/resource/page1" },
                        "type": { "type": "uri", "value": "http://fitlayout.github.io/ontology/render.owl#Page" }
                    },
                    {
                        "artifact": { "type": "uri", "value": "http://fitlayout.github.io/resource/tree1" },
                        "type": { "type": "uri", "value": "http://fitlayout.github.io/ontology/segmentation.owl#AreaTree" }
                    }
                ]
            }
        })
    }

    #[test]
    fn bindings_map_to_refs_in_repository_order() {
        let refs: Vec<ArtifactRef> = artifact_refs_from_results(sparql_results())
            .unwrap()
            .collect();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].iri, "http://fitlayout.github.io/resource/page1");
        assert_eq!(
            refs[1].artifact_type,
            "http://fitlayout.github.io/ontology/segmentation.owl#AreaTree"
        );
    }

    #[test]
    fn incomplete_bindings_are_skipped() {
        let results = json!({
            "results": {
                "bindings": [
                    { "artifact": { "type": "uri", "value": "http://x/a" } },
                    {
                        "artifact": { "type": "uri", "value": "http://x/b" },
                        "type": { "type": "uri", "value": "http://x/T" }
                    }
                ]
            }
        });
        let refs: Vec<ArtifactRef> = artifact_refs_from_results(results).unwrap().collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].iri, "http://x/b");
    }

    #[test]
    fn missing_bindings_array_is_invalid() {
        let err = match artifact_refs_from_results(json!({"boolean": true})) {
            Ok(_) => panic!("expected an error for missing bindings array"),
            Err(e) => e,
        };
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn dump_with_unknown_format_makes_no_http_call() {
        // Unroutable URL: any network attempt would show up as
        // Connectivity, not UnsupportedFormat.
        let client = RepositoryClient::new("http://127.0.0.1:1", "default").unwrap();
        let err = client.dump("pdf", None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::UnsupportedFormat { ref format } if format == "pdf"
        ));
    }
}
