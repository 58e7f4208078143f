//! SPARQL query assembly
//!
//! Purely textual: prepends the canonical namespace-prefix header to a
//! caller-supplied query body. The builder never rewrites the body - if
//! a query already declares a conflicting prefix, the SPARQL engine's
//! duplicate-prefix error propagates unchanged.

use fitlayout_core::vocab;

/// Assemble a SPARQL query from a body.
///
/// With `auto_prefix` the canonical prefix block (rdf, rdfs, xsd, fl, b,
/// segm, r) is prepended; otherwise the body passes through unchanged.
pub fn build_query(body: &str, auto_prefix: bool) -> String {
    if auto_prefix {
        format!("{}{}", vocab::DEFAULT_PREFIXES, body)
    } else {
        body.to_string()
    }
}

/// SELECT query listing artifacts: every entity whose declared type is a
/// subclass of `fl:Artifact`, optionally constrained to one exact type.
pub(crate) fn artifact_list_query(type_filter: Option<&str>) -> String {
    let filter = match type_filter {
        Some(artifact_type) => format!("    FILTER (?type = <{artifact_type}>)\n"),
        None => String::new(),
    };
    let body = format!(
        "SELECT ?artifact ?type WHERE {{\n\
         \x20   ?artifact rdf:type ?type .\n\
         \x20   ?type rdfs:subClassOf fl:Artifact .\n\
         {filter}}}"
    );
    build_query(&body, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_prefix_prepends_canonical_block() {
        let query = build_query("SELECT * WHERE { ?s ?p ?o }", true);
        assert!(query.starts_with(vocab::DEFAULT_PREFIXES));
        assert!(query.ends_with("SELECT * WHERE { ?s ?p ?o }"));
    }

    #[test]
    fn without_auto_prefix_body_is_unchanged() {
        let body = "PREFIX ex: <http://example.org/>\nSELECT * WHERE { ?s ex:p ?o }";
        assert_eq!(build_query(body, false), body);
    }

    #[test]
    fn artifact_listing_selects_subclasses_of_artifact() {
        let query = artifact_list_query(None);
        assert!(query.starts_with(vocab::DEFAULT_PREFIXES));
        assert!(query.contains("rdfs:subClassOf fl:Artifact"));
        assert!(!query.contains("FILTER"));
    }

    #[test]
    fn artifact_listing_with_type_filter() {
        let query = artifact_list_query(Some(vocab::b::PAGE));
        assert!(query.contains("FILTER (?type = <http://fitlayout.github.io/ontology/render.owl#Page>)"));
    }
}
