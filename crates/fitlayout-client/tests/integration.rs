// Integration tests for the FitLayout client surface.
// These cover everything observable without a live repository: format
// validation ordering, query assembly, chunking behavior and the
// pre-network failure guarantees.

use fitlayout_client::{build_query, ClientError, LineChunker, RdfFormat, RepositoryClient};
use fitlayout_core::params::{merge_params, render_defaults};
use fitlayout_core::vocab;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;

fn offline_client() -> RepositoryClient {
    // Port 1 on loopback is unroutable; any accidental network call
    // fails as Connectivity, which the assertions below would catch.
    RepositoryClient::new("http://127.0.0.1:1", "default").unwrap()
}

#[test]
fn unsupported_dump_format_is_rejected_before_the_network() {
    let err = offline_client().dump("pdf", None).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, ClientError::UnsupportedFormat { .. }));
    for name in ["turtle", "n3", "json-ld", "xml", "nquads"] {
        assert!(msg.contains(name));
    }
}

#[test]
fn import_of_missing_file_never_touches_the_network() {
    let err = offline_client()
        .import_file(Path::new("/no/such/file.nq"), RdfFormat::NQuads, None)
        .unwrap_err();
    assert!(matches!(err.source, ClientError::SourceNotFound { .. }));
    assert_eq!(err.chunks_sent, 0);
}

#[test]
fn failed_chunked_import_reports_zero_progress_when_first_write_fails() {
    let mut source = tempfile::NamedTempFile::new().unwrap();
    for i in 0..10 {
        writeln!(source, "<http://x/s{i}> <http://x/p> <http://x/o{i}> <http://x/g> .").unwrap();
    }

    let err = offline_client()
        .import_file(source.path(), RdfFormat::NQuads, Some(4))
        .unwrap_err();

    // The first chunk write hits the unroutable endpoint and aborts the
    // remaining chunks; no progress was made and the report says so.
    assert!(matches!(err.source, ClientError::Connectivity(_)));
    assert_eq!(err.chunks_sent, 0);
    assert_eq!(err.lines_sent, 0);
}

#[test]
fn chunker_splits_a_250_line_payload_as_100_100_50() {
    let payload: String = (0..250)
        .map(|i| format!("<http://x/s{i}> <http://x/p> <http://x/o> <http://x/g> .\n"))
        .collect();
    let sizes: Vec<usize> = LineChunker::new(Cursor::new(payload.as_str()), 100)
        .map(|chunk| chunk.unwrap().lines)
        .collect();
    assert_eq!(sizes, vec![100, 100, 50]);
}

#[test]
fn query_builder_contract() {
    let body = "SELECT ?s WHERE { ?s a b:Page }";
    assert!(build_query(body, true).starts_with(vocab::DEFAULT_PREFIXES));
    assert_eq!(build_query(body, false), body);
}

#[test]
fn render_parameter_merge_favors_caller() {
    let mut overrides = fitlayout_core::ParamMap::new();
    overrides.insert("width".to_string(), serde_json::json!(1920));

    let params = merge_params(render_defaults("http://example.org/", 1200, 800), overrides);
    assert_eq!(params.get("width"), Some(&serde_json::json!(1920)));
    assert_eq!(params.get("height"), Some(&serde_json::json!(800)));
}

#[test]
fn client_configuration_is_stable_after_construction() {
    let client = RepositoryClient::new("http://fitlayout.example.org:8080/api/", "demo").unwrap();
    assert_eq!(client.base_url(), "http://fitlayout.example.org:8080/api/demo");
    assert_eq!(client.repo_id(), "demo");
}
