//! HTTP access layer for the remote FitLayout repository
//!
//! All repository endpoints hang off `<connection_url>/<repo_id>`. Every
//! operation is one blocking round trip; any non-success status is
//! surfaced as an error carrying the status code and response body, and
//! callers decide whether to retry.

use crate::graph::GraphDocument;
use fitlayout_core::{ClientError, RdfFormat};
use reqwest::blocking::{Client, Response};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// SPARQL results format requested from the query endpoint.
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Per-request timeout. Applies to each HTTP call individually, never to
/// a whole chunked transfer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one repository within a FitLayout server.
///
/// Holds only immutable configuration (base URL, repository ID) plus the
/// reused HTTP connection pool; safe to share by reference.
#[derive(Clone)]
pub struct RepositoryClient {
    http: Client,
    base_url: String,
    repo_id: String,
}

impl fmt::Debug for RepositoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryClient")
            .field("base_url", &self.base_url)
            .field("repo_id", &self.repo_id)
            .finish()
    }
}

impl RepositoryClient {
    /// Create a client for `repo_id` on the server at `connection_url`.
    ///
    /// Trailing slashes on the connection URL are stripped. The underlying
    /// HTTP client binds its local address to `0.0.0.0`, which keeps name
    /// resolution on IPv4 and avoids slow dual-stack lookups against
    /// typical local deployments.
    pub fn new(connection_url: &str, repo_id: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .build()
            .map_err(|e| ClientError::Connectivity(e.to_string()))?;

        Ok(Self {
            http,
            base_url: format!("{}/{}", connection_url.trim_end_matches('/'), repo_id),
            repo_id: repo_id.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Map a reqwest transport error to the client taxonomy.
    pub(crate) fn map_network_error(e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Connectivity(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ClientError::Connectivity(format!("connection failed: {e}"))
        } else {
            ClientError::Connectivity(e.to_string())
        }
    }

    /// Pass a 2xx response through, map anything else to `Http`.
    ///
    /// Reads the response body as text so the server's error message
    /// travels with the error.
    pub(crate) fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(ClientError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Liveness check against the repository.
    pub fn ping(&self) -> Result<(), ClientError> {
        let url = self.endpoint("ping");
        debug!(%url, "ping");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(Self::map_network_error)?;
        Self::check(response)?;
        Ok(())
    }

    /// Fetch the entire repository graph serialized in `format`.
    pub fn get_statements(&self, format: RdfFormat) -> Result<GraphDocument, ClientError> {
        let url = self.endpoint("repository/statements");
        debug!(%url, %format, "statement bulk fetch");
        let response = self
            .http
            .get(&url)
            .header("Accept", format.mime_type())
            .send()
            .map_err(Self::map_network_error)?;
        let body = Self::check(response)?
            .text()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(GraphDocument::new(format, body))
    }

    /// Insert serialized statements into the repository.
    pub fn post_statements(&self, format: RdfFormat, body: String) -> Result<(), ClientError> {
        let url = self.endpoint("repository/statements");
        debug!(%url, %format, bytes = body.len(), "statement bulk write");
        let response = self
            .http
            .post(&url)
            .header("Content-Type", format.mime_type())
            .body(body)
            .send()
            .map_err(Self::map_network_error)?;
        Self::check(response)?;
        Ok(())
    }

    /// Execute a SPARQL query, returning the parsed JSON results.
    pub fn query(&self, sparql: &str) -> Result<serde_json::Value, ClientError> {
        let url = self.endpoint("repository/query");
        debug!(%url, "sparql query");
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/sparql-query")
            .header("Accept", SPARQL_RESULTS_JSON)
            .body(sparql.to_string())
            .send()
            .map_err(Self::map_network_error)?;
        Self::check(response)?
            .json()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Fetch one artifact's graph serialized in `format`.
    pub fn get_artifact(&self, iri: &str, format: RdfFormat) -> Result<GraphDocument, ClientError> {
        self.artifact_fetch("artifact", iri, format)
    }

    /// Fetch one artifact's metadata, excluding heavy binary payloads
    /// such as the `b:pngImage` screenshot triple.
    pub fn get_artifact_info(
        &self,
        iri: &str,
        format: RdfFormat,
    ) -> Result<GraphDocument, ClientError> {
        self.artifact_fetch("artifact/info", iri, format)
    }

    fn artifact_fetch(
        &self,
        path: &str,
        iri: &str,
        format: RdfFormat,
    ) -> Result<GraphDocument, ClientError> {
        let url = self.endpoint(path);
        debug!(%url, %iri, %format, "artifact fetch");
        let response = self
            .http
            .get(&url)
            .query(&[("iri", iri)])
            .header("Accept", format.mime_type())
            .send()
            .map_err(Self::map_network_error)?;
        let body = Self::check(response)?
            .text()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(GraphDocument::new(format, body))
    }

    /// Fetch an artifact's rendered image as raw bytes.
    pub fn get_artifact_image(&self, iri: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint("artifact/image");
        debug!(%url, %iri, "artifact image fetch");
        let response = self
            .http
            .get(&url)
            .query(&[("iri", iri)])
            .send()
            .map_err(Self::map_network_error)?;
        let bytes = Self::check(response)?
            .bytes()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Delete an artifact and its graph from the repository.
    pub fn delete_artifact(&self, iri: &str) -> Result<(), ClientError> {
        let url = self.endpoint("artifact");
        debug!(%url, %iri, "artifact delete");
        let response = self
            .http
            .delete(&url)
            .query(&[("iri", iri)])
            .send()
            .map_err(Self::map_network_error)?;
        Self::check(response)?;
        Ok(())
    }
}
