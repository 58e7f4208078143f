//! Artifact service invocation
//!
//! A service invocation is a single synchronous round trip: the
//! repository executes the named transformation, persists any resulting
//! artifact, and answers with the new artifact's reference. Chaining
//! steps (render, then segment the produced page) is the caller's
//! responsibility - pass the first invocation's IRI as the next one's
//! input. No retries are performed here; a failed invocation surfaces
//! the repository's error response as-is.

use crate::repository::RepositoryClient;
use fitlayout_core::model::services;
use fitlayout_core::params::{merge_params, render_defaults, segmentation_defaults};
use fitlayout_core::{ClientError, ParamMap};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// Wire shape of the service-invocation request.
#[derive(Debug, Serialize)]
struct InvocationRequest<'a> {
    #[serde(rename = "serviceId")]
    service_id: &'a str,
    #[serde(rename = "parentIri")]
    parent_iri: Option<&'a str>,
    params: &'a ParamMap,
}

/// Pull the produced artifact IRI out of an invocation response.
fn artifact_iri(response: &Value) -> Result<String, ClientError> {
    response
        .get("iri")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "service response carries no artifact IRI: {response}"
            ))
        })
}

impl RepositoryClient {
    /// Invoke a named remote transformation service.
    ///
    /// `input_iri` is the artifact the service consumes; `None` for
    /// source-creating services such as URL rendering. The response body
    /// is returned to the caller unmodified.
    pub fn invoke_service(
        &self,
        service_id: &str,
        input_iri: Option<&str>,
        params: ParamMap,
    ) -> Result<Value, ClientError> {
        let url = self.endpoint("service");
        debug!(%url, service_id, ?input_iri, "service invocation");

        let request = InvocationRequest {
            service_id,
            parent_iri: input_iri,
            params: &params,
        };
        let response = self
            .http()
            .post(&url)
            .json(&request)
            .send()
            .map_err(Self::map_network_error)?;
        let value: Value = Self::check(response)?
            .json()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        info!(service_id, "service invocation completed");
        Ok(value)
    }

    /// Render a URL into a new Page artifact via `FitLayout.Puppeteer`.
    ///
    /// Starts from the well-known rendering defaults (1200x800 viewport);
    /// entries in `overrides` win on key collision. Returns the produced
    /// Page artifact IRI.
    pub fn render_page(&self, url: &str, overrides: ParamMap) -> Result<String, ClientError> {
        let params = merge_params(render_defaults(url, 1200, 800), overrides);
        let response = self.invoke_service(services::RENDER_PUPPETEER, None, params)?;
        artifact_iri(&response)
    }

    /// Segment a Page artifact into a new AreaTree via
    /// `FitLayout.BasicAreas`. Returns the produced AreaTree IRI.
    pub fn segment_page(
        &self,
        page_iri: &str,
        overrides: ParamMap,
    ) -> Result<String, ClientError> {
        let params = merge_params(segmentation_defaults(false), overrides);
        let response = self.invoke_service(services::BASIC_AREAS, Some(page_iri), params)?;
        artifact_iri(&response)
    }
}
