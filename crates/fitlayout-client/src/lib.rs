//! # FitLayout Repository Client
//!
//! Client-side orchestration layer for a remote FitLayout repository that
//! stores document-layout-analysis artifacts as RDF graphs. Covers the
//! repository access layer, the chunked bulk-import engine, the SPARQL
//! query builder, the artifact-service invocation protocol and the
//! artifact directory.
//!
//! Every operation is a single blocking HTTP round trip against the
//! repository; the client holds only immutable connection configuration
//! and never caches repository state.

pub mod artifacts;
pub mod graph;
pub mod import;
pub mod query;
pub mod repository;
pub mod service;

pub use fitlayout_core::{ArtifactRef, ClientError, ParamMap, RdfFormat};
pub use graph::GraphDocument;
pub use import::{ImportError, ImportReport, LineChunker};
pub use query::build_query;
pub use repository::RepositoryClient;
