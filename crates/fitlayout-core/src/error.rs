//! Error taxonomy shared by the client and CLI crates

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the FitLayout repository client.
///
/// Local validation errors (`Usage`, `UnsupportedFormat`, `SourceNotFound`)
/// are raised before any network side effect occurs. Network and server
/// errors propagate unchanged to the caller; no operation retries
/// internally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Bad arguments; fails fast, no network call.
    #[error("usage error: {0}")]
    Usage(String),

    /// Unknown serialization format name, rejected before any I/O.
    #[error("unsupported format '{format}', expected one of: turtle, n3, json-ld, xml, nquads")]
    UnsupportedFormat { format: String },

    /// Local import source file does not exist.
    #[error("source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Non-success HTTP status from the repository, with the response body.
    #[error("repository returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure (DNS, connection refused, timeout).
    #[error("connection failed: {0}")]
    Connectivity(String),

    /// A 2xx response whose body could not be decoded as expected.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Local file I/O failure while reading an import source or writing a dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
