//! RDF serialization formats and their MIME type bindings

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of RDF serializations the repository speaks.
///
/// Each format is bound 1:1 to a MIME type; the format selects the
/// `Accept` header on reads and the `Content-Type` header on writes.
/// Only the line-oriented formats (`nquads`, `n3`) may be split into
/// chunks on bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RdfFormat {
    #[serde(rename = "turtle")]
    Turtle,
    #[serde(rename = "n3")]
    N3,
    #[serde(rename = "json-ld")]
    JsonLd,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "nquads")]
    NQuads,
}

impl RdfFormat {
    /// All formats, in canonical declaration order.
    pub const ALL: [RdfFormat; 5] = [
        RdfFormat::Turtle,
        RdfFormat::N3,
        RdfFormat::JsonLd,
        RdfFormat::Xml,
        RdfFormat::NQuads,
    ];

    /// Canonical format name as accepted by `from_name`.
    pub fn name(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::N3 => "n3",
            RdfFormat::JsonLd => "json-ld",
            RdfFormat::Xml => "xml",
            RdfFormat::NQuads => "nquads",
        }
    }

    /// MIME type sent in `Accept`/`Content-Type` headers.
    pub fn mime_type(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::N3 => "text/rdf+n3",
            RdfFormat::JsonLd => "application/ld+json",
            RdfFormat::Xml => "application/rdf+xml",
            RdfFormat::NQuads => "application/n-quads",
        }
    }

    /// Resolve a format name.
    ///
    /// Rejects anything outside the closed set with
    /// [`ClientError::UnsupportedFormat`]; callers must do this before
    /// any request is constructed so an unknown name never reaches the
    /// network layer.
    pub fn from_name(name: &str) -> Result<RdfFormat, ClientError> {
        match name {
            "turtle" => Ok(RdfFormat::Turtle),
            "n3" => Ok(RdfFormat::N3),
            "json-ld" => Ok(RdfFormat::JsonLd),
            "xml" => Ok(RdfFormat::Xml),
            "nquads" => Ok(RdfFormat::NQuads),
            other => Err(ClientError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }

    /// Whether one source line is guaranteed to hold one whole statement.
    ///
    /// True for the line-oriented formats only; chunked import is defined
    /// for exactly these. This is an external property of the formats
    /// themselves, trusted rather than validated.
    pub fn supports_line_chunking(&self) -> bool {
        matches!(self, RdfFormat::N3 | RdfFormat::NQuads)
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RdfFormat::from_name(s)
    }
}
