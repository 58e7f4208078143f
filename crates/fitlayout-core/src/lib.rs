//! # FitLayout Client Core
//!
//! Shared data model for the FitLayout repository client:
//! serialization formats, vocabulary constants, parameter maps,
//! artifact references and the error taxonomy.
//!
//! This crate performs no I/O of any kind; everything network- or
//! file-related lives in `fitlayout-client`.

pub mod error;
pub mod format;
pub mod model;
pub mod params;
pub mod vocab;

pub use error::ClientError;
pub use format::RdfFormat;
pub use model::ArtifactRef;
pub use params::{merge_params, ParamMap};
