//! Core types and data sources for the global temperature variance heat map.
//!
//! - `observation`: a single monthly reading
//! - `dataset`: the validated, immutable payload
//! - `source`: async loaders (HTTP behind the `api` feature, file, static)
//! - `error`: the `LoadError` taxonomy

pub mod dataset;
pub mod error;
pub mod observation;
pub mod source;

pub use dataset::Dataset;
pub use error::{LoadError, Result};
pub use observation::{month_name, Observation};
pub use source::{DataSource, FileSource, StaticSource, DEFAULT_URL};

#[cfg(feature = "api")]
pub use source::HttpSource;
