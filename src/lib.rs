//! Main library crate for the DDC dataset builder

pub mod common;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod observability;
pub mod pipeline;
pub mod registry;

// Re-export commonly used types
pub use common::error::{BuildError, Result};
pub use domain::{DatasetKind, Record};
pub use pipeline::{BuildReport, DatasetPipeline};
