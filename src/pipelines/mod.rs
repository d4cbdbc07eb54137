//! Pipelines.
//!
//! Batch pipelines over article archives, and
//! a light [pipeline::Pipeline] trait that they implement.
pub mod batch;
pub mod cleaning;
pub mod metadata;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod tagging;
pub mod types;

pub use cleaning::{CleanPipeline, CleanReport};
pub use metadata::MetadataLookup;
pub use pipeline::Pipeline;
pub use tagging::{TagPipeline, TagReport};
