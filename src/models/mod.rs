//! Data models shared across the pipeline.

pub mod listing;
pub mod request;

pub use listing::{ListingRecord, MetadataFields, ValuationFields};
pub use request::{CodeLocation, EncodingKind, RequestConfig, ReturnType};
