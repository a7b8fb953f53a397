//! Sources of listing data for the pipeline.

pub mod bridge;
pub mod traits;

pub use bridge::BridgeDataSource;
pub use traits::{DataSourceError, ListingDataSource};
