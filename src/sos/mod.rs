//! SOS feed data model and district aggregation

pub mod aggregate;
pub mod category;
pub mod summary;
pub mod types;

pub use aggregate::{Snapshot, StatTotals};
pub use summary::DistrictSummary;
pub use types::{ApiResponse, ApiStats, Pagination, SosRecord};
