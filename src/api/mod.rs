use crate::api::error::ApiError;
use crate::sos::ApiResponse;

pub(crate) mod client;
pub mod error;
pub mod file;
pub mod pagination;

pub use client::SosClient;
pub use file::FileSource;
pub use pagination::{FetchOutcome, Paginator};

#[cfg(test)]
use mockall::automock;

/// A paged source of SOS records.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SosApi: Send + Sync {
    /// Human-readable description of where the records come from.
    fn source_label(&self) -> String;

    /// Fetches one page of at most `limit` records. Pages are numbered from 1.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ApiResponse, ApiError>;
}
