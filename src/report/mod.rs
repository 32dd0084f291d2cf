//! Console and file reports for the non-interactive commands

pub mod console;
pub mod export;

pub use console::summary_table;
pub use export::{Report, default_report_name};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
