//! Error handling for the SOS feed sources

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not a valid feed page.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The page decoded but carried `success: false`.
    #[error("Page {page} reported success=false")]
    Unsuccessful { page: u32 },

    /// Reading a local dump failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Classify error and determine appropriate log level
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Warn,

            // Critical: auth, wrong endpoint, malformed responses
            ApiError::Http { .. } => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,
            ApiError::Io(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
            ApiError::Unsuccessful { .. } => LogLevel::Warn,
        }
    }

    /// Determine if an error should trigger retry logic
    pub fn should_retry(&self) -> bool {
        match self {
            // Retry on network/connection errors
            ApiError::Reqwest(_) => true,

            // HTTP errors - check status code
            ApiError::Http { status, .. } => match *status {
                408 => true,
                // Rate limiting - back off until the next refresh instead
                429 => false,
                400..=499 => false,
                500..=599 => true,
                _ => false,
            },

            // Retrying would only repeat the same answer
            ApiError::Decode(_) | ApiError::Unsuccessful { .. } | ApiError::Io(_) => false,
        }
    }
}
