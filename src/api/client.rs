//! SOS feed HTTP client
//!
//! Reads pages of the SOS feed over HTTP.

use crate::api::SosApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::fetching;
use crate::environment::Environment;
use crate::sos::ApiResponse;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("flood-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SosClient {
    client: Client,
    environment: Environment,
}

impl SosClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(fetching::connect_timeout())
            .timeout(fetching::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self) -> String {
        self.environment.api_url().trim_end_matches('/').to_string()
    }

    fn decode_response(bytes: &[u8]) -> Result<ApiResponse, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl SosApi for SosClient {
    fn source_label(&self) -> String {
        format!("{} ({})", self.environment, self.build_url())
    }

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ApiResponse, ApiError> {
        let url = self.build_url();
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names_environment_and_url() {
        let client = SosClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:9/api/sos/".to_string(),
        })
        .unwrap();
        assert_eq!(client.source_label(), "Custom (http://127.0.0.1:9/api/sos)");
    }

    #[test]
    fn test_decode_response_rejects_non_json() {
        let err = SosClient::decode_response(b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    // Nothing listens on the discard port, so the request fails at the transport layer.
    async fn test_unreachable_server_is_a_transport_error() {
        let client = SosClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:9/api/sos".to_string(),
        })
        .unwrap();
        let err = client.fetch_page(1, 10).await.unwrap_err();
        assert!(matches!(err, ApiError::Reqwest(_)));
        assert!(err.should_retry());
    }
}
