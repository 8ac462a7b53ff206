use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult, HttpError};

use super::{Endpoint, EndpointUrls};

/// What came back from a sink for one posted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkResponse {
    pub status: u16,
    pub body: String,
}

/// Destination for generated payloads.
#[async_trait]
pub trait PayloadSink: Send + Sync {
    /// Posts one JSON payload to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload could not be delivered at all.
    /// Non-2xx statuses are responses, not errors.
    async fn post(&self, endpoint: Endpoint, payload: &Value) -> AppResult<SinkResponse>;
}

/// Posts payloads to a live server.
pub struct HttpSink {
    client: Client,
    urls: EndpointUrls,
}

impl HttpSink {
    #[must_use]
    pub const fn new(client: Client, urls: EndpointUrls) -> Self {
        Self { client, urls }
    }
}

#[async_trait]
impl PayloadSink for HttpSink {
    async fn post(&self, endpoint: Endpoint, payload: &Value) -> AppResult<SinkResponse> {
        let url = self.urls.get(endpoint).cloned().ok_or_else(|| {
            AppError::http(HttpError::MissingEndpoint { endpoint })
        })?;
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| AppError::http(HttpError::RequestFailed { endpoint, source: err }))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::http(HttpError::ReadBodyFailed { endpoint, source: err }))?;
        Ok(SinkResponse { status, body })
    }
}

/// Prints payloads to stdout instead of sending them.
#[derive(Debug, Default)]
pub struct DryRunSink;

#[async_trait]
impl PayloadSink for DryRunSink {
    async fn post(&self, endpoint: Endpoint, payload: &Value) -> AppResult<SinkResponse> {
        println!("{} {}", endpoint, payload);
        Ok(SinkResponse {
            status: 200,
            body: String::new(),
        })
    }
}
