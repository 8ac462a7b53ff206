use thiserror::Error;

use crate::http::Endpoint;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Failed to join '{path}' onto the base URL: {source}")]
    JoinUrlFailed {
        path: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("No URL resolved for {endpoint}.")]
    MissingEndpoint { endpoint: Endpoint },
    #[error("Request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read {endpoint} response body: {source}")]
    ReadBodyFailed {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to encode {endpoint} payload: {source}")]
    EncodePayload {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}
