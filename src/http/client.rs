use std::collections::BTreeMap;

use reqwest::{Client, Url};

use crate::{
    args::{DEFAULT_USER_AGENT, SeederArgs},
    error::{AppError, AppResult, HttpError},
};

use super::Endpoint;

/// Absolute URL for every endpoint, resolved once per run.
#[derive(Debug, Clone)]
pub struct EndpointUrls {
    urls: BTreeMap<Endpoint, Url>,
}

impl EndpointUrls {
    /// Validates `base_url` and appends each endpoint path to it.
    ///
    /// Paths are appended rather than joined so a base URL with a path
    /// prefix (`http://host/api`) keeps that prefix.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is not an absolute http(s) URL.
    pub fn parse(base_url: &str) -> AppResult<Self> {
        let base = Url::parse(base_url).map_err(|err| {
            AppError::http(HttpError::InvalidBaseUrl {
                url: base_url.to_owned(),
                source: err,
            })
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::http(HttpError::UnsupportedScheme {
                url: base_url.to_owned(),
            }));
        }

        let trimmed = base.as_str().trim_end_matches('/');
        let mut urls = BTreeMap::new();
        for endpoint in Endpoint::ALL {
            let joined = format!("{}{}", trimmed, endpoint.path());
            let url = Url::parse(&joined).map_err(|err| {
                AppError::http(HttpError::JoinUrlFailed {
                    path: endpoint.path(),
                    source: err,
                })
            })?;
            urls.insert(endpoint, url);
        }
        Ok(Self { urls })
    }

    #[must_use]
    pub fn get(&self, endpoint: Endpoint) -> Option<&Url> {
        self.urls.get(&endpoint)
    }
}

/// Builds the shared HTTP client for a run.
///
/// # Errors
///
/// Returns an error when the client cannot be constructed.
pub fn build_client(args: &SeederArgs) -> AppResult<Client> {
    Client::builder()
        .timeout(args.request_timeout)
        .connect_timeout(args.connect_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
