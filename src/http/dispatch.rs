use std::time::Instant;

use serde::Serialize;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, error};

use crate::{
    error::{AppError, AppResult, HttpError},
    metrics::RunMetrics,
};

use super::payload::{NewSnippet, NewUrl, UrlTags, join_tags};
use super::{Endpoint, PayloadSink, SinkResponse};

/// Turns generated values into requests against a sink and records the
/// outcome of each one.
pub struct Dispatcher<S> {
    sink: S,
    keep_going: bool,
    metrics: RunMetrics,
    shutdown_rx: Option<broadcast::Receiver<()>>,
    stopping: bool,
}

impl<S: PayloadSink> Dispatcher<S> {
    /// # Errors
    ///
    /// Returns an error if the run metrics cannot be initialized.
    pub fn new(sink: S, keep_going: bool) -> AppResult<Self> {
        Ok(Self {
            sink,
            keep_going,
            metrics: RunMetrics::new()?,
            shutdown_rx: None,
            stopping: false,
        })
    }

    /// Stops follow-up requests once a shutdown is broadcast on `shutdown_rx`.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown_rx: broadcast::Receiver<()>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    /// Whether a shutdown has been broadcast. Stays set once observed.
    pub fn stop_requested(&mut self) -> bool {
        if !self.stopping
            && let Some(shutdown_rx) = self.shutdown_rx.as_mut()
        {
            self.stopping = match shutdown_rx.try_recv() {
                Ok(()) | Err(TryRecvError::Lagged(_)) => true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => false,
            };
        }
        self.stopping
    }

    /// Creates the URL record, then attaches tags when there are any and no
    /// shutdown arrived in between.
    ///
    /// # Errors
    ///
    /// Returns a transport error unless `keep_going` is set.
    pub async fn send_url(&mut self, url: &str, tags: &[&str]) -> AppResult<()> {
        if let Some(response) = self.post(Endpoint::Url, &NewUrl { url }).await? {
            println!("URL Response ({}): {}", url, response.status);
        }

        if tags.is_empty() || self.stop_requested() {
            return Ok(());
        }
        let payload = UrlTags {
            url,
            tags: join_tags(tags),
        };
        if let Some(response) = self.post(Endpoint::Tags, &payload).await? {
            println!("Tags Response ({}): {}", url, response.status);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a transport error unless `keep_going` is set.
    pub async fn send_snippet(&mut self, url: &str, snippet: &str, tags: &[&str]) -> AppResult<()> {
        let payload = NewSnippet {
            url,
            snippet,
            tags: join_tags(tags),
        };
        if let Some(response) = self.post(Endpoint::Snippet, &payload).await? {
            println!(
                "Snippet Response (Snippet: {}): {}, {}",
                snippet, response.status, response.body
            );
        }
        Ok(())
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut RunMetrics {
        &mut self.metrics
    }

    pub fn into_parts(self) -> (S, RunMetrics) {
        (self.sink, self.metrics)
    }

    async fn post<P>(&mut self, endpoint: Endpoint, payload: &P) -> AppResult<Option<SinkResponse>>
    where
        P: Serialize,
    {
        let value = serde_json::to_value(payload)
            .map_err(|err| AppError::http(HttpError::EncodePayload { endpoint, source: err }))?;

        let started = Instant::now();
        match self.sink.post(endpoint, &value).await {
            Ok(response) => {
                let latency = started.elapsed();
                debug!("{} -> {} in {:?}", endpoint, response.status, latency);
                self.metrics
                    .record_response(endpoint, response.status, latency)?;
                Ok(Some(response))
            }
            Err(err) => {
                self.metrics.record_transport_error(endpoint);
                if self.keep_going {
                    error!("{}", err);
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}
