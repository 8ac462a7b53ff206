use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::error::AppResult;
use crate::http::Endpoint;

use super::LatencyHistogram;

/// Microseconds per millisecond.
const US_PER_MS: u64 = 1_000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EndpointStats {
    pub requests: u64,
    pub success: u64,
    pub non_success: u64,
    pub transport_errors: u64,
}

/// Counters and latencies for one run.
#[derive(Debug)]
pub struct RunMetrics {
    started: Instant,
    iterations: u64,
    endpoints: BTreeMap<Endpoint, EndpointStats>,
    latency: LatencyHistogram,
}

impl RunMetrics {
    /// # Errors
    ///
    /// Returns an error if the latency histogram cannot be created.
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            started: Instant::now(),
            iterations: 0,
            endpoints: BTreeMap::new(),
            latency: LatencyHistogram::new()?,
        })
    }

    pub fn record_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// # Errors
    ///
    /// Returns an error if the latency cannot be recorded.
    pub fn record_response(
        &mut self,
        endpoint: Endpoint,
        status: u16,
        latency: Duration,
    ) -> AppResult<()> {
        let stats = self.endpoints.entry(endpoint).or_default();
        stats.requests = stats.requests.saturating_add(1);
        if (200..300).contains(&status) {
            stats.success = stats.success.saturating_add(1);
        } else {
            stats.non_success = stats.non_success.saturating_add(1);
        }
        self.latency.record(latency)
    }

    pub fn record_transport_error(&mut self, endpoint: Endpoint) {
        let stats = self.endpoints.entry(endpoint).or_default();
        stats.requests = stats.requests.saturating_add(1);
        stats.transport_errors = stats.transport_errors.saturating_add(1);
    }

    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn endpoint(&self, endpoint: Endpoint) -> EndpointStats {
        self.endpoints.get(&endpoint).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn totals(&self) -> EndpointStats {
        self.endpoints
            .values()
            .fold(EndpointStats::default(), |acc, stats| EndpointStats {
                requests: acc.requests.saturating_add(stats.requests),
                success: acc.success.saturating_add(stats.success),
                non_success: acc.non_success.saturating_add(stats.non_success),
                transport_errors: acc.transport_errors.saturating_add(stats.transport_errors),
            })
    }

    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let totals = self.totals();
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let (p50, p90, p99) = self.latency.percentiles();

        let mut lines = vec![
            format!("Duration: {}", format_micros(elapsed_ms.saturating_mul(US_PER_MS))),
            format!("Iterations: {}", self.iterations),
            format!("Total Requests: {}", totals.requests),
        ];
        for endpoint in Endpoint::ALL {
            let stats = self.endpoint(endpoint);
            lines.push(format!(
                "  {}: {} (2xx {}, other {}, transport errors {})",
                endpoint,
                stats.requests,
                stats.success,
                stats.non_success,
                stats.transport_errors
            ));
        }
        lines.push(format!("Successful: {}", totals.success));
        lines.push(format!("Non-2xx Status: {}", totals.non_success));
        lines.push(format!("Transport Errors: {}", totals.transport_errors));
        lines.push(format!(
            "P50/P90/P99 Latency: {} / {} / {}",
            format_micros(p50),
            format_micros(p90),
            format_micros(p99)
        ));
        lines.push(format!("Max Latency: {}", format_micros(self.latency.max())));
        lines
    }
}

fn format_micros(micros: u64) -> String {
    format!("{}.{:03}ms", micros / US_PER_MS, micros % US_PER_MS)
}
