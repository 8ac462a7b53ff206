//! Per-run request accounting and latency histograms.
mod histogram;
mod summary;

#[cfg(test)]
mod tests;

pub use histogram::LatencyHistogram;
pub use summary::{EndpointStats, RunMetrics};
