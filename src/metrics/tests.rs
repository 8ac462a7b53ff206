use super::*;
use crate::error::{AppError, AppResult};
use crate::http::Endpoint;
use std::time::Duration;

#[test]
fn empty_histogram_reports_zero_percentiles() -> AppResult<()> {
    let histogram = LatencyHistogram::new()?;
    if histogram.percentiles() != (0, 0, 0) || histogram.count() != 0 {
        return Err(AppError::validation("Expected empty histogram"));
    }
    Ok(())
}

#[test]
fn histogram_records_microseconds() -> AppResult<()> {
    let mut histogram = LatencyHistogram::new()?;
    for millis in 1..=100u64 {
        histogram.record(Duration::from_millis(millis))?;
    }
    histogram.record(Duration::ZERO)?;
    let (p50, _p90, p99) = histogram.percentiles();
    if histogram.count() != 101 {
        return Err(AppError::validation("Unexpected count"));
    }
    if !(49_000..=51_000).contains(&p50) {
        return Err(AppError::validation(format!("Unexpected p50: {}", p50)));
    }
    if !(98_000..=100_100).contains(&p99) {
        return Err(AppError::validation(format!("Unexpected p99: {}", p99)));
    }
    Ok(())
}

#[test]
fn run_metrics_split_by_endpoint_and_status() -> AppResult<()> {
    let mut metrics = RunMetrics::new()?;
    metrics.record_iteration();
    metrics.record_iteration();
    metrics.record_response(Endpoint::Url, 201, Duration::from_millis(3))?;
    metrics.record_response(Endpoint::Url, 500, Duration::from_millis(4))?;
    metrics.record_response(Endpoint::Snippet, 200, Duration::from_millis(5))?;
    metrics.record_transport_error(Endpoint::Tags);

    let url = metrics.endpoint(Endpoint::Url);
    let expected_url = EndpointStats {
        requests: 2,
        success: 1,
        non_success: 1,
        transport_errors: 0,
    };
    if url != expected_url {
        return Err(AppError::validation(format!("Unexpected url stats: {:?}", url)));
    }
    let totals = metrics.totals();
    if totals.requests != 4 || totals.transport_errors != 1 || totals.success != 2 {
        return Err(AppError::validation(format!("Unexpected totals: {:?}", totals)));
    }
    if metrics.iterations() != 2 {
        return Err(AppError::validation("Unexpected iteration count"));
    }
    Ok(())
}

#[test]
fn summary_lists_every_endpoint() -> AppResult<()> {
    let mut metrics = RunMetrics::new()?;
    metrics.record_response(Endpoint::Url, 200, Duration::from_micros(1_500))?;
    let lines = metrics.summary_lines();
    for endpoint in Endpoint::ALL {
        let path = endpoint.path();
        if !lines.iter().any(|line| line.contains(path)) {
            return Err(AppError::validation(format!("Missing {} in summary", path)));
        }
    }
    if !lines.iter().any(|line| line == "Total Requests: 1") {
        return Err(AppError::validation(format!("Unexpected summary: {:?}", lines)));
    }
    Ok(())
}
