use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_MAX_TAGS};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize,
};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Generate random URLs, tags and snippets and post them to a bookmark server for load and integration testing."
)]
pub struct SeederArgs {
    /// Base URL of the target server
    #[arg(
        long = "base-url",
        short = 'u',
        env = "LINKSEED_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Number of iterations; each may post a URL, a snippet, both, or neither
    #[arg(long = "items", short = 'n', default_value = "1000", value_parser = parse_positive_u64)]
    pub items: PositiveU64,

    /// Maximum number of tags attached to a generated item
    #[arg(long = "max-tags", default_value_t = DEFAULT_MAX_TAGS)]
    pub max_tags: usize,

    /// Length of the random path segment in generated URLs
    #[arg(long = "path-length", default_value = "5", value_parser = parse_positive_usize)]
    pub path_length: PositiveUsize,

    /// Seed the random generator for a reproducible run
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Print the JSON payloads instead of sending them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Log transport errors and continue instead of aborting the run
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Skip the end-of-run summary
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Path to a TOML or JSON config file (defaults to ./linkseed.toml or ./linkseed.json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LINKSEED_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
