mod app;
mod args;
mod config;
mod entry;
mod error;
mod generate;
mod http;
mod logger;
mod metrics;
mod shutdown;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
