//! Payload encoding and delivery to the target server.
mod client;
mod dispatch;
mod endpoint;
pub mod payload;
mod sink;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{EndpointUrls, build_client};
pub use dispatch::Dispatcher;
pub use endpoint::Endpoint;
pub use sink::{DryRunSink, HttpSink, PayloadSink, SinkResponse};
