pub(crate) const DEFAULT_USER_AGENT: &str = concat!("linkseed/", env!("CARGO_PKG_VERSION"));

/// Local development server the generated data is posted to.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub(crate) const DEFAULT_MAX_TAGS: usize = 5;
