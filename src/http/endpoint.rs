use std::fmt;

/// Server routes the seeder posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    Url,
    Tags,
    Snippet,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Url, Endpoint::Tags, Endpoint::Snippet];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Url => "/urls/url",
            Endpoint::Tags => "/urls/tags",
            Endpoint::Snippet => "/snippets",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POST {}", self.path())
    }
}
