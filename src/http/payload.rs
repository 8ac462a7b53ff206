//! JSON request bodies. Tag lists travel as a single comma-separated string.
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NewUrl<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UrlTags<'a> {
    pub url: &'a str,
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct NewSnippet<'a> {
    pub url: &'a str,
    pub snippet: &'a str,
    pub tags: String,
}

#[must_use]
pub fn join_tags(tags: &[&str]) -> String {
    tags.join(",")
}
