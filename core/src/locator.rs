//! URL and URN construction from domain, namespace and path segments.

use std::fmt;

use crate::config::Scheme;

/// Domain plus the ordered path pieces accumulated by a chain.
///
/// `url()` is `scheme://domain` with no trailing slash, `urn()` is the
/// namespace followed by every segment joined with `/` behind a single
/// leading `/`. An absent namespace is skipped; empty segments are kept as
/// empty path components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    scheme: Scheme,
    domain: String,
    namespace: Option<String>,
    segments: Vec<String>,
}

impl Locator {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            scheme: Scheme::Https,
            domain: domain.into(),
            namespace: None,
            segments: Vec::new(),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Append the string form of `segment` to the path.
    pub fn push(&mut self, segment: impl fmt::Display) {
        self.segments.push(segment.to_string());
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn url(&self) -> String {
        format!("{}://{}", self.scheme.as_str(), self.domain)
    }

    pub fn urn(&self) -> String {
        let parts: Vec<&str> = self
            .namespace
            .iter()
            .chain(self.segments.iter())
            .map(String::as_str)
            .collect();
        format!("/{}", parts.join("/"))
    }

    pub fn build(&self) -> String {
        format!("{}{}", self.url(), self.urn())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
