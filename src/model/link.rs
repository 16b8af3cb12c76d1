//! Link models
//!
//! A link attaches an external URL or tracker id to a test result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an attached link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Link,
    Issue,
    Tms,
}

impl LinkKind {
    /// Parse from the host-side `link_type` value; unknown kinds fall
    /// back to a plain link.
    pub fn parse(s: &str) -> Self {
        match s {
            "issue" => LinkKind::Issue,
            "tms" | "test_case" => LinkKind::Tms,
            _ => LinkKind::Link,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Link => "link",
            LinkKind::Issue => "issue",
            LinkKind::Tms => "tms",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (kind, url, display-name) link triple, repeats allowed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub link_type: LinkKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Link {
    pub fn new(link_type: LinkKind, url: impl Into<String>) -> Self {
        Self {
            link_type,
            url: url.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(LinkKind::parse("issue"), LinkKind::Issue);
        assert_eq!(LinkKind::parse("tms"), LinkKind::Tms);
        assert_eq!(LinkKind::parse("anything-else"), LinkKind::Link);
    }

    #[test]
    fn test_link_serde() {
        let link = Link::new(LinkKind::Issue, "https://tracker/42").with_name("bug 42");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(
            json,
            "{\"type\":\"issue\",\"url\":\"https://tracker/42\",\"name\":\"bug 42\"}"
        );
    }

    #[test]
    fn test_link_without_name_skips_field() {
        let json = serde_json::to_string(&Link::new(LinkKind::Link, "https://x")).unwrap();
        assert_eq!(json, "{\"type\":\"link\",\"url\":\"https://x\"}");
    }
}
