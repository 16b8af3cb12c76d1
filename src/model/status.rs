//! Test status models
//!
//! Defines the outcome classification and its optional details.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification of a test execution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
    Broken,
}

impl Status {
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Passed => "✓",
            Status::Failed => "✗",
            Status::Skipped => "○",
            Status::Broken => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Passed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => write!(f, "passed"),
            Status::Failed => write!(f, "failed"),
            Status::Skipped => write!(f, "skipped"),
            Status::Broken => write!(f, "broken"),
        }
    }
}

/// Human-readable message and trace attached to a status.
///
/// Either field may be empty while the other is present. Code building a
/// `StatusDetails` is expected to emit `None` instead when both are empty;
/// see `extract::status_details`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trace: String,
}

impl StatusDetails {
    pub fn new(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.trace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Passed.to_string(), "passed");
        assert_eq!(Status::Broken.to_string(), "broken");
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&Status::Failed).unwrap(), "\"failed\"");
        let status: Status = serde_json::from_str("\"skipped\"").unwrap();
        assert_eq!(status, Status::Skipped);
    }

    #[test]
    fn test_details_skip_empty_fields() {
        let details = StatusDetails::new("boom", "");
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, "{\"message\":\"boom\"}");
    }

    #[test]
    fn test_details_is_empty() {
        assert!(StatusDetails::default().is_empty());
        assert!(!StatusDetails::new("", "trace").is_empty());
    }
}
