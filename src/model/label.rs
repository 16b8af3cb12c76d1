//! Label models
//!
//! A label is a (kind, value) classification attached to a test result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification kind of a label.
///
/// The known kinds cover the standard reporting vocabulary; anything else
/// round-trips through `Custom`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelKind {
    Epic,
    Feature,
    Story,
    ParentSuite,
    Suite,
    SubSuite,
    Severity,
    Thread,
    Host,
    Tag,
    Framework,
    Language,
    Owner,
    Custom(String),
}

impl LabelKind {
    pub fn as_str(&self) -> &str {
        match self {
            LabelKind::Epic => "epic",
            LabelKind::Feature => "feature",
            LabelKind::Story => "story",
            LabelKind::ParentSuite => "parentSuite",
            LabelKind::Suite => "suite",
            LabelKind::SubSuite => "subSuite",
            LabelKind::Severity => "severity",
            LabelKind::Thread => "thread",
            LabelKind::Host => "host",
            LabelKind::Tag => "tag",
            LabelKind::Framework => "framework",
            LabelKind::Language => "language",
            LabelKind::Owner => "owner",
            LabelKind::Custom(name) => name,
        }
    }
}

impl From<&str> for LabelKind {
    fn from(s: &str) -> Self {
        match s {
            "epic" => LabelKind::Epic,
            "feature" => LabelKind::Feature,
            "story" => LabelKind::Story,
            "parentSuite" | "parent_suite" => LabelKind::ParentSuite,
            "suite" => LabelKind::Suite,
            "subSuite" | "sub_suite" => LabelKind::SubSuite,
            "severity" => LabelKind::Severity,
            "thread" => LabelKind::Thread,
            "host" => LabelKind::Host,
            "tag" => LabelKind::Tag,
            "framework" => LabelKind::Framework,
            "language" => LabelKind::Language,
            "owner" => LabelKind::Owner,
            other => LabelKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for LabelKind {
    fn from(s: String) -> Self {
        LabelKind::from(s.as_str())
    }
}

impl From<LabelKind> for String {
    fn from(kind: LabelKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single (kind, value) label pair
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label {
    pub kind: LabelKind,
    pub value: String,
}

impl Label {
    pub fn new(kind: LabelKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(LabelKind::from("severity"), LabelKind::Severity);
        assert_eq!(LabelKind::Severity.as_str(), "severity");
        assert_eq!(LabelKind::from("parentSuite"), LabelKind::ParentSuite);
        assert_eq!(LabelKind::from("parent_suite"), LabelKind::ParentSuite);
    }

    #[test]
    fn test_unknown_kind_is_custom() {
        let kind = LabelKind::from("team");
        assert_eq!(kind, LabelKind::Custom("team".to_string()));
        assert_eq!(kind.as_str(), "team");
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&LabelKind::SubSuite).unwrap();
        assert_eq!(json, "\"subSuite\"");
        let kind: LabelKind = serde_json::from_str("\"team\"").unwrap();
        assert_eq!(kind, LabelKind::Custom("team".to_string()));
    }

    #[test]
    fn test_label_display() {
        let label = Label::new(LabelKind::Severity, "critical");
        assert_eq!(label.to_string(), "severity=critical");
    }
}
