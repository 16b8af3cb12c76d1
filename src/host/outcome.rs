//! Captured test outcomes
//!
//! What the host hands over after running a test: the raised exception,
//! if any, and the per-phase report flags.

use serde::{Deserialize, Serialize};

/// How the host classifies a raised exception.
///
/// `Assertion` covers plain assertion failures, `Failure` the runner's
/// explicit-fail exception, `Skip` its explicit-skip exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    Assertion,
    Failure,
    Skip,
    Other,
}

/// A captured exception: classification, type name, message, traceback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub kind: ExceptionKind,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub traceback: String,
}

impl ExceptionInfo {
    pub fn new(kind: ExceptionKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            message: String::new(),
            traceback: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = traceback.into();
        self
    }
}

/// Result of running a single test phase
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excinfo: Option<ExceptionInfo>,
}

impl Outcome {
    /// An outcome that raised nothing
    pub fn passed() -> Self {
        Self { excinfo: None }
    }

    /// An outcome that raised the given exception
    pub fn raised(excinfo: ExceptionInfo) -> Self {
        Self {
            excinfo: Some(excinfo),
        }
    }
}

/// Per-phase report flags as exposed by the host runner.
///
/// The host guarantees at most one flag is set; none set means the phase
/// errored outside the test body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    pub failed: bool,
    pub passed: bool,
    pub skipped: bool,
}

impl TestReport {
    pub fn failed() -> Self {
        Self {
            failed: true,
            ..Self::default()
        }
    }

    pub fn passed() -> Self {
        Self {
            passed: true,
            ..Self::default()
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}
