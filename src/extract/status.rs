//! Status derivation
//!
//! Maps captured exceptions and host report flags onto the closed
//! status enumeration.

use crate::host::{ExceptionInfo, ExceptionKind, Outcome, TestReport};
use crate::model::{Status, StatusDetails};

use super::naming::sanitize_text;

/// Classify a captured exception.
///
/// Priority order: assertion and explicit-fail exceptions win over the
/// generic classification, explicit skips come next, anything else is
/// broken. No exception means the test passed.
pub fn status(excinfo: Option<&ExceptionInfo>) -> Status {
    match excinfo {
        None => Status::Passed,
        Some(info) => match info.kind {
            ExceptionKind::Assertion | ExceptionKind::Failure => Status::Failed,
            ExceptionKind::Skip => Status::Skipped,
            ExceptionKind::Other => Status::Broken,
        },
    }
}

/// Status of a whole outcome
pub fn outcome_status(outcome: &Outcome) -> Status {
    status(outcome.excinfo.as_ref())
}

/// Build the message/trace details of a captured exception.
///
/// Both fields are sanitized for plain report text. When both come out
/// empty the result is absent, never an empty details object.
pub fn status_details(excinfo: Option<&ExceptionInfo>) -> Option<StatusDetails> {
    let info = excinfo?;
    let message = sanitize_text(&format_exception(info));
    let trace = sanitize_text(&info.traceback);
    if message.is_empty() && trace.is_empty() {
        None
    } else {
        Some(StatusDetails::new(message, trace))
    }
}

/// Details of a whole outcome
pub fn outcome_status_details(outcome: &Outcome) -> Option<StatusDetails> {
    status_details(outcome.excinfo.as_ref())
}

/// Map host report flags onto a status.
///
/// Failed, passed, and skipped are checked in that fixed priority. The
/// host sets at most one flag; none set means the phase errored outside
/// the test body, which reports as broken.
pub fn report_status(report: &TestReport) -> Status {
    if report.failed {
        Status::Failed
    } else if report.passed {
        Status::Passed
    } else if report.skipped {
        Status::Skipped
    } else {
        Status::Broken
    }
}

fn format_exception(info: &ExceptionInfo) -> String {
    match (info.type_name.is_empty(), info.message.is_empty()) {
        (true, true) => String::new(),
        (true, false) => info.message.clone(),
        (false, true) => info.type_name.clone(),
        (false, false) => format!("{}: {}", info.type_name, info.message),
    }
}
