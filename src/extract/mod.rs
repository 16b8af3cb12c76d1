//! Metadata extraction
//!
//! Stateless functions that read a host test item or outcome and produce
//! normalized reporting values. Every lookup degrades to an absent value
//! instead of failing.

mod labels;
mod markers;
mod meta;
mod naming;
mod status;

pub use labels::{label_values, labels, labels_with, suite_labels, suite_labels_with};
pub use markers::{
    host_markers, mark_to_str, marker_value, represent, ALLURE_PREFIX, DESCRIPTION_HTML_MARK,
    DESCRIPTION_MARK, DISPLAY_NAME_MARK, LABEL_MARK, LINK_MARK,
};
pub use meta::{description, description_html, links, title};
pub use naming::{display_name, escape_name, full_name, package, sanitize_text};
pub use status::{
    outcome_status, outcome_status_details, report_status, status, status_details,
};
