//! Normalized reporting model
//!
//! This module contains the data structures handed to the report writer.

mod label;
mod link;
mod status;

pub use label::{Label, LabelKind};
pub use link::{Link, LinkKind};
pub use status::{Status, StatusDetails};
