//! Host test-runner seam
//!
//! Types and traits through which a pytest-compatible host exposes its
//! test items and captured outcomes. The host owns marker discovery and
//! closest-match precedence; this crate only reads through the seam.

mod item;
mod outcome;

pub use item::{Marker, StaticItem, TestItem};
pub use outcome::{ExceptionInfo, ExceptionKind, Outcome, TestReport};
