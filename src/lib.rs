//! Test metadata extraction for Allure-style reporting
//!
//! Translates a host test-runner's in-memory items and outcomes into a
//! normalized reporting model: titles, descriptions, labels, links,
//! statuses, and the derived suite hierarchy. The host owns marker
//! discovery and closest-match precedence and plugs in through the
//! [`host::TestItem`] trait; report serialization is owned by the report
//! writer consuming the [`model`] types.
//!
//! Every extraction is a stateless function over its inputs. Missing
//! markers, missing keyword arguments, and malformed values degrade to
//! absent values; nothing here returns an error under normal host
//! behavior.
//!
//! ```
//! use allure_meta::extract;
//! use allure_meta::host::{Marker, StaticItem};
//! use allure_meta::model::{Label, LabelKind};
//!
//! let item = StaticItem::new("pkg/mod.py::test_x")
//!     .marker(Marker::new("allure_label").arg("blocker").kwarg("label_type", "severity"));
//!
//! assert_eq!(extract::full_name(&item), "pkg.mod#test_x");
//! assert!(extract::labels(&item).contains(&Label::new(LabelKind::Severity, "blocker")));
//! ```

pub mod config;
pub mod extract;
pub mod host;
pub mod model;
pub mod utils;

pub use config::LabelPolicy;
pub use host::{ExceptionInfo, ExceptionKind, Marker, Outcome, StaticItem, TestItem, TestReport};
pub use model::{Label, LabelKind, Link, LinkKind, Status, StatusDetails};
