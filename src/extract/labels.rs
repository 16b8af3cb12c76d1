//! Label extraction
//!
//! Collects explicit `allure_label` markers into the normalized label
//! set and derives the default suite hierarchy from the node id.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::config::LabelPolicy;
use crate::host::{Marker, TestItem};
use crate::model::{Label, LabelKind};

use super::markers::LABEL_MARK;

/// Every positional argument of every `allure_label` marker whose
/// `label_type` equals the given kind, encounter order, duplicates kept.
pub fn label_values(item: &dyn TestItem, kind: &LabelKind) -> Vec<String> {
    let mut values = Vec::new();
    for marker in item.markers(LABEL_MARK) {
        if marker_kind(marker).as_ref() == Some(kind) {
            values.extend(marker.args.iter().map(value_to_string));
        }
    }
    values
}

/// Full label set of an item under the default uniqueness policy
pub fn labels(item: &dyn TestItem) -> BTreeSet<Label> {
    labels_with(item, &LabelPolicy::default())
}

/// Full label set of an item.
///
/// Unique kinds keep only the first value of the first marker seen; all
/// other kinds accumulate with set semantics. Unique values are tracked
/// in an ordered map of their own and merged at the end, so insertion
/// into the shared set cannot reorder the first-wins decision.
pub fn labels_with(item: &dyn TestItem, policy: &LabelPolicy) -> BTreeSet<Label> {
    let mut unique: Vec<(LabelKind, String)> = Vec::new();
    let mut collected: BTreeSet<Label> = BTreeSet::new();

    for marker in item.markers(LABEL_MARK) {
        let Some(kind) = marker_kind(marker) else {
            continue;
        };
        if policy.is_unique(&kind) {
            if !unique.iter().any(|(k, _)| *k == kind) {
                if let Some(first) = marker.first_arg() {
                    unique.push((kind, value_to_string(first)));
                }
            }
        } else {
            for arg in &marker.args {
                collected.insert(Label::new(kind.clone(), value_to_string(arg)));
            }
        }
    }

    for (kind, value) in unique {
        collected.insert(Label::new(kind, value));
    }
    collected
}

/// Default suite hierarchy under the default uniqueness policy
pub fn suite_labels(item: &dyn TestItem) -> Vec<Label> {
    suite_labels_with(item, &LabelPolicy::default())
}

/// Parent-suite, suite, and sub-suite labels derived from the node id.
///
/// The directory path becomes the parent suite, the file stem the suite,
/// and the class segment the sub suite; the class only counts when the
/// node id has a third segment. A candidate is dropped when the item
/// already carries an explicit label of that kind or its value is empty.
pub fn suite_labels_with(item: &dyn TestItem, policy: &LabelPolicy) -> Vec<Label> {
    let mut segments = item.node_id().splitn(3, "::");
    let head = segments.next().unwrap_or("");
    let possibly_class = segments.next();
    let class = if segments.next().is_some() {
        possibly_class
    } else {
        None
    };

    let (directory, file_name) = match head.rfind('/') {
        Some(idx) => (Some(&head[..idx]), &head[idx + 1..]),
        None => (None, head),
    };
    let module = file_name.split('.').next().unwrap_or(file_name);
    let package = directory.map(|d| d.replace('/', "."));

    let explicit: BTreeSet<LabelKind> = labels_with(item, policy)
        .into_iter()
        .map(|label| label.kind)
        .collect();

    let candidates = [
        (LabelKind::ParentSuite, package),
        (LabelKind::Suite, Some(module.to_string())),
        (LabelKind::SubSuite, class.map(str::to_string)),
    ];

    let mut derived = Vec::new();
    for (kind, value) in candidates {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        if explicit.contains(&kind) {
            debug!(kind = %kind, "suite label already set explicitly, keeping it");
            continue;
        }
        derived.push(Label::new(kind, value));
    }
    derived
}

fn marker_kind(marker: &Marker) -> Option<LabelKind> {
    marker
        .kwarg_value("label_type")
        .and_then(Value::as_str)
        .map(LabelKind::from)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
