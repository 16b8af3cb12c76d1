//! Test items and markers
//!
//! A marker is a named, repeatable tag with positional and keyword
//! arguments. A test item is the host's handle for a single collected
//! test, identified by a `::`-delimited node id.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A named annotation attached to a test item.
///
/// Keyword arguments keep insertion order, matching the order the host
/// saw them in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kwargs: Vec<(String, Value)>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }

    /// Look up a keyword argument by name
    pub fn kwarg_value(&self, key: &str) -> Option<&Value> {
        self.kwargs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// First positional argument, if any
    pub fn first_arg(&self) -> Option<&Value> {
        self.args.first()
    }
}

/// A collected test item as exposed by the host runner.
///
/// `closest_marker` follows the host's scope-override chain (function
/// overrides class overrides module); `markers` yields every marker of a
/// given name in the host's iteration order. Both are read-only.
pub trait TestItem {
    /// Hierarchical node identifier, e.g. `pkg/mod.py::Clazz::test_x[1]`
    fn node_id(&self) -> &str;

    /// Short item name, e.g. `test_x[1]`
    fn name(&self) -> &str;

    /// Nearest marker of the given name in the override chain
    fn closest_marker(&self, name: &str) -> Option<&Marker>;

    /// Every marker of the given name, closest first
    fn markers(&self, name: &str) -> Vec<&Marker>;

    /// Distinct marker keywords present on the item
    fn keywords(&self) -> Vec<&str>;

    /// Resolved test arguments, rendered by the host
    fn arguments(&self) -> &BTreeMap<String, String>;

    /// Documentation string of the underlying test callable
    fn doc(&self) -> Option<&str>;
}

/// An in-memory `TestItem` for embedding hosts and tests.
///
/// Markers are stored closest-first, so the first marker with a matching
/// name wins `closest_marker`.
#[derive(Clone, Debug, Default)]
pub struct StaticItem {
    node_id: String,
    name: String,
    markers: Vec<Marker>,
    arguments: BTreeMap<String, String>,
    doc: Option<String>,
}

impl StaticItem {
    pub fn new(node_id: impl Into<String>) -> Self {
        let node_id = node_id.into();
        let name = node_id
            .rsplit("::")
            .next()
            .unwrap_or(node_id.as_str())
            .to_string();
        Self {
            node_id,
            name,
            markers: Vec::new(),
            arguments: BTreeMap::new(),
            doc: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl TestItem for StaticItem {
    fn node_id(&self) -> &str {
        &self.node_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn closest_marker(&self, name: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.name == name)
    }

    fn markers(&self, name: &str) -> Vec<&Marker> {
        self.markers.iter().filter(|m| m.name == name).collect()
    }

    fn keywords(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for marker in &self.markers {
            if !seen.contains(&marker.name.as_str()) {
                seen.push(marker.name.as_str());
            }
        }
        seen
    }

    fn arguments(&self) -> &BTreeMap<String, String> {
        &self.arguments
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}
