//! Marker lookup and rendering
//!
//! Nearest-marker value lookup plus display rendering of the host's own
//! (non-reporting) markers.

use serde_json::Value;

use crate::host::{Marker, TestItem};

/// Marker keyword carrying the display name
pub const DISPLAY_NAME_MARK: &str = "allure_display_name";
/// Marker keyword carrying the plain-text description
pub const DESCRIPTION_MARK: &str = "allure_description";
/// Marker keyword carrying the HTML description
pub const DESCRIPTION_HTML_MARK: &str = "allure_description_html";
/// Marker keyword carrying a label
pub const LABEL_MARK: &str = "allure_label";
/// Marker keyword carrying a link
pub const LINK_MARK: &str = "allure_link";

/// Namespace prefix of the reporting markers
pub const ALLURE_PREFIX: &str = "allure_";
/// Parametrization keyword, never rendered as a marker
const PARAMETRIZE_KEYWORD: &str = "parametrize";

/// Marks shipped with the host framework itself
const BUILTIN_MARKS: [&str; 7] = [
    "filterwarnings",
    "skip",
    "skipif",
    "xfail",
    "usefixtures",
    "tryfirst",
    "trylast",
];

/// First positional argument of the nearest marker of the given name,
/// or `None` when no such marker exists or it carries no arguments.
pub fn marker_value<'a>(item: &'a dyn TestItem, name: &str) -> Option<&'a Value> {
    item.closest_marker(name).and_then(Marker::first_arg)
}

/// Display strings for every distinct marker on the item that is neither
/// a reporting marker nor the parametrization keyword.
pub fn host_markers(item: &dyn TestItem) -> Vec<String> {
    let mut rendered = Vec::new();
    for keyword in item.keywords() {
        if keyword.starts_with(ALLURE_PREFIX) || keyword == PARAMETRIZE_KEYWORD {
            continue;
        }
        if let Some(marker) = item.closest_marker(keyword) {
            rendered.push(mark_to_str(marker));
        }
    }
    rendered
}

/// Render a marker as `name(arg, key=value, ...)`.
///
/// Framework-builtin marks are prefixed with `@pytest.mark.`; the
/// argument list is omitted entirely when empty.
pub fn mark_to_str(marker: &Marker) -> String {
    let mut parts: Vec<String> = marker.args.iter().map(represent).collect();
    parts.extend(
        marker
            .kwargs
            .iter()
            .map(|(key, value)| format!("{}={}", key, represent(value))),
    );

    let name = if BUILTIN_MARKS.contains(&marker.name.as_str()) {
        format!("@pytest.mark.{}", marker.name)
    } else {
        marker.name.clone()
    };

    if parts.is_empty() {
        name
    } else {
        format!("{}({})", name, parts.join(", "))
    }
}

/// Render a marker argument the way report readers expect: strings
/// single-quoted, booleans and null in the host's spelling.
pub fn represent(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(represent).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("'{}': {}", k, represent(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticItem;
    use serde_json::json;

    #[test]
    fn test_marker_value_absent_without_marker() {
        let item = StaticItem::new("mod.py::test_a");
        assert_eq!(marker_value(&item, DISPLAY_NAME_MARK), None);
    }

    #[test]
    fn test_marker_value_absent_without_args() {
        let item = StaticItem::new("mod.py::test_a").marker(Marker::new(DISPLAY_NAME_MARK));
        assert_eq!(marker_value(&item, DISPLAY_NAME_MARK), None);
    }

    #[test]
    fn test_builtin_mark_rendering() {
        let marker = Marker::new("skipif").arg(true).kwarg("reason", "x");
        assert_eq!(mark_to_str(&marker), "@pytest.mark.skipif(True, reason='x')");
    }

    #[test]
    fn test_custom_mark_rendering() {
        let marker = Marker::new("custom_mark").arg("a");
        assert_eq!(mark_to_str(&marker), "custom_mark('a')");
    }

    #[test]
    fn test_mark_without_arguments_has_no_parens() {
        assert_eq!(mark_to_str(&Marker::new("smoke")), "smoke");
        assert_eq!(mark_to_str(&Marker::new("skip")), "@pytest.mark.skip");
    }

    #[test]
    fn test_represent_values() {
        assert_eq!(represent(&json!(null)), "None");
        assert_eq!(represent(&json!(3)), "3");
        assert_eq!(represent(&json!("it's")), "'it\\'s'");
        assert_eq!(represent(&json!([1, "a"])), "[1, 'a']");
    }

    #[test]
    fn test_host_markers_skip_reporting_namespace() {
        let item = StaticItem::new("mod.py::test_a")
            .marker(Marker::new("allure_label").arg("smoke").kwarg("label_type", "tag"))
            .marker(Marker::new("parametrize").arg("x"))
            .marker(Marker::new("smoke"))
            .marker(Marker::new("skipif").arg(false));
        assert_eq!(
            host_markers(&item),
            vec!["smoke", "@pytest.mark.skipif(False)"]
        );
    }
}
