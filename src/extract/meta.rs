//! Title, description, and link extraction

use serde_json::Value;

use crate::host::TestItem;
use crate::model::{Link, LinkKind};

use super::markers::{
    marker_value, DESCRIPTION_HTML_MARK, DESCRIPTION_MARK, DISPLAY_NAME_MARK, LINK_MARK,
};

/// Display title from the nearest `allure_display_name` marker
pub fn title(item: &dyn TestItem) -> Option<&str> {
    marker_value(item, DISPLAY_NAME_MARK).and_then(Value::as_str)
}

/// Plain-text description: the nearest `allure_description` marker if it
/// carries a non-empty value, else the test callable's docstring.
pub fn description(item: &dyn TestItem) -> Option<&str> {
    marker_value(item, DESCRIPTION_MARK)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| item.doc())
}

/// HTML description from the nearest `allure_description_html` marker
pub fn description_html(item: &dyn TestItem) -> Option<&str> {
    marker_value(item, DESCRIPTION_HTML_MARK).and_then(Value::as_str)
}

/// Links from every `allure_link` marker, in marker-iteration order.
///
/// Duplicates are preserved. A marker without a positional URL argument
/// is skipped; an unknown `link_type` falls back to a plain link.
pub fn links(item: &dyn TestItem) -> impl Iterator<Item = Link> + '_ {
    item.markers(LINK_MARK).into_iter().filter_map(|marker| {
        let url = marker.first_arg().and_then(Value::as_str)?;
        let link_type = marker
            .kwarg_value("link_type")
            .and_then(Value::as_str)
            .map(LinkKind::parse)
            .unwrap_or(LinkKind::Link);
        let name = marker
            .kwarg_value("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Link {
            link_type,
            url: url.to_string(),
            name,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Marker, StaticItem};

    #[test]
    fn test_title_from_marker() {
        let item =
            StaticItem::new("mod.py::test_a").marker(Marker::new(DISPLAY_NAME_MARK).arg("Fancy"));
        assert_eq!(title(&item), Some("Fancy"));
        assert_eq!(title(&StaticItem::new("mod.py::test_b")), None);
    }

    #[test]
    fn test_description_prefers_marker_over_doc() {
        let item = StaticItem::new("mod.py::test_a")
            .marker(Marker::new(DESCRIPTION_MARK).arg("from marker"))
            .with_doc("from docstring");
        assert_eq!(description(&item), Some("from marker"));
    }

    #[test]
    fn test_description_falls_back_to_doc() {
        let item = StaticItem::new("mod.py::test_a").with_doc("from docstring");
        assert_eq!(description(&item), Some("from docstring"));

        let empty_marker = StaticItem::new("mod.py::test_b")
            .marker(Marker::new(DESCRIPTION_MARK).arg(""))
            .with_doc("from docstring");
        assert_eq!(description(&empty_marker), Some("from docstring"));
    }

    #[test]
    fn test_links_preserve_order_and_duplicates() {
        let item = StaticItem::new("mod.py::test_a")
            .marker(
                Marker::new(LINK_MARK)
                    .arg("https://tracker/42")
                    .kwarg("link_type", "issue")
                    .kwarg("name", "bug 42"),
            )
            .marker(Marker::new(LINK_MARK).arg("https://docs").kwarg("link_type", "link"))
            .marker(Marker::new(LINK_MARK).arg("https://docs").kwarg("link_type", "link"));

        let collected: Vec<Link> = links(&item).collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].link_type, LinkKind::Issue);
        assert_eq!(collected[0].name.as_deref(), Some("bug 42"));
        assert_eq!(collected[1], collected[2]);
    }

    #[test]
    fn test_links_skip_marker_without_url() {
        let item = StaticItem::new("mod.py::test_a")
            .marker(Marker::new(LINK_MARK).kwarg("link_type", "issue"));
        assert_eq!(links(&item).count(), 0);
    }

    #[test]
    fn test_links_restartable() {
        let item =
            StaticItem::new("mod.py::test_a").marker(Marker::new(LINK_MARK).arg("https://x"));
        assert_eq!(links(&item).count(), 1);
        assert_eq!(links(&item).count(), 1);
    }
}
