//! Name derivation and escaping
//!
//! Package, display-name, and fully-qualified-name derivation from the
//! node id, plus the printable-ASCII escape routine applied to them.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::host::TestItem;

use super::meta::title;

/// Package of an item: the node-id head with its extension stripped at
/// the last dot and path separators replaced by dots.
pub fn package(item: &dyn TestItem) -> String {
    let head = item.node_id().split("::").next().unwrap_or("");
    let stem = match head.rfind('.') {
        Some(idx) => &head[..idx],
        None => head,
    };
    stem.replace('/', ".")
}

/// Display name of an item.
///
/// A title marker is treated as a template over the union of the caller's
/// parameters and the item's resolved arguments, the item's arguments
/// winning on collision. Without a title the escaped item name is used.
pub fn display_name(item: &dyn TestItem, parameters: &BTreeMap<String, String>) -> String {
    match title(item) {
        Some(template) => {
            let mut merged = parameters.clone();
            for (key, value) in item.arguments() {
                merged.insert(key.clone(), value.clone());
            }
            format_template(template, &merged)
        }
        None => escape_name(item.name()),
    }
}

/// Fully-qualified name: `{package}{.class}#{test}`, escaped.
///
/// The class segment appears only for class-scoped tests; the bracketed
/// parameter suffix is stripped from the test segment.
pub fn full_name(item: &dyn TestItem) -> String {
    let segments: Vec<&str> = item.node_id().split("::").collect();
    let package = package(item);
    let class = if segments.len() > 2 {
        format!(".{}", segments[1])
    } else {
        String::new()
    };
    let test_with_params = segments.last().copied().unwrap_or("");
    let test = match test_with_params.rfind('[') {
        Some(idx) => &test_with_params[..idx],
        None => test_with_params,
    };
    escape_name(&format!("{package}{class}#{test}"))
}

/// Escape a name into printable ASCII.
///
/// Printable ASCII passes through; newline, carriage return, and tab get
/// their two-character escapes; every other character becomes a `\xNN`,
/// `\uNNNN`, or `\UNNNNNNNN` escape by code-point width.
pub fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ' '..='~' => escaped.push(c),
            c if (c as u32) < 0x100 => {
                let _ = write!(escaped, "\\x{:02x}", c as u32);
            }
            c if (c as u32) < 0x10000 => {
                let _ = write!(escaped, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(escaped, "\\U{:08x}", c as u32);
            }
        }
    }
    escaped
}

/// Transliterate text so it is representable as plain report text:
/// control characters other than newline, carriage return, and tab are
/// rewritten as `\xNN` escapes.
pub fn sanitize_text(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() && !matches!(c, '\n' | '\r' | '\t') {
            let _ = write!(sanitized, "\\x{:02x}", c as u32);
        } else {
            sanitized.push(c);
        }
    }
    sanitized
}

/// Substitute `{key}` placeholders from the map, leaving unknown
/// placeholders verbatim. `{{` and `}}` are literal braces.
fn format_template(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let mut key = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    key.push(inner);
                }
                match values.get(&key) {
                    Some(value) if closed => result.push_str(value),
                    _ => {
                        result.push('{');
                        result.push_str(&key);
                        if closed {
                            result.push('}');
                        }
                    }
                }
            }
            c => result.push(c),
        }
    }
    result
}
