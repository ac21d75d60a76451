//! Building pages from field records.
//!
//! A record is a map of field name to value. Each known field goes through
//! an entry of [`RECORD_SETTERS`]; unknown fields and values of the wrong
//! type are skipped. The `pages` field holds child records.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::{Map, Value};
use tracing::debug;

use super::Page;
use super::factory::PageFactory;

/// Record key holding child records.
pub const CHILDREN_KEY: &str = "pages";

/// Applies one record value to a page. Returns false if the value has the
/// wrong type for the field.
type Setter = fn(&mut Page, &Value) -> bool;

static RECORD_SETTERS: LazyLock<HashMap<&'static str, Setter>> = LazyLock::new(|| {
    let setters: [(&'static str, Setter); 5] = [
        ("title", |page, value| match value.as_str() {
            Some(title) => {
                page.set_title(title);
                true
            }
            None => false,
        }),
        ("url", |page, value| match value.as_str() {
            Some(url) => {
                page.set_url(url);
                true
            }
            None => false,
        }),
        ("icon", |page, value| match value {
            Value::Null => {
                page.set_icon(None::<String>);
                true
            }
            Value::String(icon) => {
                page.set_icon(Some(icon.as_str()));
                true
            }
            _ => false,
        }),
        ("priority", |page, value| {
            match value.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(priority) => {
                    page.set_priority(priority);
                    true
                }
                None => false,
            }
        }),
        ("permission", |page, value| match value {
            Value::Null => {
                page.set_permission(None::<String>);
                true
            }
            Value::String(permission) => {
                page.set_permission(Some(permission.as_str()));
                true
            }
            _ => false,
        }),
    ];
    HashMap::from(setters)
});

/// Build a page from a record, expanding `pages` into children.
pub(crate) fn build(factory: &dyn PageFactory, mut fields: Map<String, Value>) -> Page {
    let children = fields.remove(CHILDREN_KEY);
    let mut page = factory.make(None);

    for (key, value) in &fields {
        match RECORD_SETTERS.get(key.as_str()) {
            Some(setter) => {
                if !setter(&mut page, value) {
                    debug!(field = %key, "ignoring record value of unexpected type");
                }
            }
            None => debug!(field = %key, "ignoring unknown record field"),
        }
    }

    match children {
        Some(Value::Array(children)) => {
            for child in children {
                page.add_page_with(factory, child);
            }
        }
        Some(other) if !other.is_null() => {
            debug!("ignoring non-array `pages` field");
        }
        _ => {}
    }

    page
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::page::DefaultPageFactory;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn known_fields_are_applied() {
        let page = build(
            &DefaultPageFactory,
            record(json!({
                "title": "Blog",
                "url": "/blog",
                "icon": "fa-pencil",
                "priority": 3,
                "permission": "read blog"
            })),
        );

        assert_eq!(page.title(), "Blog");
        assert_eq!(page.url(), "/blog");
        assert_eq!(page.icon(), Some("fa-pencil"));
        assert_eq!(page.priority(), 3);
        assert_eq!(page.permission(), Some("read blog"));
        assert!(!page.has_child());
    }

    #[test]
    fn unknown_fields_and_wrong_types_are_ignored() {
        let page = build(
            &DefaultPageFactory,
            record(json!({
                "url": "/x",
                "colour": "red",
                "priority": "high",
                "title": 12,
                "active": true
            })),
        );

        assert_eq!(page.url(), "/x");
        assert_eq!(page.priority(), 0);
        assert_eq!(page.title(), "");
        assert!(!page.is_active());
    }

    #[test]
    fn priority_out_of_range_is_ignored() {
        let page = build(
            &DefaultPageFactory,
            record(json!({"priority": 9_000_000_000_i64})),
        );
        assert_eq!(page.priority(), 0);
    }

    #[test]
    fn children_expand_in_order() {
        let page = build(
            &DefaultPageFactory,
            record(json!({
                "title": "Docs",
                "pages": [
                    {"title": "Intro", "url": "/docs/intro"},
                    "/docs/install",
                    null,
                    {"title": "API", "pages": [{"title": "Types"}]}
                ]
            })),
        );

        let titles: Vec<_> = page.pages().iter().map(Page::title).collect();
        assert_eq!(titles, vec!["Intro", "", "", "API"]);
        assert_eq!(page.pages()[1].url(), "/docs/install");
        assert_eq!(page.pages()[3].pages()[0].title(), "Types");
    }

    #[test]
    fn unsupported_children_are_skipped() {
        let page = build(
            &DefaultPageFactory,
            record(json!({"pages": [1, {"title": "Kept"}, false]})),
        );

        assert_eq!(page.pages().len(), 1);
        assert_eq!(page.pages()[0].title(), "Kept");
    }

    #[test]
    fn non_array_pages_field_is_ignored() {
        let page = build(&DefaultPageFactory, record(json!({"pages": "oops"})));
        assert!(!page.has_child());
    }
}
