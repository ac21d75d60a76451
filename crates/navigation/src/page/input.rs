//! Accepted shapes for `add_page`.

use serde_json::{Map, Value};
use tracing::debug;

use super::factory::PageFactory;
use super::{Page, record};

/// Input accepted by [`Page::add_page`] and
/// [`Navigation::add_page`](crate::Navigation::add_page).
#[derive(Debug, Clone)]
pub enum PageInput {
    /// An already constructed page, attached as-is.
    Page(Page),
    /// Field map applied through the record setters; `pages` holds children.
    Record(Map<String, Value>),
    /// A page bound to this URL.
    Url(String),
    /// A default page from the factory.
    Blank,
    /// Anything else. Adding it is a no-op.
    Unsupported(Value),
}

impl PageInput {
    /// Turn the input into a page, or `None` for unsupported shapes.
    pub(crate) fn resolve(self, factory: &dyn PageFactory) -> Option<Page> {
        match self {
            PageInput::Page(page) => Some(page),
            PageInput::Record(fields) => Some(record::build(factory, fields)),
            PageInput::Url(url) => Some(factory.make(Some(&url))),
            PageInput::Blank => Some(factory.make(None)),
            PageInput::Unsupported(value) => {
                debug!(kind = value_kind(&value), "ignoring unsupported page input");
                None
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Page> for PageInput {
    fn from(page: Page) -> Self {
        PageInput::Page(page)
    }
}

impl From<&str> for PageInput {
    fn from(url: &str) -> Self {
        PageInput::Url(url.to_string())
    }
}

impl From<String> for PageInput {
    fn from(url: String) -> Self {
        PageInput::Url(url)
    }
}

impl From<Option<String>> for PageInput {
    fn from(url: Option<String>) -> Self {
        url.map_or(PageInput::Blank, PageInput::Url)
    }
}

impl From<Map<String, Value>> for PageInput {
    fn from(fields: Map<String, Value>) -> Self {
        PageInput::Record(fields)
    }
}

impl From<Value> for PageInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PageInput::Blank,
            Value::String(url) => PageInput::Url(url),
            Value::Object(fields) => PageInput::Record(fields),
            other => PageInput::Unsupported(other),
        }
    }
}
