//! sitenav test utilities.
//!
//! Helpers for integration testing: fixture trees, views that record what
//! they were asked to render, and assertion helpers for trees.

use std::cell::RefCell;

use serde_json::{Value, json};
use sitenav::{Navigation, Page};

/// Build a page with a title and URL.
pub fn page(title: &str, url: &str) -> Page {
    Page::new(url).with_title(title)
}

/// A small site:
///
/// ```text
/// Home      /          priority 0
/// Docs      /docs      priority 2
///   Guide   /docs/guide
///     Home  /docs/guide/home
///   API     /docs/api
/// Blog      /blog      priority 1
/// Admin     /admin     priority 3, permission "access admin"
///   Users   /admin/users
/// ```
pub fn sample_navigation() -> Navigation {
    let mut nav = Navigation::new();
    nav.add_page(page("Home", "/"));
    nav.add_page(
        page("Docs", "/docs")
            .with_priority(2)
            .with_page(
                page("Guide", "/docs/guide").with_page(page("Home", "/docs/guide/home")),
            )
            .with_page(page("API", "/docs/api")),
    );
    nav.add_page(page("Blog", "/blog").with_priority(1));
    nav.add_page(
        page("Admin", "/admin")
            .with_priority(3)
            .with_permission("access admin")
            .with_page(page("Users", "/admin/users")),
    );
    nav
}

/// Page records describing a site with a nested docs section, an
/// unsupported entry and a permission-guarded area.
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({"title": "Home", "url": "/"}),
        json!({
            "title": "Docs",
            "url": "/docs",
            "priority": 2,
            "pages": [
                {"title": "Guide", "url": "/docs/guide"},
                {"title": "API", "url": "/docs/api", "priority": -1}
            ]
        }),
        json!(404),
        json!({"title": "Blog", "url": "/blog", "priority": 1}),
        json!({
            "title": "Admin",
            "url": "/admin",
            "priority": 3,
            "permission": "access admin",
            "pages": [{"title": "Users", "url": "/admin/users"}]
        }),
    ]
}

/// Flatten a tree into `(depth, url)` pairs in pre-order.
pub fn outline(pages: &[Page]) -> Vec<(usize, String)> {
    fn walk(pages: &[Page], depth: usize, out: &mut Vec<(usize, String)>) {
        for page in pages {
            out.push((depth, page.url().to_string()));
            walk(page.pages(), depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(pages, 0, &mut out);
    out
}

/// URLs of every active page in the tree, in pre-order.
pub fn active_urls(pages: &[Page]) -> Vec<String> {
    let mut found = Vec::new();
    for page in pages {
        if page.is_active() {
            found.push(page.url().to_string());
        }
        found.extend(active_urls(page.pages()));
    }
    found
}

/// URLs of the given pages, one level only.
pub fn urls(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(Page::url).collect()
}

/// A captured render call.
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub template: String,
    pub pages: Vec<Page>,
}

/// View that records every render call and returns the top-level URLs
/// joined by commas.
#[derive(Debug, Default)]
pub struct RecordingView {
    calls: RefCell<Vec<RenderCall>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured calls, oldest first.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    /// The most recent call, if any.
    pub fn last(&self) -> Option<RenderCall> {
        self.calls.borrow().last().cloned()
    }
}

impl sitenav::NavigationView for RecordingView {
    type Error = std::convert::Infallible;

    fn render(&self, pages: &[Page], template: &str) -> Result<String, Self::Error> {
        self.calls.borrow_mut().push(RenderCall {
            template: template.to_string(),
            pages: pages.to_vec(),
        });
        Ok(urls(pages).join(","))
    }
}

/// Error returned by [`FailingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFailure(pub String);

/// View that always fails with the configured message.
#[derive(Debug, Clone)]
pub struct FailingView {
    pub message: String,
}

impl FailingView {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl sitenav::NavigationView for FailingView {
    type Error = ViewFailure;

    fn render(&self, _pages: &[Page], _template: &str) -> Result<String, Self::Error> {
        Err(ViewFailure(self.message.clone()))
    }
}

/// Assertion helpers for navigation trees.
pub mod assert {
    use sitenav::Page;

    /// Assert that no page in the tree has the given URL.
    pub fn absent(pages: &[Page], url: &str) {
        let found = super::outline(pages).into_iter().any(|(_, u)| u == url);
        assert!(!found, "Expected '{url}' to be absent from the tree");
    }

    /// Assert that a page with the given URL exists somewhere in the tree.
    pub fn present(pages: &[Page], url: &str) {
        let found = super::outline(pages).into_iter().any(|(_, u)| u == url);
        assert!(found, "Expected '{url}' to be present in the tree");
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `first` appears before `second` in a string.
    pub fn ordered(haystack: &str, first: &str, second: &str) {
        let a = haystack.find(first);
        let b = haystack.find(second);
        assert!(
            matches!((a, b), (Some(a), Some(b)) if a < b),
            "Expected '{first}' before '{second}'\nActual: {haystack}"
        );
    }
}
