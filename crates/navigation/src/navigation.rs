//! The navigation tree container and its render cycle.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::access::AccessLogic;
use crate::active;
use crate::config::NavigationConfig;
use crate::page::{self, DefaultPageFactory, Page, PageFactory, PageInput};
use crate::view::NavigationView;

/// Progress of the active-page search for one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ActiveSearch {
    #[default]
    Pending,
    Resolved,
}

/// A site navigation tree.
///
/// Owns the top-level pages and runs the render cycle:
/// find the active page, prune by access, sort by priority, then hand the
/// pages to a [`NavigationView`].
pub struct Navigation {
    /// Top-level pages.
    items: Vec<Page>,
    /// Tree-wide access rule for pages without their own predicate.
    access_logic: Option<AccessLogic>,
    /// Builds pages for string, blank and record inputs.
    factory: Arc<dyn PageFactory>,
    /// Template handed to the view.
    template: String,
    active_search: ActiveSearch,
}

impl Navigation {
    /// Create an empty tree using the default factory and template.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            access_logic: None,
            factory: Arc::new(DefaultPageFactory),
            template: NavigationConfig::DEFAULT_VIEW.to_string(),
            active_search: ActiveSearch::Pending,
        }
    }

    /// Create an empty tree rendering with the configured template.
    pub fn from_config(config: &NavigationConfig) -> Self {
        let mut navigation = Self::new();
        navigation.template = config.view.clone();
        navigation
    }

    /// Use `factory` for pages created from strings, blanks and records.
    pub fn with_factory(mut self, factory: impl PageFactory + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    /// Add every entry in order; unsupported entries are skipped.
    pub fn set_from_array<I>(&mut self, pages: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<PageInput>,
    {
        for page in pages {
            self.add_page(page);
        }
        self
    }

    /// Add a top-level page.
    ///
    /// Returns the attached page for further configuration, or `None` when
    /// the input is unsupported (the tree is left untouched in that case).
    pub fn add_page(&mut self, input: impl Into<PageInput>) -> Option<&mut Page> {
        let page = input.into().resolve(self.factory.as_ref())?;
        self.items.push(page);
        self.items.last_mut()
    }

    /// Run a builder callback against this tree.
    pub fn set_pages<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        build(self);
        self
    }

    /// Top-level pages in their current order.
    pub fn pages(&self) -> &[Page] {
        &self.items
    }

    pub fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.items
    }

    pub fn has_child(&self) -> bool {
        !self.items.is_empty()
    }

    /// Set the tree-wide access rule, consulted for pages that carry no
    /// predicate of their own.
    pub fn set_access_logic(&mut self, logic: AccessLogic) -> &mut Self {
        self.access_logic = Some(logic);
        self
    }

    pub fn access_logic(&self) -> Option<&AccessLogic> {
        self.access_logic.as_ref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    /// Mark the page closest to `current_url` as active.
    ///
    /// Runs once per tree: later calls return immediately, whether or not
    /// the first search found a page. Call [`Navigation::reset_active`] to
    /// search again.
    pub fn find_active(&mut self, current_url: &str) {
        if self.active_search == ActiveSearch::Resolved {
            return;
        }
        self.active_search = ActiveSearch::Resolved;

        let candidates = active::collect_candidates(&self.items, current_url);
        let Some(best) = active::closest(&candidates) else {
            debug!(url = current_url, "no navigation page matches current url");
            return;
        };

        if let Some(page) = active::page_at_mut(&mut self.items, &best.path) {
            page.mark_active();
            debug!(
                url = current_url,
                page = page.url(),
                distance = best.distance,
                candidates = candidates.len(),
                "resolved active navigation page"
            );
        }
    }

    /// Clear every active flag and allow a fresh search.
    pub fn reset_active(&mut self) {
        for page in &mut self.items {
            page.clear_active();
        }
        self.active_search = ActiveSearch::Pending;
    }

    /// The active page for `current_url`, searching first if needed.
    pub fn current(&mut self, current_url: &str) -> Option<&Page> {
        self.find_active(current_url);
        self.items.iter().find_map(Page::find_active_page)
    }

    /// Prune pages the viewer may not access, children before parents.
    pub fn filter_by_access_rights(&mut self) {
        let before = self.items.len();
        let items = std::mem::take(&mut self.items);
        self.items = page::filter_pages(items, self.access_logic.as_ref());
        debug!(
            before,
            after = self.items.len(),
            "filtered top-level navigation pages"
        );
    }

    /// Order pages by ascending priority at every level, keeping insertion
    /// order among equal priorities.
    pub fn sort(&mut self) {
        page::sort_pages(&mut self.items);
    }

    /// First page titled `title`, searching depth-first.
    pub fn find_page_by_title(&self, title: &str) -> Option<&Page> {
        page::find_by_title(&self.items, title)
    }

    pub fn find_page_by_title_mut(&mut self, title: &str) -> Option<&mut Page> {
        self.items
            .iter_mut()
            .find_map(|page| page.find_page_by_title_mut(title))
    }

    /// Find the active page, prune, sort, then render through `view`.
    ///
    /// Errors from the view are returned unchanged.
    pub fn render<V>(&mut self, current_url: &str, view: &V) -> Result<String, V::Error>
    where
        V: NavigationView + ?Sized,
    {
        self.find_active(current_url);
        self.filter_by_access_rights();
        self.sort();
        view.render(&self.items, &self.template)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("items", &self.items)
            .field("access_logic", &self.access_logic)
            .field("template", &self.template)
            .field("active_search", &self.active_search)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn active_urls(pages: &[Page]) -> Vec<String> {
        let mut found = Vec::new();
        for page in pages {
            if page.is_active() {
                found.push(page.url().to_string());
            }
            found.extend(active_urls(page.pages()));
        }
        found
    }

    #[test]
    fn find_active_picks_closest_match() {
        let mut nav = Navigation::new();
        nav.add_page(Page::new("/blog").with_page(Page::new("/blog/2024")));
        nav.add_page("/about");

        nav.find_active("/blog/2024/hello");

        assert_eq!(active_urls(nav.pages()), vec!["/blog/2024"]);
    }

    #[test]
    fn find_active_runs_once() {
        let mut nav = Navigation::new();
        nav.add_page("/a");
        nav.add_page("/b");

        nav.find_active("/a");
        nav.find_active("/b");

        assert_eq!(active_urls(nav.pages()), vec!["/a"]);
    }

    #[test]
    fn empty_search_is_memoized_too() {
        let mut nav = Navigation::new();
        nav.add_page("/a");

        nav.find_active("/zzz");
        nav.find_active("/a");

        assert!(active_urls(nav.pages()).is_empty());
    }

    #[test]
    fn reset_active_allows_fresh_search() {
        let mut nav = Navigation::new();
        nav.add_page("/a");
        nav.add_page("/b");

        nav.find_active("/a");
        nav.reset_active();
        nav.find_active("/b");

        assert_eq!(active_urls(nav.pages()), vec!["/b"]);
    }

    #[test]
    fn current_returns_active_page() {
        let mut nav = Navigation::new();
        nav.add_page(json!({"title": "Shop", "url": "/shop", "pages": [
            {"title": "Cart", "url": "/shop/cart"}
        ]}));

        assert_eq!(nav.current("/shop/cart").unwrap().title(), "Cart");
    }

    #[test]
    fn independent_trees_do_not_share_state() {
        let mut first = Navigation::new();
        first.add_page("/a");
        let mut second = Navigation::new();
        second.add_page("/a");

        first.find_active("/a");

        assert!(active_urls(second.pages()).is_empty());
        assert_eq!(second.current("/a").unwrap().url(), "/a");
    }

    #[test]
    fn tree_wide_logic_applies_to_pages_without_predicate() {
        let mut nav = Navigation::new();
        nav.add_page(Page::new("/open").with_access(|| true));
        nav.add_page("/closed");
        nav.set_access_logic(AccessLogic::new(|page| page.url() != "/closed"));

        nav.filter_by_access_rights();

        let urls: Vec<_> = nav.pages().iter().map(Page::url).collect();
        assert_eq!(urls, vec!["/open"]);
        assert!(nav.access_logic().is_some());
    }

    #[test]
    fn factory_builds_string_and_record_pages() {
        let mut nav =
            Navigation::new().with_factory(|url: Option<&str>| Page::new(url.unwrap_or("")).with_icon("dot"));

        nav.add_page("/a");
        nav.add_page(json!({"url": "/b", "pages": ["/b/c"]}));

        assert_eq!(nav.pages()[0].icon(), Some("dot"));
        assert_eq!(nav.pages()[1].icon(), Some("dot"));
        assert_eq!(nav.pages()[1].pages()[0].icon(), Some("dot"));
    }

    #[test]
    fn set_pages_and_set_from_array() {
        let mut nav = Navigation::new();
        nav.set_pages(|nav| {
            nav.add_page("/first");
        })
        .set_from_array(vec![json!("/second"), json!(5), json!({"url": "/third"})]);

        let urls: Vec<_> = nav.pages().iter().map(Page::url).collect();
        assert_eq!(urls, vec!["/first", "/second", "/third"]);
        assert!(nav.has_child());
    }

    #[test]
    fn from_config_uses_view_name() {
        let config = NavigationConfig {
            view: "menus/main.html".to_string(),
            ..NavigationConfig::default()
        };
        assert_eq!(Navigation::from_config(&config).template(), "menus/main.html");
        assert_eq!(Navigation::new().template(), NavigationConfig::DEFAULT_VIEW);
    }
}
