//! Navigation pages.
//!
//! A [`Page`] is a node of the navigation tree. It owns its children, so a
//! page can only ever sit under one parent. Every tree-wide operation on
//! [`Navigation`](crate::Navigation) is a recursive walk over pages:
//! - active-page candidate collection (pre-order)
//! - access filtering (children first, then the page itself)
//! - priority sorting (children first, then siblings)
//! - lookup by title (pre-order)

mod factory;
mod input;
mod record;

use serde::Serialize;

use crate::access::{AccessCheck, AccessLogic};

pub use factory::{DefaultPageFactory, PageFactory};
pub use input::PageInput;
pub use record::CHILDREN_KEY;

/// A node of the navigation tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    /// Display title.
    title: String,
    /// URL matched against the current request.
    url: String,
    /// Presentation hint for views.
    icon: Option<String>,
    /// Sort weight (lower = earlier).
    priority: i32,
    /// Permission consulted by tree-wide access logic.
    permission: Option<String>,
    /// Page-specific access predicate; `None` means allowed.
    #[serde(skip)]
    access: Option<AccessCheck>,
    /// Whether this page matches the current request.
    active: bool,
    /// Child pages in display order.
    #[serde(rename = "pages")]
    children: Vec<Page>,
}

impl Page {
    /// Create a page bound to a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Attach an access predicate.
    pub fn with_access<F>(mut self, check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.access = Some(AccessCheck::new(check));
        self
    }

    /// Append a child page (builder form of [`Page::add_page`]).
    pub fn with_page(mut self, page: Page) -> Self {
        self.children.push(page);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn access(&self) -> Option<&AccessCheck> {
        self.access.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Child pages in their current order.
    pub fn pages(&self) -> &[Page] {
        &self.children
    }

    pub fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.children
    }

    pub fn has_child(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn set_icon<S: Into<String>>(&mut self, icon: Option<S>) -> &mut Self {
        self.icon = icon.map(Into::into);
        self
    }

    pub fn set_priority(&mut self, priority: i32) -> &mut Self {
        self.priority = priority;
        self
    }

    pub fn set_permission<S: Into<String>>(&mut self, permission: Option<S>) -> &mut Self {
        self.permission = permission.map(Into::into);
        self
    }

    pub fn set_access(&mut self, check: Option<AccessCheck>) -> &mut Self {
        self.access = check;
        self
    }

    pub(crate) fn mark_active(&mut self) {
        self.active = true;
    }

    /// Add a child page built by the default factory.
    ///
    /// Returns the attached child, or `None` when the input is unsupported
    /// (the children are left untouched in that case).
    pub fn add_page(&mut self, input: impl Into<PageInput>) -> Option<&mut Page> {
        self.add_page_with(&DefaultPageFactory, input)
    }

    /// Add a child page, building string, blank and record inputs with
    /// `factory`.
    pub fn add_page_with(
        &mut self,
        factory: &dyn PageFactory,
        input: impl Into<PageInput>,
    ) -> Option<&mut Page> {
        let page = input.into().resolve(factory)?;
        self.children.push(page);
        self.children.last_mut()
    }

    /// Whether the current URL contains this page's URL.
    ///
    /// Pages without a URL never match.
    pub fn matches_url(&self, current_url: &str) -> bool {
        !self.url.is_empty() && current_url.contains(self.url.as_str())
    }

    /// Evaluate this page's access.
    ///
    /// The page predicate wins; without one, `fallback` decides; without
    /// either the page is allowed.
    pub fn check_access(&self, fallback: Option<&AccessLogic>) -> bool {
        match (&self.access, fallback) {
            (Some(check), _) => check.allows(),
            (None, Some(logic)) => logic.allows(self),
            (None, None) => true,
        }
    }

    /// Remove descendants whose own predicates deny access.
    ///
    /// Only per-page predicates apply here. Use
    /// [`Page::filter_by_access_rights_with`] to also apply a tree-wide
    /// rule the way [`Navigation`](crate::Navigation) does.
    pub fn filter_by_access_rights(&mut self) {
        self.filter_by_access_rights_with(None);
    }

    /// Remove denied descendants, consulting `fallback` for pages without a
    /// predicate.
    pub fn filter_by_access_rights_with(&mut self, fallback: Option<&AccessLogic>) {
        self.children = filter_pages(std::mem::take(&mut self.children), fallback);
    }

    /// Order descendants by ascending priority, keeping insertion order for
    /// equal priorities.
    pub fn sort(&mut self) {
        sort_pages(&mut self.children);
    }

    /// Find this page or the first descendant titled `title`.
    pub fn find_page_by_title(&self, title: &str) -> Option<&Page> {
        if self.title == title {
            return Some(self);
        }
        find_by_title(&self.children, title)
    }

    pub fn find_page_by_title_mut(&mut self, title: &str) -> Option<&mut Page> {
        if self.title == title {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|page| page.find_page_by_title_mut(title))
    }

    /// Find this page or the first descendant marked active.
    pub fn find_active_page(&self) -> Option<&Page> {
        if self.active {
            return Some(self);
        }
        self.children.iter().find_map(Page::find_active_page)
    }

    pub(crate) fn clear_active(&mut self) {
        self.active = false;
        for child in &mut self.children {
            child.clear_active();
        }
    }
}

/// Keep the pages (and, recursively, the children) that pass access checks.
///
/// Children are filtered before their parent is evaluated. The input
/// collection is consumed and a new one returned.
pub(crate) fn filter_pages(pages: Vec<Page>, fallback: Option<&AccessLogic>) -> Vec<Page> {
    pages
        .into_iter()
        .filter_map(|mut page| {
            page.filter_by_access_rights_with(fallback);
            page.check_access(fallback).then_some(page)
        })
        .collect()
}

/// Stable recursive sort by priority.
pub(crate) fn sort_pages(pages: &mut [Page]) {
    for page in pages.iter_mut() {
        page.sort();
    }
    pages.sort_by_key(Page::priority);
}

pub(crate) fn find_by_title<'a>(pages: &'a [Page], title: &str) -> Option<&'a Page> {
    pages.iter().find_map(|page| page.find_page_by_title(title))
}
