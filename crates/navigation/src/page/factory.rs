//! Page construction seam.

use super::Page;

/// Builds pages for string, blank and record inputs.
///
/// Implement this to give every page created through
/// [`Navigation::add_page`](crate::Navigation::add_page) common defaults.
pub trait PageFactory: Send + Sync {
    /// Create a page, optionally bound to a URL.
    fn make(&self, url: Option<&str>) -> Page;
}

/// Factory producing plain pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPageFactory;

impl PageFactory for DefaultPageFactory {
    fn make(&self, url: Option<&str>) -> Page {
        match url {
            Some(url) => Page::new(url),
            None => Page::default(),
        }
    }
}

impl<F> PageFactory for F
where
    F: Fn(Option<&str>) -> Page + Send + Sync,
{
    fn make(&self, url: Option<&str>) -> Page {
        self(url)
    }
}
