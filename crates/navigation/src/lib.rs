//! Site navigation tree.
//!
//! A [`Navigation`] owns a tree of [`Page`]s and renders it for one request:
//! the page whose URL is closest to the request URL is marked active, pages
//! the viewer may not access are pruned, and siblings are ordered by
//! priority before the tree goes to a [`NavigationView`].
//!
//! ```
//! use sitenav::{Navigation, Page};
//!
//! let mut nav = Navigation::new();
//! nav.add_page(Page::new("/a").with_title("A").with_priority(2));
//! nav.add_page(Page::new("/b").with_title("B").with_priority(1));
//!
//! let titles = nav
//!     .render("/b/sub", &|pages: &[Page], _template: &str| {
//!         Ok::<_, std::convert::Infallible>(
//!             pages.iter().map(|p| p.title().to_string()).collect::<Vec<_>>().join(","),
//!         )
//!     })
//!     .unwrap_or_default();
//!
//! assert_eq!(titles, "B,A");
//! assert!(nav.pages()[0].is_active());
//! ```

pub mod access;
mod active;
pub mod config;
pub mod error;
pub mod loader;
mod navigation;
pub mod page;
pub mod view;

pub use access::{AccessCheck, AccessLogic, Viewer};
pub use active::levenshtein;
pub use config::NavigationConfig;
pub use error::{NavigationError, NavigationResult};
pub use navigation::Navigation;
pub use page::{DefaultPageFactory, Page, PageFactory, PageInput};
pub use view::{NavigationView, TeraView};
