//! Access rules consulted when pruning the navigation tree.
//!
//! Two kinds of rule exist:
//! - [`AccessCheck`]: a predicate attached to a single page.
//! - [`AccessLogic`]: a tree-wide rule, applied to pages that carry no
//!   predicate of their own.
//!
//! [`Viewer`] describes who is looking at the tree and builds an
//! [`AccessLogic`] from the permissions they hold.

use std::fmt;
use std::sync::Arc;

use crate::page::Page;

/// Permission that makes every page visible.
pub const DEFAULT_ADMIN_PERMISSION: &str = "administer navigation";

/// Access predicate for a single page.
#[derive(Clone)]
pub struct AccessCheck(Arc<dyn Fn() -> bool + Send + Sync>);

impl AccessCheck {
    /// Wrap a predicate.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// A predicate that always denies.
    pub fn deny() -> Self {
        Self::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn allows(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for AccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCheck(..)")
    }
}

/// Tree-wide access rule.
#[derive(Clone)]
pub struct AccessLogic(Arc<dyn Fn(&Page) -> bool + Send + Sync>);

impl AccessLogic {
    /// Wrap a rule.
    pub fn new<F>(logic: F) -> Self
    where
        F: Fn(&Page) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(logic))
    }

    /// Evaluate the rule for a page.
    pub fn allows(&self, page: &Page) -> bool {
        (self.0)(page)
    }
}

impl fmt::Debug for AccessLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessLogic(..)")
    }
}

/// The visitor a navigation tree is rendered for.
#[derive(Debug, Clone)]
pub struct Viewer {
    /// Permissions held by the visitor.
    pub permissions: Vec<String>,
    /// Permission that bypasses page permissions.
    pub admin_permission: String,
}

impl Viewer {
    /// Viewer holding the given permissions.
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            admin_permission: DEFAULT_ADMIN_PERMISSION.to_string(),
        }
    }

    /// Viewer with no permissions.
    pub fn anonymous() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Use a different administrative permission.
    pub fn with_admin_permission(mut self, permission: &str) -> Self {
        self.admin_permission = permission.to_string();
        self
    }

    /// Check if the viewer holds a specific permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Check if the viewer is an administrator.
    pub fn is_admin(&self) -> bool {
        self.has_permission(&self.admin_permission)
    }

    /// Whether a page is visible to this viewer.
    ///
    /// Pages without a permission are public.
    pub fn can_see(&self, page: &Page) -> bool {
        match page.permission() {
            None => true,
            Some(permission) => self.is_admin() || self.has_permission(permission),
        }
    }

    /// Tree-wide access logic backed by this viewer's permissions.
    pub fn access_logic(&self) -> AccessLogic {
        let viewer = self.clone();
        AccessLogic::new(move |page| viewer.can_see(page))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::anonymous()
    }
}
