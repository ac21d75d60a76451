//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, ensure};

use crate::access::DEFAULT_ADMIN_PERMISSION;

/// Navigation rendering configuration.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Template handed to the view (default: navigation.html).
    pub view: String,

    /// Directory of Tera templates. When None, the bundled template is used.
    pub templates_dir: Option<PathBuf>,

    /// Permission that makes every page visible (default: "administer navigation").
    pub admin_permission: String,
}

impl NavigationConfig {
    /// Template name used when none is configured.
    pub const DEFAULT_VIEW: &'static str = "navigation.html";

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let view = lookup("NAVIGATION_VIEW").unwrap_or_else(|| Self::DEFAULT_VIEW.to_string());
        ensure!(!view.trim().is_empty(), "NAVIGATION_VIEW must not be empty");

        let templates_dir = lookup("NAVIGATION_TEMPLATES_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let admin_permission = lookup("NAVIGATION_ADMIN_PERMISSION")
            .unwrap_or_else(|| DEFAULT_ADMIN_PERMISSION.to_string());

        Ok(Self {
            view,
            templates_dir,
            admin_permission,
        })
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            view: Self::DEFAULT_VIEW.to_string(),
            templates_dir: None,
            admin_permission: DEFAULT_ADMIN_PERMISSION.to_string(),
        }
    }
}
