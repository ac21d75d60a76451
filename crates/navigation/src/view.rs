//! Views turn a pruned, sorted tree into markup.

use std::path::Path;

use tera::Tera;
use tracing::debug;

use crate::error::{NavigationError, NavigationResult};
use crate::page::Page;

/// Renders top-level pages with a named template.
pub trait NavigationView {
    type Error;

    fn render(&self, pages: &[Page], template: &str) -> Result<String, Self::Error>;
}

impl<F, E> NavigationView for F
where
    F: Fn(&[Page], &str) -> Result<String, E>,
{
    type Error = E;

    fn render(&self, pages: &[Page], template: &str) -> Result<String, E> {
        self(pages, template)
    }
}

/// Bundled template rendering the tree as nested lists.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/navigation.html");

/// Macros used by the bundled template.
pub const DEFAULT_MACROS: &str = include_str!("../templates/navigation_macros.html");

const DEFAULT_TEMPLATE_NAME: &str = "navigation.html";
const DEFAULT_MACROS_NAME: &str = "navigation_macros.html";

/// Tera-backed view. Templates receive the top-level pages as `pages`.
pub struct TeraView {
    tera: Tera,
}

impl TeraView {
    /// Load templates from `template_dir`, falling back to the bundled ones
    /// for any default template the directory does not provide.
    pub fn new(template_dir: &Path) -> NavigationResult<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .ok_or_else(|| NavigationError::TemplateDir(template_dir.to_path_buf()))?;

        // Directory templates are parsed first so they win over the bundled
        // ones; `extend` only adds names that are still missing.
        let mut tera = Tera::parse(pattern_str)?;
        tera.extend(&Self::bundled()?)?;
        tera.build_inheritance_chains()?;

        let count = tera.get_template_names().count();
        debug!(count, dir = %template_dir.display(), "loaded navigation templates");

        Ok(Self { tera })
    }

    /// View with only the bundled templates.
    pub fn with_default_template() -> NavigationResult<Self> {
        Ok(Self {
            tera: Self::bundled()?,
        })
    }

    fn bundled() -> NavigationResult<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            (DEFAULT_MACROS_NAME, DEFAULT_MACROS),
            (DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE),
        ])?;
        Ok(tera)
    }

    /// Get the underlying Tera instance.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Get a mutable reference to Tera (for adding templates at runtime).
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }
}

impl NavigationView for TeraView {
    type Error = tera::Error;

    fn render(&self, pages: &[Page], template: &str) -> Result<String, tera::Error> {
        let mut context = tera::Context::new();
        context.insert("pages", pages);
        self.tera.render(template, &context)
    }
}
