//! sitenav
//!
//! Renders a navigation tree file for a request URL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitenav::loader::load_records;
use sitenav::{Navigation, NavigationConfig, TeraView, Viewer};

/// Render a site navigation tree for a request URL.
#[derive(Debug, Parser)]
#[command(name = "sitenav", version)]
struct Cli {
    /// Navigation tree file (.yaml, .yml, .toml or .json).
    #[arg(long)]
    tree: PathBuf,

    /// Current request URL.
    #[arg(long)]
    url: String,

    /// Permission held by the viewer (repeatable).
    #[arg(long = "grant", value_name = "PERMISSION")]
    grants: Vec<String>,

    /// Directory of Tera templates (overrides NAVIGATION_TEMPLATES_DIR).
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Template to render (overrides NAVIGATION_VIEW).
    #[arg(long)]
    template: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = NavigationConfig::from_env().context("failed to load configuration")?;
    if let Some(dir) = cli.templates {
        config.templates_dir = Some(dir);
    }
    if let Some(template) = cli.template {
        config.view = template;
    }

    let records = load_records(&cli.tree)
        .with_context(|| format!("failed to load navigation tree {}", cli.tree.display()))?;

    let viewer = Viewer::new(cli.grants).with_admin_permission(&config.admin_permission);

    let mut navigation = Navigation::from_config(&config);
    navigation
        .set_from_array(records)
        .set_access_logic(viewer.access_logic());

    let view = match &config.templates_dir {
        Some(dir) => TeraView::new(dir)
            .with_context(|| format!("failed to load templates from {}", dir.display()))?,
        None => TeraView::with_default_template().context("failed to load bundled template")?,
    };

    info!(
        pages = navigation.pages().len(),
        url = %cli.url,
        template = navigation.template(),
        "rendering navigation"
    );

    let html = navigation
        .render(&cli.url, &view)
        .context("failed to render navigation")?;
    println!("{html}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
