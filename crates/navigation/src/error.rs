//! Error types for loading navigation trees and views.
//!
//! Tree operations themselves never fail; these errors only arise at the
//! edges where files are read or templates are compiled.

use std::path::PathBuf;

use thiserror::Error;

/// Navigation errors.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML navigation tree")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid TOML navigation tree")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON navigation tree")]
    Json(#[from] serde_json::Error),

    #[error("unsupported navigation file format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid navigation tree: {0}")]
    InvalidTree(String),

    #[error("template directory is not valid UTF-8: {}", .0.display())]
    TemplateDir(PathBuf),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Result type alias using NavigationError.
pub type NavigationResult<T> = Result<T, NavigationError>;
