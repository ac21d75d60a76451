//! Reading navigation trees from data files.
//!
//! A tree file holds an array of page records (see [`crate::page::PageInput`]).
//! YAML and JSON files may hold the array at the top level or under a
//! `pages` key; TOML files always use the `pages` key:
//!
//! ```toml
//! [[pages]]
//! title = "Home"
//! url = "/"
//!
//! [[pages]]
//! title = "Docs"
//! url = "/docs"
//! pages = [{ title = "Intro", url = "/docs/intro" }]
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{NavigationError, NavigationResult};
use crate::page::CHILDREN_KEY;

/// Maximum tree file size (1 MB).
const MAX_TREE_FILE_SIZE: u64 = 1024 * 1024;

/// Load page records from a `.yaml`, `.yml`, `.toml` or `.json` file.
pub fn load_records(path: &Path) -> NavigationResult<Vec<Value>> {
    let io_error = |source| NavigationError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_TREE_FILE_SIZE {
        return Err(NavigationError::InvalidTree(format!(
            "{} is {size} bytes, limit is {MAX_TREE_FILE_SIZE}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(io_error)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let records = match extension.as_str() {
        "yaml" | "yml" => parse_yaml(&contents)?,
        "toml" => parse_toml(&contents)?,
        "json" => parse_json(&contents)?,
        other => return Err(NavigationError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), records = records.len(), "loaded navigation tree");
    Ok(records)
}

/// Parse page records from YAML.
pub fn parse_yaml(contents: &str) -> NavigationResult<Vec<Value>> {
    let value: Value = serde_yml::from_str(contents)?;
    records_from_value(value)
}

/// Parse page records from TOML (records under `pages`).
pub fn parse_toml(contents: &str) -> NavigationResult<Vec<Value>> {
    let value: Value = toml::from_str(contents)?;
    records_from_value(value)
}

/// Parse page records from JSON.
pub fn parse_json(contents: &str) -> NavigationResult<Vec<Value>> {
    let value: Value = serde_json::from_str(contents)?;
    records_from_value(value)
}

fn records_from_value(value: Value) -> NavigationResult<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut root) => match root.remove(CHILDREN_KEY) {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(NavigationError::InvalidTree(format!(
                "`{CHILDREN_KEY}` must be an array"
            ))),
            None => Err(NavigationError::InvalidTree(format!(
                "missing top-level `{CHILDREN_KEY}` array"
            ))),
        },
        Value::Null => Ok(Vec::new()),
        _ => Err(NavigationError::InvalidTree(
            "expected an array of page records".to_string(),
        )),
    }
}
