//! Command catalog loading.
//!
//! The manifest lists one full invocation per line (`opencli user-add`).
//! The catalog is the bare command names in manifest order.

use std::path::Path;

use crate::error::{HelpError, Result};
use crate::store::ResourceStore;

pub fn load_catalog(
    store: &dyn ResourceStore,
    manifest: &Path,
    tool_name: &str,
) -> Result<Vec<String>> {
    let text = store
        .read_to_string(manifest)
        .map_err(|source| HelpError::ManifestUnavailable {
            path: manifest.to_path_buf(),
            source,
        })?;

    let catalog = parse_manifest(&text, tool_name);
    tracing::debug!(
        path = %manifest.display(),
        commands = catalog.len(),
        "Loaded command manifest"
    );
    Ok(catalog)
}

/// Split manifest text into bare command names, dropping blank lines and
/// the leading `<tool_name> `.
pub fn parse_manifest(text: &str, tool_name: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_tool(line, tool_name).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn strip_tool<'a>(line: &'a str, tool_name: &str) -> &'a str {
    line.strip_prefix(tool_name)
        .and_then(|rest| rest.strip_prefix(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(line)
}
