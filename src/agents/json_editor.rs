use super::VersionEdit;
use crate::error::{BumpError, Result};
use serde_json::Value;
use std::path::Path;

/// Sets the top-level `version` of a JSON document and re-serializes it with two-space
/// indentation and a trailing newline. Key order is kept as found on disk.
pub fn set_json_version(path: &Path, content: &str, version: &str) -> Result<VersionEdit> {
    let mut document: Value = serde_json::from_str(content).map_err(|e| BumpError::Parse {
        path: path.to_path_buf(),
        message: format!("invalid JSON: {e}"),
    })?;

    let object = document.as_object_mut().ok_or_else(|| BumpError::Parse {
        path: path.to_path_buf(),
        message: "top-level JSON value is not an object".to_string(),
    })?;

    let previous = object
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    object.insert("version".to_string(), Value::String(version.to_string()));

    let mut rendered = serde_json::to_string_pretty(&document).map_err(|e| BumpError::Parse {
        path: path.to_path_buf(),
        message: format!("failed to serialize JSON: {e}"),
    })?;
    rendered.push('\n');

    Ok(VersionEdit {
        content: rendered,
        previous,
    })
}
