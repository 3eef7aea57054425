use super::VersionEdit;
use crate::error::{BumpError, Result};
use regex::Regex;
use std::path::Path;
use toml_edit::DocumentMut;

/// First line that is exactly `version = "..."`. CRLF mode keeps `\r` out of the match.
const VERSION_LINE: &str = r#"(?mR)^version = "(.*)"$"#;

/// Replaces the first `version = "..."` line of a manifest and leaves every other byte alone.
///
/// Without a matching line the content comes back unchanged unless `strict` is set, in which
/// case that is a parse error and the edited manifest must also still be valid TOML.
pub fn set_manifest_version(
    path: &Path,
    content: &str,
    version: &str,
    strict: bool,
) -> Result<VersionEdit> {
    let pattern = Regex::new(VERSION_LINE).map_err(|e| BumpError::Parse {
        path: path.to_path_buf(),
        message: format!("invalid version line pattern: {e}"),
    })?;

    let Some(captures) = pattern.captures(content) else {
        if strict {
            return Err(BumpError::Parse {
                path: path.to_path_buf(),
                message: r#"no `version = "..."` line found"#.to_string(),
            });
        }
        return Ok(VersionEdit {
            content: content.to_string(),
            previous: None,
        });
    };

    let line = captures.get_match();
    let previous = captures[1].to_string();

    if crate::utils::verbose_enabled() {
        eprintln!(
            "[VERBOSE] {}: version line at byte {}",
            path.display(),
            line.start()
        );
    }

    let mut updated = String::with_capacity(content.len() + version.len());
    updated.push_str(&content[..line.start()]);
    updated.push_str(&format!("version = \"{version}\""));
    updated.push_str(&content[line.end()..]);

    if strict {
        updated.parse::<DocumentMut>().map_err(|e| BumpError::Parse {
            path: path.to_path_buf(),
            message: format!("manifest is not valid TOML after the edit: {e}"),
        })?;
    }

    Ok(VersionEdit {
        content: updated,
        previous: Some(previous),
    })
}
