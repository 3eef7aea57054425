use crate::error::{BumpError, Result};
use std::path::{Path, PathBuf};

/// Resolves the project root every tracked file is joined onto.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalises the project root and refuses anything that is not a directory.
    pub fn validate_project_root(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            BumpError::ProjectValidation(format!("Invalid project root '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(BumpError::ProjectValidation(format!(
                "Project root '{}' is not a directory",
                canonical.display()
            )));
        }

        Ok(canonical)
    }
}
