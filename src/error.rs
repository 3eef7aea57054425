use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Please provide a version number")]
    ArgumentMissing,

    #[error("Invalid version format '{0}'")]
    InvalidFormat(String),

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BumpError {
    /// Argument errors are reported together with the usage text.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, BumpError::ArgumentMissing | BumpError::InvalidFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, BumpError>;
