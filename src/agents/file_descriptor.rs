use super::VersionEdit;
use super::json_editor::set_json_version;
use super::manifest_editor::set_manifest_version;
use crate::error::Result;
use std::path::Path;

/// How a tracked file stores its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Top-level `version` field of a JSON object.
    Json,
    /// First `version = "..."` line of a line-oriented manifest.
    ManifestLine,
}

impl FileFormat {
    pub fn apply(
        &self,
        path: &Path,
        content: &str,
        version: &str,
        strict: bool,
    ) -> Result<VersionEdit> {
        match self {
            FileFormat::Json => set_json_version(path, content, version),
            FileFormat::ManifestLine => set_manifest_version(path, content, version, strict),
        }
    }
}

/// A project file, relative to the root, paired with its update logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: &'static str,
    pub format: FileFormat,
}

/// Files kept in sync, in the order they are rewritten.
pub const TAURI_DESCRIPTORS: &[FileDescriptor] = &[
    FileDescriptor {
        path: "package.json",
        format: FileFormat::Json,
    },
    FileDescriptor {
        path: "src-tauri/tauri.conf.json",
        format: FileFormat::Json,
    },
    FileDescriptor {
        path: "src-tauri/Cargo.toml",
        format: FileFormat::ManifestLine,
    },
];
