pub mod file_descriptor;
pub mod json_editor;
pub mod manifest_editor;
pub mod version_updater;

pub use file_descriptor::{FileDescriptor, TAURI_DESCRIPTORS};
pub use version_updater::{FileUpdate, UpdateOptions, UpdateReport, VersionUpdater};

/// Result of rewriting one file's content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEdit {
    pub content: String,
    /// Version found before the edit, when the file had a readable one.
    pub previous: Option<String>,
}
