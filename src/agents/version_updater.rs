use super::{FileDescriptor, TAURI_DESCRIPTORS};
use crate::error::{BumpError, Result};
use crate::utils::{PathValidator, verbose_enabled};
use crate::version::ReleaseVersion;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Compute every edit but leave the files untouched.
    pub dry_run: bool,
    /// Treat a manifest without a `version = "..."` line as a parse error.
    pub strict: bool,
}

/// Outcome for a single tracked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub path: &'static str,
    pub previous: Option<String>,
    pub version: String,
    /// New content differs from what was on disk.
    pub changed: bool,
    pub written: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub files: Vec<FileUpdate>,
}

impl UpdateReport {
    pub fn changed_count(&self) -> usize {
        self.files.iter().filter(|f| f.changed).count()
    }
}

/// VersionUpdater rewrites the version of every tracked file under an explicit project root.
pub struct VersionUpdater {
    root: PathBuf,
    descriptors: &'static [FileDescriptor],
    options: UpdateOptions,
}

impl VersionUpdater {
    pub fn new<P: AsRef<Path>>(root: P, options: UpdateOptions) -> Result<Self> {
        Self::with_descriptors(root, TAURI_DESCRIPTORS, options)
    }

    pub fn with_descriptors<P: AsRef<Path>>(
        root: P,
        descriptors: &'static [FileDescriptor],
        options: UpdateOptions,
    ) -> Result<Self> {
        let root = PathValidator::validate_project_root(root)?;
        Ok(Self {
            root,
            descriptors,
            options,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Updates every descriptor in order, calling `on_file` as each one completes.
    ///
    /// Stops at the first failure. Files handled before it keep their new content.
    pub fn apply<F>(&self, version: &ReleaseVersion, mut on_file: F) -> Result<UpdateReport>
    where
        F: FnMut(&FileUpdate),
    {
        let mut report = UpdateReport::default();

        for descriptor in self.descriptors {
            let update = self.update_file(descriptor, version)?;
            on_file(&update);
            report.files.push(update);
        }

        Ok(report)
    }

    fn update_file(
        &self,
        descriptor: &FileDescriptor,
        version: &ReleaseVersion,
    ) -> Result<FileUpdate> {
        let path = self.root.join(descriptor.path);

        let content = fs::read_to_string(&path).map_err(|source| BumpError::FileRead {
            path: path.clone(),
            source,
        })?;

        if verbose_enabled() {
            eprintln!(
                "[VERBOSE] Read {} ({} bytes)",
                path.display(),
                content.len()
            );
        }

        let edit = descriptor.format.apply(
            &path,
            &content,
            version.as_str(),
            self.options.strict,
        )?;
        let changed = edit.content != content;

        if !self.options.dry_run {
            fs::write(&path, &edit.content).map_err(|source| BumpError::FileWrite {
                path: path.clone(),
                source,
            })?;

            if verbose_enabled() {
                eprintln!(
                    "[VERBOSE] Wrote {} ({} bytes)",
                    path.display(),
                    edit.content.len()
                );
            }
        }

        Ok(FileUpdate {
            path: descriptor.path,
            previous: edit.previous,
            version: version.to_string(),
            changed,
            written: !self.options.dry_run,
        })
    }
}
