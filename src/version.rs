use crate::error::{BumpError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

const VERSION_PATTERN: &str = r"^[0-9]+\.[0-9]+\.[0-9]+(-[a-zA-Z0-9.]+)?$";

/// A validated `MAJOR.MINOR.PATCH[-PRERELEASE]` version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    original: String,
}

impl ReleaseVersion {
    /// Validates the raw command-line value. Nothing touches the disk before this succeeds.
    pub fn parse(input: Option<&str>) -> Result<Self> {
        let raw = match input {
            Some(value) if !value.is_empty() => value,
            _ => return Err(BumpError::ArgumentMissing),
        };

        let pattern = Regex::new(VERSION_PATTERN)
            .map_err(|e| BumpError::InvalidFormat(format!("{raw} ({e})")))?;

        if !pattern.is_match(raw) {
            return Err(BumpError::InvalidFormat(raw.to_string()));
        }

        Ok(Self {
            original: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        self.original.contains('-')
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

pub struct VersionComparator;

impl VersionComparator {
    /// Orders two versions by semver precedence. `None` when either side is not valid semver
    /// (leading zeros, empty pre-release identifiers, free-form strings found on disk).
    pub fn compare(a: &str, b: &str) -> Option<Ordering> {
        let va = semver::Version::parse(a).ok()?;
        let vb = semver::Version::parse(b).ok()?;
        Some(va.cmp(&vb))
    }

    /// Check if version `a` is newer than version `b`
    pub fn is_newer(a: &str, b: &str) -> Option<bool> {
        Self::compare(a, b).map(|ord| ord == Ordering::Greater)
    }
}
