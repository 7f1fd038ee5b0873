//! File filtering and discovery.
//!
//! Directories whose name is in the exclusion set are pruned before the walk
//! descends into them. Files qualify when their name ends with one of the
//! configured suffixes.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::TsLocError;
use crate::Result;

/// Directory names skipped by default.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// File name suffixes counted by default.
pub const DEFAULT_SUFFIXES: [&str; 2] = [".ts", ".js"];

/// Configuration for file filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Directory names never descended into (exact match)
    pub excluded_dirs: BTreeSet<String>,
    /// File name suffixes that qualify a file (case-sensitive)
    pub suffixes: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Filter with the default exclusions and suffixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with no exclusions and no suffixes. Matches nothing until a
    /// suffix is added.
    pub fn empty() -> Self {
        Self {
            excluded_dirs: BTreeSet::new(),
            suffixes: Vec::new(),
        }
    }

    /// Add a directory name to the exclusion set.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dirs.insert(name.into());
        self
    }

    /// Add a qualifying suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if !self.suffixes.contains(&suffix) {
            self.suffixes.push(suffix);
        }
        self
    }

    /// Replace the exclusion set.
    pub fn with_excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the qualifying suffixes.
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes.clear();
        for suffix in suffixes {
            self = self.suffix(suffix);
        }
        self
    }

    /// Check if a directory with this name is pruned from the walk.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Check if a file with this name qualifies for counting.
    pub fn matches(&self, file_name: &str) -> bool {
        self.matches_os(OsStr::new(file_name))
    }

    /// Like [`matches`](Self::matches), on a raw file name. Names that are
    /// not valid UTF-8 are compared byte-wise.
    pub fn matches_os(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        self.suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
    }

    /// Like [`is_excluded_dir`](Self::is_excluded_dir), on a raw directory name.
    pub fn is_excluded_dir_os(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        self.excluded_dirs.iter().any(|d| d.as_bytes() == name)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        // The root is always walked, whatever its name
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let keep = !self.is_excluded_dir_os(entry.file_name());
        if !keep {
            debug!(path = %entry.path().display(), "pruning excluded directory");
        }
        keep
    }
}

/// Whether a walk entry stands for a directory, resolving symlinks.
///
/// Links to directories are not descended, but they are not files either.
fn is_directory(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    entry.path_is_symlink() && entry.path().is_dir()
}

/// Discover qualifying files under `root`.
///
/// A root that does not exist or is not a directory yields no files. Any
/// error raised while walking is returned as-is.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        debug!(root = %root.display(), "root is not a directory, nothing to walk");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| filter.keep_entry(e));

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|e| TsLocError::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;

        if is_directory(&entry) {
            continue;
        }

        if filter.matches_os(entry.file_name()) {
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "skipping non-qualifying file");
        }
    }

    Ok(files)
}
