//! High-level line counting API.
//!
//! This module provides the main entry point, [`count_lines`], which walks a
//! directory tree, keeps qualifying files and sums their line counts.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::filter::{discover_files, FilterConfig};
use crate::lines;
use crate::options::{LineMode, UnreadablePolicy};
use crate::Result;

/// Options for counting lines.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Directory exclusions and file suffixes
    pub filter: FilterConfig,
    /// Which lines contribute to the count
    pub line_mode: LineMode,
    /// Behaviour for files that cannot be read or decoded
    pub on_unreadable: UnreadablePolicy,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set line mode.
    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Set the policy for unreadable files.
    pub fn on_unreadable(mut self, policy: UnreadablePolicy) -> Self {
        self.on_unreadable = policy;
        self
    }
}

/// Result of counting lines under a root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountResult {
    /// Sum of line counts across all counted files
    pub total_lines: u64,
    /// Number of files counted
    pub file_count: u64,
    /// Files passed over under [`UnreadablePolicy::Skip`]
    pub skipped: Vec<PathBuf>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, lines: u64) {
        self.total_lines += lines;
        self.file_count += 1;
    }
}

/// Count lines across qualifying files under `root`.
///
/// A missing root, or one that is not a directory, counts as empty. Traversal
/// errors always abort; read and decode errors abort unless the options say
/// to skip them.
///
/// # Example
///
/// ```rust,ignore
/// use tsloclib::{count_lines, CountOptions};
///
/// let result = count_lines("./src", &CountOptions::new())?;
/// println!("Total lines of code: {}", result.total_lines);
/// ```
pub fn count_lines(root: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let root = root.as_ref();
    let files = discover_files(root, &options.filter)?;
    debug!(root = %root.display(), files = files.len(), "discovered qualifying files");

    let mut result = CountResult::new();

    for path in files {
        match lines::count_file(&path, options.line_mode) {
            Ok(n) => {
                debug!(path = %path.display(), lines = n, "counted file");
                result.add(n);
            }
            Err(e) if options.on_unreadable == UnreadablePolicy::Skip && e.is_file_error() => {
                warn!("skipping unreadable file: {e}");
                result.skipped.push(path);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
