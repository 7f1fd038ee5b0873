//! # tsloclib
//!
//! A lines-of-code counter for TypeScript and JavaScript source trees.
//!
//! ## Overview
//!
//! The library walks a directory tree, prunes excluded directories
//! (`node_modules` and `.git` by default) before descending into them, keeps
//! files whose name ends with one of the configured suffixes (`.ts` and `.js`
//! by default) and sums their raw line counts. Nothing is parsed: a line is
//! whatever a universal-newline read of the UTF-8 text yields.
//!
//! ## Example
//!
//! ```rust
//! use tsloclib::{count_lines, CountOptions, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.ts"), "bootstrap();\nlisten(3000);\n").unwrap();
//! fs::create_dir(dir.path().join("node_modules")).unwrap();
//! fs::write(dir.path().join("node_modules/dep.js"), "ignored();\n").unwrap();
//!
//! let result = count_lines(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(result.total_lines, 2);
//!
//! // Count a different set of files
//! let filter = FilterConfig::empty().suffix(".js");
//! let result = count_lines(dir.path(), &CountOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.total_lines, 1);
//! ```

pub mod counter;
pub mod error;
pub mod filter;
pub mod lines;
pub mod options;

pub use counter::{count_lines, CountOptions, CountResult};
pub use error::TsLocError;
pub use filter::{discover_files, FilterConfig, DEFAULT_EXCLUDED_DIRS, DEFAULT_SUFFIXES};
pub use lines::{count_file, count_text, UniversalLines};
pub use options::{LineMode, UnreadablePolicy};

/// Result type for tsloclib operations
pub type Result<T> = std::result::Result<T, TsLocError>;
