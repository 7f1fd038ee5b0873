//! Input options that control how lines are counted.

/// Which lines of a file contribute to the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Every line, blank or not
    #[default]
    All,
    /// Only lines holding at least one non-whitespace character
    NonBlank,
}

impl LineMode {
    /// Whether a line (without its terminator) is counted in this mode.
    pub fn counts(self, line: &str) -> bool {
        match self {
            LineMode::All => true,
            LineMode::NonBlank => !line.trim().is_empty(),
        }
    }
}

/// What to do with a qualifying file that cannot be read or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadablePolicy {
    /// Stop the run and return the error
    #[default]
    Abort,
    /// Log a warning, record the path and carry on
    Skip,
}
