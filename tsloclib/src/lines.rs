//! Line splitting and counting for decoded text.
//!
//! Lines are split with universal-newline rules: `\n`, `\r\n` and a lone `\r`
//! each end one line. A final segment without a terminator is still a line,
//! and empty text has no lines at all.

use std::fs;
use std::path::Path;

use crate::error::TsLocError;
use crate::options::LineMode;
use crate::Result;

/// Iterator over the lines of a string, terminators stripped.
#[derive(Debug, Clone)]
pub struct UniversalLines<'a> {
    rest: &'a str,
}

impl<'a> UniversalLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Count the lines of `text` that `mode` accepts.
pub fn count_text(text: &str, mode: LineMode) -> u64 {
    UniversalLines::new(text)
        .filter(|line| mode.counts(line))
        .count() as u64
}

/// Read a file as UTF-8 and count its lines.
///
/// The file is read in full and closed before returning.
pub fn count_file(path: impl AsRef<Path>, mode: LineMode) -> Result<u64> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| TsLocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| TsLocError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_text(&text, mode))
}
