//! Append-only error log file.
//!
//! Every error the converter encounters, fatal or per-record, is appended to
//! `d3js_error.log` in the working directory with a local timestamp. The
//! handle is opened once and owned for the duration of the run. A log file
//! that cannot be opened degrades to stderr-only reporting; it never fails
//! the conversion itself.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Default error log file name, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "d3js_error.log";

/// Timestamping append handle for the error log
#[derive(Debug)]
pub struct ErrorLog {
    file: Option<File>,
}

impl ErrorLog {
    /// Open (or create) the log file in append mode. If the file cannot be
    /// opened, reports the problem on stderr and returns a handle that
    /// discards entries.
    pub fn open(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self { file: Some(file) },
            Err(err) => {
                log::warn!(
                    "Cannot open error log '{}' ({}); errors will only be reported on stderr",
                    path.display(),
                    err
                );
                Self { file: None }
            }
        }
    }

    /// A log that discards all entries, for tests and callers that opt out.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Append one timestamped entry. Write failures are reported once on
    /// stderr and otherwise ignored.
    pub fn append(&mut self, message: &str) {
        if let Some(file) = self.file.as_mut() {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            if let Err(err) = writeln!(file, "{} {}", timestamp, message) {
                log::warn!("Failed to write to error log: {}", err);
                self.file = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_appends_timestamped_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOG_FILE);

        let mut log = ErrorLog::open(&path);
        log.append("first problem");
        log.append("second problem");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first problem"));
        assert!(lines[1].ends_with("second problem"));
        // Entry starts with a date, not the message
        assert!(lines[0].starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_LOG_FILE);
        std::fs::write(&path, "existing entry\n").unwrap();

        let mut log = ErrorLog::open(&path);
        log.append("new entry");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing entry\n"));
        assert!(content.trim_end().ends_with("new entry"));
    }

    #[test]
    fn test_disabled_log_discards_entries() {
        let mut log = ErrorLog::disabled();
        log.append("goes nowhere");
    }
}
