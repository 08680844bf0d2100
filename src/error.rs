//! Error types for the mgen-to-JSON conversion pipeline.
//!
//! Two tiers: `ConvertError` aborts the whole run, `RecordError` discards a
//! single RECV record and lets the pass continue. Both are surfaced to the
//! user and appended to the error log; nothing is silently swallowed.

use std::path::PathBuf;

/// Fatal conditions that abort the conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Cannot open input file '{path}' - check directory path and file name")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The input file '{path}' seems to be empty")]
    EmptyInput { path: PathBuf },

    #[error("The input file '{path}' is not a text file")]
    Decode { path: PathBuf },

    #[error("Cannot open '{path}' or write data - check directory path and file name")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-record conditions; the offending RECV line contributes nothing to the
/// graph and processing continues with the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("In record {record}, the {token} address is not in the expected position. Ignoring this record: {line}")]
    MalformedRecord {
        record: usize,
        token: &'static str,
        line: String,
    },

    #[error("In record {record}, the node address '{address}' is not a valid IP address. Ignoring this record: {line}")]
    InvalidAddress {
        record: usize,
        address: String,
        line: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message_names_token_and_line() {
        let err = RecordError::MalformedRecord {
            record: 3,
            token: "src>",
            line: "22:55:07.470450 RECV proto>UDP".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("record 3"));
        assert!(msg.contains("src>"));
        assert!(msg.contains("22:55:07.470450 RECV proto>UDP"));
    }

    #[test]
    fn test_invalid_address_message_names_address() {
        let err = RecordError::InvalidAddress {
            record: 7,
            address: "999.0.0.1".to_string(),
            line: "...".to_string(),
        };
        assert!(err.to_string().contains("999.0.0.1"));
    }
}
