//! RECV line recognition and field extraction.
//!
//! mgen logs are space-delimited `key>value` records, e.g.:
//!
//! ```text
//! 22:55:07.470450 RECV proto>UDP flow>1 seq>0 src>127.0.0.1/5001 dst>127.0.0.2/5000 sent>22:55:07.470351 size>1024
//! ```
//!
//! Only RECV lines are consulted. The token-position contract is fixed:
//! `src>` is field index 5 and `dst>` is field index 6 of the space-split
//! record. A RECV line violating that contract is rejected with a
//! `RecordError` so the caller can log it and move on.

use crate::error::RecordError;

/// Field index of the event type token (`RECV`, `SEND`, ...)
const EVENT_FIELD: usize = 1;
/// Field index of the `src>ip/port` token in a RECV record
const SRC_FIELD: usize = 5;
/// Field index of the `dst>ip/port` token in a RECV record
const DST_FIELD: usize = 6;

/// A RECV line with its endpoint addresses extracted.
///
/// Addresses are the raw dotted-quad candidates with any `/port` suffix
/// already stripped; they have not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecvRecord {
    pub src_addr: String,
    pub dst_addr: String,
}

/// Classify one log line and extract its endpoints.
///
/// Returns `Ok(None)` for lines that are not RECV records (skipped silently),
/// `Ok(Some(record))` for a well-formed RECV line, and `Err` when a RECV line
/// is missing `src>` or `dst>` at the expected field position. `record`
/// numbers non-blank lines from 1 and only identifies the error location.
pub fn parse_recv_line(line: &str, record: usize) -> Result<Option<RecvRecord>, RecordError> {
    // mgen records are delimited by single spaces
    let fields: Vec<&str> = line.split(' ').collect();

    if fields.get(EVENT_FIELD).copied() != Some("RECV") {
        return Ok(None);
    }

    let src_addr = extract_address(&fields, SRC_FIELD, "src>", line, record)?;
    let dst_addr = extract_address(&fields, DST_FIELD, "dst>", line, record)?;

    Ok(Some(RecvRecord { src_addr, dst_addr }))
}

/// Pull the address out of a `key>ip/port` token at a fixed field position.
/// The `/port` suffix is optional; without it the whole remainder is taken.
fn extract_address(
    fields: &[&str],
    index: usize,
    token: &'static str,
    line: &str,
    record: usize,
) -> Result<String, RecordError> {
    fields
        .get(index)
        .and_then(|field| field.strip_prefix(token))
        .map(|rest| rest.split('/').next().unwrap_or(rest).to_string())
        .ok_or_else(|| RecordError::MalformedRecord {
            record,
            token,
            line: line.to_string(),
        })
}
