//! # mgen2d3js - mgen log to D3.js graph converter
//!
//! This library converts mgen network-simulation log files into a JSON
//! adjacency list that D3.js force-directed layouts can render directly.
//!
//! ## Overview
//!
//! mgen logs record traffic events as space-delimited `key>value` lines.
//! The converter performs a single extract-transform-load pass:
//!
//! 1. Source and destination IP addresses are extracted from each RECV line
//!    (after the line structure has been validated).
//! 2. Addresses are renamed from `nnn.nnn.nnn.nnn` to `mgen.nnn-nnn-nnn-nnn`.
//! 3. The renamed endpoints are aggregated into one `{name, size, imports}`
//!    record per node and written out as a JSON array.
//!
//! ## Architecture
//!
//! - `record`: RECV line recognition and `src>`/`dst>` field extraction
//! - `address`: dotted-quad validation and node renaming
//! - `graph`: insertion-ordered aggregation of src->dst observations
//! - `convert`: the pipeline from input path to output file
//! - `error`: fatal and per-record error types
//! - `error_log`: append-only `d3js_error.log` handle
//!
//! ## Error Handling
//!
//! File-level problems (missing, empty, or non-text input; unwritable
//! output) abort the run with a `ConvertError`. Per-record problems
//! (mispositioned `src>`/`dst>` tokens, invalid addresses) skip that line,
//! are logged at `warn`, and are appended to the error log.

pub mod address;
pub mod convert;
pub mod error;
pub mod error_log;
pub mod graph;
pub mod record;
