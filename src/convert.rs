//! The conversion pipeline: mgen log in, D3.js JSON out.
//!
//! A single synchronous pass: read the whole input as text, classify each
//! line, validate and rename the endpoint addresses, aggregate into the
//! graph, then serialize the node list to the output file. Per-record
//! problems are logged and skipped; file-level problems abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::address;
use crate::error::{ConvertError, RecordError};
use crate::error_log::ErrorLog;
use crate::graph::Graph;
use crate::record;

/// Derive the default output path by swapping the input extension for `.json`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Read an mgen log file, aggregate its RECV lines into a communication
/// graph, and write the graph as a JSON array to `output`.
///
/// The output file is only created after a successful pass over the input;
/// a missing, empty, or non-text input produces no output file.
pub fn convert_mgen_to_json(
    input: &Path,
    output: &Path,
    error_log: &mut ErrorLog,
) -> Result<(), ConvertError> {
    let bytes = fs::read(input).map_err(|source| ConvertError::FileAccess {
        path: input.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|_| ConvertError::Decode {
        path: input.to_path_buf(),
    })?;

    if content.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: input.to_path_buf(),
        });
    }

    let graph = build_graph(&content, error_log);
    log::info!("Aggregated {} nodes from {}", graph.len(), input.display());

    let json = serde_json::to_string_pretty(&graph.into_nodes()).map_err(|e| {
        ConvertError::OutputAccess {
            path: output.to_path_buf(),
            source: e.into(),
        }
    })?;

    fs::write(output, json).map_err(|source| ConvertError::OutputAccess {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!("JSON graph written to {}", output.display());
    Ok(())
}

/// One pass over the input text. Non-blank lines are numbered from 1 for
/// error reporting. Any `RecordError` discards that line only.
fn build_graph(content: &str, error_log: &mut ErrorLog) -> Graph {
    let mut graph = Graph::new();
    let mut count = 0; // identifies the location of per-record errors

    for line in content.lines() {
        if line.is_empty() {
            continue;
        }
        count += 1;

        match extract_edge(line, count) {
            Ok(Some((src, dst))) => graph.record(src, dst),
            Ok(None) => {} // not a RECV line
            Err(err) => {
                log::warn!("{}", err);
                error_log.append(&err.to_string());
            }
        }
    }

    graph
}

/// Extract and rename both endpoints of one line, or explain why not.
/// An invalid address on either side discards the whole record.
fn extract_edge(
    line: &str,
    count: usize,
) -> Result<Option<(address::NodeName, address::NodeName)>, RecordError> {
    let Some(rec) = record::parse_recv_line(line, count)? else {
        return Ok(None);
    };

    let src = address::node_name(&rec.src_addr).ok_or_else(|| RecordError::InvalidAddress {
        record: count,
        address: rec.src_addr.clone(),
        line: line.to_string(),
    })?;
    let dst = address::node_name(&rec.dst_addr).ok_or_else(|| RecordError::InvalidAddress {
        record: count,
        address: rec.dst_addr.clone(),
        line: line.to_string(),
    })?;

    Ok(Some((src, dst)))
}
