use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;

use mgen2d3js::convert::{convert_mgen_to_json, default_output_path};
use mgen2d3js::error_log::{ErrorLog, DEFAULT_LOG_FILE};

/// Read and convert mgen log files to D3JS-friendly json files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to be read and processed
    infile: PathBuf,

    /// Path and name of output file (defaults to the input file with a
    /// .json extension)
    #[arg(short, long)]
    outfile: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let outfile = args
        .outfile
        .unwrap_or_else(|| default_output_path(&args.infile));

    info!("Input file: {:?}", args.infile);
    info!("Output file: {:?}", outfile);

    let mut error_log = ErrorLog::open(Path::new(DEFAULT_LOG_FILE));

    if let Err(err) = convert_mgen_to_json(&args.infile, &outfile, &mut error_log) {
        // Fatal conditions are recorded in the error log as well
        error_log.append(&err.to_string());
        return Err(err.into());
    }

    info!("Conversion completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["mgen2d3js", "capture.drc"]);

        assert_eq!(args.infile, PathBuf::from("capture.drc"));
        assert_eq!(args.outfile, None);
    }

    #[test]
    fn test_cli_outfile_option() {
        let args = Args::parse_from(["mgen2d3js", "capture.drc", "--outfile", "graph.json"]);

        assert_eq!(args.infile, PathBuf::from("capture.drc"));
        assert_eq!(args.outfile, Some(PathBuf::from("graph.json")));
    }
}
