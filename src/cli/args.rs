//! Command-line argument definitions for the EDI processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::MAX_WORKERS;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marker accepted in place of a path to read one document from stdin
pub const STDIN_MARKER: &str = "-";

/// CLI arguments for the EDI processor
///
/// Converts raw X12 EDI documents into structured JSON records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "edi-processor",
    version,
    about = "Convert raw X12 EDI documents into structured JSON",
    long_about = "Deterministic X12 EDI parser. Detects delimiters from the ISA header, routes \
                  each document by its transaction-set code and extracts purchase orders, \
                  acknowledgments, ship notices, carrier status, warehouse orders, invoices, \
                  claims, remittances and eligibility messages into a stable JSON shape."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse EDI files into JSON
    Parse(BatchArgs),
    /// Parse EDI files and attach a summarizer analysis
    Analyze(BatchArgs),
    /// Answer one JSON request on stdin with one JSON response on stdout
    Bridge(BridgeArgs),
}

/// Arguments shared by the parse and analyze commands
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Files, directories, glob patterns, or `-` for stdin
    ///
    /// Directories are walked recursively and filtered by the configured file
    /// extensions. Glob patterns such as `inbound/**/*.edi` are expanded.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Directory for `<name>.json` outputs and the batch report
    ///
    /// Without this, each result is printed to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Write one JSON file per input into this directory"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// ~/.config/edi-processor/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of documents processed concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers for processing"
    )]
    pub workers: Option<usize>,

    /// Emit single-line JSON instead of pretty-printed JSON
    #[arg(long = "compact", help = "Write compact single-line JSON")]
    pub compact: bool,

    /// File extensions used when walking directories (comma-separated)
    #[arg(
        long = "extensions",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated file extensions to pick up from directories"
    )]
    pub extensions: Option<Vec<String>>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress and summary output
    ///
    /// Only errors are logged. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the bridge command
#[derive(Debug, Clone, Default, Parser)]
pub struct BridgeArgs {
    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output (written to stderr)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl BatchArgs {
    /// Validate the batch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::configuration("At least one input is required"));
        }

        let stdin_count = self
            .inputs
            .iter()
            .filter(|input| input.as_str() == STDIN_MARKER)
            .count();
        if stdin_count > 1 {
            return Err(Error::configuration(
                "Standard input ('-') can only be given once",
            ));
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0",
                ));
            }

            if workers > MAX_WORKERS {
                return Err(Error::configuration(format!(
                    "Number of workers cannot exceed {}",
                    MAX_WORKERS
                )));
            }
        }

        if let Some(extensions) = &self.extensions {
            if extensions.iter().all(|ext| ext.trim().is_empty()) {
                return Err(Error::configuration("Extension list cannot be empty"));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether any input reads from stdin
    pub fn reads_stdin(&self) -> bool {
        self.inputs.iter().any(|input| input == STDIN_MARKER)
    }
}

impl BridgeArgs {
    /// Validate the bridge command arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl Default for BatchArgs {
    fn default() -> Self {
        Self {
            inputs: vec![STDIN_MARKER.to_string()],
            output_dir: None,
            config_file: None,
            workers: None,
            compact: false,
            extensions: None,
            verbose: 0,
            quiet: false,
        }
    }
}
