//! Command implementations for the EDI processor CLI
//!
//! Each command is implemented in its own module:
//! - `process`: parse and analyze over files, directories, globs or stdin
//! - `bridge`: single JSON request/response over stdin/stdout
//!
//! `batch` holds the concurrent pipeline and report; `shared` holds logging,
//! configuration and input discovery.

pub mod batch;
pub mod bridge;
pub mod process;
pub mod shared;

pub use batch::BatchReport;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the EDI processor
///
/// Dispatches to the appropriate subcommand handler. Callers should treat a
/// report with failures as an unsuccessful run.
pub async fn run(args: Args) -> Result<BatchReport> {
    match args.command {
        Some(Commands::Parse(batch_args)) => process::run_parse(batch_args).await,
        Some(Commands::Analyze(batch_args)) => process::run_analyze(batch_args).await,
        Some(Commands::Bridge(bridge_args)) => bridge::run_bridge_command(bridge_args).await,
        None => Err(crate::Error::configuration("No command given")),
    }
}
