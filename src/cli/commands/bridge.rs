//! Bridge command: one JSON request on stdin, one JSON response on stdout

use crate::app::adapters::bridge::run_bridge;
use crate::app::services::analysis::summarizer_for_model;
use crate::cli::args::BridgeArgs;
use crate::cli::commands::batch::BatchReport;
use crate::cli::commands::shared::setup_logging;
use crate::config::Config;
use crate::{Error, Result};
use tokio::task;
use tracing::debug;

/// Run the bridge command
///
/// Returns an empty report; protocol errors are answered in-band.
pub async fn run_bridge_command(args: BridgeArgs) -> Result<BatchReport> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let config = Config::load(args.config_file.as_deref())?;
    config.validate()?;
    let summarizer = summarizer_for_model(&config.summarizer_model)?;
    debug!("Bridge ready with summarizer '{}'", summarizer.model());

    task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_bridge(stdin.lock(), stdout.lock(), summarizer.as_ref())
    })
    .await
    .map_err(|e| Error::worker("Bridge worker failed", e))??;

    Ok(BatchReport::default())
}
