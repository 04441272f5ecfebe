//! Parse and analyze commands
//!
//! Both commands share the same pipeline: load configuration, discover
//! inputs, process them concurrently, then write outputs and the report.

use crate::Result;
use crate::app::services::analysis::summarizer_for_model;
use crate::cli::args::BatchArgs;
use crate::cli::commands::batch::{BatchMode, BatchReport, process_sources, write_outputs};
use crate::cli::commands::shared::{
    create_progress_bar, discover_inputs, load_configuration, setup_logging,
};
use std::time::Instant;
use tracing::{debug, info};

/// Run the parse command
pub async fn run_parse(args: BatchArgs) -> Result<BatchReport> {
    setup_logging(args.get_log_level(), args.quiet)?;
    run_batch(&args, |_| Ok(BatchMode::Parse)).await
}

/// Run the analyze command with the configured summarizer
pub async fn run_analyze(args: BatchArgs) -> Result<BatchReport> {
    setup_logging(args.get_log_level(), args.quiet)?;
    run_batch(&args, |config| {
        summarizer_for_model(&config.summarizer_model).map(BatchMode::Analyze)
    })
    .await
}

async fn run_batch<F>(args: &BatchArgs, select_mode: F) -> Result<BatchReport>
where
    F: FnOnce(&crate::config::Config) -> Result<BatchMode>,
{
    let started = Instant::now();
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let config = load_configuration(args)?;
    let mode = select_mode(&config)?;

    let sources = discover_inputs(&args.inputs, &config)?;
    info!(
        "Processing {} documents with {} workers ({:?})",
        sources.len(),
        config.workers,
        mode
    );

    // Set up progress reporting
    let progress_bar = if args.show_progress() && sources.len() > 1 {
        Some(create_progress_bar(sources.len() as u64, "Parsing..."))
    } else {
        None
    };

    let documents = process_sources(sources, mode, config.workers, progress_bar.as_ref()).await;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Processing complete");
    }

    let report = write_outputs(&documents, &config, started).await?;

    if !args.quiet {
        report.print_summary();
    }

    Ok(report)
}
