//! Concurrent batch processing of EDI documents
//!
//! Documents are read and parsed on blocking tasks, bounded by the configured
//! worker count. Results come back in input order regardless of completion
//! order.

use crate::app::models::ParseResult;
use crate::app::services::analysis::{AnalysisOutcome, Summarizer, analyze_edi};
use crate::app::services::transaction_router::parse_edi;
use crate::cli::commands::shared::InputSource;
use crate::config::Config;
use crate::constants::BATCH_REPORT_FILE_NAME;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use tokio::task;
use tracing::{debug, error, info, warn};

/// What to do with each document
#[derive(Clone)]
pub enum BatchMode {
    Parse,
    Analyze(Arc<dyn Summarizer>),
}

impl std::fmt::Debug for BatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => f.write_str("Parse"),
            Self::Analyze(summarizer) => write!(f, "Analyze({})", summarizer.model()),
        }
    }
}

/// Output produced for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentOutput {
    Parsed(ParseResult),
    Analyzed(AnalysisOutcome),
}

impl DocumentOutput {
    /// The parse result inside either output kind
    pub fn parse_result(&self) -> &ParseResult {
        match self {
            Self::Parsed(result) => result,
            Self::Analyzed(outcome) => outcome.parse_result(),
        }
    }
}

/// Outcome of one input in a batch
#[derive(Debug)]
pub struct ProcessedDocument {
    pub source: InputSource,
    pub output: std::result::Result<DocumentOutput, String>,
    pub duration_ms: u64,
}

impl ProcessedDocument {
    pub fn success(&self) -> bool {
        self.output
            .as_ref()
            .is_ok_and(|output| output.parse_result().success)
    }

    pub fn detected_type(&self) -> Option<&str> {
        self.output
            .as_ref()
            .ok()
            .and_then(|output| output.parse_result().detected_type.as_deref())
    }
}

/// Per-file line of the batch report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub file: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_type: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a batch run
///
/// `files_processed` counts every input attempted; `files_failed` is the
/// subset that could not be read or did not parse successfully.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub generated_at: Option<DateTime<Utc>>,
    pub files_processed: usize,
    pub files_failed: usize,
    pub documents_by_type: BTreeMap<String, usize>,
    pub processing_time_ms: u64,
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// Whether every document parsed successfully
    pub fn all_succeeded(&self) -> bool {
        self.files_failed == 0
    }

    /// Tally one document
    pub fn record(&mut self, document: &ProcessedDocument, output: Option<PathBuf>) {
        let success = document.success();
        let detected_type = document.detected_type().map(str::to_string);

        self.files_processed += 1;
        if !success {
            self.files_failed += 1;
        }
        if let Some(code) = &detected_type {
            *self.documents_by_type.entry(code.clone()).or_insert(0) += 1;
        }

        let error = match &document.output {
            Ok(output) => output.parse_result().error.clone(),
            Err(message) => Some(message.clone()),
        };

        self.results.push(FileResult {
            file: document.source.label(),
            success,
            detected_type,
            duration_ms: document.duration_ms,
            output,
            error,
        });
    }

    /// Print a colored summary to stderr
    pub fn print_summary(&self) {
        eprintln!("\n{}", "Processing Summary".bright_green().bold());
        eprintln!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            self.processing_time_ms.to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Files processed:".bright_cyan(),
            self.files_processed.to_string().bright_white()
        );
        if self.files_failed > 0 {
            eprintln!(
                "  {} {}",
                "Files failed:".bright_red(),
                self.files_failed.to_string().bright_red().bold()
            );
            for result in self.results.iter().filter(|r| !r.success) {
                eprintln!(
                    "    {} {}",
                    result.file.bright_white(),
                    result.error.as_deref().unwrap_or("failed").red()
                );
            }
        }
        for (code, count) in &self.documents_by_type {
            eprintln!(
                "  {} {}",
                format!("{}:", code).bright_cyan(),
                count.to_string().bright_white().bold()
            );
        }
    }
}

/// Read and process every source with bounded concurrency, in input order
pub async fn process_sources(
    sources: Vec<InputSource>,
    mode: BatchMode,
    workers: usize,
    progress: Option<&ProgressBar>,
) -> Vec<ProcessedDocument> {
    let mut indexed: Vec<(usize, ProcessedDocument)> = stream::iter(sources.into_iter().enumerate())
        .map(|(index, source)| {
            let mode = mode.clone();
            async move { (index, process_source(source, mode).await) }
        })
        .buffer_unordered(workers.max(1))
        .inspect(|(_, document)| {
            if let Some(pb) = progress {
                pb.inc(1);
                pb.set_message(document.source.label());
            }
        })
        .collect()
        .await;

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, document)| document).collect()
}

async fn process_source(source: InputSource, mode: BatchMode) -> ProcessedDocument {
    let start = Instant::now();

    let output = match read_source(&source).await {
        Ok(content) => {
            let label = source.label();
            task::spawn_blocking(move || run_document(&content, &mode))
                .await
                .map_err(|e| {
                    error!("Worker for {} failed: {}", label, e);
                    format!("Worker task failed: {}", e)
                })
        }
        Err(e) => {
            error!("Failed to read {}: {}", source.label(), e);
            Err(e.to_string())
        }
    };

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!("Processed {} in {}ms", source.label(), duration_ms);

    ProcessedDocument {
        source,
        output,
        duration_ms,
    }
}

fn run_document(content: &str, mode: &BatchMode) -> DocumentOutput {
    match mode {
        BatchMode::Parse => DocumentOutput::Parsed(parse_edi(content)),
        BatchMode::Analyze(summarizer) => {
            DocumentOutput::Analyzed(analyze_edi(content, summarizer.as_ref()))
        }
    }
}

/// Read a source as text, replacing invalid UTF-8 sequences
pub async fn read_source(source: &InputSource) -> Result<String> {
    let bytes = match source {
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            buffer
        }
        InputSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?,
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write per-document outputs and build the batch report
///
/// With an output directory each document goes to `<stem>.json` there
/// (suffixed `-2`, `-3`, ... on stem collisions) and the report is saved as
/// `batch_results.json`. Otherwise documents are printed to stdout.
pub async fn write_outputs(
    documents: &[ProcessedDocument],
    config: &Config,
    started: Instant,
) -> Result<BatchReport> {
    let mut report = BatchReport {
        generated_at: Some(Utc::now()),
        ..Default::default()
    };

    match &config.output_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                Error::io(format!("Failed to create output directory {}", dir.display()), e)
            })?;

            // The report file name is reserved
            let mut used_names = HashSet::from([BATCH_REPORT_FILE_NAME.to_string()]);
            for document in documents {
                let written = match &document.output {
                    Ok(output) => {
                        let path = dir.join(unique_file_name(&document.source.output_stem(), &mut used_names));
                        write_json_file(&path, output, config).await?;
                        Some(path)
                    }
                    Err(_) => None,
                };
                report.record(document, written);
            }
        }
        None => {
            for document in documents {
                if let Ok(output) = &document.output {
                    println!("{}", config.to_json(output)?);
                }
                report.record(document, None);
            }
        }
    }

    report.processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if let Some(dir) = &config.output_dir {
        let report_path = dir.join(BATCH_REPORT_FILE_NAME);
        write_json_file(&report_path, &report, config).await?;
        info!("Batch report written to {}", report_path.display());
    }

    if report.files_failed > 0 {
        warn!(
            "{} of {} documents failed",
            report.files_failed, report.files_processed
        );
    }

    Ok(report)
}

fn unique_file_name(stem: &str, used: &mut HashSet<String>) -> String {
    let mut name = format!("{}.json", stem);
    let mut suffix = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}.json", stem, suffix);
        suffix += 1;
    }
    name
}

async fn write_json_file<T: Serialize>(path: &Path, value: &T, config: &Config) -> Result<()> {
    let json = config.to_json(value)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
