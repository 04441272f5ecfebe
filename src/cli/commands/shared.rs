//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, input discovery and progress
//! reporting used by more than one command.

use crate::cli::args::{BatchArgs, STDIN_MARKER};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// One document source named on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Label used in logs and the batch report
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Base name for the `<stem>.json` output file
    pub fn output_stem(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".to_string()),
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from the CLI flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edi_processor={}", log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::logging(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &BatchArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &BatchArgs) {
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }
    if let Some(extensions) = &args.extensions {
        config.file_extensions = extensions
            .iter()
            .map(|ext| ext.trim().to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
    }
    if args.compact {
        config.pretty_json = false;
    }
}

/// Resolve command-line inputs into an ordered, de-duplicated source list
///
/// Directories expand to the files under them that match the configured
/// extensions. Explicit file paths are taken as given. Anything containing
/// glob metacharacters is expanded as a pattern.
pub fn discover_inputs(inputs: &[String], config: &Config) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();

    let mut push = |source: InputSource| {
        if seen.insert(source.clone()) {
            sources.push(source);
        }
    };

    for input in inputs {
        if input == STDIN_MARKER {
            push(InputSource::Stdin);
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            for file in discover_directory(path, config) {
                push(InputSource::File(file));
            }
        } else if path.is_file() {
            push(InputSource::File(path.to_path_buf()));
        } else if is_glob_pattern(input) {
            let matches = expand_glob(input)?;
            if matches.is_empty() {
                warn!("Pattern '{}' matched no files", input);
            }
            for file in matches {
                push(InputSource::File(file));
            }
        } else {
            return Err(Error::configuration(format!(
                "Input does not exist: {}",
                input
            )));
        }
    }

    if sources.is_empty() {
        return Err(Error::configuration("No input files found"));
    }

    debug!("Discovered {} input documents", sources.len());
    Ok(sources)
}

/// Walk a directory for files with a configured extension, sorted by path
pub fn discover_directory(dir: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| config.accepts_extension(path))
        .collect();

    // Sort files for consistent processing order
    files.sort();

    debug!("Discovered {} files in {}", files.len(), dir.display());
    files
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| {
        Error::configuration(format!("Invalid glob pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable path in '{}': {}", pattern, e),
        }
    }
    files.sort();
    Ok(files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
