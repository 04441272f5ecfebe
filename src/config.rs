//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config file,
//! then `EDI_PROCESSOR_*` environment variables. Command-line flags are applied
//! last by the CLI through the `with_*` builders.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_FILE_EXTENSIONS, MAX_WORKERS, SIMULATED_SUMMARIZER_MODEL,
    env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for EDI processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Number of documents processed concurrently in batch mode
    pub workers: usize,

    /// File extensions picked up when walking directories (without the dot)
    pub file_extensions: Vec<String>,

    /// Write one `<stem>.json` per input here instead of printing to stdout
    pub output_dir: Option<PathBuf>,

    /// Summarizer used by the analyze command
    pub summarizer_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_json: true,
            workers: num_cpus::get().clamp(1, MAX_WORKERS),
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            output_dir: None,
            summarizer_model: SIMULATED_SUMMARIZER_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load defaults, the config file and environment overrides
    ///
    /// An explicitly given file must exist. Without one, the per-user file
    /// under the platform config directory is used when present. The result is
    /// not validated; callers validate once command-line overrides are applied.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Apply `EDI_PROCESSOR_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::WORKERS) {
            self.workers = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::WORKERS,
                    value
                ))
            })?;
            debug!("Workers overridden from environment: {}", self.workers);
        }

        if let Some(value) = lookup(env_vars::PRETTY) {
            self.pretty_json = parse_bool(&value).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true or false, got '{}'",
                    env_vars::PRETTY,
                    value
                ))
            })?;
        }

        if let Some(value) = lookup(env_vars::OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = Some(PathBuf::from(value.trim()));
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.workers > MAX_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_WORKERS
            )));
        }

        if self.file_extensions.is_empty() {
            return Err(Error::configuration(
                "At least one file extension is required",
            ));
        }

        if self.summarizer_model != SIMULATED_SUMMARIZER_MODEL {
            return Err(Error::configuration(format!(
                "Unknown summarizer model '{}' (available: {})",
                self.summarizer_model, SIMULATED_SUMMARIZER_MODEL
            )));
        }

        Ok(())
    }

    /// Whether a path has one of the configured extensions (case-insensitive)
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions
                    .iter()
                    .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set pretty or compact JSON output
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Write results into a directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Replace the directory-walk extension filter
    pub fn with_file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Serialize a value using the configured JSON style
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

/// Per-user config file location, e.g. `~/.config/edi-processor/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
