//! EDI Processor Library
//!
//! A Rust library for converting raw X12 EDI documents into structured,
//! typed records that serialize to a stable JSON contract.
//!
//! This library provides tools for:
//! - Tokenizing X12 text with delimiter auto-detection from the ISA header
//! - Routing documents by transaction-set code (the `ST` segment)
//! - Extracting purchase orders, invoices, ASNs, claims, eligibility and
//!   acknowledgment summaries in a single forward pass
//! - Falling back to a generic structural view for unsupported sets
//! - Wrapping parse results for an external summarizer and a stdin/stdout bridge
//!
//! ```rust
//! let result = edi_processor::parse_edi("ST*997*0001~AK1*PO*17~AK5*A~SE*4*0001~");
//! assert!(result.success);
//! assert_eq!(result.detected_type.as_deref(), Some("997"));
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod extractors;
        pub mod field_parsers;
        pub mod transaction_router;
        pub mod x12_tokenizer;
    }
    pub mod adapters {
        pub mod bridge;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Document, ParseResult, Segment, TransactionData};
pub use app::services::transaction_router::{TransactionSet, parse_edi, parse_segments};
pub use app::services::x12_tokenizer::{Delimiters, X12Tokenizer};
pub use config::Config;

/// Result type alias for the EDI processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for EDI processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A recognized transaction set could not be extracted
    #[error("{transaction_set} {segment} segment: {message}")]
    Extraction {
        transaction_set: String,
        segment: String,
        message: String,
    },

    /// The summarizer collaborator failed
    #[error("Summarizer error: {message}")]
    Summarizer { message: String },

    /// A bridge request could not be understood
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The log subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    /// A blocking worker task panicked or was cancelled
    #[error("Worker task failed: {message}")]
    Worker {
        message: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an extraction error for a segment of a transaction set
    pub fn extraction(
        transaction_set: impl Into<String>,
        segment: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Extraction {
            transaction_set: transaction_set.into(),
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Create a summarizer error
    pub fn summarizer(message: impl Into<String>) -> Self {
        Self::Summarizer {
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a logging setup error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Create a worker task error with context
    pub fn worker(message: impl Into<String>, source: tokio::task::JoinError) -> Self {
        Self::Worker {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
