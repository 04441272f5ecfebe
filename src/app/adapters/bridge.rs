//! Single-request JSON bridge over stdin/stdout
//!
//! A host process writes one JSON request and reads back one JSON document.
//! Requests look like `{"command": "parse", "content": "ISA*00*..."}`; both
//! fields are optional.

use std::io::{Read, Write};

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::app::services::analysis::{Summarizer, analyze_edi};
use crate::app::services::transaction_router::parse_edi;
use crate::{Error, Result};

/// Operation requested by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeCommand {
    #[default]
    Parse,
    Analyze,
}

/// One bridge request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeRequest {
    pub command: BridgeCommand,
    pub content: String,
}

impl BridgeRequest {
    /// Decode a request document
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::invalid_request(e.to_string()))
    }
}

/// Answer one request
///
/// Returns `None` for blank input. Malformed requests are answered with
/// `{"error": "<message>"}` rather than an `Err`.
pub fn handle_request(input: &str, summarizer: &dyn Summarizer) -> Option<serde_json::Value> {
    if input.trim().is_empty() {
        debug!("Bridge received no input");
        return None;
    }

    let response = match BridgeRequest::from_json(input).and_then(|request| respond(&request, summarizer)) {
        Ok(value) => value,
        Err(e) => {
            warn!("Bridge request failed: {}", e);
            json!({ "error": e.to_string() })
        }
    };

    Some(response)
}

fn respond(request: &BridgeRequest, summarizer: &dyn Summarizer) -> Result<serde_json::Value> {
    debug!(
        "Bridge {:?} request with {} bytes of content",
        request.command,
        request.content.len()
    );

    let value = match request.command {
        BridgeCommand::Parse => serde_json::to_value(parse_edi(&request.content))?,
        BridgeCommand::Analyze => serde_json::to_value(analyze_edi(&request.content, summarizer))?,
    };
    Ok(value)
}

/// Read a whole request from `reader` and write the response line to `writer`
pub fn run_bridge<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    summarizer: &dyn Summarizer,
) -> Result<()> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io("Failed to read bridge request", e))?;

    if let Some(response) = handle_request(&input, summarizer) {
        serde_json::to_writer(&mut writer, &response)?;
        writeln!(writer).map_err(|e| Error::io("Failed to write bridge response", e))?;
        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush bridge response", e))?;
    }

    Ok(())
}
