//! Delimiter detection from the ISA interchange header
//!
//! The ISA segment has a fixed width of 106 characters. Its fourth character is
//! the element separator and its last character is the segment terminator.

use tracing::debug;

use crate::constants::{
    DEFAULT_ELEMENT_SEPARATOR, DEFAULT_SEGMENT_TERMINATOR, ISA_ELEMENT_SEPARATOR_OFFSET,
    ISA_SEGMENT_LENGTH, ISA_TAG,
};

/// Separator characters used to split a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Separates elements within a segment (usually `*`)
    pub element_separator: char,

    /// Ends each segment (usually `~`)
    pub segment_terminator: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            element_separator: DEFAULT_ELEMENT_SEPARATOR,
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR,
        }
    }
}

impl Delimiters {
    /// Create an explicit delimiter pair
    pub fn new(element_separator: char, segment_terminator: char) -> Self {
        Self {
            element_separator,
            segment_terminator,
        }
    }

    /// Detect delimiters from already-trimmed document text
    ///
    /// Without a leading ISA tag the defaults are used. A header too short to
    /// hold the element separator also falls back to the defaults. The
    /// terminator candidate is only adopted when it is not alphanumeric, which
    /// guards against truncated headers.
    pub fn detect(content: &str) -> Self {
        let defaults = Self::default();

        if !content.starts_with(ISA_TAG) {
            return defaults;
        }

        let header = content.chars().take(ISA_SEGMENT_LENGTH);

        let Some(element_separator) = header.clone().nth(ISA_ELEMENT_SEPARATOR_OFFSET) else {
            debug!("ISA header too short for delimiter detection, using defaults");
            return defaults;
        };

        let segment_terminator = header
            .last()
            .filter(|candidate| !candidate.is_alphanumeric())
            .unwrap_or(defaults.segment_terminator);

        let detected = Self {
            element_separator,
            segment_terminator,
        };
        debug!(
            "Detected delimiters: element={:?} segment={:?}",
            detected.element_separator, detected.segment_terminator
        );
        detected
    }

    /// Whether segments are terminated by line breaks
    pub fn newline_terminated(&self) -> bool {
        matches!(self.segment_terminator, '\n' | '\r')
    }
}
