//! Segment and element tokenization
//!
//! Splits trimmed document text on the detected segment terminator, then each
//! piece on the element separator. Blank pieces and pieces whose tag is not
//! two or three characters long are dropped as noise.

use tracing::{debug, trace};

use super::delimiters::Delimiters;
use crate::app::models::{Document, Segment};
use crate::constants::{MAX_TAG_LENGTH, MIN_TAG_LENGTH};

/// Tokenizer over one raw EDI payload
#[derive(Debug, Clone, Copy)]
pub struct X12Tokenizer<'a> {
    raw: &'a str,
}

impl<'a> X12Tokenizer<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    /// Delimiters detected for this payload
    pub fn delimiters(&self) -> Delimiters {
        Delimiters::detect(self.raw)
    }

    /// Tokenize the payload into a document
    pub fn tokenize(&self) -> Document {
        if self.raw.is_empty() {
            return Document::default();
        }

        let delimiters = self.delimiters();
        self.tokenize_with(delimiters)
    }

    /// Tokenize with explicit delimiters, skipping detection
    pub fn tokenize_with(&self, delimiters: Delimiters) -> Document {
        if self.raw.is_empty() {
            return Document::default();
        }

        let cleaned: String = if delimiters.newline_terminated() {
            self.raw.to_string()
        } else {
            self.raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
        };

        let mut segments = Vec::new();
        let mut discarded = 0usize;

        for piece in cleaned.split(delimiters.segment_terminator) {
            if piece.trim().is_empty() {
                continue;
            }

            let mut parts = piece.split(delimiters.element_separator);
            let tag = parts.next().unwrap_or_default();

            if !is_valid_tag(tag) {
                trace!("Discarding token with invalid tag {:?}", tag);
                discarded += 1;
                continue;
            }

            segments.push(Segment::new(tag, parts));
        }

        debug!(
            "Tokenized {} segments ({} noise tokens discarded)",
            segments.len(),
            discarded
        );
        Document::new(segments)
    }
}

/// Tokenize raw EDI text with delimiter auto-detection
pub fn tokenize(raw: &str) -> Document {
    X12Tokenizer::new(raw).tokenize()
}

fn is_valid_tag(tag: &str) -> bool {
    (MIN_TAG_LENGTH..=MAX_TAG_LENGTH).contains(&tag.chars().count())
}
