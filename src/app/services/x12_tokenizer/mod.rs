//! X12 tokenizer for raw EDI documents
//!
//! This module turns raw interchange text into an ordered [`Document`] of
//! [`Segment`]s. Tokenization never fails: empty or unrecognizable input simply
//! yields an empty document, and the caller decides what that means.
//!
//! ## Architecture
//!
//! - [`delimiters`] - Element separator and segment terminator detection from the ISA header
//! - [`tokenizer`] - Newline handling, splitting and noise filtering
//!
//! ## Usage
//!
//! ```rust
//! use edi_processor::app::services::x12_tokenizer::X12Tokenizer;
//!
//! let document = X12Tokenizer::new("ST*850*0001~BEG*00*SA*PO-1**20231204~").tokenize();
//! assert_eq!(document.tags(), vec!["ST", "BEG"]);
//! ```
//!
//! [`Document`]: crate::app::models::Document
//! [`Segment`]: crate::app::models::Segment

pub mod delimiters;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use delimiters::Delimiters;
pub use tokenizer::{X12Tokenizer, tokenize};
