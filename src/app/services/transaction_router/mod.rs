//! Transaction-set routing and the parse entry point
//!
//! This module ties the pipeline together: tokenize, read the transaction-set
//! code from the first `ST` segment, dispatch to the matching extractor, and
//! fold every outcome into a [`ParseResult`].
//!
//! ## Architecture
//!
//! - [`router`] - [`TransactionSet`] dispatch and [`parse_edi`]
//! - [`generic`] - Structural fallback for unsupported transaction sets
//!
//! Failures are reported in three independent tiers:
//! 1. Nothing tokenized: `success=false` with "Empty or invalid EDI content"
//! 2. A recognized extractor failed: `success=false`, type and segment count kept
//! 3. Unsupported code: `success=true` via the generic view, with a warning
//!
//! [`ParseResult`]: crate::app::models::ParseResult

pub mod generic;
pub mod router;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use generic::generic_view;
pub use router::{TransactionSet, parse_edi, parse_segments};
