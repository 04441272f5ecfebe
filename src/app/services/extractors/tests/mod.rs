//! Test utilities for extractor testing
//!
//! Extractors are exercised on tokenized segment bodies without an
//! interchange envelope; envelope handling is covered by the tokenizer and
//! router tests.

use crate::app::models::{Segment, TransactionData};
use crate::app::services::extractors::{SegmentReducer, reduce};
use crate::app::services::x12_tokenizer::tokenize;


/// Tokenize a `*`/`~` delimited body into segments
pub fn segments(body: &str) -> Vec<Segment> {
    tokenize(body).segments().to_vec()
}

/// Run a reducer over a segment body
pub fn extract<R: SegmentReducer>(body: &str) -> TransactionData {
    reduce::<R>(&segments(body)).expect("extraction should succeed")
}

#[test]
fn test_reduce_over_no_segments_yields_defaults() {
    use crate::app::services::extractors::InvoiceReducer;

    let data = reduce::<InvoiceReducer>(&[]).unwrap();
    let TransactionData::Invoice(invoice) = data else {
        panic!("expected invoice");
    };
    assert_eq!(invoice.doc_type, "810 Invoice");
    assert_eq!(invoice.total, 0.0);
    assert!(invoice.lines.is_empty());
}
