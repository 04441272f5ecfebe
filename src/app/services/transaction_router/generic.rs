//! Generic structural view for unsupported transaction sets

use crate::app::models::{GenericSegment, GenericView, Segment};
use crate::constants::GENERIC_PARSER_NOTE;

/// Dump every segment with its elements, labelled with the detected code
pub fn generic_view(segments: &[Segment], code: &str) -> GenericView {
    GenericView {
        doc_type: format!("{} (Generic View)", code),
        note: GENERIC_PARSER_NOTE.to_string(),
        structure: segments.iter().map(GenericSegment::from).collect(),
    }
}
