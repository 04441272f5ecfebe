//! 997 Functional Acknowledgment extraction

use super::{SegmentReducer, status_or_raw};
use crate::Result;
use crate::app::models::{FunctionalAck, Segment, TransactionData};
use crate::constants::{FUNCTIONAL_ACK_STATUS, UNKNOWN_VALUE};

const DOC_TYPE: &str = "997 Functional Ack";

#[derive(Debug)]
pub struct FunctionalAckReducer {
    record: FunctionalAck,
}

impl Default for FunctionalAckReducer {
    fn default() -> Self {
        Self {
            record: FunctionalAck {
                doc_type: DOC_TYPE.to_string(),
                status: Some(UNKNOWN_VALUE.to_string()),
                group: None,
            },
        }
    }
}

impl SegmentReducer for FunctionalAckReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "AK1" => self.record.group = segment.get_owned(1),
            "AK5" => self.record.status = status_or_raw(FUNCTIONAL_ACK_STATUS, segment.get(1)),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::FunctionalAck(self.record)
    }
}
