//! 855 Purchase Order Acknowledgment extraction

use super::{SegmentReducer, code_label};
use crate::Result;
use crate::app::models::{PurchaseOrderAck, Segment, TransactionData};
use crate::app::services::field_parsers::format_date;
use crate::constants::{PO_ACK_STATUS, UNKNOWN_VALUE, lookup_status};

const DOC_TYPE: &str = "855 PO Acknowledgement";

#[derive(Debug)]
pub struct PurchaseOrderAckReducer {
    record: PurchaseOrderAck,
}

impl Default for PurchaseOrderAckReducer {
    fn default() -> Self {
        Self {
            record: PurchaseOrderAck {
                doc_type: DOC_TYPE.to_string(),
                status: UNKNOWN_VALUE.to_string(),
                po_number: None,
                ack_date: None,
            },
        }
    }
}

impl SegmentReducer for PurchaseOrderAckReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        if segment.is("BAK") {
            let code = segment.get(1);
            self.record.status = code
                .and_then(|code| lookup_status(PO_ACK_STATUS, code))
                .map_or_else(|| code_label(code), str::to_string);
            self.record.po_number = segment.get_owned(3);
            self.record.ack_date = Some(format_date(segment.get(4)));
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::PurchaseOrderAck(self.record)
    }
}
