//! 214 Carrier Shipment Status extraction

use super::{SegmentReducer, status_or_raw};
use crate::Result;
use crate::app::models::{CarrierStatus, Segment, StatusUpdate, TransactionData};
use crate::app::services::field_parsers::format_date;
use crate::constants::SHIPMENT_STATUS;

const DOC_TYPE: &str = "214 Carrier Status";

#[derive(Debug)]
pub struct CarrierStatusReducer {
    record: CarrierStatus,
}

impl Default for CarrierStatusReducer {
    fn default() -> Self {
        Self {
            record: CarrierStatus {
                doc_type: DOC_TYPE.to_string(),
                tracking_number: None,
                updates: Vec::new(),
            },
        }
    }
}

impl SegmentReducer for CarrierStatusReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "B10" => self.record.tracking_number = segment.get_owned(1),
            "AT7" => self.record.updates.push(StatusUpdate {
                status: status_or_raw(SHIPMENT_STATUS, segment.get(1)),
                date: format_date(segment.get(5)),
                time: segment.get_owned(6),
            }),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::CarrierStatus(self.record)
    }
}
