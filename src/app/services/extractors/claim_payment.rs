//! 835 Health Care Claim Payment extraction

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{ClaimPayment, Payment, Segment, TransactionData};
use crate::app::services::field_parsers::format_currency;

const DOC_TYPE: &str = "835 Payment";

#[derive(Debug)]
pub struct ClaimPaymentReducer {
    record: Payment,
}

impl Default for ClaimPaymentReducer {
    fn default() -> Self {
        Self {
            record: Payment {
                doc_type: DOC_TYPE.to_string(),
                check_number: None,
                total_paid: None,
                payments: Vec::new(),
            },
        }
    }
}

impl SegmentReducer for ClaimPaymentReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "TRN" => self.record.check_number = segment.get_owned(2),
            "BPR" => self.record.total_paid = Some(format_currency(segment.get(2))),
            "CLP" => self.record.payments.push(ClaimPayment {
                claim_id: segment.get_owned(1),
                status: segment.get_owned(2),
                paid: format_currency(segment.get(4)),
            }),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::Payment(self.record)
    }
}
