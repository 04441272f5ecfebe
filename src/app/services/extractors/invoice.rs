//! 810 Invoice extraction
//!
//! The TDS total is transmitted with two implied decimal places; no other
//! amount in this set is.

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{Invoice, InvoiceLine, Segment, TransactionData};
use crate::app::services::field_parsers::{format_date, format_implied_decimal};
use crate::constants::INVOICE_TOTAL_IMPLIED_DECIMALS;

const DOC_TYPE: &str = "810 Invoice";

#[derive(Debug)]
pub struct InvoiceReducer {
    record: Invoice,
}

impl Default for InvoiceReducer {
    fn default() -> Self {
        Self {
            record: Invoice {
                doc_type: DOC_TYPE.to_string(),
                total: 0.0,
                invoice_date: None,
                invoice_number: None,
                po_number: None,
                lines: Vec::new(),
            },
        }
    }
}

impl SegmentReducer for InvoiceReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "BIG" => {
                self.record.invoice_date = Some(format_date(segment.get(1)));
                self.record.invoice_number = segment.get_owned(2);
                self.record.po_number = segment.get_owned(4);
            }
            "TDS" => {
                self.record.total =
                    format_implied_decimal(segment.get(1), INVOICE_TOTAL_IMPLIED_DECIMALS);
            }
            "IT1" => self.record.lines.push(InvoiceLine {
                qty: segment.get_owned(2),
                price: segment.get_owned(4),
                sku: segment.get_owned(7),
            }),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::Invoice(self.record)
    }
}
