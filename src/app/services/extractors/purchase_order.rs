//! 850 Purchase Order extraction
//!
//! Reads the PO number and date from BEG, the ship-to name from `N1*ST`, and
//! one item per PO1 line.

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{OrderItem, PurchaseOrder, Segment, TransactionData};
use crate::app::services::field_parsers::{format_currency, format_date, parse_quantity};
use crate::constants::{
    MISSING_SKU, PO1_QUALIFIER_SCAN_START, PO1_SKU_FALLBACK_POSITION, PO1_SKU_QUALIFIERS,
    SHIP_TO_QUALIFIER, UNKNOWN_VALUE,
};

const TRANSACTION_SET: &str = "850";
const DOC_TYPE: &str = "850 Purchase Order";

#[derive(Debug)]
pub struct PurchaseOrderReducer {
    record: PurchaseOrder,
}

impl Default for PurchaseOrderReducer {
    fn default() -> Self {
        Self {
            record: PurchaseOrder {
                doc_type: DOC_TYPE.to_string(),
                po_number: Some(UNKNOWN_VALUE.to_string()),
                date: None,
                ship_to: None,
                items: Vec::new(),
            },
        }
    }
}

impl SegmentReducer for PurchaseOrderReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "BEG" => {
                self.record.po_number = segment.get_owned(3);
                self.record.date = Some(format_date(segment.get(5)));
            }
            "N1" if segment.get(1) == Some(SHIP_TO_QUALIFIER) => {
                self.record.ship_to = segment.get_owned(2);
            }
            "PO1" => self.record.items.push(order_item(segment)?),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::PurchaseOrder(self.record)
    }
}

fn order_item(segment: &Segment) -> Result<OrderItem> {
    Ok(OrderItem {
        qty: parse_quantity(segment, 2, TRANSACTION_SET)?,
        price: format_currency(segment.get(4)),
        sku: resolve_sku(segment),
    })
}

/// Find the product ID on a PO1 line
///
/// Scans from position 6 for a product ID qualifier and takes the element after
/// it, which may be absent. Lines without a qualifier fall back to position 7.
pub fn resolve_sku(segment: &Segment) -> Option<String> {
    let qualifier_position = (PO1_QUALIFIER_SCAN_START..=segment.len()).find(|&position| {
        segment
            .get(position)
            .is_some_and(|value| PO1_SKU_QUALIFIERS.contains(&value))
    });

    match qualifier_position {
        Some(position) => segment.get_owned(position + 1),
        None => Some(segment.get_or(PO1_SKU_FALLBACK_POSITION, MISSING_SKU).to_string()),
    }
}
