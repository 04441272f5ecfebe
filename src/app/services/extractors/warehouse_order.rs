//! 940 Warehouse Shipping Order extraction
//!
//! W05 carries the depositor order and PO numbers; each W01 is one line item.

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{Segment, TransactionData, WarehouseItem, WarehouseOrder};
use crate::app::services::field_parsers::parse_quantity;
use crate::constants::{
    SHIP_TO_QUALIFIER, UNKNOWN_SKU, UNKNOWN_VALUE, W01_SKU_QUALIFIERS, W01_UPC_MIN_LENGTH,
};

const TRANSACTION_SET: &str = "940";
const DOC_TYPE: &str = "940 Warehouse Order";

#[derive(Debug)]
pub struct WarehouseOrderReducer {
    record: WarehouseOrder,
}

impl Default for WarehouseOrderReducer {
    fn default() -> Self {
        Self {
            record: WarehouseOrder {
                doc_type: DOC_TYPE.to_string(),
                depositor_order: Some(UNKNOWN_VALUE.to_string()),
                po_number: None,
                ship_to: None,
                items: Vec::new(),
            },
        }
    }
}

impl SegmentReducer for WarehouseOrderReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "W05" => {
                self.record.depositor_order = segment.get_owned(2);
                self.record.po_number = segment.get_owned(3);
            }
            "N1" if segment.get(1) == Some(SHIP_TO_QUALIFIER) => {
                self.record.ship_to = segment.get_owned(2);
            }
            "W01" => self.record.items.push(WarehouseItem {
                qty: parse_quantity(segment, 1, TRANSACTION_SET)?,
                unit: segment.get_owned(2),
                sku: resolve_sku(segment),
            }),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::WarehouseOrder(self.record)
    }
}

/// Find the product ID on a W01 line
///
/// A qualifier at W01-04 selects W01-05, which may be absent. Otherwise W01-03
/// is used when it is long enough to be a UPC.
pub fn resolve_sku(segment: &Segment) -> Option<String> {
    let qualified = segment
        .get(4)
        .is_some_and(|qualifier| W01_SKU_QUALIFIERS.contains(&qualifier));

    if qualified {
        return segment.get_owned(5);
    }

    let upc = segment
        .get(3)
        .filter(|upc| upc.chars().count() >= W01_UPC_MIN_LENGTH);
    Some(upc.unwrap_or(UNKNOWN_SKU).to_string())
}
