//! 856 Advance Ship Notice extraction
//!
//! The ASN is hierarchical. HL-03 sets the current level (`S` shipment, `O`
//! order, `I` item); LIN and SN1 segments are only read at item level.

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{Segment, ShipNotice, ShipmentItem, TransactionData};
use crate::app::services::field_parsers::format_date;
use crate::constants::HL_ITEM_LEVEL;

const DOC_TYPE: &str = "856 ASN";
const ITEM_KIND: &str = "Item";

#[derive(Debug)]
pub struct ShipNoticeReducer {
    record: ShipNotice,
    current_level: Option<String>,
}

impl Default for ShipNoticeReducer {
    fn default() -> Self {
        Self {
            record: ShipNotice {
                doc_type: DOC_TYPE.to_string(),
                shipment_id: None,
                ship_date: None,
                structure: Vec::new(),
            },
            current_level: None,
        }
    }
}

impl ShipNoticeReducer {
    fn at_item_level(&self) -> bool {
        self.current_level.as_deref() == Some(HL_ITEM_LEVEL)
    }
}

impl SegmentReducer for ShipNoticeReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "BSN" => {
                self.record.shipment_id = segment.get_owned(2);
                self.record.ship_date = Some(format_date(segment.get(3)));
            }
            "HL" => self.current_level = segment.get_owned(3),
            "LIN" if self.at_item_level() => self.record.structure.push(ShipmentItem {
                kind: ITEM_KIND.to_string(),
                sku: segment.get_owned(3),
                qty: None,
            }),
            "SN1" if self.at_item_level() => {
                // Quantity belongs to the most recent item; nothing to attach to otherwise
                if let Some(item) = self.record.structure.last_mut() {
                    item.qty = Some(segment.get_owned(2));
                }
            }
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::ShipNotice(self.record)
    }
}
