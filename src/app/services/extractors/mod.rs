//! Per-transaction-set extractors
//!
//! Each extractor is a small state machine folded over the segment sequence in
//! a single forward pass. The state carries the record being built plus any
//! context the transaction set needs (the current hierarchy level of an ASN,
//! the current claim of an 837). Data-bearing segments that arrive before
//! their context segment are skipped rather than treated as errors.
//!
//! ## Extractors
//!
//! | Code | Module |
//! |------|--------|
//! | 850 | [`purchase_order`] |
//! | 855 | [`po_ack`] |
//! | 856 | [`ship_notice`] |
//! | 214 | [`carrier_status`] |
//! | 940 | [`warehouse_order`] |
//! | 810 | [`invoice`] |
//! | 997 | [`functional_ack`] |
//! | 837 | [`claim`] |
//! | 835 | [`claim_payment`] |
//! | 270, 271 | [`eligibility`] |

pub mod carrier_status;
pub mod claim;
pub mod claim_payment;
pub mod eligibility;
pub mod functional_ack;
pub mod invoice;
pub mod po_ack;
pub mod purchase_order;
pub mod ship_notice;
pub mod warehouse_order;

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::{Segment, TransactionData};

// Re-export reducers for the router
pub use carrier_status::CarrierStatusReducer;
pub use claim::ClaimReducer;
pub use claim_payment::ClaimPaymentReducer;
pub use eligibility::{EligibilityInquiryReducer, EligibilityResponseReducer};
pub use functional_ack::FunctionalAckReducer;
pub use invoice::InvoiceReducer;
pub use po_ack::PurchaseOrderAckReducer;
pub use purchase_order::PurchaseOrderReducer;
pub use ship_notice::ShipNoticeReducer;
pub use warehouse_order::WarehouseOrderReducer;

/// Single-pass state machine over a segment sequence
pub trait SegmentReducer: Default {
    /// Fold one segment into the running state
    fn step(self, segment: &Segment) -> Result<Self>;

    /// Produce the finished record
    fn finish(self) -> TransactionData;
}

/// Run a reducer over every segment of a document
pub fn reduce<R: SegmentReducer>(segments: &[Segment]) -> Result<TransactionData> {
    segments
        .iter()
        .try_fold(R::default(), |state, segment| state.step(segment))
        .map(R::finish)
}

/// Map a code through a status table, keeping unknown codes as-is
pub(crate) fn status_or_raw(table: &[(&'static str, &'static str)], code: Option<&str>) -> Option<String> {
    code.map(|code| {
        crate::constants::lookup_status(table, code)
            .unwrap_or(code)
            .to_string()
    })
}

/// Render an unmapped code as "Code <raw>"
pub(crate) fn code_label(code: Option<&str>) -> String {
    format!("Code {}", code.unwrap_or_default())
}
