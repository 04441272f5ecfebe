//! Transaction-set dispatch
//!
//! Supported codes form a closed enum; anything else is routed to the generic
//! view. The router is the only layer that turns an extraction error into a
//! failed [`ParseResult`].

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error, info, warn};

use super::generic::generic_view;
use crate::app::models::{Document, ParseResult, Segment, TransactionData};
use crate::app::services::extractors::{
    CarrierStatusReducer, ClaimPaymentReducer, ClaimReducer, EligibilityInquiryReducer,
    EligibilityResponseReducer, FunctionalAckReducer, InvoiceReducer, PurchaseOrderAckReducer,
    PurchaseOrderReducer, ShipNoticeReducer, WarehouseOrderReducer, reduce,
};
use crate::app::services::x12_tokenizer::tokenize;
use crate::constants::{
    EMPTY_CONTENT_ERROR, EXTRACTION_ERROR_PREFIX, GENERIC_PARSER_WARNING, UNKNOWN_TRANSACTION_SET,
};
use crate::{Error, Result};

/// Transaction sets with a dedicated extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionSet {
    /// 850 Purchase Order
    PurchaseOrder,
    /// 855 Purchase Order Acknowledgment
    PurchaseOrderAck,
    /// 856 Advance Ship Notice
    ShipNotice,
    /// 214 Carrier Shipment Status
    CarrierStatus,
    /// 940 Warehouse Shipping Order
    WarehouseOrder,
    /// 810 Invoice
    Invoice,
    /// 997 Functional Acknowledgment
    FunctionalAck,
    /// 837 Health Care Claim
    MedicalClaim,
    /// 835 Health Care Claim Payment
    ClaimPayment,
    /// 270 Eligibility Inquiry
    EligibilityInquiry,
    /// 271 Eligibility Response
    EligibilityResponse,
}

impl TransactionSet {
    /// All supported transaction sets
    pub const ALL: [TransactionSet; 11] = [
        Self::PurchaseOrder,
        Self::PurchaseOrderAck,
        Self::ShipNotice,
        Self::CarrierStatus,
        Self::WarehouseOrder,
        Self::Invoice,
        Self::FunctionalAck,
        Self::MedicalClaim,
        Self::ClaimPayment,
        Self::EligibilityInquiry,
        Self::EligibilityResponse,
    ];

    /// Look up a transaction-set code such as "850"
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|set| set.code() == code)
    }

    /// The X12 code of this transaction set
    pub fn code(&self) -> &'static str {
        match self {
            Self::PurchaseOrder => "850",
            Self::PurchaseOrderAck => "855",
            Self::ShipNotice => "856",
            Self::CarrierStatus => "214",
            Self::WarehouseOrder => "940",
            Self::Invoice => "810",
            Self::FunctionalAck => "997",
            Self::MedicalClaim => "837",
            Self::ClaimPayment => "835",
            Self::EligibilityInquiry => "270",
            Self::EligibilityResponse => "271",
        }
    }

    /// Run this transaction set's extractor over a segment sequence
    pub fn extract(&self, segments: &[Segment]) -> Result<TransactionData> {
        match self {
            Self::PurchaseOrder => reduce::<PurchaseOrderReducer>(segments),
            Self::PurchaseOrderAck => reduce::<PurchaseOrderAckReducer>(segments),
            Self::ShipNotice => reduce::<ShipNoticeReducer>(segments),
            Self::CarrierStatus => reduce::<CarrierStatusReducer>(segments),
            Self::WarehouseOrder => reduce::<WarehouseOrderReducer>(segments),
            Self::Invoice => reduce::<InvoiceReducer>(segments),
            Self::FunctionalAck => reduce::<FunctionalAckReducer>(segments),
            Self::MedicalClaim => reduce::<ClaimReducer>(segments),
            Self::ClaimPayment => reduce::<ClaimPaymentReducer>(segments),
            Self::EligibilityInquiry => reduce::<EligibilityInquiryReducer>(segments),
            Self::EligibilityResponse => reduce::<EligibilityResponseReducer>(segments),
        }
    }
}

impl fmt::Display for TransactionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TransactionSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s.trim()).ok_or_else(|| {
            Error::configuration(format!("Unsupported transaction set code: '{}'", s))
        })
    }
}

/// Parse raw EDI text into a [`ParseResult`]
///
/// Never panics and never returns an error: every failure is reported inside
/// the result. Parsing the same text twice yields identical results.
pub fn parse_edi(raw: &str) -> ParseResult {
    let document = tokenize(raw);

    if document.is_empty() {
        warn!("No segments found in EDI content");
        return ParseResult::empty(EMPTY_CONTENT_ERROR);
    }

    parse_segments(&document)
}

/// Route an already tokenized document
pub fn parse_segments(document: &Document) -> ParseResult {
    if document.is_empty() {
        return ParseResult::empty(EMPTY_CONTENT_ERROR);
    }

    let code = document
        .transaction_set_code()
        .unwrap_or(UNKNOWN_TRANSACTION_SET);
    let segments_read = document.len();

    let Some(transaction_set) = TransactionSet::from_code(code) else {
        warn!("No extractor for transaction set {}, using generic view", code);
        let data = TransactionData::Generic(generic_view(document.segments(), code));
        return ParseResult::extracted(code, segments_read, data).with_warning(GENERIC_PARSER_WARNING);
    };

    info!(
        "Routing transaction set {} ({} segments)",
        transaction_set, segments_read
    );

    match transaction_set.extract(document.segments()) {
        Ok(data) => {
            debug!("Extracted {}", data.doc_type());
            ParseResult::extracted(code, segments_read, data)
        }
        Err(e) => {
            error!("Parser error for transaction set {}: {}", transaction_set, e);
            ParseResult::extraction_failed(
                code,
                segments_read,
                format!("{}{}", EXTRACTION_ERROR_PREFIX, e),
            )
        }
    }
}
