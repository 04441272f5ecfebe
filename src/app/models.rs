//! Data models for EDI processing
//!
//! This module contains the core data structures for representing tokenized X12
//! segments, the per-transaction-set summary records produced by the extractors,
//! and the parse result envelope handed to downstream collaborators.
//!
//! Field names and nesting of every serialized type here are a contract with the
//! consumers of the JSON output and must not be renamed.

use serde::Serialize;

// =============================================================================
// Segments and Documents
// =============================================================================

/// One X12 segment: a tag followed by its ordered elements
///
/// Elements are stored without the tag but addressed with the EDI convention,
/// where the tag sits at position 0 and the first element at position 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    tag: String,
    elements: Vec<String>,
}

impl Segment {
    /// Create a segment, trimming whitespace from the tag and every element
    pub fn new<I, S>(tag: &str, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tag: tag.trim().to_string(),
            elements: elements
                .into_iter()
                .map(|element| element.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Segment identifier (e.g. "ST", "PO1")
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Elements after the tag, in document order
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Number of elements after the tag
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Safe 1-based element accessor
    ///
    /// Position 0 is the tag. Out-of-range positions and empty values both
    /// resolve to `None`.
    pub fn get(&self, position: usize) -> Option<&str> {
        let value = match position {
            0 => self.tag.as_str(),
            _ => self.elements.get(position - 1)?.as_str(),
        };
        (!value.is_empty()).then_some(value)
    }

    /// Element at `position`, or `default` when missing or empty
    pub fn get_or<'a>(&'a self, position: usize, default: &'a str) -> &'a str {
        self.get(position).unwrap_or(default)
    }

    /// Owned copy of the element at `position`
    pub fn get_owned(&self, position: usize) -> Option<String> {
        self.get(position).map(str::to_string)
    }

    /// Check whether this segment has the given tag
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// Ordered sequence of segments produced by a single tokenization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Tags of all segments in document order
    pub fn tags(&self) -> Vec<&str> {
        self.segments.iter().map(Segment::tag).collect()
    }

    /// Transaction-set code from the first `ST` segment, if any
    pub fn transaction_set_code(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.is(crate::constants::TRANSACTION_SET_HEADER_TAG))
            .and_then(|segment| segment.get(1))
    }
}

impl From<Vec<Segment>> for Document {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

// =============================================================================
// Parse Result Envelope
// =============================================================================

/// Outcome of a single `parse_edi` call
///
/// Every failure path is represented here rather than as an error, so callers
/// always receive a well-formed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub success: bool,

    /// Transaction-set code from the `ST` segment, or "Unknown"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_type: Option<String>,

    /// Number of segments that survived tokenization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_read: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TransactionData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    /// Result for input that produced no segments
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: false,
            detected_type: None,
            segments_read: None,
            data: None,
            warning: None,
            error: Some(message.into()),
        }
    }

    /// Successful extraction
    pub fn extracted(detected_type: impl Into<String>, segments_read: usize, data: TransactionData) -> Self {
        Self {
            success: true,
            detected_type: Some(detected_type.into()),
            segments_read: Some(segments_read),
            data: Some(data),
            warning: None,
            error: None,
        }
    }

    /// Extraction of a recognized type failed after tokenization succeeded
    pub fn extraction_failed(
        detected_type: impl Into<String>,
        segments_read: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            detected_type: Some(detected_type.into()),
            segments_read: Some(segments_read),
            data: None,
            warning: None,
            error: Some(message.into()),
        }
    }

    /// Attach a warning
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Human-readable document label (e.g. "850 Purchase Order")
    pub fn doc_type(&self) -> Option<&str> {
        self.data.as_ref().map(TransactionData::doc_type)
    }
}

// =============================================================================
// Transaction Data
// =============================================================================

/// Extracted summary of one document, one variant per supported transaction set
///
/// Serialized without a variant tag: each record carries its own `doc_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransactionData {
    PurchaseOrder(PurchaseOrder),
    PurchaseOrderAck(PurchaseOrderAck),
    ShipNotice(ShipNotice),
    CarrierStatus(CarrierStatus),
    WarehouseOrder(WarehouseOrder),
    Invoice(Invoice),
    FunctionalAck(FunctionalAck),
    MedicalClaim(MedicalClaim),
    Payment(Payment),
    EligibilityInquiry(EligibilityInquiry),
    EligibilityResponse(EligibilityResponse),
    Generic(GenericView),
}

impl TransactionData {
    /// The record's `doc_type` label
    pub fn doc_type(&self) -> &str {
        match self {
            Self::PurchaseOrder(record) => &record.doc_type,
            Self::PurchaseOrderAck(record) => &record.doc_type,
            Self::ShipNotice(record) => &record.doc_type,
            Self::CarrierStatus(record) => &record.doc_type,
            Self::WarehouseOrder(record) => &record.doc_type,
            Self::Invoice(record) => &record.doc_type,
            Self::FunctionalAck(record) => &record.doc_type,
            Self::MedicalClaim(record) => &record.doc_type,
            Self::Payment(record) => &record.doc_type,
            Self::EligibilityInquiry(record) => &record.doc_type,
            Self::EligibilityResponse(record) => &record.doc_type,
            Self::Generic(record) => &record.doc_type,
        }
    }
}

/// 850 Purchase Order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrder {
    pub doc_type: String,
    pub po_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<String>,

    pub items: Vec<OrderItem>,
}

/// PO1 line of a purchase order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub qty: i64,
    pub price: f64,
    pub sku: Option<String>,
}

/// 855 Purchase Order Acknowledgment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderAck {
    pub doc_type: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_date: Option<String>,
}

/// 856 Advance Ship Notice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipNotice {
    pub doc_type: String,
    pub shipment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,

    pub structure: Vec<ShipmentItem>,
}

/// Item-level LIN entry of a ship notice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub sku: Option<String>,

    /// Absent until an SN1 follows the item; an SN1 without SN1-02 gives `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Option<String>>,
}

/// 214 Carrier Shipment Status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierStatus {
    pub doc_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    pub updates: Vec<StatusUpdate>,
}

/// AT7 status event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
    pub date: String,
    pub time: Option<String>,
}

/// 940 Warehouse Shipping Order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseOrder {
    pub doc_type: String,
    pub depositor_order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<String>,

    pub items: Vec<WarehouseItem>,
}

/// W01 line of a warehouse order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseItem {
    pub qty: i64,
    pub unit: Option<String>,
    pub sku: Option<String>,
}

/// 810 Invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub doc_type: String,
    pub total: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    pub lines: Vec<InvoiceLine>,
}

/// IT1 line of an invoice, values as transmitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    pub qty: Option<String>,
    pub price: Option<String>,
    pub sku: Option<String>,
}

/// 997 Functional Acknowledgment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionalAck {
    pub doc_type: String,
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// 837 Health Care Claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalClaim {
    pub doc_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    pub claims: Vec<Claim>,
}

/// One CLM loop of a health care claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    pub claim_id: Option<String>,
    pub amount: f64,
    pub diagnoses: Vec<String>,
    pub provider: Option<String>,
    pub patient_id_masked: String,
}

/// 835 Health Care Claim Payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub doc_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid: Option<f64>,

    pub payments: Vec<ClaimPayment>,
}

/// CLP claim payment line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimPayment {
    pub claim_id: Option<String>,
    pub status: Option<String>,
    pub paid: f64,
}

/// 270 Eligibility Inquiry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityInquiry {
    pub doc_type: String,
    pub patient_masked: Option<String>,
}

/// 271 Eligibility Response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResponse {
    pub doc_type: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

/// Structural dump for unsupported transaction sets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericView {
    pub doc_type: String,
    pub note: String,
    pub structure: Vec<GenericSegment>,
}

/// One segment in the generic structural dump
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericSegment {
    pub segment: String,
    pub elements: Vec<String>,
}

impl From<&Segment> for GenericSegment {
    fn from(segment: &Segment) -> Self {
        Self {
            segment: segment.tag().to_string(),
            elements: segment.elements().to_vec(),
        }
    }
}
