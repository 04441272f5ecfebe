//! Application constants for the EDI processor
//!
//! This module contains the delimiter defaults, qualifier sets, status code
//! tables and fixed messages used throughout the parsing pipeline.

// =============================================================================
// Delimiters and Envelope Layout
// =============================================================================

/// Element separator used when no ISA header is present
pub const DEFAULT_ELEMENT_SEPARATOR: char = '*';

/// Segment terminator used when no ISA header is present
pub const DEFAULT_SEGMENT_TERMINATOR: char = '~';

/// Tag of the interchange control header
pub const ISA_TAG: &str = "ISA";

/// Fixed width of the ISA segment including its terminator
pub const ISA_SEGMENT_LENGTH: usize = 106;

/// Character offset of the element separator inside the ISA segment
pub const ISA_ELEMENT_SEPARATOR_OFFSET: usize = 3;

/// Accepted segment tag lengths (inclusive)
pub const MIN_TAG_LENGTH: usize = 2;
pub const MAX_TAG_LENGTH: usize = 3;

/// Tag of the transaction set header
pub const TRANSACTION_SET_HEADER_TAG: &str = "ST";

/// Detected type reported when no `ST` segment carries a code
pub const UNKNOWN_TRANSACTION_SET: &str = "Unknown";

// =============================================================================
// Formatting
// =============================================================================

/// Placeholder for absent dates
pub const DATE_NOT_AVAILABLE: &str = "N/A";

/// Masked identifier placeholders
pub const MASK_PREFIX: &str = "****";
pub const MASK_UNKNOWN: &str = "UNKNOWN";

/// Number of trailing characters kept visible by PII masking
pub const MASK_VISIBLE_CHARS: usize = 4;

/// Implied decimal places on the 810 TDS total amount
pub const INVOICE_TOTAL_IMPLIED_DECIMALS: u32 = 2;

// =============================================================================
// Qualifiers
// =============================================================================

/// Product ID qualifiers scanned for on PO1 lines
pub const PO1_SKU_QUALIFIERS: &[&str] = &["VP", "VN", "BP", "UP", "IB"];

/// First PO1 position scanned for a product ID qualifier
pub const PO1_QUALIFIER_SCAN_START: usize = 6;

/// PO1 position used when no qualifier is found
pub const PO1_SKU_FALLBACK_POSITION: usize = 7;

/// SKU reported for PO1 lines without a usable product ID
pub const MISSING_SKU: &str = "MISSING";

/// Product ID qualifiers recognized at W01-04
pub const W01_SKU_QUALIFIERS: &[&str] = &["VN", "VP", "UP", "BP"];

/// Minimum length for W01-03 to be treated as a product code
pub const W01_UPC_MIN_LENGTH: usize = 7;

/// SKU reported for W01 lines without a usable product ID
pub const UNKNOWN_SKU: &str = "UNKNOWN";

/// Placeholder for header fields not yet seen
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Entity identifier code for ship-to parties
pub const SHIP_TO_QUALIFIER: &str = "ST";

/// Entity identifier codes used on NM1 segments
pub mod entity_codes {
    /// Billing provider
    pub const BILLING_PROVIDER: &str = "85";

    /// Insured or subscriber
    pub const INSURED: &str = "IL";
}

/// ASN hierarchical level code for items
pub const HL_ITEM_LEVEL: &str = "I";

/// Eligibility benefit code for active coverage
pub const ELIGIBILITY_ACTIVE_CODE: &str = "1";

/// Separator between qualifier and code in HI diagnosis composites
pub const DIAGNOSIS_COMPONENT_SEPARATOR: char = ':';

// =============================================================================
// Status Code Tables
// =============================================================================

/// BAK-01 acknowledgment type codes (855)
pub const PO_ACK_STATUS: &[(&str, &str)] = &[
    ("00", "Accepted"),
    ("AD", "Modified"),
    ("RD", "Rejected"),
    ("AC", "Changes"),
];

/// AT7-01 shipment status codes (214)
pub const SHIPMENT_STATUS: &[(&str, &str)] = &[
    ("AF", "Departed"),
    ("X1", "Arrived"),
    ("D1", "Delivered"),
    ("X6", "En Route"),
];

/// AK5-01 transaction set acknowledgment codes (997)
pub const FUNCTIONAL_ACK_STATUS: &[(&str, &str)] = &[
    ("A", "Accepted"),
    ("R", "Rejected"),
    ("E", "Errors"),
    ("M", "Rejected, Auth Required"),
];

/// Look up a code in one of the status tables
pub fn lookup_status(table: &[(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

// =============================================================================
// Result Messages
// =============================================================================

/// Error reported when tokenization yields no segments
pub const EMPTY_CONTENT_ERROR: &str = "Empty or invalid EDI content";

/// Prefix of errors reported when an extractor fails
pub const EXTRACTION_ERROR_PREFIX: &str = "Parsing failed: ";

/// Warning attached to results produced by the generic fallback
pub const GENERIC_PARSER_WARNING: &str = "Using generic parser. Some fields may not be labeled.";

/// Note embedded in the generic fallback record
pub const GENERIC_PARSER_NOTE: &str = "No specific parser logic defined for this type yet.";

/// Error reported by the analysis wrapper when parsing fails
pub const ANALYSIS_SKIPPED_ERROR: &str = "Could not parse EDI, so AI analysis was skipped.";

/// Prefix of analysis text when the summarizer fails
pub const ANALYSIS_ERROR_PREFIX: &str = "AI Error: ";

// =============================================================================
// CLI and Batch Processing
// =============================================================================

/// File extensions picked up when a directory is given
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &["edi", "x12", "txt", "dat"];

/// Upper bound on concurrent batch workers
pub const MAX_WORKERS: usize = 64;

/// Name of the summary written next to batch outputs
pub const BATCH_REPORT_FILE_NAME: &str = "batch_results.json";

/// Label of the only built-in summarizer client
pub const SIMULATED_SUMMARIZER_MODEL: &str = "simulated";

/// Application name used for the config directory
pub const APP_NAME: &str = "edi-processor";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overrides
pub mod env_vars {
    pub const WORKERS: &str = "EDI_PROCESSOR_WORKERS";
    pub const PRETTY: &str = "EDI_PROCESSOR_PRETTY";
    pub const OUTPUT_DIR: &str = "EDI_PROCESSOR_OUTPUT_DIR";
}
