//! Tests for transaction-set dispatch and the parse entry point

use super::{envelope, sample_850};
use crate::app::models::TransactionData;
use crate::app::services::transaction_router::{TransactionSet, parse_edi};

#[test]
fn test_transaction_set_codes_round_trip() {
    for set in TransactionSet::ALL {
        assert_eq!(TransactionSet::from_code(set.code()), Some(set));
        assert_eq!(set.code().parse::<TransactionSet>().unwrap(), set);
    }
    assert_eq!(TransactionSet::from_code("999"), None);
    assert!("999".parse::<TransactionSet>().is_err());
}

#[test]
fn test_parse_purchase_order() {
    let result = parse_edi(&sample_850());

    assert!(result.success);
    assert_eq!(result.detected_type.as_deref(), Some("850"));
    assert_eq!(result.segments_read, Some(10));
    assert_eq!(result.warning, None);
    assert_eq!(result.error, None);

    let Some(TransactionData::PurchaseOrder(po)) = result.data else {
        panic!("expected purchase order data");
    };
    assert_eq!(po.po_number.as_deref(), Some("PO-12345"));
    assert_eq!(po.date.as_deref(), Some("2023-12-04"));
    assert_eq!(po.items.len(), 1);
    assert_eq!(po.items[0].sku.as_deref(), Some("PART123"));
    assert_eq!(po.items[0].qty, 100);
}

#[test]
fn test_empty_input() {
    for input in ["", "   ", "\n\r\n"] {
        let result = parse_edi(input);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Empty or invalid EDI content"));
        assert_eq!(result.detected_type, None);
        assert_eq!(result.data, None);
    }
}

#[test]
fn test_noise_only_input_is_empty() {
    let result = parse_edi("X~TOOLONG*1~~");
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Empty or invalid EDI content"));
}

#[test]
fn test_extraction_failure_keeps_tokenization_details() {
    let result = parse_edi(&envelope("850", "BEG*00*SA*PO-1~\nPO1*1*lots*EA*1.00~"));

    assert!(!result.success);
    assert_eq!(result.detected_type.as_deref(), Some("850"));
    assert_eq!(result.segments_read, Some(8));
    assert_eq!(result.data, None);

    let error = result.error.expect("error message");
    assert!(error.starts_with("Parsing failed: "));
    assert!(error.contains("'lots'"));
}

#[test]
fn test_missing_st_is_unknown_generic() {
    let result = parse_edi("BEG*00*SA*PO-1~PO1*1*2*EA~");

    assert!(result.success);
    assert_eq!(result.detected_type.as_deref(), Some("Unknown"));
    assert!(result.warning.is_some());
    assert_eq!(result.doc_type(), Some("Unknown (Generic View)"));
}

#[test]
fn test_first_st_segment_wins() {
    let content = format!("{}~ST*997*0002~AK5*A~", envelope("810", "TDS*100~"));
    let result = parse_edi(&content);
    assert_eq!(result.detected_type.as_deref(), Some("810"));
    assert_eq!(result.doc_type(), Some("810 Invoice"));
}

#[test]
fn test_every_supported_set_routes_to_its_extractor() {
    let expected = [
        ("850", "850 Purchase Order"),
        ("855", "855 PO Acknowledgement"),
        ("856", "856 ASN"),
        ("214", "214 Carrier Status"),
        ("940", "940 Warehouse Order"),
        ("810", "810 Invoice"),
        ("997", "997 Functional Ack"),
        ("837", "837 Medical Claim"),
        ("835", "835 Payment"),
        ("270", "270 Inquiry"),
        ("271", "271 Response"),
    ];

    for (code, doc_type) in expected {
        let result = parse_edi(&format!("ST*{}*0001~SE*2*0001~", code));
        assert!(result.success, "code {}", code);
        assert_eq!(result.warning, None, "code {}", code);
        assert_eq!(result.doc_type(), Some(doc_type));
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let content = sample_850();
    let first = serde_json::to_string(&parse_edi(&content)).unwrap();
    let second = serde_json::to_string(&parse_edi(&content)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_json_shape() {
    let result = parse_edi(&sample_850());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["detected_type"], "850");
    assert_eq!(json["segments_read"], 10);
    assert_eq!(json["data"]["doc_type"], "850 Purchase Order");
    assert_eq!(json["data"]["ship_to"], "SHIP TO LOCATION");
    assert_eq!(
        json["data"]["items"],
        serde_json::json!([{"qty": 100, "price": 10.5, "sku": "PART123"}])
    );
    assert!(json.get("warning").is_none());
    assert!(json.get("error").is_none());
}
