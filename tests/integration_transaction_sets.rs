//! Integration tests for end-to-end parsing of enveloped X12 documents
//!
//! Every supported transaction set is exercised through the public
//! `parse_edi` entry point with a full ISA/GS/ST envelope, the way documents
//! arrive from trading partners.

use edi_processor::{TransactionData, parse_edi};
use serde_json::{Value, json};

const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *231204*1030*U*00401*000000001*0*P*>~";

/// Wrap a transaction body in a full interchange envelope, one segment per line
fn interchange(code: &str, body: &[&str]) -> String {
    let mut lines = vec![
        ISA.to_string(),
        "GS*XX*SENDERID*RECEIVERID*20231204*1030*1*X*004010~".to_string(),
        format!("ST*{}*0001~", code),
    ];
    lines.extend(body.iter().map(|segment| format!("{}~", segment)));
    lines.push(format!("SE*{}*0001~", body.len() + 2));
    lines.push("GE*1*1~".to_string());
    lines.push("IEA*1*000000001~".to_string());
    lines.join("\n")
}

fn parse_to_json(content: &str) -> Value {
    serde_json::to_value(parse_edi(content)).expect("result serializes")
}

/// Purpose: Validate the canonical 850 sample end to end
/// Benefit: Locks the most common document's JSON contract
#[test]
fn test_purchase_order_850() {
    let content = interchange(
        "850",
        &[
            "BEG*00*SA*PO-12345**20231204",
            "DTM*002*20231210",
            "N1*ST*SHIP TO LOCATION*92*12345",
            "PO1*1*100*EA*10.50**VP*PART123",
            "PO1*2*4*CS*99.99**UP*012345678905*VN*VENDOR-7",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(json["success"], true);
    assert_eq!(json["detected_type"], "850");
    assert_eq!(json["segments_read"], 11);
    assert_eq!(
        json["data"],
        json!({
            "doc_type": "850 Purchase Order",
            "po_number": "PO-12345",
            "date": "2023-12-04",
            "ship_to": "SHIP TO LOCATION",
            "items": [
                {"qty": 100, "price": 10.5, "sku": "PART123"},
                {"qty": 4, "price": 99.99, "sku": "012345678905"}
            ]
        })
    );
}

#[test]
fn test_po_acknowledgement_855() {
    let content = interchange("855", &["BAK*00*AC*PO-12345*20231205"]);
    let json = parse_to_json(&content);

    assert_eq!(
        json["data"],
        json!({
            "doc_type": "855 PO Acknowledgement",
            "status": "Accepted",
            "po_number": "PO-12345",
            "ack_date": "2023-12-05"
        })
    );
}

#[test]
fn test_ship_notice_856() {
    let content = interchange(
        "856",
        &[
            "BSN*00*SHIP-001*20231206*1200",
            "HL*1**S",
            "HL*2*1*O",
            "HL*3*2*I",
            "LIN**VP*WIDGET-1",
            "SN1**24*EA",
            "HL*4*2*I",
            "LIN**VP*WIDGET-2",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(json["data"]["shipment_id"], "SHIP-001");
    assert_eq!(json["data"]["ship_date"], "2023-12-06");
    assert_eq!(
        json["data"]["structure"],
        json!([
            {"type": "Item", "sku": "WIDGET-1", "qty": "24"},
            {"type": "Item", "sku": "WIDGET-2"}
        ])
    );
}

#[test]
fn test_carrier_status_214() {
    let content = interchange(
        "214",
        &[
            "B10*1Z999AA10123456784*SHIP-REF*SCAC",
            "AT7*AF*NS***20231206*0800",
            "AT7*D1*NS***20231207*1415",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(json["data"]["tracking_number"], "1Z999AA10123456784");
    assert_eq!(
        json["data"]["updates"],
        json!([
            {"status": "Departed", "date": "2023-12-06", "time": "0800"},
            {"status": "Delivered", "date": "2023-12-07", "time": "1415"}
        ])
    );
}

#[test]
fn test_warehouse_order_940() {
    let content = interchange(
        "940",
        &[
            "W05*N*ORD-778*PO-4455",
            "N1*ST*DISTRIBUTION CENTER 4",
            "W01*12*CA*012345678905*VN*ITEM-ABC",
            "W01*3*EA*012345678905",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(
        json["data"],
        json!({
            "doc_type": "940 Warehouse Order",
            "depositor_order": "ORD-778",
            "po_number": "PO-4455",
            "ship_to": "DISTRIBUTION CENTER 4",
            "items": [
                {"qty": 12, "unit": "CA", "sku": "ITEM-ABC"},
                {"qty": 3, "unit": "EA", "sku": "012345678905"}
            ]
        })
    );
}

/// Purpose: Validate the high-value invoice sample with implied decimals
/// Benefit: TDS totals are transmitted without a decimal point
#[test]
fn test_invoice_810() {
    let content = interchange(
        "810",
        &[
            "BIG*20231205*INV-998877*20231201*PO-12345",
            "N1*RE*RETAILER NAME*92*STORE-001",
            "IT1*1*50*EA*250.00**VP*LAPTOP-X1",
            "TDS*1250000",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(json["data"]["total"], 12500.0);
    assert_eq!(json["data"]["invoice_number"], "INV-998877");
    assert_eq!(json["data"]["invoice_date"], "2023-12-05");
    assert_eq!(json["data"]["po_number"], "PO-12345");
    assert_eq!(
        json["data"]["lines"],
        json!([{"qty": "50", "price": "250.00", "sku": "LAPTOP-X1"}])
    );
}

#[test]
fn test_functional_ack_997() {
    let content = interchange("997", &["AK1*PO*1234", "AK2*850*0001", "AK5*R", "AK9*R*1*1*0"]);
    let json = parse_to_json(&content);

    assert_eq!(
        json["data"],
        json!({"doc_type": "997 Functional Ack", "status": "Rejected", "group": "PO"})
    );
}

/// Purpose: Validate claim grouping and PII masking across a multi-claim 837
/// Benefit: Subscriber identifiers must never appear unmasked in output
#[test]
fn test_medical_claim_837() {
    let content = interchange(
        "837",
        &[
            "BHT*0019*00*REF47517*20231201*1023*CH",
            "NM1*85*2*RIVERSIDE CLINIC*****XX*1234567893",
            "CLM*CLAIM-001*150.75***11:B:1*Y*A*Y*Y",
            "NM1*85*2*RIVERSIDE CLINIC",
            "NM1*IL*1*DOE*JANE****MI*123456789",
            "HI*ABK:J0300*ABF:R05",
            "CLM*CLAIM-002*80***11:B:1*Y*A*Y*Y",
            "NM1*IL*1*ROE*RICHARD****MI*987654321",
            "HI*ABK:E119",
        ],
    );
    let result = parse_edi(&content);
    assert!(result.success);

    let Some(TransactionData::MedicalClaim(record)) = &result.data else {
        panic!("expected medical claim data");
    };
    assert_eq!(record.creation_date.as_deref(), Some("2023-12-01"));
    assert_eq!(record.claims.len(), 2);
    assert_eq!(record.claims[0].provider.as_deref(), Some("RIVERSIDE CLINIC"));
    assert_eq!(record.claims[0].patient_id_masked, "****6789");
    assert_eq!(record.claims[0].diagnoses, vec!["J0300", "R05"]);
    assert_eq!(record.claims[1].provider.as_deref(), Some("Unknown"));
    assert_eq!(record.claims[1].patient_id_masked, "****4321");

    let serialized = serde_json::to_string(&result).unwrap();
    assert!(!serialized.contains("123456789"));
    assert!(!serialized.contains("987654321"));
}

#[test]
fn test_claim_payment_835() {
    let content = interchange(
        "835",
        &[
            "BPR*I*1275.50*C*ACH",
            "TRN*1*CHK-000123*1512345678",
            "CLP*CLAIM-001*1*1500*1200.50",
            "CLP*CLAIM-002*4*200*0",
        ],
    );
    let json = parse_to_json(&content);

    assert_eq!(json["data"]["check_number"], "CHK-000123");
    assert_eq!(json["data"]["total_paid"], 1275.5);
    assert_eq!(
        json["data"]["payments"],
        json!([
            {"claim_id": "CLAIM-001", "status": "1", "paid": 1200.5},
            {"claim_id": "CLAIM-002", "status": "4", "paid": 0.0}
        ])
    );
}

#[test]
fn test_eligibility_inquiry_270() {
    let content = interchange(
        "270",
        &["NM1*PR*2*ACME HEALTH", "NM1*IL*1*SMITH*JOHN****MI*W123456789"],
    );
    let json = parse_to_json(&content);

    assert_eq!(
        json["data"],
        json!({"doc_type": "270 Inquiry", "patient_masked": "****6789"})
    );
}

#[test]
fn test_eligibility_response_271() {
    let content = interchange("271", &["EB*1*IND*30**GOLD PPO PLAN"]);
    let json = parse_to_json(&content);

    assert_eq!(
        json["data"],
        json!({"doc_type": "271 Response", "status": "Active", "plan": "GOLD PPO PLAN"})
    );
}

/// Purpose: Validate custom delimiters announced by the ISA header
/// Benefit: Partners using `|` and newline terminators parse identically
#[test]
fn test_custom_delimiters_from_isa_header() {
    let standard = interchange("997", &["AK1*PO*1234", "AK5*A"]);
    let custom = standard.replace('*', "|").replace('~', "\n");

    let standard_result = parse_edi(&standard);
    let custom_result = parse_edi(&custom);

    assert!(custom_result.success);
    assert_eq!(custom_result.segments_read, standard_result.segments_read);
    assert_eq!(custom_result.data, standard_result.data);
}

#[test]
fn test_unsupported_transaction_set_uses_generic_view() {
    let content = interchange("999", &["AK1*HC*17", "IK5*A"]);
    let json = parse_to_json(&content);

    assert_eq!(json["success"], true);
    assert_eq!(json["detected_type"], "999");
    assert_eq!(json["warning"], "Using generic parser. Some fields may not be labeled.");
    assert_eq!(json["data"]["doc_type"], "999 (Generic View)");
    assert_eq!(json["data"]["structure"][3], json!({"segment": "AK1", "elements": ["HC", "17"]}));
}

#[test]
fn test_truncated_header_without_transaction_set() {
    let json = parse_to_json("ISA*00* ... THIS IS NOT VALID EDI ...");

    assert_eq!(json["success"], true);
    assert_eq!(json["detected_type"], "Unknown");
    assert_eq!(json["data"]["doc_type"], "Unknown (Generic View)");
}

#[test]
fn test_extraction_failure_reports_context() {
    let content = interchange("940", &["W05*N*ORD-1*PO-1", "W01*two*EA*012345678905"]);
    let json = parse_to_json(&content);

    assert_eq!(json["success"], false);
    assert_eq!(json["detected_type"], "940");
    assert_eq!(json["segments_read"], 8);
    assert!(json.get("data").is_none());
    assert!(json["error"].as_str().unwrap().starts_with("Parsing failed: 940 W01 segment"));
}

#[test]
fn test_whitespace_only_input() {
    let json = parse_to_json(" \n\t ");
    assert_eq!(json, json!({"success": false, "error": "Empty or invalid EDI content"}));
}
