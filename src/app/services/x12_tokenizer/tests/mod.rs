//! Test utilities for X12 tokenizer testing
//!
//! This module provides sample interchange builders shared by the delimiter
//! and tokenizer test modules.

mod property_tests;

/// Build a fixed-width ISA header with the given separators
pub fn isa_header(element: char, component: char, terminator: char) -> String {
    let fields = [
        "00".to_string(),
        " ".repeat(10),
        "00".to_string(),
        " ".repeat(10),
        "ZZ".to_string(),
        format!("{:<15}", "SENDERID"),
        "ZZ".to_string(),
        format!("{:<15}", "RECEIVERID"),
        "231204".to_string(),
        "1030".to_string(),
        "U".to_string(),
        "00401".to_string(),
        "000000001".to_string(),
        "0".to_string(),
        "P".to_string(),
        component.to_string(),
    ];

    let mut header = String::from("ISA");
    for field in &fields {
        header.push(element);
        header.push_str(field);
    }
    header.push(terminator);
    header
}

/// Helper to create a complete 850 interchange with standard delimiters
pub fn create_test_interchange() -> String {
    format!(
        "{}\nGS*PO*SENDERID*RECEIVERID*20231204*1030*1*X*004010~\nST*850*0001~\nBEG*00*SA*PO-12345**20231204~\nN1*ST*SHIP TO LOCATION*92*12345~\nPO1*1*100*EA*10.50**VP*PART123~\nSE*5*0001~\nGE*1*1~\nIEA*1*000000001~",
        isa_header('*', '>', '~')
    )
}

#[test]
fn test_isa_header_has_fixed_width() {
    assert_eq!(isa_header('*', '>', '~').chars().count(), 106);
    assert_eq!(isa_header('|', ':', '\n').chars().count(), 106);
}
