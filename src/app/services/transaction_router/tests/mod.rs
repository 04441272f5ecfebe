//! Test utilities for transaction routing
//!
//! Provides enveloped sample documents shared by the routing tests.

mod router_tests;

/// Standard 106-character ISA header with `*`, `>` and `~`
pub const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *231204*1030*U*00401*000000001*0*P*>~";

/// Wrap a transaction body in GS/ST ... SE/GE/IEA envelopes
pub fn envelope(code: &str, body: &str) -> String {
    format!(
        "{}\nGS*XX*SENDERID*RECEIVERID*20231204*1030*1*X*004010~\nST*{}*0001~\n{}\nSE*9*0001~\nGE*1*1~\nIEA*1*000000001~",
        ISA, code, body
    )
}

/// Sample purchase order from the batch test suite
pub fn sample_850() -> String {
    envelope(
        "850",
        "BEG*00*SA*PO-12345**20231204~\nDTM*002*20231210~\nN1*ST*SHIP TO LOCATION*92*12345~\nPO1*1*100*EA*10.50**VP*PART123~",
    )
}

#[test]
fn test_isa_constant_has_fixed_width() {
    assert_eq!(ISA.chars().count(), 106);
}
