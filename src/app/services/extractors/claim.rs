//! 837 Health Care Claim extraction
//!
//! Every CLM opens a new claim. NM1 and HI segments update the claim that is
//! currently open and are ignored before the first CLM.

use super::SegmentReducer;
use crate::Result;
use crate::app::models::{Claim, MedicalClaim, Segment, TransactionData};
use crate::app::services::field_parsers::{format_currency, format_date, mask_pii};
use crate::constants::{DIAGNOSIS_COMPONENT_SEPARATOR, UNKNOWN_VALUE, entity_codes};

const DOC_TYPE: &str = "837 Medical Claim";

#[derive(Debug)]
pub struct ClaimReducer {
    record: MedicalClaim,
    /// Index of the open claim in `record.claims`
    current_claim: Option<usize>,
}

impl Default for ClaimReducer {
    fn default() -> Self {
        Self {
            record: MedicalClaim {
                doc_type: DOC_TYPE.to_string(),
                creation_date: None,
                claims: Vec::new(),
            },
            current_claim: None,
        }
    }
}

impl ClaimReducer {
    fn current_claim_mut(&mut self) -> Option<&mut Claim> {
        self.current_claim
            .and_then(|index| self.record.claims.get_mut(index))
    }

    fn open_claim(&mut self, segment: &Segment) {
        self.record.claims.push(Claim {
            claim_id: segment.get_owned(1),
            amount: format_currency(segment.get(2)),
            diagnoses: Vec::new(),
            provider: Some(UNKNOWN_VALUE.to_string()),
            patient_id_masked: UNKNOWN_VALUE.to_string(),
        });
        self.current_claim = Some(self.record.claims.len() - 1);
    }

    fn apply_entity(&mut self, segment: &Segment) {
        let Some(claim) = self.current_claim_mut() else {
            return;
        };

        match segment.get(1) {
            Some(entity_codes::BILLING_PROVIDER) => claim.provider = segment.get_owned(3),
            Some(entity_codes::INSURED) => claim.patient_id_masked = mask_pii(segment.get(9)),
            _ => {}
        }
    }
}

impl SegmentReducer for ClaimReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        match segment.tag() {
            "BHT" => self.record.creation_date = Some(format_date(segment.get(4))),
            "NM1" => self.apply_entity(segment),
            "CLM" => self.open_claim(segment),
            "HI" => {
                let codes = diagnosis_codes(segment);
                if let Some(claim) = self.current_claim_mut() {
                    claim.diagnoses = codes;
                }
            }
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::MedicalClaim(self.record)
    }
}

/// Codes from the `qualifier:code` composites of an HI segment
pub fn diagnosis_codes(segment: &Segment) -> Vec<String> {
    segment
        .elements()
        .iter()
        .filter_map(|composite| composite.split(DIAGNOSIS_COMPONENT_SEPARATOR).nth(1))
        .map(str::to_string)
        .collect()
}
