//! 270 Eligibility Inquiry and 271 Eligibility Response extraction

use super::{SegmentReducer, code_label};
use crate::Result;
use crate::app::models::{EligibilityInquiry, EligibilityResponse, Segment, TransactionData};
use crate::app::services::field_parsers::mask_pii;
use crate::constants::{ELIGIBILITY_ACTIVE_CODE, UNKNOWN_VALUE, entity_codes};

const INQUIRY_DOC_TYPE: &str = "270 Inquiry";
const RESPONSE_DOC_TYPE: &str = "271 Response";
const ACTIVE_STATUS: &str = "Active";

#[derive(Debug)]
pub struct EligibilityInquiryReducer {
    record: EligibilityInquiry,
}

impl Default for EligibilityInquiryReducer {
    fn default() -> Self {
        Self {
            record: EligibilityInquiry {
                doc_type: INQUIRY_DOC_TYPE.to_string(),
                patient_masked: None,
            },
        }
    }
}

impl SegmentReducer for EligibilityInquiryReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        if segment.is("NM1") && segment.get(1) == Some(entity_codes::INSURED) {
            self.record.patient_masked = Some(mask_pii(segment.get(9)));
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::EligibilityInquiry(self.record)
    }
}

#[derive(Debug)]
pub struct EligibilityResponseReducer {
    record: EligibilityResponse,
}

impl Default for EligibilityResponseReducer {
    fn default() -> Self {
        Self {
            record: EligibilityResponse {
                doc_type: RESPONSE_DOC_TYPE.to_string(),
                status: UNKNOWN_VALUE.to_string(),
                plan: None,
            },
        }
    }
}

impl SegmentReducer for EligibilityResponseReducer {
    fn step(mut self, segment: &Segment) -> Result<Self> {
        if segment.is("EB") {
            let code = segment.get(1);
            self.record.status = if code == Some(ELIGIBILITY_ACTIVE_CODE) {
                ACTIVE_STATUS.to_string()
            } else {
                code_label(code)
            };
            self.record.plan = segment.get_owned(5);
        }
        Ok(self)
    }

    fn finish(self) -> TransactionData {
        TransactionData::EligibilityResponse(self.record)
    }
}
