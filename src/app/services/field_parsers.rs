//! Field formatting utilities for X12 element values
//!
//! This module provides the date, currency and masking helpers shared by every
//! extractor. Apart from [`parse_quantity`], none of these functions fail:
//! malformed input degrades to a documented placeholder value.

use crate::app::models::Segment;
use crate::constants::{DATE_NOT_AVAILABLE, MASK_PREFIX, MASK_UNKNOWN, MASK_VISIBLE_CHARS};
use crate::{Error, Result};

/// Reformat an X12 `YYYYMMDD` date as `YYYY-MM-DD`
///
/// Values that are not exactly eight characters pass through unchanged, and
/// missing values become "N/A". No calendar validation is performed.
pub fn format_date(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return DATE_NOT_AVAILABLE.to_string(),
    };

    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 8 {
        return value.to_string();
    }

    let year: String = chars[..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..].iter().collect();
    format!("{}-{}-{}", year, month, day)
}

/// Parse a monetary amount, falling back to 0.0 on anything non-numeric
pub fn format_currency(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse an amount transmitted with implied decimal places
///
/// `format_implied_decimal(Some("1250000"), 2)` is `12500.0`. Only fields whose
/// format declares implied decimals should use this.
pub fn format_implied_decimal(value: Option<&str>, decimal_places: u32) -> f64 {
    format_currency(value) / 10f64.powi(decimal_places as i32)
}

/// Mask an identifier, keeping only its last four characters
pub fn mask_pii(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return MASK_UNKNOWN.to_string(),
    };

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= MASK_VISIBLE_CHARS {
        return MASK_PREFIX.to_string();
    }

    let visible: String = chars[chars.len() - MASK_VISIBLE_CHARS..].iter().collect();
    format!("{}{}", MASK_PREFIX, visible)
}

/// Parse an integer quantity element; missing values count as zero
///
/// A present but non-integer value is an extraction error for the given
/// transaction set.
pub fn parse_quantity(segment: &Segment, position: usize, transaction_set: &str) -> Result<i64> {
    match segment.get(position) {
        None => Ok(0),
        Some(raw) => raw.parse::<i64>().map_err(|e| {
            Error::extraction(
                transaction_set,
                segment.tag(),
                format!("invalid quantity '{}' at position {} ({})", raw, position, e),
            )
        }),
    }
}
