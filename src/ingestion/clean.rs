//! Cleaning functions - coerce and standardize mapped cells

use crate::ingestion::types::{PropertyRecord, RawRecord};
use chrono::NaiveDate;
use tracing::info;

/// Date formats the sources emit, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d", "%d %b %Y"];

/// Clean and standardize mapped records.
///
/// Every rule is total: an unparsable cell becomes `None`, never an error.
/// Columns not named here pass through unchanged.
pub fn clean(records: Vec<RawRecord>) -> Vec<PropertyRecord> {
    info!("Cleaning and standardizing {} records", records.len());

    records.into_iter().map(clean_record).collect()
}

fn clean_record(raw: RawRecord) -> PropertyRecord {
    PropertyRecord {
        id: raw.id,
        borrower_name: raw.borrower_name,
        bank_name: raw.bank_name,
        address: raw.address,
        price: raw.price.as_deref().and_then(coerce_number),
        dimensions: raw.dimensions,
        area_sqft: raw.area_sqft,
        emd: raw.emd,
        possession: raw.possession,
        auction_date: raw.auction_date.as_deref().and_then(coerce_date),
        application_deadline: raw.application_deadline.as_deref().and_then(coerce_date),
        locality: raw.locality,
        city: raw.city.as_deref().map(title_case),
        state: raw.state.as_deref().map(title_case),
        pincode: raw.pincode.as_deref().and_then(coerce_pincode),
        property_type: raw.property_type.as_deref().map(title_case),
        description: raw.description,
        source: raw.source,
    }
}

/// Coerce text to a number; anything unparsable is `None`
pub fn coerce_number(text: &str) -> Option<f64> {
    let parsed: f64 = text.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Coerce text to a pincode. Accepts integral float text ("560001.0");
/// a pincode of exactly 0 is invalid and nulled.
pub fn coerce_pincode(text: &str) -> Option<i64> {
    let text = text.trim();
    let pincode = match text.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let parsed: f64 = text.parse().ok()?;
            if !parsed.is_finite() || parsed.fract() != 0.0 {
                return None;
            }
            parsed as i64
        }
    };

    (pincode != 0).then_some(pincode)
}

/// Parse a calendar date, trying each known format in order. Datetime
/// strings are accepted by their date prefix.
pub fn coerce_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    // ISO datetime such as "2024-03-15T10:30:00" or "2024-03-15 10:30:00"
    if let Some(prefix) = text.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }

    None
}

/// Trim and title-case: a letter is uppercased when the preceding
/// character is not alphabetic, lowercased otherwise.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_alphabetic = false;

    for c in text.trim().chars() {
        if prev_alphabetic {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_alphabetic = c.is_alphabetic();
    }

    result
}
