//! Dimension string parsing - extract an area in square feet from free text

use once_cell::sync::Lazy;
use regex::Regex;

/// Square metres to square feet
const SQM_TO_SQFT: f64 = 10.764;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AreaUnit {
    SquareFeet,
    SquareMetres,
}

/// Ordered pattern table. Each pattern captures a leading decimal number
/// followed by a unit token; the first pattern that matches wins, so the
/// order is load-bearing (e.g. "sq ft" must be tried before "sqft").
static AREA_PATTERNS: Lazy<Vec<(Regex, AreaUnit)>> = Lazy::new(|| {
    [
        (r"(\d+(?:\.\d+)?)\s*sq\.?\s*ft\.?", AreaUnit::SquareFeet),
        (r"(\d+(?:\.\d+)?)\s*sft", AreaUnit::SquareFeet),
        (r"(\d+(?:\.\d+)?)\s*sq\.?\s*mtr?s?\.?", AreaUnit::SquareMetres),
        (r"(\d+(?:\.\d+)?)\s*sq\.?\s*m\.?", AreaUnit::SquareMetres),
        (r"(\d+(?:\.\d+)?)\s*sqft", AreaUnit::SquareFeet),
    ]
    .into_iter()
    .map(|(pattern, unit)| (Regex::new(pattern).unwrap(), unit))
    .collect()
});

/// Extract an area in square feet from a dimension string.
///
/// Metric matches are converted to square feet; anything that matches no
/// pattern yields `None`, never an error.
pub fn extract_area(dimensions: Option<&str>) -> Option<f64> {
    let dimensions = dimensions?.trim();
    if dimensions.is_empty() {
        return None;
    }

    let lower = dimensions.to_lowercase();

    for (pattern, unit) in AREA_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&lower) {
            let area: f64 = captures.get(1)?.as_str().parse().ok()?;
            return Some(match unit {
                AreaUnit::SquareFeet => area,
                AreaUnit::SquareMetres => area * SQM_TO_SQFT,
            });
        }
    }

    None
}
