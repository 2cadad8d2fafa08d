//! Core data types for the ingestion pipeline
//! Pure data structures with no behavior

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Data source provenance tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Baanknet,
    PropertyDetails,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Baanknet => write!(f, "baanknet"),
            Source::PropertyDetails => write!(f, "property_details"),
        }
    }
}

/// A unified record as mapped from a source, before cleaning.
///
/// Every field of the unified schema is present; cells the source did not
/// provide are `None`. Value cells stay textual until [`clean`] coerces
/// them, mirroring how the raw feeds mix strings and numbers.
///
/// [`clean`]: crate::ingestion::clean::clean
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub id: Option<String>,
    pub borrower_name: Option<String>,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub dimensions: Option<String>,
    pub area_sqft: Option<f64>,
    pub emd: Option<String>,
    pub possession: Option<String>,
    pub auction_date: Option<String>,
    pub application_deadline: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub property_type: Option<String>,
    pub description: Option<String>,
    pub source: Source,
}

/// Cleaned unified property record - pure data, no behavior.
///
/// Field order is the fixed column order of the output dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: Option<String>,
    pub borrower_name: Option<String>,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    pub price: Option<f64>,
    pub dimensions: Option<String>,
    pub area_sqft: Option<f64>,
    pub emd: Option<String>,
    pub possession: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub application_deadline: Option<NaiveDate>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<i64>,
    pub property_type: Option<String>,
    pub description: Option<String>,
    pub source: Source,
}

impl PropertyRecord {
    /// Output column order; matches the struct field order
    pub const COLUMNS: [&'static str; 18] = [
        "id",
        "borrower_name",
        "bank_name",
        "address",
        "price",
        "dimensions",
        "area_sqft",
        "emd",
        "possession",
        "auction_date",
        "application_deadline",
        "locality",
        "city",
        "state",
        "pincode",
        "property_type",
        "description",
        "source",
    ];
}

/// Per-source record tally for the provenance summary
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceCounts {
    pub baanknet: usize,
    pub property_details: usize,
}

impl SourceCounts {
    pub fn tally(records: &[PropertyRecord]) -> Self {
        let mut counts = SourceCounts::default();
        for record in records {
            match record.source {
                Source::Baanknet => counts.baanknet += 1,
                Source::PropertyDetails => counts.property_details += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.baanknet + self.property_details
    }
}

impl std::fmt::Display for SourceCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "baanknet: {}, property_details: {}",
            self.baanknet, self.property_details
        )
    }
}

/// Why a source file could not be read at all
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RawRecord {
    /// An all-empty record tagged with its source
    pub fn empty(source: Source) -> Self {
        RawRecord {
            id: None,
            borrower_name: None,
            bank_name: None,
            address: None,
            price: None,
            dimensions: None,
            area_sqft: None,
            emd: None,
            possession: None,
            auction_date: None,
            application_deadline: None,
            locality: None,
            city: None,
            state: None,
            pincode: None,
            property_type: None,
            description: None,
            source,
        }
    }
}
