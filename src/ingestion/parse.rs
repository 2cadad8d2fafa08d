//! Parse functions - map raw source JSON into unified RawRecord structs

use crate::ingestion::area::extract_area;
use crate::ingestion::types::{RawRecord, Source, SourceError};
use crate::ingestion::utils::scalar_to_string;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Baanknet listing-array element
#[derive(Debug, Deserialize)]
struct BaanknetEntry {
    #[serde(default)]
    status: Option<i64>,

    #[serde(default)]
    property_id: Option<Value>,

    #[serde(rename = "respData", default)]
    resp_data: Option<BaanknetRespData>,
}

/// Baanknet per-entry payload
#[derive(Debug, Deserialize)]
struct BaanknetRespData {
    #[serde(rename = "propertyPrice", default)]
    property_price: Option<Value>,

    #[serde(default)]
    city: Option<Value>,

    #[serde(rename = "summaryDesc", default)]
    summary_desc: Option<Value>,
}

/// Per-property detail file wrapper
#[derive(Debug, Deserialize)]
struct DetailFile {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    data: Option<DetailData>,
}

/// Detail file payload - the 14 source fields, all optional scalars
#[derive(Debug, Deserialize)]
struct DetailData {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    borrower_name: Option<Value>,
    #[serde(default)]
    bank_name: Option<Value>,
    #[serde(default)]
    address: Option<Value>,
    #[serde(default)]
    reserve_price: Option<Value>,
    #[serde(default)]
    dimensions: Option<Value>,
    #[serde(default)]
    emd: Option<Value>,
    #[serde(default)]
    possession: Option<Value>,
    #[serde(default)]
    auction_date: Option<Value>,
    #[serde(default)]
    application_deadline: Option<Value>,
    #[serde(default)]
    locality: Option<Value>,
    #[serde(default)]
    city: Option<Value>,
    #[serde(default)]
    state: Option<Value>,
    #[serde(default)]
    pincode: Option<Value>,
    #[serde(default)]
    property_type: Option<Value>,
}

fn cell(value: &Option<Value>) -> Option<String> {
    value.as_ref().and_then(scalar_to_string)
}

/// Parse the baanknet listing file into unified records.
///
/// A missing or malformed file is logged and yields an empty vec; the
/// pipeline carries on with the other source.
pub fn parse_baanknet(path: &Path) -> Vec<RawRecord> {
    info!("Parsing baanknet file {:?}", path);

    let entries = match read_entry_array(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error parsing baanknet file: {}", e);
            return Vec::new();
        }
    };

    let records = map_baanknet_entries(&entries);
    info!("Parsed {} properties from baanknet file", records.len());

    records
}

fn read_entry_array(path: &Path) -> Result<Vec<Value>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Map raw baanknet array elements into unified records.
///
/// Only entries with `status == 1` and a present `respData` produce a
/// record; everything else is skipped silently.
pub fn map_baanknet_entries(entries: &[Value]) -> Vec<RawRecord> {
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<BaanknetEntry>(entry.clone()).ok())
        .filter_map(|entry| {
            let resp_data = entry.resp_data?;
            if entry.status != Some(1) {
                return None;
            }

            Some(RawRecord {
                id: cell(&entry.property_id),
                price: cell(&resp_data.property_price),
                city: cell(&resp_data.city),
                description: cell(&resp_data.summary_desc),
                ..RawRecord::empty(Source::Baanknet)
            })
        })
        .collect()
}

/// Parse every `*.json` file in the property-details directory.
///
/// Files that are unreadable, malformed, or not marked successful are
/// skipped with a warning; one bad file never affects the others.
pub fn parse_property_details(dir: &Path) -> Vec<RawRecord> {
    info!("Parsing property details directory {:?}", dir);

    let files = match list_json_files(dir) {
        Ok(files) => files,
        Err(e) => {
            error!("Error reading property details directory: {}", e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for path in files {
        match read_detail_file(&path) {
            Ok(file) => match map_detail_file(file) {
                Some(record) => records.push(record),
                None => warn!("Skipping {:?}: not a successful detail payload", path),
            },
            Err(e) => warn!("Error parsing {:?}: {}", path, e),
        }
    }

    info!("Parsed {} properties from directory", records.len());

    records
}

/// Enumerate `*.json` files in read_dir order; the order is not stable
/// across platforms and the output does not depend on it being so.
fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }

    Ok(files)
}

fn read_detail_file(path: &Path) -> Result<DetailFile, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Map one detail payload into a unified record. Files without
/// `success: true` and a `data` object yield nothing.
fn map_detail_file(file: DetailFile) -> Option<RawRecord> {
    if !file.success {
        return None;
    }
    let data = file.data?;

    let dimensions = cell(&data.dimensions);
    let area_sqft = extract_area(dimensions.as_deref());

    Some(RawRecord {
        id: cell(&data.id),
        borrower_name: cell(&data.borrower_name),
        bank_name: cell(&data.bank_name),
        address: cell(&data.address),
        price: cell(&data.reserve_price),
        dimensions,
        area_sqft,
        emd: cell(&data.emd),
        possession: cell(&data.possession),
        auction_date: cell(&data.auction_date),
        application_deadline: cell(&data.application_deadline),
        locality: cell(&data.locality),
        city: cell(&data.city),
        state: cell(&data.state),
        pincode: cell(&data.pincode),
        property_type: cell(&data.property_type),
        description: None,
        source: Source::PropertyDetails,
    })
}
