//! End-to-end tests over temp-file fixtures

use auction_data_ingestion::ingestion::types::{Source, SourceCounts};
use auction_data_ingestion::ingestion::write::write_csv;
use auction_data_ingestion::Pipeline;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn baanknet_only_run_produces_single_cleaned_row() {
    let dir = tempdir().unwrap();
    let baanknet = dir.path().join("baanknet.json");
    let details = dir.path().join("property_details");
    fs::create_dir(&details).unwrap();

    fs::write(
        &baanknet,
        json!([{
            "status": 1,
            "property_id": "P1",
            "respData": {
                "propertyPrice": "1000000",
                "city": " mumbai ",
                "summaryDesc": "flat"
            }
        }])
        .to_string(),
    )
    .unwrap();

    let records = Pipeline::new(&baanknet, &details).run();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id.as_deref(), Some("P1"));
    assert_eq!(record.price, Some(1_000_000.0));
    assert_eq!(record.city.as_deref(), Some("Mumbai"));
    assert_eq!(record.description.as_deref(), Some("flat"));
    assert_eq!(record.source, Source::Baanknet);

    assert!(record.borrower_name.is_none());
    assert!(record.bank_name.is_none());
    assert!(record.address.is_none());
    assert!(record.dimensions.is_none());
    assert!(record.area_sqft.is_none());
    assert!(record.emd.is_none());
    assert!(record.possession.is_none());
    assert!(record.auction_date.is_none());
    assert!(record.application_deadline.is_none());
    assert!(record.locality.is_none());
    assert!(record.state.is_none());
    assert!(record.pincode.is_none());
    assert!(record.property_type.is_none());
}

#[test]
fn detail_file_derives_area_and_nulls_zero_pincode() {
    let dir = tempdir().unwrap();
    let baanknet = dir.path().join("baanknet.json");
    let details = dir.path().join("property_details");
    fs::create_dir(&details).unwrap();
    fs::write(&baanknet, "[]").unwrap();

    fs::write(
        details.join("d1.json"),
        json!({
            "success": true,
            "data": {
                "id": "D1",
                "dimensions": "1200 sq.ft.",
                "reserve_price": "500000",
                "pincode": "0"
            }
        })
        .to_string(),
    )
    .unwrap();

    let records = Pipeline::new(&baanknet, &details).run();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id.as_deref(), Some("D1"));
    assert_eq!(record.area_sqft, Some(1200.0));
    assert_eq!(record.price, Some(500_000.0));
    assert_eq!(record.pincode, None);
    assert_eq!(record.source, Source::PropertyDetails);
}

#[test]
fn bad_sources_yield_empty_but_valid_csv() {
    let dir = tempdir().unwrap();

    let records = Pipeline::new(
        dir.path().join("missing.json"),
        dir.path().join("missing_dir"),
    )
    .run();
    assert!(records.is_empty());

    let output = dir.path().join("unified.csv");
    write_csv(&output, &records).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header.split(',').count(), 18);
    assert!(header.starts_with("id,"));
    assert!(header.ends_with(",source"));
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn mixed_run_counts_per_source_and_writes_all_rows() {
    let dir = tempdir().unwrap();
    let baanknet = dir.path().join("baanknet.json");
    let details = dir.path().join("property_details");
    fs::create_dir(&details).unwrap();

    fs::write(
        &baanknet,
        json!([
            {
                "status": 1,
                "property_id": "P1",
                "respData": {"propertyPrice": 750000, "city": "pune", "summaryDesc": "shop"}
            },
            {
                "status": 2,
                "property_id": "P2",
                "respData": {"propertyPrice": 1, "city": "x", "summaryDesc": "y"}
            }
        ])
        .to_string(),
    )
    .unwrap();

    fs::write(
        details.join("d1.json"),
        json!({
            "success": true,
            "data": {
                "id": "D1",
                "city": "  bengaluru ",
                "state": "karnataka",
                "dimensions": "100 sq mtr",
                "pincode": "560001",
                "auction_date": "2024-03-15"
            }
        })
        .to_string(),
    )
    .unwrap();
    fs::write(
        details.join("d2.json"),
        json!({"success": false, "data": {"id": "D2"}}).to_string(),
    )
    .unwrap();

    let records = Pipeline::new(&baanknet, &details).run();
    assert_eq!(records.len(), 2);

    let counts = SourceCounts::tally(&records);
    assert_eq!(counts.baanknet, 1);
    assert_eq!(counts.property_details, 1);

    let detail = records
        .iter()
        .find(|r| r.source == Source::PropertyDetails)
        .unwrap();
    assert_eq!(detail.city.as_deref(), Some("Bengaluru"));
    assert_eq!(detail.state.as_deref(), Some("Karnataka"));
    assert_eq!(detail.area_sqft, Some(100.0 * 10.764));
    assert_eq!(detail.pincode, Some(560001));
    assert!(detail.auction_date.is_some());

    let output = dir.path().join("unified.csv");
    write_csv(&output, &records).unwrap();
    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.lines().count(), 3);
}
