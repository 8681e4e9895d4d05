use super::record_factory::RecordFactory;
use serde_json::json;

#[test]
fn day_count_sets_day_and_stories() {
    let record = RecordFactory::day_count("2024-01-01", 3).create();
    assert_eq!(record["day"], json!("2024-01-01"));
    assert_eq!(record["stories"], json!(3));
}

#[test]
fn with_overrides_columns() {
    let record = RecordFactory::day_count("2024-01-01", 3)
        .with("stories", "7")
        .create();
    assert_eq!(record["stories"], json!("7"));
}

#[test]
fn create_list_repeats_row() {
    let records = RecordFactory::new().with("count", 1).create_list(3);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["count"] == json!(1)));
}
