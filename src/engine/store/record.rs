use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::engine::errors::StoreError;

/// One result row, column name to value.
pub type Record = Map<String, Value>;

pub fn into_record(value: Value) -> Result<Record, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Decode(format!(
            "expected a JSON object row, got {other}"
        ))),
    }
}

pub fn decode_records<T: DeserializeOwned>(records: &[Record]) -> Result<Vec<T>, StoreError> {
    records
        .iter()
        .map(|record| {
            serde_json::from_value(Value::Object(record.clone()))
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
        .collect()
}

/// Reads the `count` column of a single-row count query. No rows counts as zero.
pub fn first_count(records: &[Record]) -> Result<u64, StoreError> {
    let Some(record) = records.first() else {
        return Ok(0);
    };
    match record.get("count") {
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| StoreError::Decode(format!("count is not a non-negative integer: {n}"))),
        Some(Value::String(s)) => s
            .parse()
            .map_err(|_| StoreError::Decode(format!("count is not an integer: {s}"))),
        other => Err(StoreError::Decode(format!("missing count column: {other:?}"))),
    }
}
