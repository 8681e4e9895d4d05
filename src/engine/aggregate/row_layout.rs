use serde_json::Value;

use super::dimension::{Dimension, ThresholdStatus};
use super::types::{BucketRow, DateCount};
use crate::engine::errors::AggregateError;
use crate::engine::store::Record;
use crate::shared::datetime::DayParser;

/// Names the fields a metric query returns its day, count and optional dimension under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub day_field: &'static str,
    pub count_field: &'static str,
    pub dimension_field: Option<&'static str>,
}

impl RowLayout {
    /// `day` / `stories`, the shape of every per-day story count query.
    pub const STORIES: RowLayout = RowLayout {
        day_field: "day",
        count_field: "stories",
        dimension_field: None,
    };

    pub const fn new(day_field: &'static str, count_field: &'static str) -> Self {
        Self {
            day_field,
            count_field,
            dimension_field: None,
        }
    }

    pub const fn with_dimension(mut self, field: &'static str) -> Self {
        self.dimension_field = Some(field);
        self
    }

    /// Decodes every record or fails on the first unreadable one; rows are never skipped.
    pub fn decode_date_counts(&self, records: &[Record]) -> Result<Vec<DateCount>, AggregateError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Ok(DateCount::new(
                    self.day_of(index, record)?,
                    self.count_of(index, record)?,
                ))
            })
            .collect()
    }

    pub fn decode_bucket_rows(&self, records: &[Record]) -> Result<Vec<BucketRow>, AggregateError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Ok(BucketRow {
                    day: self.day_of(index, record)?,
                    count: self.count_of(index, record)?,
                    dimension: self.dimension_of(index, record)?,
                })
            })
            .collect()
    }

    fn day_of(&self, index: usize, record: &Record) -> Result<chrono::NaiveDate, AggregateError> {
        let field = self.day_field;
        match record.get(field) {
            None | Some(Value::Null) => Err(AggregateError::malformed(index, field, "is missing")),
            Some(value) => DayParser::parse_value(value).ok_or_else(|| {
                AggregateError::malformed(index, field, format!("is not a date: {value}"))
            }),
        }
    }

    fn count_of(&self, index: usize, record: &Record) -> Result<u64, AggregateError> {
        let field = self.count_field;
        let parsed = match record.get(field) {
            None | Some(Value::Null) => {
                return Err(AggregateError::malformed(index, field, "is missing"));
            }
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            Some(_) => None,
        };
        parsed.ok_or_else(|| {
            AggregateError::malformed(index, field, "is not a non-negative integer")
        })
    }

    fn dimension_of(&self, index: usize, record: &Record) -> Result<Option<String>, AggregateError> {
        let Some(field) = self.dimension_field else {
            return Ok(None);
        };
        match record.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Bool(flag)) => Ok(Some(ThresholdStatus::from_flag(*flag).label())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(AggregateError::malformed(
                index,
                field,
                format!("is not a label: {other}"),
            )),
        }
    }
}
