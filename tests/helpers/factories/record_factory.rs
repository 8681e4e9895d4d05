use crate::engine::store::Record;
use serde_json::{Value, json};

pub struct RecordFactory {
    params: Record,
}

impl RecordFactory {
    /// An empty row; add columns with `with`.
    pub fn new() -> Self {
        Self {
            params: Record::new(),
        }
    }

    /// A `day`/`stories` row as returned by the per-day count queries.
    pub fn day_count(day: &str, stories: u64) -> Self {
        Self::new().with("day", day).with("stories", json!(stories))
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> Record {
        self.params
    }

    pub fn create_list(self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.params.clone()).collect()
    }
}
