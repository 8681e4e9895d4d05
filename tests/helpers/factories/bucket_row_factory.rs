use crate::engine::aggregate::BucketRow;
use chrono::NaiveDate;

pub struct BucketRowFactory {
    day: NaiveDate,
    count: u64,
    dimension: Option<String>,
}

impl BucketRowFactory {
    pub fn new() -> Self {
        Self {
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            count: 1,
            dimension: None,
        }
    }

    pub fn day(mut self, day: NaiveDate) -> Self {
        self.day = day;
        self
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn dimension(mut self, dimension: &str) -> Self {
        self.dimension = Some(dimension.to_string());
        self
    }

    pub fn create(self) -> BucketRow {
        BucketRow {
            day: self.day,
            count: self.count,
            dimension: self.dimension,
        }
    }
}
