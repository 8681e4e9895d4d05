use chrono::NaiveDate;
use serde::Serialize;

/// Dimension label for rows whose dimension was never set.
pub const NO_DATA: &str = "No Data";

/// Number of matching events on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateCount {
    pub day: NaiveDate,
    pub count: u64,
}

impl DateCount {
    pub fn new(day: NaiveDate, count: u64) -> Self {
        Self { day, count }
    }
}

/// One metric query's daily counts, tagged with the dimension value it was run for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionedSeries {
    pub dimension: String,
    pub points: Vec<DateCount>,
}

impl DimensionedSeries {
    pub fn new(dimension: impl Into<String>, points: Vec<DateCount>) -> Self {
        Self {
            dimension: dimension.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bucket_rows(&self) -> impl Iterator<Item = BucketRow> + '_ {
        self.points.iter().map(|point| BucketRow {
            day: point.day,
            count: point.count,
            dimension: Some(self.dimension.clone()),
        })
    }
}

/// Gap-filler input row; `dimension` is `None` when the source row carried none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRow {
    pub day: NaiveDate,
    pub count: u64,
    pub dimension: Option<String>,
}

impl BucketRow {
    pub fn new(day: NaiveDate, count: u64, dimension: Option<&str>) -> Self {
        Self {
            day,
            count,
            dimension: dimension.map(str::to_string),
        }
    }

    pub fn label(&self) -> &str {
        self.dimension.as_deref().unwrap_or(NO_DATA)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenseRow {
    pub day: NaiveDate,
    pub count: u64,
    pub dimension: String,
}

/// One row per (day, dimension) over a continuous day range. Rows are ordered by day,
/// then by dimension in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DenseTimeSeriesTable {
    rows: Vec<DenseRow>,
}

impl DenseTimeSeriesTable {
    pub fn new(rows: Vec<DenseRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DenseRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DenseRow> {
        self.rows
    }

    pub fn count_for(&self, day: NaiveDate, dimension: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.day == day && row.dimension == dimension)
            .map(|row| row.count)
    }

    /// Distinct dimensions in row order.
    pub fn dimensions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !out.contains(&row.dimension.as_str()) {
                out.push(&row.dimension);
            }
        }
        out
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row.day)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.day)
    }

    /// Feeds the table back in as gap-filler input, every row flagged with its dimension.
    pub fn to_bucket_rows(&self) -> Vec<BucketRow> {
        self.rows
            .iter()
            .map(|row| BucketRow {
                day: row.day,
                count: row.count,
                dimension: Some(row.dimension.clone()),
            })
            .collect()
    }
}
