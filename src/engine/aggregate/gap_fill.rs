use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use super::types::{BucketRow, DenseRow, DenseTimeSeriesTable};
use crate::shared::datetime::days_inclusive;

/// Fills missing (day, dimension) combinations with zero counts.
///
/// The range runs from the earliest observed day to `as_of`, so a stale series still
/// reaches today. Rows dated after `as_of` are dropped. Duplicate (day, dimension) rows
/// are summed.
#[derive(Debug, Clone)]
pub struct GapFiller {
    as_of: NaiveDate,
    known_dimensions: Vec<String>,
}

impl GapFiller {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            known_dimensions: Vec::new(),
        }
    }

    /// Dimensions that get a series even if no row mentions them. Listed first, in order.
    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn fill(&self, rows: &[BucketRow]) -> DenseTimeSeriesTable {
        let in_range: Vec<&BucketRow> = rows.iter().filter(|row| row.day <= self.as_of).collect();
        if in_range.len() < rows.len() {
            debug!(
                target: "story_dash::aggregate",
                dropped = rows.len() - in_range.len(),
                as_of = %self.as_of,
                "Dropped rows dated after as_of"
            );
        }
        let Some(start) = in_range.iter().map(|row| row.day).min() else {
            return DenseTimeSeriesTable::empty();
        };
        let end = self.as_of;

        let mut dimensions: Vec<&str> = Vec::new();
        for dim in self
            .known_dimensions
            .iter()
            .map(String::as_str)
            .chain(in_range.iter().copied().map(BucketRow::label))
        {
            if !dimensions.contains(&dim) {
                dimensions.push(dim);
            }
        }

        let mut observed: HashMap<(NaiveDate, &str), u64> = HashMap::with_capacity(in_range.len());
        for row in in_range.iter().copied() {
            let slot = observed.entry((row.day, row.label())).or_insert(0);
            *slot = slot.saturating_add(row.count);
        }

        let mut dense = Vec::new();
        for day in days_inclusive(start, end) {
            for dim in &dimensions {
                dense.push(DenseRow {
                    day,
                    count: observed.get(&(day, *dim)).copied().unwrap_or(0),
                    dimension: (*dim).to_string(),
                });
            }
        }

        debug!(
            target: "story_dash::aggregate",
            %start,
            %end,
            dimensions = dimensions.len(),
            input_rows = rows.len(),
            output_rows = dense.len(),
            "Filled date gaps"
        );
        DenseTimeSeriesTable::new(dense)
    }
}

/// Gap-fills `rows` up to `as_of` using only the dimensions present in the rows.
pub fn fill_gaps(rows: &[BucketRow], as_of: NaiveDate) -> DenseTimeSeriesTable {
    GapFiller::new(as_of).fill(rows)
}
