use chrono::NaiveDate;
use futures::future::try_join_all;
use std::future::Future;
use tracing::warn;

use super::dimension::Dimension;
use super::gap_fill::GapFiller;
use super::types::{BucketRow, DateCount, DenseTimeSeriesTable, DimensionedSeries};
use crate::engine::errors::AggregateError;

/// Runs `metric` once per dimension value and tags each result with its label.
///
/// Fetches run concurrently but the output keeps the order of `dimensions`. The first
/// failing fetch fails the whole batch; no partial result is returned.
pub async fn collect<D, F, Fut>(
    dimensions: &[D],
    metric: F,
) -> Result<Vec<DimensionedSeries>, AggregateError>
where
    D: Dimension,
    F: Fn(&D) -> Fut,
    Fut: Future<Output = Result<Vec<DateCount>, AggregateError>>,
{
    let fetches = dimensions.iter().map(|dimension| {
        let label = dimension.label();
        let fetch = metric(dimension);
        async move {
            match fetch.await {
                Ok(points) => Ok(DimensionedSeries::new(label, points)),
                Err(e) => {
                    warn!(target: "story_dash::aggregate", dimension = %label, error = %e, "Series fetch failed");
                    Err(e)
                }
            }
        }
    });
    try_join_all(fetches).await
}

/// Gap-fills the union of `series`. Every series' dimension is kept, so a dimension
/// whose query returned nothing shows up as an all-zero series.
pub fn into_dense(series: &[DimensionedSeries], as_of: NaiveDate) -> DenseTimeSeriesTable {
    let rows: Vec<BucketRow> = series.iter().flat_map(DimensionedSeries::bucket_rows).collect();
    GapFiller::new(as_of)
        .with_dimensions(series.iter().map(|s| s.dimension.clone()))
        .fill(&rows)
}
