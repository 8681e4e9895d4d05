//! Date-bucketed aggregation: per-dimension daily counts in, dense chart-ready tables out.

pub mod combiner;
pub mod dimension;
pub mod gap_fill;
pub mod row_layout;
pub mod types;

pub use combiner::{collect, into_dense};
pub use dimension::{Dimension, ThresholdStatus};
pub use gap_fill::{GapFiller, fill_gaps};
pub use row_layout::RowLayout;
pub use types::{
    BucketRow, DateCount, DenseRow, DenseTimeSeriesTable, DimensionedSeries, NO_DATA,
};
