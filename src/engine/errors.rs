use thiserror::Error;
use tracing::{debug, error, warn};

/// Failures talking to one of the two datastores. Never cached.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Row decode error: {0}")]
    Decode(String),

    #[error("Datastore unavailable: {0}")]
    Unavailable(String),
}

/// Pool exhaustion and shutdown mean the datastore is unreachable, not that the query failed.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Malformed row {index}: field `{field}` {reason}")]
    MalformedRow {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("Upstream query failed: {0}")]
    Upstream(#[from] StoreError),
}

impl AggregateError {
    pub fn malformed(index: usize, field: &str, reason: impl Into<String>) -> Self {
        AggregateError::MalformedRow {
            index,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Upstream query failed: {0}")]
    Upstream(#[from] StoreError),

    #[error("Aggregation failed: {0}")]
    Aggregate(AggregateError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<AggregateError> for PanelError {
    fn from(err: AggregateError) -> Self {
        match err {
            AggregateError::Upstream(e) => PanelError::Upstream(e),
            other => PanelError::Aggregate(other),
        }
    }
}

impl PanelError {
    pub fn log_error(&self) {
        match self {
            PanelError::Upstream(e) => {
                error!("Upstream query failed: {}", e);
                debug!("Upstream query error details: {:?}", e);
            }
            PanelError::Aggregate(e) => {
                error!("Aggregation failed: {}", e);
                debug!("Aggregation error details: {:?}", e);
            }
            PanelError::InvalidParameter(e) => {
                warn!("Invalid panel parameter: {}", e);
            }
        }
    }
}
