use async_trait::async_trait;
use serde_json::Value;
use sqlx::Postgres;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, error};

use super::query::{ParamValue, QuerySpec};
use super::record::{Record, into_record};
use crate::engine::errors::StoreError;
use crate::shared::config::DatabaseConfig;

/// Executes read-only queries against one datastore.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<Record>, StoreError>;
}

/// Postgres-backed source with its own connection pool.
#[derive(Debug, Clone)]
pub struct PgRowSource {
    pool: PgPool,
}

impl PgRowSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without connecting; the first query opens connections.
    pub fn connect_lazy(url: &str, cfg: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .connect_lazy(url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RowSource for PgRowSource {
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<Record>, StoreError> {
        let mut statement = sqlx::query_scalar::<Postgres, Value>(&query.sql);
        for bind in &query.binds {
            statement = match bind {
                ParamValue::Int(v) => statement.bind(*v),
                ParamValue::Bool(v) => statement.bind(*v),
                ParamValue::Text(v) => statement.bind(v.as_str()),
                ParamValue::Date(v) => statement.bind(*v),
            };
        }

        let rows = statement.fetch_all(&self.pool).await.map_err(|e| {
            error!(
                target: "story_dash::store",
                database = %query.key.database,
                metric = query.key.metric,
                "Query failed: {}", e
            );
            StoreError::from(e)
        })?;

        debug!(
            target: "story_dash::store",
            database = %query.key.database,
            metric = query.key.metric,
            rows = rows.len(),
            "Query returned"
        );
        rows.into_iter().map(into_record).collect()
    }
}
