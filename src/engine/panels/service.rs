use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use super::types::{
    ArticleRow, MediaSourceCount, ProjectStats, RawScoreBin, ScoreBin, StoryHeadline, TotalCount,
};
use crate::engine::aggregate::{
    DateCount, DenseTimeSeriesTable, RowLayout, ThresholdStatus, collect, fill_gaps, into_dense,
};
use crate::engine::cache::QueryCacheStats;
use crate::engine::errors::{AggregateError, PanelError, StoreError};
use crate::engine::store::alerts::{
    ArticleDateColumn, articles_by_day, recent_articles, top_media_sources, total_story_count,
};
use crate::engine::store::processor::{
    StoryDateColumn, StoryFilter, below_story_count, posted_above_story_count,
    project_binned_model_scores, recent_stories, stories_by_day, unposted_above_story_count,
    unposted_stories as unposted_stories_query,
};
use crate::engine::store::{CachedStore, QuerySpec, decode_records, first_count};
use crate::shared::config::DashboardConfig;
use crate::shared::datetime::window_start;

/// Builds every dashboard panel from the cached datastores.
pub struct PanelService {
    store: Arc<CachedStore>,
    dashboard: DashboardConfig,
}

impl PanelService {
    pub fn new(store: Arc<CachedStore>, dashboard: DashboardConfig) -> Self {
        Self { store, dashboard }
    }

    pub fn cache_stats(&self) -> QueryCacheStats {
        self.store.cache_stats()
    }

    /// Per-day story counts split by source platform.
    pub async fn platform_panel(
        &self,
        column: StoryDateColumn,
        filter: &StoryFilter,
        as_of: NaiveDate,
    ) -> Result<DenseTimeSeriesTable, PanelError> {
        let earliest = window_start(as_of, self.dashboard.processor_window_days);
        let series = collect(&self.dashboard.platforms, |platform: &String| {
            let query = stories_by_day(
                column,
                &filter.clone().platform(platform.as_str()),
                earliest,
                as_of,
            );
            self.date_counts(query)
        })
        .await?;

        debug!(
            target: "story_dash::panels",
            metric = column.metric(),
            series = series.len(),
            "Platform panel collected"
        );
        Ok(into_dense(&series, as_of))
    }

    /// Per-day processed stories split by above/below threshold.
    pub async fn threshold_panel(
        &self,
        project_id: Option<i64>,
        as_of: NaiveDate,
    ) -> Result<DenseTimeSeriesTable, PanelError> {
        let earliest = window_start(as_of, self.dashboard.processor_window_days);
        let filter = StoryFilter::new().project(project_id);
        let series = collect(&ThresholdStatus::ALL, |status: &ThresholdStatus| {
            let query = stories_by_day(
                StoryDateColumn::Processed,
                &filter.clone().above_threshold(Some(status.as_flag())),
                earliest,
                as_of,
            );
            self.date_counts(query)
        })
        .await?;
        Ok(into_dense(&series, as_of))
    }

    /// Per-day forwarded articles in the alerts database. Rows carry no dimension.
    pub async fn alerts_panel(
        &self,
        column: ArticleDateColumn,
        project_id: Option<i64>,
        as_of: NaiveDate,
    ) -> Result<DenseTimeSeriesTable, PanelError> {
        let earliest = window_start(as_of, self.dashboard.alerts_window_days);
        let records = self
            .store
            .run(&articles_by_day(column, project_id, earliest, as_of))
            .await?;
        let rows = RowLayout::STORIES.decode_bucket_rows(&records)?;
        Ok(fill_gaps(&rows, as_of))
    }

    pub async fn project_stats(&self, project_id: i64) -> Result<ProjectStats, PanelError> {
        let (unposted, posted, below) = tokio::try_join!(
            self.count(unposted_above_story_count(project_id, None)),
            self.count(posted_above_story_count(project_id)),
            self.count(below_story_count(project_id)),
        )?;
        Ok(ProjectStats::new(project_id, unposted, posted, below))
    }

    /// Model score histogram, highest score first.
    pub async fn model_scores(&self, project_id: i64) -> Result<Vec<ScoreBin>, PanelError> {
        let records = self
            .store
            .run(&project_binned_model_scores(project_id))
            .await?;
        let mut bins: Vec<RawScoreBin> = decode_records(&records)?;
        bins.sort_by(|a, b| b.value.total_cmp(&a.value));
        Ok(bins
            .into_iter()
            .map(|bin| ScoreBin {
                score: format!("{:.1}", bin.value),
                stories: bin.frequency,
            })
            .collect())
    }

    /// A random sample of recently published stories on one side of the threshold.
    pub async fn latest_stories(
        &self,
        project_id: i64,
        above_threshold: bool,
        as_of: NaiveDate,
    ) -> Result<Vec<StoryHeadline>, PanelError> {
        let since = window_start(as_of, self.dashboard.recent_stories_days);
        let query = recent_stories(
            project_id,
            above_threshold,
            since,
            self.dashboard.recent_stories_limit,
        );
        let records = self.store.run(&query).await?;
        let stories: Vec<StoryHeadline> = decode_records(&records)?;
        Ok(stories.into_iter().map(StoryHeadline::with_headline).collect())
    }

    /// Above-threshold stories processed inside the window that were never posted.
    pub async fn unposted_stories(
        &self,
        project_id: i64,
        as_of: NaiveDate,
    ) -> Result<Vec<StoryHeadline>, PanelError> {
        let since = window_start(as_of, self.dashboard.processor_window_days);
        let records = self
            .store
            .run(&unposted_stories_query(project_id, since))
            .await?;
        let stories: Vec<StoryHeadline> = decode_records(&records)?;
        debug!(
            target: "story_dash::panels",
            project_id,
            unposted = stories.len(),
            "Unposted stories loaded"
        );
        Ok(stories.into_iter().map(StoryHeadline::with_headline).collect())
    }

    pub async fn top_sources(
        &self,
        project_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<MediaSourceCount>, PanelError> {
        let limit = positive_limit(limit, self.dashboard.top_sources_limit)?;
        let records = self.store.run(&top_media_sources(project_id, limit)).await?;
        Ok(decode_records(&records)?)
    }

    pub async fn alerts_total(&self, project_id: Option<i64>) -> Result<TotalCount, PanelError> {
        let count = self.count(total_story_count(project_id)).await?;
        Ok(TotalCount { count })
    }

    pub async fn recent_articles(
        &self,
        project_id: i64,
        limit: Option<i64>,
        as_of: NaiveDate,
    ) -> Result<Vec<ArticleRow>, PanelError> {
        let limit = positive_limit(limit, self.dashboard.recent_articles_limit)?;
        let since = window_start(as_of, self.dashboard.recent_stories_days);
        let records = self
            .store
            .run(&recent_articles(project_id, since, limit))
            .await?;
        Ok(decode_records(&records)?)
    }

    async fn date_counts(&self, query: QuerySpec) -> Result<Vec<DateCount>, AggregateError> {
        let records = self.store.run(&query).await?;
        RowLayout::STORIES.decode_date_counts(&records)
    }

    async fn count(&self, query: QuerySpec) -> Result<u64, StoreError> {
        let records = self.store.run(&query).await?;
        first_count(&records)
    }
}

fn positive_limit(requested: Option<i64>, default: i64) -> Result<i64, PanelError> {
    match requested {
        None => Ok(default),
        Some(limit) if limit > 0 => Ok(limit),
        Some(limit) => Err(PanelError::InvalidParameter(format!(
            "limit must be positive, got {limit}"
        ))),
    }
}
