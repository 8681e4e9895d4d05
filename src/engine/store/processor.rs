//! Queries against the classifier results database (`stories` table).

use chrono::NaiveDate;
use serde::Serialize;

use super::query::{Database, QuerySpec};

/// Which story timestamp a per-day count is bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StoryDateColumn {
    /// When the story was forwarded to the alerts service
    Posted,
    /// When the story was run against the classifier
    Processed,
    /// The guessed publication date
    Published,
}

impl StoryDateColumn {
    pub fn column(&self) -> &'static str {
        match self {
            StoryDateColumn::Posted => "posted_date",
            StoryDateColumn::Processed => "processed_date",
            StoryDateColumn::Published => "published_date",
        }
    }

    pub fn metric(&self) -> &'static str {
        match self {
            StoryDateColumn::Posted => "stories_by_posted_day",
            StoryDateColumn::Processed => "stories_by_processed_day",
            StoryDateColumn::Published => "stories_by_published_day",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "posted" => Some(StoryDateColumn::Posted),
            "processed" => Some(StoryDateColumn::Processed),
            "published" => Some(StoryDateColumn::Published),
            _ => None,
        }
    }
}

/// Optional predicates for per-day story counts. `None` means "don't filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    pub project_id: Option<i64>,
    pub platform: Option<String>,
    pub above_threshold: Option<bool>,
    pub is_posted: Option<bool>,
}

impl StoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, project_id: Option<i64>) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn above_threshold(mut self, above: Option<bool>) -> Self {
        self.above_threshold = above;
        self
    }

    pub fn posted(mut self, is_posted: Option<bool>) -> Self {
        self.is_posted = is_posted;
        self
    }
}

/// Stories per calendar day of `column`, from `earliest` through `latest`. Rows: `day`, `stories`.
pub fn stories_by_day(
    column: StoryDateColumn,
    filter: &StoryFilter,
    earliest: NaiveDate,
    latest: NaiveDate,
) -> QuerySpec {
    let col = column.column();
    let mut q = QuerySpec::builder(Database::Processor, column.metric());

    let mut clauses = vec![
        format!("({col} IS NOT NULL)"),
        format!("({col} >= {})", q.bind("earliest", earliest)),
        format!("({col}::date <= {})", q.bind("latest", latest)),
    ];
    if let Some(project_id) = filter.project_id {
        clauses.push(format!("(project_id = {})", q.bind("project_id", project_id)));
    }
    if let Some(platform) = &filter.platform {
        clauses.push(format!("(source = {})", q.bind("platform", platform.as_str())));
    }
    if let Some(above) = filter.above_threshold {
        clauses.push(format!(
            "(above_threshold = {})",
            q.bind("above_threshold", above)
        ));
    }
    if let Some(is_posted) = filter.is_posted {
        q.tag("is_posted", is_posted);
        clauses.push(if is_posted {
            "(posted_date IS NOT NULL)".to_string()
        } else {
            "(posted_date IS NULL)".to_string()
        });
    }

    let sql = format!(
        "SELECT {col}::date AS day, COUNT(1) AS stories FROM stories \
         WHERE {} GROUP BY 1 ORDER BY 1 DESC",
        clauses.join(" AND ")
    );
    q.finish(&sql)
}

/// A random sample of recently published stories on one side of the threshold.
pub fn recent_stories(
    project_id: i64,
    above_threshold: bool,
    published_since: NaiveDate,
    limit: i64,
) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "recent_stories");
    let sql = format!(
        "SELECT * FROM stories WHERE project_id = {} AND above_threshold = {} \
         AND published_date >= {} ORDER BY RANDOM() LIMIT {}",
        q.bind("project_id", project_id),
        q.bind("above_threshold", above_threshold),
        q.bind("published_since", published_since),
        q.bind("limit", limit),
    );
    q.finish(&sql)
}

/// Above-threshold stories never sent to the alerts service; should stay at zero.
pub fn unposted_above_story_count(project_id: i64, processed_since: Option<NaiveDate>) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "unposted_above_story_count");
    let mut sql = format!(
        "SELECT COUNT(1) AS count FROM stories WHERE project_id = {} \
         AND above_threshold IS TRUE AND posted_date IS NULL",
        q.bind("project_id", project_id)
    );
    if let Some(since) = processed_since {
        sql.push_str(&format!(
            " AND processed_date >= {}",
            q.bind("processed_since", since)
        ));
    }
    q.finish(&sql)
}

pub fn posted_above_story_count(project_id: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "posted_above_story_count");
    let sql = format!(
        "SELECT COUNT(1) AS count FROM stories WHERE project_id = {} \
         AND posted_date IS NOT NULL AND above_threshold IS TRUE",
        q.bind("project_id", project_id)
    );
    q.finish(&sql)
}

pub fn below_story_count(project_id: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "below_story_count");
    let sql = format!(
        "SELECT COUNT(1) AS count FROM stories WHERE project_id = {} \
         AND above_threshold IS FALSE",
        q.bind("project_id", project_id)
    );
    q.finish(&sql)
}

/// Above-threshold stories processed since `processed_since` that were never posted.
pub fn unposted_stories(project_id: i64, processed_since: NaiveDate) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "unposted_stories");
    let sql = format!(
        "SELECT * FROM stories WHERE project_id = {} AND posted_date IS NULL \
         AND processed_date >= {} AND above_threshold IS TRUE",
        q.bind("project_id", project_id),
        q.bind("processed_since", processed_since),
    );
    q.finish(&sql)
}

/// Model scores rounded to one decimal. Rows: `value`, `frequency`.
pub fn project_binned_model_scores(project_id: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, "project_binned_model_scores");
    let sql = format!(
        "SELECT ROUND(CAST(model_score AS numeric), 1) AS value, COUNT(1) AS frequency \
         FROM stories WHERE project_id = {} AND model_score IS NOT NULL \
         GROUP BY 1 ORDER BY 1",
        q.bind("project_id", project_id)
    );
    q.finish(&sql)
}
