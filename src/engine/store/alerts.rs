//! Queries against the email alerts database (`articles` table).

use chrono::NaiveDate;
use serde::Serialize;

use super::query::{Database, QuerySpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArticleDateColumn {
    Publish,
    Created,
}

impl ArticleDateColumn {
    pub fn column(&self) -> &'static str {
        match self {
            ArticleDateColumn::Publish => "publish_date",
            ArticleDateColumn::Created => "created_at",
        }
    }

    pub fn metric(&self) -> &'static str {
        match self {
            ArticleDateColumn::Publish => "stories_by_publish_date",
            ArticleDateColumn::Created => "stories_by_creation_date",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "publish" | "publish_date" => Some(ArticleDateColumn::Publish),
            "created" | "created_at" => Some(ArticleDateColumn::Created),
            _ => None,
        }
    }
}

/// Articles per calendar day of `column`, from `earliest` through `latest`. Rows: `day`, `stories`.
pub fn articles_by_day(
    column: ArticleDateColumn,
    project_id: Option<i64>,
    earliest: NaiveDate,
    latest: NaiveDate,
) -> QuerySpec {
    let col = column.column();
    let mut q = QuerySpec::builder(Database::Alerts, column.metric());
    let mut clauses = vec![
        format!("({col} IS NOT NULL)"),
        format!("({col} >= {})", q.bind("earliest", earliest)),
        format!("({col}::date <= {})", q.bind("latest", latest)),
    ];
    if let Some(project_id) = project_id {
        clauses.push(format!("(project_id = {})", q.bind("project_id", project_id)));
    }
    let sql = format!(
        "SELECT {col}::date AS day, COUNT(1) AS stories FROM articles \
         WHERE {} GROUP BY 1 ORDER BY 1 DESC",
        clauses.join(" AND ")
    );
    q.finish(&sql)
}

pub fn total_story_count(project_id: Option<i64>) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Alerts, "total_story_count");
    let sql = match project_id {
        Some(project_id) => format!(
            "SELECT COUNT(1) AS count FROM articles WHERE project_id = {}",
            q.bind("project_id", project_id)
        ),
        None => "SELECT COUNT(1) AS count FROM articles".to_string(),
    };
    q.finish(&sql)
}

/// Media sources with the most forwarded articles. Rows: `media_name`, `story_count`.
pub fn top_media_sources(project_id: i64, limit: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Alerts, "top_media_sources");
    let sql = format!(
        "SELECT media_name, COUNT(1) AS story_count FROM articles WHERE project_id = {} \
         GROUP BY media_name ORDER BY story_count DESC LIMIT {}",
        q.bind("project_id", project_id),
        q.bind("limit", limit),
    );
    q.finish(&sql)
}

/// Newest forwarded articles for a project, published on or after `published_since`.
pub fn recent_articles(project_id: i64, published_since: NaiveDate, limit: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Alerts, "recent_articles");
    let sql = format!(
        "SELECT id, title, source, url, publish_date FROM articles \
         WHERE project_id = {} AND publish_date >= {} \
         ORDER BY publish_date DESC LIMIT {}",
        q.bind("project_id", project_id),
        q.bind("published_since", published_since),
        q.bind("limit", limit),
    );
    q.finish(&sql)
}
