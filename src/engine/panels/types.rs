use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::headline::extract_story_title;

/// Classifier throughput summary for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    pub project_id: i64,
    pub unposted_above: u64,
    pub posted_above: u64,
    pub below: u64,
    pub above_threshold_pct: f64,
}

impl ProjectStats {
    pub fn new(project_id: i64, unposted_above: u64, posted_above: u64, below: u64) -> Self {
        Self {
            project_id,
            unposted_above,
            posted_above,
            below,
            above_threshold_pct: above_threshold_pct(unposted_above, posted_above, below),
        }
    }
}

/// Above-threshold stories as a percentage of below-threshold ones; 100 when none fell below.
pub fn above_threshold_pct(unposted_above: u64, posted_above: u64, below: u64) -> f64 {
    if below == 0 {
        return 100.0;
    }
    100.0 * (unposted_above + posted_above) as f64 / below as f64
}

/// Stories whose model score rounds to `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBin {
    pub score: String,
    pub stories: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScoreBin {
    pub value: f64,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSourceCount {
    pub media_name: Option<String>,
    pub story_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalCount {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub id: Value,
    pub title: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub publish_date: Option<String>,
}

/// A sampled story, titled from its URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryHeadline {
    #[serde(default)]
    pub stories_id: Value,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub model_score: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

impl StoryHeadline {
    pub fn with_headline(mut self) -> Self {
        self.headline = self
            .url
            .as_deref()
            .map(extract_story_title)
            .unwrap_or_default();
        self
    }
}
