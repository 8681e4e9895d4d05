use super::params::RequestError;

/// Every GET endpoint the dashboard serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    PlatformPanel,
    ThresholdPanel,
    AlertsPanel,
    ProjectStats(i64),
    ModelScores(i64),
    LatestStories(i64),
    UnpostedStories(i64),
    AlertsTotal,
    TopSources,
    RecentArticles,
}

impl Route {
    pub fn parse(path: &str) -> Result<Route, RequestError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["health"] => Ok(Route::Health),
            ["panels", "platforms"] => Ok(Route::PlatformPanel),
            ["panels", "threshold"] => Ok(Route::ThresholdPanel),
            ["panels", "alerts"] => Ok(Route::AlertsPanel),
            ["projects", id, "stats"] => Ok(Route::ProjectStats(project_id(id)?)),
            ["projects", id, "model-scores"] => Ok(Route::ModelScores(project_id(id)?)),
            ["projects", id, "stories"] => Ok(Route::LatestStories(project_id(id)?)),
            ["projects", id, "unposted"] => Ok(Route::UnpostedStories(project_id(id)?)),
            ["alerts", "total"] => Ok(Route::AlertsTotal),
            ["alerts", "top-sources"] => Ok(Route::TopSources),
            ["alerts", "recent"] => Ok(Route::RecentArticles),
            _ => Err(RequestError::NotFound(path.to_string())),
        }
    }
}

fn project_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse()
        .map_err(|_| RequestError::BadRequest(format!("invalid project id: {raw}")))
}
