use hyper::{Method, Request, Response, body::Incoming};
use serde::Serialize;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, warn};

use super::params::{QueryParams, RequestError};
use super::route::Route;
use crate::engine::errors::PanelError;
use crate::engine::panels::PanelView;
use crate::engine::store::processor::StoryFilter;
use crate::frontend::context::FrontendContext;
use crate::shared::response::{StatusCode, render_error, render_json};

pub async fn handle_request(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<Response<String>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();
    Ok(route(&method, &path, &query, &ctx).await)
}

/// Resolves one request to a JSON response. Bad input never reaches a datastore.
pub async fn route(
    method: &Method,
    path: &str,
    query: &str,
    ctx: &FrontendContext,
) -> Response<String> {
    debug!(target: "story_dash::http", %method, path, query, "Request");
    match dispatch(method, path, query, ctx).await {
        Ok(response) => response,
        Err(e) => {
            warn!(target: "story_dash::http", %method, path, error = %e, "Request rejected");
            render_error(e.status(), e)
        }
    }
}

async fn dispatch(
    method: &Method,
    path: &str,
    query: &str,
    ctx: &FrontendContext,
) -> Result<Response<String>, RequestError> {
    let route = Route::parse(path)?;
    if method != Method::GET {
        return Err(RequestError::MethodNotAllowed);
    }
    let params = QueryParams::parse(query);
    let panels = &ctx.panels;
    let as_of = params.as_of(ctx.today())?;

    let response = match route {
        Route::Health => render_json(
            StatusCode::Ok,
            &json!({ "status": "ok", "cache": panels.cache_stats() }),
        ),
        Route::PlatformPanel => {
            let filter = StoryFilter::new()
                .project(params.project_id()?)
                .above_threshold(params.flag("above_threshold")?)
                .posted(params.flag("is_posted")?);
            let result = panels
                .platform_panel(params.metric()?, &filter, as_of)
                .await
                .map(|table| table.into_rows());
            panel_response(result)
        }
        Route::ThresholdPanel => {
            let result = panels
                .threshold_panel(params.project_id()?, as_of)
                .await
                .map(|table| table.into_rows());
            panel_response(result)
        }
        Route::AlertsPanel => {
            let result = panels
                .alerts_panel(params.date_column()?, params.project_id()?, as_of)
                .await
                .map(|table| table.into_rows());
            panel_response(result)
        }
        Route::ProjectStats(project_id) => {
            panel_response(panels.project_stats(project_id).await.map(|s| vec![s]))
        }
        Route::ModelScores(project_id) => panel_response(panels.model_scores(project_id).await),
        Route::LatestStories(project_id) => {
            let above = params.flag("above_threshold")?.unwrap_or(true);
            panel_response(panels.latest_stories(project_id, above, as_of).await)
        }
        Route::UnpostedStories(project_id) => {
            panel_response(panels.unposted_stories(project_id, as_of).await)
        }
        Route::AlertsTotal => {
            panel_response(panels.alerts_total(params.project_id()?).await.map(|t| vec![t]))
        }
        Route::TopSources => {
            let project_id = params.require_project_id()?;
            panel_response(panels.top_sources(project_id, params.limit()?).await)
        }
        Route::RecentArticles => {
            let project_id = params.require_project_id()?;
            panel_response(
                panels
                    .recent_articles(project_id, params.limit()?, as_of)
                    .await,
            )
        }
    };
    Ok(response)
}

/// Rejected parameters are a 400; any other panel failure is an empty 200 view.
fn panel_response<T: Serialize>(result: Result<Vec<T>, PanelError>) -> Response<String> {
    match result {
        Err(PanelError::InvalidParameter(msg)) => render_error(StatusCode::BadRequest, msg),
        other => render_json(StatusCode::Ok, &PanelView::from_result(other)),
    }
}
