pub mod context;
pub mod http;

use context::FrontendContext;
use std::sync::Arc;

use crate::shared::config::Settings;

pub async fn start_all(settings: &Settings) -> anyhow::Result<()> {
    let ctx = FrontendContext::from_settings(settings)?;
    http::listener::run_http_server(&settings.server, Arc::clone(&ctx)).await
}
