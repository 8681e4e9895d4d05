use story_dash::frontend::start_all;
use story_dash::logging;
use story_dash::shared::config::load_settings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    logging::init(&settings.logging)?;

    info!(http_addr = %settings.server.http_addr, "Story dashboard is starting...");
    start_all(&settings).await?;

    Ok(())
}
