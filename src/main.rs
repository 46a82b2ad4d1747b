use anyhow::Context;
use newsdesk::api::{AppState, create_router};
use newsdesk::config::Config;
use newsdesk::fetcher::ArticleFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (log crate records are forwarded too)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::load()?;

    let fetcher = ArticleFetcher::new(
        config.upstream_url.clone(),
        config.language.clone(),
        config.request_timeout(),
    )
    .context("Failed to build HTTP client")?;

    let state = AppState::new(fetcher, config.api_key.clone());
    let app = create_router(state, &config.assets_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
