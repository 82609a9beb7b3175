use movie_explorer_api::{
    config::Config,
    routes::{create_router, AppState},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_explorer_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    if config.access_token().is_none() {
        tracing::warn!("TMDB_ACCESS_TOKEN is not set; movie endpoints will return 500");
    }

    // Initialize application state
    let state = AppState::from_config(&config)?;

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
