use tracing_subscriber::EnvFilter;

use intellia_dashboard::api;
use intellia_dashboard::config::Config;
use intellia_dashboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Backend API: {}", config.backend.base_url);
    tracing::info!("Default role: {}", config.default_role);

    let state = AppState::new(config.clone())?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Dashboard listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
