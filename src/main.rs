use std::sync::Arc;

use tokio::net::TcpListener;

use finboard::app;
use finboard::config::AppConfig;
use finboard::external::FinnhubProvider;
use finboard::logging::{init_logging, LoggingConfig};
use finboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("📊 Using Finnhub at {}", config.finnhub_base_url);
    let provider = FinnhubProvider::new(
        config.finnhub_api_key.clone(),
        config.finnhub_base_url.clone(),
    );
    let state = AppState::new(Arc::new(provider));
    let app = app::create_app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Finboard running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
