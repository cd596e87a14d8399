use std::sync::Arc;

use movie_finder::external::{MovieSource, TmdbClient};
use movie_finder::{router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // 没有 API key 时页面照常启动，远端调用统一报 "not configured"
    let source: Option<Arc<dyn MovieSource>> = match config.api_key.clone() {
        Some(api_key) => {
            let client: Arc<dyn MovieSource> = Arc::new(TmdbClient::new(
                api_key,
                config.api_base_url.clone(),
                config.timeout,
            )?);
            Some(client)
        }
        None => {
            tracing::warn!("TMDB_API_KEY is not set; remote calls will fail");
            None
        }
    };

    let app = router(AppState::new(source, &config));

    let addr = config.socket_addr()?;
    tracing::info!("🚀 Server listening on {}", addr);
    tracing::info!("🎬 TMDB base: {} (language {})", config.api_base_url, config.language);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
