use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use library_catalog::app;
use library_catalog::config::settings::AppConfig;
use library_catalog::infrastructure::db::pool;
use library_catalog::render::HtmlRenderer;
use library_catalog::state::AppState;
use library_catalog::store::postgres::PgCatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new()?;
    let db = pool::connect(&config.database_url).await?;

    let state = AppState::new(Arc::new(PgCatalogStore::new(db)), Arc::new(HtmlRenderer));
    let app = app::create_app(state).await;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
