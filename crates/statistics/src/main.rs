use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::config::{Config, ConnectionManager, ConnectionPool};
use shared::utils::{Telemetry, init_logger};
use statistics::handler::AppRouter;
use statistics::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::new("statistics-service", config.otel_endpoint.clone());
    let providers = telemetry.init().context("Failed to initialize telemetry")?;

    init_logger(providers.logger.clone(), "statistics-service");

    info!("🚀 Starting statistics service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool, &config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    providers.shutdown()?;

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
