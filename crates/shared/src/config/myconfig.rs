use anyhow::{Context, Result, anyhow};

const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub kafka_broker: String,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let kafka_broker = std::env::var("KAFKA").context("Missing environment variable: KAFKA")?;

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_OTEL_ENDPOINT.to_string());

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            kafka_broker,
            otel_endpoint,
        })
    }
}
