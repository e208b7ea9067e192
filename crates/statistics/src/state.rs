use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::{Config, ConnectionPool, Kafka};
use shared::utils::{Metrics, SystemMetrics, run_metrics_collector};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::di::DependenciesInject;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub kafka: Arc<Kafka>,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Metrics::new();
        let system_metrics = Arc::new(SystemMetrics::new());

        info!(
            "Checking Kafka broker availability at {}",
            config.kafka_broker
        );
        let kafka = Kafka::new(&config.kafka_broker).context("Failed to create Kafka producer")?;
        kafka
            .verify_connectivity()
            .context("Kafka cluster is unreachable")?;

        {
            let mut registry = registry.lock().await;
            metrics.register(&mut registry);
            system_metrics.register(&mut registry);
        }

        let di_container = DependenciesInject::new(pool, metrics.clone());

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            di_container,
            kafka: Arc::new(kafka),
            registry,
            metrics: Arc::new(Mutex::new(metrics)),
            system_metrics,
        })
    }
}
