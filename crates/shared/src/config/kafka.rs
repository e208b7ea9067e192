use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaResult;
use rdkafka::producer::{BaseProducer, Producer};
use std::time::Duration;
use tracing::info;

const METADATA_TIMEOUT: Duration = Duration::from_secs(5);

/// Broker handle acquired once at startup. The service only confirms the
/// cluster is reachable; nothing is produced or consumed on the request path.
pub struct Kafka {
    producer: BaseProducer,
    brokers: String,
}

impl Kafka {
    pub fn new(brokers: &str) -> KafkaResult<Self> {
        let producer: BaseProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "6000")
            .create()?;

        Ok(Kafka {
            producer,
            brokers: brokers.to_string(),
        })
    }

    /// Fetches cluster metadata once and logs the brokers that answered.
    /// Fails when no broker in `bootstrap.servers` is reachable.
    pub fn verify_connectivity(&self) -> KafkaResult<()> {
        let metadata = self
            .producer
            .client()
            .fetch_metadata(None, METADATA_TIMEOUT)?;

        let brokers: Vec<String> = metadata
            .brokers()
            .iter()
            .map(|broker| format!("{}:{}", broker.host(), broker.port()))
            .collect();

        info!(
            configured = %self.brokers,
            "Kafka connected, cluster brokers: [{}]",
            brokers.join(", ")
        );

        Ok(())
    }
}
