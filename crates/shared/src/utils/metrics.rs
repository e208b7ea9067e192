use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    fs,
    sync::Arc,
    sync::atomic::AtomicU64,
    time::{SystemTime, UNIX_EPOCH},
};
use sysinfo::System;

fn get_thread_count(pid: usize) -> Option<i64> {
    let path = format!("/proc/{pid}/status");
    if let Ok(contents) = fs::read_to_string(path) {
        for line in contents.lines() {
            if line.starts_with("Threads:") {
                return line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|thread_count| thread_count.parse::<i64>().ok());
            }
        }
    }
    None
}

/// Process-level gauges refreshed by the background collector task.
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    pub memory_usage_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub available_memory_kb: Gauge,
    pub thread_count: Gauge,
    pub cpu_usage_percent: Gauge<f64, AtomicU64>,
    pub process_start_time: Gauge,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemMetrics {
    pub fn new() -> Self {
        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let metrics = Self {
            memory_usage_bytes: Gauge::default(),
            virtual_memory_bytes: Gauge::default(),
            available_memory_kb: Gauge::default(),
            thread_count: Gauge::default(),
            cpu_usage_percent: Gauge::default(),
            process_start_time: Gauge::default(),
        };

        metrics.process_start_time.set(start_time as i64);
        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_memory_usage_bytes",
            "Resident memory of the process in bytes",
            self.memory_usage_bytes.clone(),
        );

        registry.register(
            "process_virtual_memory_bytes",
            "Virtual memory of the process in bytes",
            self.virtual_memory_bytes.clone(),
        );

        registry.register(
            "system_available_memory_kilobytes",
            "Available system memory in kilobytes",
            self.available_memory_kb.clone(),
        );

        registry.register(
            "process_threads",
            "Number of OS threads in the process",
            self.thread_count.clone(),
        );

        registry.register(
            "process_cpu_usage_percent",
            "Global CPU usage in percent",
            self.cpu_usage_percent.clone(),
        );

        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub async fn update_metrics(&self) {
        let mut sys = System::new_all();
        sys.refresh_all();

        let pid = std::process::id() as usize;

        if let Some(process) = sys.process(sysinfo::Pid::from(pid)) {
            self.memory_usage_bytes.set(process.memory() as i64);
            self.virtual_memory_bytes
                .set(process.virtual_memory() as i64);

            self.available_memory_kb
                .set((sys.available_memory() / 1_024) as i64);

            self.cpu_usage_percent.set(sys.global_cpu_usage() as f64);

            if let Some(thread_count) = get_thread_count(pid) {
                self.thread_count.set(thread_count);
            }
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Request counter and latency histogram labeled by method and outcome.
/// Families share state across clones, so one instance is registered at
/// startup and clones are handed to every service.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(
                    [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0].into_iter(),
                )
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "requests",
            "Number of operations handled",
            self.request_counter.clone(),
        );

        registry.register(
            "request_duration_seconds",
            "Operation latency in seconds",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(15));
    loop {
        interval.tick().await;
        system_metrics.update_metrics().await;
    }
}
