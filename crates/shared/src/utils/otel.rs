use std::sync::OnceLock;

use anyhow::{Context as AnyhowContext, Result};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tokio::time::Instant;
use tracing::{error, info};

use crate::utils::metrics::{Method, Metrics, Status};

/// OTLP bootstrap for one service process.
#[derive(Clone)]
pub struct Telemetry {
    service_name: String,
    otel_endpoint: String,
}

/// The three SDK providers created at startup. Held by `main` so they can be
/// flushed and shut down once on exit.
pub struct TelemetryProviders {
    pub tracer: SdkTracerProvider,
    pub meter: SdkMeterProvider,
    pub logger: SdkLoggerProvider,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: String) -> Self {
        Self {
            service_name: service_name.into(),
            otel_endpoint,
        }
    }

    fn get_resource(&self) -> Resource {
        static RESOURCE: OnceLock<Resource> = OnceLock::new();
        RESOURCE
            .get_or_init(|| {
                Resource::builder()
                    .with_service_name(self.service_name.clone())
                    .build()
            })
            .clone()
    }

    /// Builds the tracer, meter and logger providers and installs the tracer
    /// and meter globally.
    pub fn init(&self) -> Result<TelemetryProviders> {
        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("failed to create span exporter")?;

        let tracer = SdkTracerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(span_exporter)
            .build();

        global::set_tracer_provider(tracer.clone());

        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("failed to create metric exporter")?;

        let meter = SdkMeterProvider::builder()
            .with_resource(self.get_resource())
            .with_periodic_exporter(metric_exporter)
            .build();

        global::set_meter_provider(meter.clone());

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("failed to create log exporter")?;

        let logger = SdkLoggerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(log_exporter)
            .build();

        Ok(TelemetryProviders {
            tracer,
            meter,
            logger,
        })
    }
}

impl TelemetryProviders {
    pub fn shutdown(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.tracer.shutdown() {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Err(e) = self.meter.shutdown() {
            errors.push(format!("meter provider: {e}"));
        }
        if let Err(e) = self.logger.shutdown() {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}

/// One in-flight operation span plus the instant it started.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

/// Span-per-operation helper shared by all services: opens a span around each
/// repository call and records outcome plus duration into the request metrics.
#[derive(Clone)]
pub struct OperationTracing {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl OperationTracing {
    pub fn new(tracer_name: &'static str, metrics: Metrics) -> Self {
        Self {
            tracer_name,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub async fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message)
            .await;
    }

    pub async fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message)
            .await;
    }

    async fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
