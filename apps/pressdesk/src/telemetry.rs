//! Telemetry initialization - tracing setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for machine consumption).
    pub json_logs: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            default_filter: "warn,pressdesk=info,pressdesk_infra=info".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: std::env::var("LOG_DEFAULT_FILTER").unwrap_or(defaults.default_filter),
        }
    }

    /// Raise the default filter to debug for our crates.
    pub fn verbose(mut self) -> Self {
        self.default_filter = "info,pressdesk=debug,pressdesk_infra=debug".to_string();
        self
    }
}

/// Initialize tracing. Logs go to stderr so stdout stays clean for output.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(json_logs = config.json_logs, "Telemetry initialized");
}
