// Logging setup
//
// Console logging through tracing-subscriber. Logs go to stderr; stdout is
// reserved for the run summary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Crate targets that receive the default log level
const LOG_TARGETS: &[&str] = &["burstbench", "burstbench_core"];

#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Explicit filter (e.g. "debug", "burstbench_core=trace"), wins over `verbose`
    pub log_filter: Option<String>,
    /// Default to debug instead of info for our own targets
    pub verbose: bool,
    /// Include the event target in each line
    pub with_target: bool,
}

impl TelemetryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `RUST_LOG` or `LOG_LEVEL`: Log filter
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG")
                .ok()
                .or_else(|| std::env::var("LOG_LEVEL").ok()),
            ..Self::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// The filter directive the subscriber will be built with
    pub fn filter_directive(&self) -> String {
        if let Some(filter) = &self.log_filter {
            return filter.clone();
        }
        let level = if self.verbose { "debug" } else { "info" };
        let mut directives = vec!["warn".to_string()];
        directives.extend(LOG_TARGETS.iter().map(|t| format!("{t}={level}")));
        directives.join(",")
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_telemetry(config: TelemetryConfig) {
    let filter = EnvFilter::try_new(config.filter_directive()).unwrap_or_else(|e| {
        eprintln!("Invalid log filter, falling back to info: {e}");
        EnvFilter::new("info")
    });

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_is_info_for_our_targets() {
        let config = TelemetryConfig::default();
        assert_eq!(
            config.filter_directive(),
            "warn,burstbench=info,burstbench_core=info"
        );
    }

    #[test]
    fn test_verbose_switches_to_debug() {
        let config = TelemetryConfig::default().with_verbose(true);
        assert_eq!(
            config.filter_directive(),
            "warn,burstbench=debug,burstbench_core=debug"
        );
    }

    #[test]
    fn test_explicit_filter_wins() {
        let config = TelemetryConfig {
            log_filter: Some("trace".to_string()),
            ..Default::default()
        }
        .with_verbose(true);
        assert_eq!(config.filter_directive(), "trace");
    }

    #[test]
    fn test_with_target_is_carried() {
        assert!(TelemetryConfig::default().with_target(true).with_target);
        assert!(!TelemetryConfig::default().with_target);
    }
}
