//! Structured logging for roclab.
//!
//! - Human-readable console output for interactive use
//! - JSON lines for scripted runs
//!
//! stdout is reserved for command payloads; all log output goes to stderr.

pub mod config;

pub use config::{LogConfig, LogEnv, LogFormat, LogLevel};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber from a resolved [`LogConfig`].
///
/// A `RUST_LOG` directive that fails to parse falls back to the level.
/// A second call is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.directive()).unwrap_or_else(|_| {
        EnvFilter::new(
            LogConfig {
                rust_log: None,
                ..config.clone()
            }
            .directive(),
        )
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Human => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal()),
            )
            .try_init(),
        LogFormat::Jsonl => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("run-{}", &uuid.simple().to_string()[..12])
}
