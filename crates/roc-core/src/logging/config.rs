//! Log level, format, and where they come from.
//!
//! Precedence, highest first:
//! 1. `--log-level` / `-v` / `-q` on the command line
//! 2. `ROCLAB_LOG` (a bare level name)
//! 3. `RUST_LOG` (a full `EnvFilter` directive, used verbatim)
//! 4. `warn`
//!
//! The format is `--log-format`, then `ROCLAB_LOG_FORMAT`, then human.

use clap::ValueEnum;

pub const ENV_LOG_LEVEL: &str = "ROCLAB_LOG";
pub const ENV_LOG_FORMAT: &str = "ROCLAB_LOG_FORMAT";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// One JSON object per line
    Jsonl,
}

/// Minimum level emitted by roclab's own crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Directive spelling understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    /// Level after `steps` applications of `-v`.
    pub fn more_verbose(self, steps: u8) -> Self {
        (0..steps).fold(self, |level, _| match level {
            LogLevel::Off => LogLevel::Error,
            LogLevel::Error => LogLevel::Warn,
            LogLevel::Warn => LogLevel::Info,
            LogLevel::Info => LogLevel::Debug,
            LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
        })
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved logging setup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Raw `RUST_LOG` directive; set only when nothing above it chose a level.
    pub rust_log: Option<String>,
}

/// Raw environment inputs to [`LogConfig::resolve`].
#[derive(Debug, Clone, Default)]
pub struct LogEnv {
    pub roclab_log: Option<String>,
    pub roclab_log_format: Option<String>,
    pub rust_log: Option<String>,
}

impl LogEnv {
    pub fn from_process() -> Self {
        Self {
            roclab_log: std::env::var(ENV_LOG_LEVEL).ok(),
            roclab_log_format: std::env::var(ENV_LOG_FORMAT).ok(),
            rust_log: std::env::var(ENV_RUST_LOG).ok(),
        }
    }
}

impl LogConfig {
    /// Resolve against the process environment.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::resolve(cli_level, cli_format, &LogEnv::from_process())
    }

    /// Apply the precedence rules to explicit inputs.
    ///
    /// Unparseable `ROCLAB_LOG` / `ROCLAB_LOG_FORMAT` values are ignored.
    pub fn resolve(
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
        env: &LogEnv,
    ) -> Self {
        let env_level = env
            .roclab_log
            .as_deref()
            .and_then(|s| LogLevel::from_str(s.trim(), true).ok());
        let env_format = env
            .roclab_log_format
            .as_deref()
            .and_then(|s| LogFormat::from_str(s.trim(), true).ok());

        let level = cli_level.or(env_level);
        let rust_log = match level {
            Some(_) => None,
            None => env.rust_log.clone().filter(|d| !d.trim().is_empty()),
        };

        LogConfig {
            format: cli_format.or(env_format).unwrap_or_default(),
            level: level.unwrap_or_default(),
            rust_log,
        }
    }

    /// The `EnvFilter` directive this config asks for.
    pub fn directive(&self) -> String {
        match &self.rust_log {
            Some(raw) => raw.clone(),
            None => format!("roc_core={0},roclab={0}", self.level),
        }
    }
}
