//! Logging configuration.
//!
//! Sources, lowest to highest priority:
//! - Defaults (warn, human, no timestamps)
//! - Environment (RIPPY_LOG, RIPPY_LOG_FORMAT)
//! - CLI flags (--log-level, --log-format, --log-timestamps, -v, -q)
//!
//! RUST_LOG sits above all of these; see [`super::init_logging`].

use clap::ValueEnum;
use tracing_subscriber::filter::LevelFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable console format.
    #[default]
    #[value(alias = "console", alias = "pretty")]
    Human,
    /// Machine-parseable JSON lines.
    #[value(alias = "json")]
    Jsonl,
}

/// Log level filter, ordered from quietest to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum LogLevel {
    #[value(alias = "none", alias = "quiet")]
    Off,
    Error,
    #[default]
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Name of a `ValueEnum` variant as accepted on the command line.
fn value_name<T: ValueEnum>(value: &T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&value_name(self))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&value_name(self))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Prefix human-format lines with a timestamp.
    pub timestamps: bool,
}

impl LogConfig {
    /// Create config from the environment, then apply CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::resolve(
            std::env::var("RIPPY_LOG").ok().as_deref(),
            std::env::var("RIPPY_LOG_FORMAT").ok().as_deref(),
            cli_level,
            cli_format,
        )
    }

    /// Merge environment values with CLI overrides; CLI wins.
    ///
    /// Unparseable environment values are ignored.
    pub fn resolve(
        env_level: Option<&str>,
        env_format: Option<&str>,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self {
        let env_level = env_level.and_then(|v| LogLevel::from_str(v, true).ok());
        let env_format = env_format.and_then(|v| LogFormat::from_str(v, true).ok());

        LogConfig {
            format: cli_format.or(env_format).unwrap_or_default(),
            level: cli_level.or(env_level).unwrap_or_default(),
            timestamps: false,
        }
    }

    /// Apply `-v` / `-q` flags. `quiet` wins over any verbosity.
    pub fn with_verbosity(mut self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            self.level = LogLevel::Error;
            return self;
        }
        let requested = match verbose {
            0 => return self,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        self.level = self.level.max(requested);
        self
    }

    /// Enable timestamps in human output.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Default filter directive when RUST_LOG is unset.
    pub fn filter_directive(&self) -> String {
        format!(
            "rippy={level},rippy_cli={level},rippy_table={level}",
            level = self.level
        )
    }
}
