//! Unified logging module for wirekit tools
//!
//! Events go to stderr so that stdout only ever carries command output.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use std::sync::OnceLock;

use errors::{Result, WireError};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Custom event formatter that outputs: `timestamp [LEVEL] message`
///
/// Example output: `2026-10-18T09:12:44.809311Z [DEBUG] Loaded configuration`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

static CURRENT_LOG_LEVEL: OnceLock<String> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level name (`info`, `debug`, ...) or a full filter spec (`warn,wire_codec=trace`)
    pub level: String,
    /// Colored level tags
    pub ansi: bool,
    /// One JSON object per event instead of the bracketed text format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            json: false,
        }
    }
}

/// Build an `EnvFilter` from a level name or filter spec
///
/// A bare word must be a level (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`); anything containing `=` or `,` is handed to `EnvFilter` as is.
pub fn build_filter(spec: &str) -> Result<EnvFilter> {
    let spec = spec.trim();
    if spec.contains('=') || spec.contains(',') {
        return EnvFilter::try_new(spec)
            .map_err(|e| WireError::config(format!("Invalid log filter '{}': {}", spec, e)));
    }

    let level: LevelFilter = spec
        .parse()
        .map_err(|_| WireError::config(format!("Invalid log level '{}'", spec)))?;
    Ok(EnvFilter::default().add_directive(level.into()))
}

/// Initialize logging system with configuration
///
/// # Errors
/// `Configuration` when the level is not valid or a global subscriber is
/// already installed.
pub fn init_with_config(config: &LogConfig) -> Result<()> {
    let spec = match std::env::var("RUST_LOG") {
        Ok(env_str) if !env_str.trim().is_empty() => env_str,
        _ => config.level.clone(),
    };
    let env_filter = build_filter(&spec)?;

    let output_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(config.ansi)
            .event_format(BracketedLevelFormat)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(output_layer)
        .try_init()
        .map_err(|e| WireError::config(format!("Logging already initialized: {}", e)))?;

    let _ = CURRENT_LOG_LEVEL.set(spec.clone());
    tracing::debug!("Logging: {} ({})", spec, if config.json { "json" } else { "text" });

    Ok(())
}

/// Initialize text logging at `level`
pub fn init(level: &str) -> Result<()> {
    init_with_config(&LogConfig {
        level: level.to_string(),
        ..Default::default()
    })
}

/// Filter spec the global subscriber was installed with
pub fn get_log_level() -> String {
    CURRENT_LOG_LEVEL
        .get()
        .cloned()
        .unwrap_or_else(|| "unknown".to_string())
}
