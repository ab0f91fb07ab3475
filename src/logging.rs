//! Structured logging configuration and event helpers
//!
//! Log level and format come from the environment:
//! - `HEADLINER_LOG_LEVEL` (or `LOG_LEVEL`): any `EnvFilter` directive
//! - `HEADLINER_LOG_FORMAT`: `json`, `compact` or `pretty`
//! - `HEADLINER_LOG_COLOR`, `HEADLINER_LOG_LOCATION`, `HEADLINER_LOG_SPANS`: `1`/`true`
//!
//! Prompts and completions are never logged verbatim, only their sizes.

use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive (trace, debug, info, warn, error, or per-target)
    pub level: String,
    pub format: LogFormat,
    pub colored: bool,
    /// Include file and line of the event
    pub with_location: bool,
    /// Emit span open/close events
    pub with_spans: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            colored: is_terminal::IsTerminal::is_terminal(&std::io::stderr()),
            with_location: false,
            with_spans: false,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let level = env::var("HEADLINER_LOG_LEVEL")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or(defaults.level);

        let format = match env::var("HEADLINER_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level,
            format,
            colored: env_flag("HEADLINER_LOG_COLOR").unwrap_or(defaults.colored),
            with_location: env_flag("HEADLINER_LOG_LOCATION").unwrap_or(false),
            with_spans: env_flag("HEADLINER_LOG_SPANS").unwrap_or(false),
        }
    }
}

/// Install the global tracing subscriber.
///
/// A level that does not parse as an `EnvFilter` directive is an error, as is
/// calling this twice in one process.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;

    let span_events = if config.with_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.colored)
        .with_span_events(span_events)
        .with_file(config.with_location)
        .with_line_number(config.with_location);
    let layer = match config.format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    info!(
        level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{}' (HEADLINER_LOG_LEVEL)", level))
}

/// Record one call to the completion API
pub fn log_completion_call<T, E: Display>(
    model: &str,
    prompt_len: usize,
    max_tokens: u32,
    duration_ms: u64,
    result: &std::result::Result<T, E>,
) {
    match result {
        Ok(_) => debug!(
            model = model,
            prompt_len = prompt_len,
            max_tokens = max_tokens,
            duration_ms = duration_ms,
            "Completion returned"
        ),
        Err(e) => error!(
            model = model,
            prompt_len = prompt_len,
            max_tokens = max_tokens,
            duration_ms = duration_ms,
            error = %e,
            "Completion failed"
        ),
    }
}

/// Record a spreadsheet read or write
pub fn log_sheet_operation(
    operation: &str,
    sheet: &str,
    success: bool,
    duration_ms: Option<u64>,
) {
    if success {
        debug!(
            operation = operation,
            sheet = sheet,
            duration_ms = duration_ms,
            "Sheet operation completed"
        );
    } else {
        warn!(
            operation = operation,
            sheet = sheet,
            duration_ms = duration_ms,
            "Sheet operation failed"
        );
    }
}

/// Record the outcome of one HTTP request handled by the service
pub fn log_request_outcome<T, E: Display>(
    route: &str,
    duration_ms: u64,
    result: &std::result::Result<T, E>,
) {
    match result {
        Ok(_) => info!(route = route, duration_ms = duration_ms, "Request completed"),
        Err(e) => warn!(
            route = route,
            duration_ms = duration_ms,
            error = %e,
            "Request failed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};

    static INIT: Once = Once::new();
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn init_test_logging() {
        INIT.call_once(|| {
            let config = LogConfig {
                level: "debug".to_string(),
                format: LogFormat::Compact,
                colored: false,
                with_location: false,
                with_spans: false,
            };
            let _ = init_logging(config);
        });
    }

    #[test]
    fn test_log_config_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("HEADLINER_LOG_LEVEL", "debug");
        env::set_var("HEADLINER_LOG_FORMAT", "json");
        env::set_var("HEADLINER_LOG_COLOR", "false");
        env::set_var("HEADLINER_LOG_SPANS", "TRUE");

        let config = LogConfig::from_env();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.colored);
        assert!(config.with_spans);

        env::remove_var("HEADLINER_LOG_LEVEL");
        env::remove_var("HEADLINER_LOG_FORMAT");
        env::remove_var("HEADLINER_LOG_COLOR");
        env::remove_var("HEADLINER_LOG_SPANS");
    }

    #[test]
    fn test_filter_rejects_bad_level() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("headliner=trace,actix_web=warn").is_ok());

        let err = build_filter("headliner=loud").unwrap_err();
        assert!(err.to_string().contains("headliner=loud"));
    }

    #[test]
    fn test_completion_logging() {
        init_test_logging();

        let ok: std::result::Result<String, String> = Ok("headline".to_string());
        log_completion_call("test-model", 120, 100, 35, &ok);

        let err: std::result::Result<String, String> = Err("quota exceeded".to_string());
        log_completion_call("test-model", 120, 100, 12, &err);
    }

    #[test]
    fn test_sheet_and_request_logging() {
        init_test_logging();

        log_sheet_operation("append_row", "sheet1", true, Some(40));
        log_sheet_operation("col_values", "sheet2", false, None);

        let ok: std::result::Result<(), String> = Ok(());
        log_request_outcome("POST /", 900, &ok);
        let err: std::result::Result<(), String> = Err("Invalid sheet name.".to_string());
        log_request_outcome("POST /", 1, &err);
    }
}
