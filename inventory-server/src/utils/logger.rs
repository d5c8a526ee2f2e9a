//! Logging Infrastructure
//!
//! Structured logging setup. `RUST_LOG` wins over the configured level; JSON
//! output and a daily rolling file are opt-in.

use std::path::Path;

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

const DEFAULT_DIRECTIVES: &str = "inventory_server=info,tower_http=info";

/// Initialize the logger with an optional level, JSON output and file output
///
/// Stdout logging is always on. A daily rolling file is added when `log_dir`
/// exists. The returned guard flushes the file writer and must be kept alive
/// for the process lifetime.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directives(log_level)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let console_layer = if json {
        fmt::layer().json().with_target(false).boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    let mut guard = None;
    let file_layer = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            let file_appender = tracing_appender::rolling::daily(dir, "inventory-server");
            let (writer, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);
            Some(if json { layer.json().boxed() } else { layer.boxed() })
        }
        Some(dir) => {
            eprintln!("Log directory {dir} does not exist, logging to stdout only");
            None
        }
        None => None,
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
    guard
}

/// Build filter directives for a bare level ("debug") or pass through a full
/// directive string ("inventory_server=debug,sqlx=warn")
fn level_directives(log_level: Option<&str>) -> String {
    match log_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("inventory_server={level},tower_http={level}"),
        None => DEFAULT_DIRECTIVES.to_string(),
    }
}
