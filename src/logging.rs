use std::path::Path;

use crate::error::{CrmqlError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the file writer flushing; hold it for the life of the process.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// `RUST_LOG` wins when set. Otherwise crmql logs at INFO, or DEBUG with
/// `verbose`, which includes every backend call. Human-readable lines go to
/// stderr; `log_file` adds a daily-rolling JSON log. If the log file cannot be
/// opened the reason is printed to stderr and only stderr logging is set up.
pub fn init(verbose: bool, log_file: Option<&Path>) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let appender = match log_file.map(file_appender) {
        Some(Ok(appender)) => appender,
        Some(Err(e)) => {
            eprintln!("crmql: file logging disabled: {}", e);
            let _ = subscriber.try_init();
            return LogGuard { _file: None };
        }
        None => {
            let _ = subscriber.try_init();
            return LogGuard { _file: None };
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();
    let _ = subscriber.with(file_layer).try_init();

    LogGuard { _file: Some(guard) }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("crmql={}", level)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(path);
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| CrmqlError::Config(format!("cannot open log file {}: {}", path.display(), e)))
}

fn split_log_path(path: &Path) -> (&Path, &std::ffi::OsStr) {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("crmql.log"));
    (dir, file_name)
}
