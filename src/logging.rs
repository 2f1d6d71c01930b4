//! Tracing setup for both binaries.
//!
//! The desktop app logs to stdout and to a per-launch file under the
//! application root; the command-line scorer logs to stderr only so its
//! stdout stays machine readable. `RUST_LOG` overrides the default level
//! of either sink.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};

/// Launch logs kept on disk; older files are deleted at startup.
const RETAINED_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "wellness";

type Timer = fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>>;

/// Set once a subscriber is installed. Holds the file writer guard when
/// the file sink is active so buffered lines flush at exit.
static INSTALLED: OnceLock<Option<WorkerGuard>> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Stdout plus a timestamped file in the logs directory, `info` by default.
    StdoutAndFile,
    /// Stderr only, `warn` by default.
    Stderr,
}

impl LogSink {
    fn default_level(self) -> &'static str {
        match self {
            Self::StdoutAndFile => "info",
            Self::Stderr => "warn",
        }
    }
}

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The logs directory could not be resolved or created.
    #[error("Failed to prepare log directory: {0}")]
    LogDir(#[from] AppDirError),
    /// A filesystem operation on a log file failed.
    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to format a timestamp for the log filename.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Another global subscriber is already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl LoggingError {
    fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Log to stdout and a per-launch file. Used by the desktop app.
///
/// Failures are returned so callers can continue without logging.
pub fn init() -> Result<(), LoggingError> {
    init_with(LogSink::StdoutAndFile)
}

/// Log warnings and errors to stderr. Used by the command-line scorer.
pub fn init_stderr() -> Result<(), LoggingError> {
    init_with(LogSink::Stderr)
}

/// Install the global subscriber for `sink`. Later calls are no-ops.
pub fn init_with(sink: LogSink) -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(sink.default_level()));
    let timer = local_timer();

    match sink {
        LogSink::Stderr => {
            let subscriber = Registry::default().with(filter).with(
                fmt::layer()
                    .with_timer(timer)
                    .with_writer(std::io::stderr),
            );
            tracing::subscriber::set_global_default(subscriber)?;
            let _ = INSTALLED.set(None);
        }
        LogSink::StdoutAndFile => {
            let log_dir = app_dirs::logs_dir()?;
            let file_name = launch_file_name(now_local_or_utc())?;
            let log_path = log_dir.join(&file_name);
            touch(&log_path)?;
            prune_old_logs(&log_dir, RETAINED_LOG_FILES)?;

            let (file_writer, guard) =
                tracing_appender::non_blocking(rolling::never(&log_dir, file_name));
            let subscriber = Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_timer(timer.clone())
                        .with_writer(std::io::stdout),
                )
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(timer)
                        .with_writer(file_writer),
                );
            tracing::subscriber::set_global_default(subscriber)?;
            let _ = INSTALLED.set(Some(guard));
            tracing::info!("Logging to {}", log_path.display());
        }
    }
    Ok(())
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|source| LoggingError::io("create log file", path, source))
}

/// Delete the oldest `.log` files in `dir` until at most `keep` remain.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let entries =
        fs::read_dir(dir).map_err(|source| LoggingError::io("read log directory", dir, source))?;
    let mut logs: Vec<(SystemTime, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();

    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len().saturating_sub(keep);
    for (_, path) in logs.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::io("remove old log", &path, source))?;
    }
    Ok(())
}

fn launch_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}_{}.log", now.format(NAME_FORMAT)?))
}

fn local_timer() -> Timer {
    const LINE_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, LINE_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    #[test]
    fn launch_file_name_is_prefixed_timestamp() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(
            launch_file_name(fixed).unwrap(),
            "wellness_2023-11-14_22-13-20.log"
        );
    }

    #[test]
    fn sinks_default_to_expected_levels() {
        assert_eq!(LogSink::StdoutAndFile.default_level(), "info");
        assert_eq!(LogSink::Stderr.default_level(), "warn");
    }

    #[test]
    fn prune_keeps_newest_logs_and_other_files() {
        let dir = tempdir().unwrap();
        for idx in 0..12 {
            touch(&dir.path().join(format!("wellness_{idx}.log"))).unwrap();
            thread::sleep(Duration::from_millis(10));
        }
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        prune_old_logs(dir.path(), 10).unwrap();
        let remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(remaining.len(), 11);
        assert!(remaining.iter().any(|name| name == "notes.txt"));
        assert!(!remaining.iter().any(|name| name == "wellness_0.log"));
        assert!(!remaining.iter().any(|name| name == "wellness_1.log"));
        assert!(remaining.iter().any(|name| name == "wellness_11.log"));
    }
}
