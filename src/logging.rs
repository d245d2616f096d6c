//! File-based logging for the interactive view.
//!
//! The TUI owns stdout and stderr, so events go to a daily-rolling file
//! through a non-blocking writer. The returned guard must be held for the
//! program's lifetime; dropping it flushes pending lines.
//!
//! Filter comes from `TERMFOLIO_LOG` (EnvFilter syntax), default `info`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TERMFOLIO_LOG";

const LOG_FILE: &str = "termfolio.log";
const DEFAULT_FILTER: &str = "info";

/// Default log directory: `<local data dir>/termfolio/logs`.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("termfolio").join("logs"))
}

/// Resolve the log directory and make sure it exists.
pub fn prepare_log_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir().ok_or(Error::NoLogDir)?,
    };
    fs::create_dir_all(&dir).map_err(|source| Error::LogDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Install the global subscriber writing to `dir`.
///
/// Fails if the log file can't be created in `dir`. A second successful
/// call is a no-op (the first subscriber stays installed).
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .map_err(|source| Error::LogFile {
            path: dir.to_path_buf(),
            source,
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_override_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("logs");
        let dir = prepare_log_dir(Some(&target)).unwrap();
        assert_eq!(dir, target);
        assert!(target.is_dir());
    }

    #[test]
    fn existing_dir_is_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = prepare_log_dir(Some(tmp.path())).unwrap();
        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn file_in_the_way_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, b"not a dir").unwrap();
        let err = prepare_log_dir(Some(&blocker)).unwrap_err();
        assert!(matches!(err, Error::LogDir { .. }));
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("logs");
        fs::write(&blocker, b"not a dir").unwrap();
        let err = init(&blocker).unwrap_err();
        match err {
            Error::LogFile { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected LogFile, got {other:?}"),
        }
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("termfolio/logs"));
        }
    }
}
