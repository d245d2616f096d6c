//! Crate error type.
//!
//! The view itself cannot fail. Errors come only from the edges:
//! terminal I/O, log setup, JSON output and the browser hand-off.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),

    #[error("could not determine a log directory; pass --log-dir")]
    NoLogDir,

    #[error("cannot create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create log file in {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("failed to serialize section: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot open {url}: {source}")]
    OpenLink {
        url: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
