//! Typed errors for delivery logging.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by a [`Sink`](crate::sink::Sink).
///
/// These never escape [`Sender::send`](crate::service::Sender::send); the
/// logging wrapper reports them and carries on.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to open the log file.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to append a line.
    #[error("Failed to write log line: {0}")]
    Write(#[from] io::Error),
}
