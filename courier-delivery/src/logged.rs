//! Delivery logging
//!
//! [`LoggingSender`] wraps any [`Sender`] and appends one human readable line
//! per outcome to a [`Sink`], before returning the outcomes untouched:
//!
//! ```text
//! 2026-01-01 12:00:00 - INFO - Email sent from a@example.com to b@example.com. Subject: Hi. Status: sent
//! ```
//!
//! Addresses are written in full unless `redact_addresses` is enabled.

use chrono::Local;
use courier_common::{Address, Message};
use tracing::Level;

use crate::{
    config::DeliveryConfig,
    error::SinkError,
    service::Sender,
    sink::{FileSink, Sink},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Records every outcome of the wrapped sender to its own [`Sink`]
///
/// The line, including its timestamp and level prefix, is formatted here
/// rather than emitted through a `tracing` layer: the format is fixed, and the
/// subscriber is process-global while each wrapper writes to its own sink.
#[derive(Debug)]
pub struct LoggingSender<S, K> {
    inner: S,
    sink: K,
    redact_addresses: bool,
}

impl<S: Sender, K: Sink> LoggingSender<S, K> {
    pub const fn new(inner: S, sink: K) -> Self {
        Self {
            inner,
            sink,
            redact_addresses: false,
        }
    }

    /// Write masked addresses instead of full ones
    #[must_use]
    pub fn redact_addresses(mut self, redact: bool) -> Self {
        self.redact_addresses = redact;
        self
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }

    pub const fn sink(&self) -> &K {
        &self.sink
    }

    fn address(&self, address: &Address) -> String {
        if self.redact_addresses {
            address.masked()
        } else {
            address.to_string()
        }
    }

    fn line(&self, outcome: &Message) -> String {
        let recipient = outcome
            .recipients()
            .first()
            .map(|r| self.address(r))
            .unwrap_or_default();

        format!(
            "{} - {} - Email sent from {} to {}. Subject: {}. Status: {}",
            Local::now().format(TIMESTAMP_FORMAT),
            Level::INFO,
            self.address(outcome.sender()),
            recipient,
            outcome.subject(),
            outcome.status()
        )
    }
}

impl<S: Sender> LoggingSender<S, FileSink> {
    ///
    /// Wrap `inner`, logging to the file named in `config`.
    ///
    /// # Errors
    ///
    /// If the log file cannot be opened.
    ///
    pub fn from_config(inner: S, config: &DeliveryConfig) -> Result<Self, SinkError> {
        let sink = FileSink::open(&config.log_file)?;
        Ok(Self::new(inner, sink).redact_addresses(config.redact_addresses))
    }
}

impl<S: Sender, K: Sink> Sender for LoggingSender<S, K> {
    fn send(&self, message: &Message) -> Vec<Message> {
        let outcomes = self.inner.send(message);

        for outcome in &outcomes {
            if let Err(err) = self.sink.append(&self.line(outcome)) {
                tracing::warn!(%err, outcome = %outcome, "Unable to record delivery outcome");
            }
        }

        outcomes
    }
}
