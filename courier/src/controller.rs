use std::path::{Path, PathBuf};

use anyhow::Context;
use courier_common::{Draft, Message, Status, internal, logging};
use courier_delivery::{DeliveryConfig, DirectSender, LoggingSender, Sender};
use serde::Deserialize;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "COURIER_CONFIG";

/// Searched in order when [`CONFIG_ENV`] is unset
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "./courier.config.ron",
    "/etc/courier/courier.config.ron",
];

/// Outcome counts for one message
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub sent: usize,
    pub failed: usize,
}

impl Summary {
    /// Count sent and failed outcomes, ignoring anything not yet final
    fn of(outcomes: &[Message]) -> Self {
        outcomes
            .iter()
            .map(Message::status)
            .filter(|status| status.is_terminal())
            .fold(Self::default(), |mut summary, status| {
                if status == Status::Sent {
                    summary.sent += 1;
                } else {
                    summary.failed += 1;
                }
                summary
            })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Courier {
    #[serde(default)]
    delivery: DeliveryConfig,
    #[serde(alias = "message", default)]
    messages: Vec<Draft>,
}

impl Courier {
    /// Load the configuration named by [`CONFIG_ENV`], or the first of
    /// [`DEFAULT_CONFIG_PATHS`] that exists.
    ///
    /// # Errors
    ///
    /// If no configuration file can be found, read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let defaults = DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>();
        let path = locate(std::env::var_os(CONFIG_ENV).map(PathBuf::from), &defaults)?;

        Self::from_path(&path)
    }

    /// # Errors
    ///
    /// If `path` cannot be read or is not a valid configuration.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        ron::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Initialise logging and process every configured message
    ///
    /// # Errors
    ///
    /// If the delivery log cannot be opened.
    pub fn run(self) -> anyhow::Result<Vec<Summary>> {
        logging::init();
        self.process()
    }

    /// Prepare and send every configured message, skipping drafts that
    /// cannot be turned into a message.
    ///
    /// # Errors
    ///
    /// If the delivery log cannot be opened.
    pub fn process(self) -> anyhow::Result<Vec<Summary>> {
        internal!(level = INFO, "Courier running");

        let sender = LoggingSender::from_config(DirectSender, &self.delivery)?;

        let mut summaries = Vec::with_capacity(self.messages.len());
        for draft in self.messages {
            let mut message = match draft.into_message() {
                Ok(message) => message,
                Err(err) => {
                    tracing::error!(%err, "Skipping draft");
                    continue;
                }
            };

            message.prepare();
            let summary = Summary::of(&sender.send(&message));
            internal!(
                level = INFO,
                email = %message,
                sent = summary.sent,
                failed = summary.failed,
                "Message processed"
            );
            summaries.push(summary);
        }

        internal!(level = INFO, "Shutting down...");

        Ok(summaries)
    }
}

/// An explicitly named file must exist; otherwise the first existing default wins
fn locate(explicit: Option<PathBuf>, defaults: &[PathBuf]) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        anyhow::ensure!(
            path.exists(),
            "{CONFIG_ENV} points to non-existent file: {}",
            path.display()
        );
        return Ok(path);
    }

    defaults
        .iter()
        .find(|path| path.exists())
        .cloned()
        .with_context(|| {
            let tried = defaults
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("No configuration file found, tried {CONFIG_ENV} and {tried}")
        })
}
