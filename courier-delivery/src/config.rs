//! Delivery configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the logging sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// File every outcome is appended to
    ///
    /// Default: `send.log`
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Write masked addresses to the log file instead of full ones
    ///
    /// Default: false
    #[serde(default)]
    pub redact_addresses: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            redact_addresses: false,
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("send.log")
}
