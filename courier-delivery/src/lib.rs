//! Per-recipient fan-out of prepared messages, and logging of the outcomes.

pub mod config;
pub mod error;
pub mod logged;
pub mod service;
pub mod sink;

pub use config::DeliveryConfig;
pub use error::SinkError;
pub use logged::LoggingSender;
pub use service::{DirectSender, Sender};
pub use sink::{FileSink, MemorySink, Sink};
