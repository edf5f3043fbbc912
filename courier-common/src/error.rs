//! Error types for the courier-common crate.
//!
//! Only malformed construction input is an error. Business-rule outcomes
//! (an empty subject, an unprepared message being sent) are carried as a
//! [`Status`](crate::status::Status) on the message instead.

use thiserror::Error;

/// Errors raised when constructing an [`Address`](crate::address::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The normalized address has no `@`.
    #[error("Email address must contain '@': {0}")]
    MissingAt(String),

    /// The domain does not end with one of the allowed suffixes.
    #[error("Domain of {address} must end with one of {allowed:?}")]
    DisallowedDomain {
        address: String,
        allowed: &'static [&'static str],
    },
}

impl AddressError {
    /// The normalized input that was rejected.
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::MissingAt(address) | Self::DisallowedDomain { address, .. } => address,
        }
    }
}

/// Errors raised when constructing a [`Message`](crate::message::Message)
/// from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The sender or one of the recipients is not a valid address.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Recipients were neither a single address nor a list of addresses.
    #[error("Recipients must be an address or a list of addresses, got {0}")]
    InvalidRecipients(String),
}
