//! Untyped message input
//!
//! A [`Draft`] is what a configuration file (or any other dynamic source)
//! describes: plain strings for every address, and recipients given either as
//! a single string or a list of strings. Converting a draft into a
//! [`Message`] validates every address and rejects any other recipients shape.

use serde::{Deserialize, Serialize, de::IgnoredAny};

use crate::{
    address::{Address, AddressList},
    error::MessageError,
    message::Message,
};

/// Recipients as written by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecipients {
    One(String),
    Many(Vec<String>),
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl From<&str> for RawRecipients {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for RawRecipients {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl TryFrom<RawRecipients> for AddressList {
    type Error = MessageError;

    fn try_from(value: RawRecipients) -> Result<Self, Self::Error> {
        match value {
            RawRecipients::One(raw) => Ok(Self::from(Address::parse(&raw)?)),
            RawRecipients::Many(raw) => raw
                .iter()
                .map(|r| Address::parse(r).map_err(MessageError::from))
                .collect(),
            RawRecipients::Other(_) => Err(MessageError::InvalidRecipients(
                "a value that is neither a string nor a list of strings".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    pub sender: String,
    pub recipients: RawRecipients,
}

impl Draft {
    ///
    /// Validate the addresses of this draft and build a [`Message`].
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidAddress`] if the sender or any recipient is not
    /// a valid address, and [`MessageError::InvalidRecipients`] if the
    /// recipients are neither a string nor a list of strings.
    ///
    pub fn into_message(self) -> Result<Message, MessageError> {
        let sender = Address::parse(&self.sender)?;
        let recipients = AddressList::try_from(self.recipients)?;

        Ok(Message::new(self.subject, self.body, sender, recipients))
    }
}

impl TryFrom<Draft> for Message {
    type Error = MessageError;

    fn try_from(draft: Draft) -> Result<Self, Self::Error> {
        draft.into_message()
    }
}
