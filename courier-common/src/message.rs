use std::fmt::{self, Display};

use chrono::{DateTime, Local};

use crate::{
    address::{Address, AddressList},
    status::Status,
};

/// Longest preview kept verbatim, in characters.
pub const SHORT_BODY_LENGTH: usize = 50;
const ELLIPSIS: &str = "...";

/// An outgoing email
///
/// A message starts as [`Status::Draft`]. [`Message::prepare`] cleans the
/// subject and body, derives the short preview and decides whether the
/// message is [`Status::Ready`] or [`Status::Invalid`].
///
/// Neither `Display` nor `Debug` expose a full address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    subject: String,
    body: String,
    sender: Address,
    recipients: AddressList,
    created_at: DateTime<Local>,
    short_body: String,
    status: Status,
}

impl Message {
    /// Create a new draft, timestamped now
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_common::{address::Address, message::Message, status::Status};
    ///
    /// let sender = Address::parse("sender@example.com").unwrap();
    /// let recipient = Address::parse("recipient@example.ru").unwrap();
    ///
    /// let mut message = Message::new("  Hello ", " Line one \n\n line two ", sender, recipient);
    /// assert_eq!(message.status(), Status::Draft);
    ///
    /// message.prepare();
    /// assert_eq!(message.subject(), "Hello");
    /// assert_eq!(message.body(), "Line one line two");
    /// assert_eq!(message.status(), Status::Ready);
    /// ```
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender: Address,
        recipients: impl Into<AddressList>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender,
            recipients: recipients.into(),
            created_at: Local::now(),
            short_body: String::new(),
            status: Status::Draft,
        }
    }

    ///
    /// Clean the subject and body, derive the short body and compute the
    /// readiness of this message.
    ///
    /// Calling this again without changing the message yields the same result.
    ///
    pub fn prepare(&mut self) {
        self.subject = clean_text(&self.subject);
        self.body = clean_text(&self.body);
        self.short_body = short_body(&self.body);

        // Sender and recipients are valid addresses by construction
        self.status = if !self.subject.is_empty()
            && !self.body.is_empty()
            && !self.recipients.is_empty()
        {
            Status::Ready
        } else {
            Status::Invalid
        };

        tracing::trace!(email = %self, "Prepared message");
    }

    /// Produce an independent copy addressed to `recipient` only, stamped
    /// with the current time and carrying the outcome of sending this message.
    #[must_use]
    pub fn for_recipient(&self, recipient: &Address) -> Self {
        Self {
            recipients: AddressList::from(recipient.clone()),
            created_at: Local::now(),
            status: self.status.outcome(),
            ..self.clone()
        }
    }

    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[inline]
    pub const fn subject_mut(&mut self) -> &mut String {
        &mut self.subject
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[inline]
    pub const fn body_mut(&mut self) -> &mut String {
        &mut self.body
    }

    #[inline]
    pub fn short_body(&self) -> &str {
        &self.short_body
    }

    #[inline]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    #[inline]
    pub const fn recipients(&self) -> &AddressList {
        &self.recipients
    }

    #[inline]
    pub const fn recipients_mut(&mut self) -> &mut AddressList {
        &mut self.recipients
    }

    #[inline]
    pub const fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    #[inline]
    pub const fn created_at_mut(&mut self) -> &mut DateTime<Local> {
        &mut self.created_at
    }

    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message(subject='{}', sender={}, recipients=[{}], status={})",
            self.subject,
            self.sender.masked(),
            self.recipients,
            self.status
        )
    }
}

/// Trim every line, drop the empty ones and join the rest with a space
fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn short_body(body: &str) -> String {
    if body.chars().count() <= SHORT_BODY_LENGTH {
        return body.to_string();
    }

    body.chars()
        .take(SHORT_BODY_LENGTH - ELLIPSIS.len())
        .chain(ELLIPSIS.chars())
        .collect()
}
