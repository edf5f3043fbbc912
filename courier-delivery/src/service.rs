//! The send operation
//!
//! Sending turns one prepared [`Message`] into one outcome per recipient.
//! Nothing is transported: each outcome is an independent copy of the
//! message, addressed to a single recipient, whose status records whether the
//! original was fit to send.

use courier_common::{Message, outbound};

/// Anything that can send a message
///
/// Sending never fails. An unprepared or invalid message produces
/// [`Status::Failed`](courier_common::Status::Failed) outcomes instead.
pub trait Sender {
    /// One outcome per recipient of `message`, in recipient order
    fn send(&self, message: &Message) -> Vec<Message>;
}

impl<S: Sender + ?Sized> Sender for &S {
    fn send(&self, message: &Message) -> Vec<Message> {
        (**self).send(message)
    }
}

impl<S: Sender + ?Sized> Sender for Box<S> {
    fn send(&self, message: &Message) -> Vec<Message> {
        (**self).send(message)
    }
}

/// Fans a message out into a copy per recipient
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectSender;

impl Sender for DirectSender {
    fn send(&self, message: &Message) -> Vec<Message> {
        message
            .recipients()
            .iter()
            .map(|recipient| {
                let outcome = message.for_recipient(recipient);
                outbound!(
                    level = DEBUG,
                    sender = ?outcome.sender(),
                    recipient = ?recipient,
                    status = %outcome.status(),
                    "Produced outcome"
                );
                outcome
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local};
    use courier_common::{Address, Status};
    use pretty_assertions::assert_eq;

    use super::*;

    fn address(raw: &str) -> Address {
        Address::parse(raw).unwrap()
    }

    fn message() -> Message {
        Message::new(
            "Subject",
            "Body",
            address("a@example.com"),
            vec![address("b@example.com"), address("c@example.ru")],
        )
    }

    #[test]
    fn test_ready_message_is_sent() {
        let mut message = message();
        message.prepare();
        assert_eq!(message.status(), Status::Ready);

        let outcomes = DirectSender.send(&message);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].recipients().as_slice(), [address("b@example.com")]);
        assert_eq!(outcomes[1].recipients().as_slice(), [address("c@example.ru")]);
        assert!(outcomes.iter().all(|o| o.status() == Status::Sent));
    }

    #[test]
    fn test_unprepared_message_fails() {
        let outcomes = DirectSender.send(&message());

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.status() == Status::Failed));
    }

    #[test]
    fn test_invalid_message_fails() {
        let mut message = Message::new(
            "",
            "Body",
            address("a@example.com"),
            address("b@example.com"),
        );
        message.prepare();
        assert_eq!(message.status(), Status::Invalid);

        let outcomes = DirectSender.send(&message);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status(), Status::Failed);
    }

    #[test]
    fn test_original_untouched() {
        let mut message = message();
        message.prepare();
        let before = message.clone();

        let _ = DirectSender.send(&message);

        assert_eq!(message, before);
    }

    #[test]
    fn test_outcomes_are_independent() {
        let mut message = message();
        message.prepare();

        let mut outcomes = DirectSender.send(&message);
        outcomes[0].subject_mut().push_str(" changed");
        outcomes[0].recipients_mut().clear();

        assert_eq!(outcomes[1].subject(), "Subject");
        assert_eq!(outcomes[1].recipients().len(), 1);
        assert_eq!(message.subject(), "Subject");
        assert_eq!(message.recipients().len(), 2);
    }

    #[test]
    fn test_outcomes_are_restamped() {
        let mut message = message();
        message.prepare();
        *message.created_at_mut() = DateTime::from_timestamp(0, 0).unwrap().with_timezone(&Local);

        let outcomes = DirectSender.send(&message);

        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert!(outcome.created_at() > message.created_at());
        }
        assert_eq!(message.created_at().timestamp(), 0);
    }

    #[test]
    fn test_no_recipients() {
        let message = Message::new(
            "Subject",
            "Body",
            address("a@example.com"),
            Vec::<Address>::new(),
        );

        assert!(DirectSender.send(&message).is_empty());
    }
}
