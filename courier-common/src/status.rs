use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Lifecycle of a [`Message`](crate::message::Message)
///
/// `Draft` moves to `Ready` or `Invalid` when the message is prepared, and
/// every copy produced by sending ends up `Sent` or `Failed`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Ready,
    Sent,
    Failed,
    Invalid,
}

impl Status {
    /// Checks if no further transition is possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }

    /// The status a sent copy receives, given the status of the original
    #[must_use]
    pub const fn outcome(self) -> Self {
        match self {
            Self::Ready => Self::Sent,
            _ => Self::Failed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Invalid => "invalid",
        }
    }
}

impl Display for Status {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        fmt.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Status;

    #[test]
    fn status() {
        assert_eq!(Status::default(), Status::Draft);

        assert!(Status::Sent.is_terminal());
        assert!(Status::Failed.is_terminal());
        assert!(!Status::Ready.is_terminal());
        assert!(!Status::Invalid.is_terminal());

        assert_eq!(Status::Ready.outcome(), Status::Sent);
        assert_eq!(Status::Draft.outcome(), Status::Failed);
        assert_eq!(Status::Invalid.outcome(), Status::Failed);

        assert_eq!(Status::Sent.to_string(), "sent");
        assert_eq!(Status::Invalid.to_string(), "invalid");
    }

    #[test]
    fn serde() {
        assert_eq!(serde_json::to_string(&Status::Ready).unwrap(), "\"ready\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"failed\"").unwrap(),
            Status::Failed
        );
    }
}
