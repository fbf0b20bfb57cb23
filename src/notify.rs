//! # User Notices
//!
//! A fire-and-forget channel for short messages shown to the shopper
//! (toasts, in a browser; stderr lines, in the command-line front end).
//! Publishing never blocks and never fails, even when nobody is listening.

use std::fmt::Display;
use tokio::sync::mpsc;
use tracing::debug;

pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
pub const ADD_FAILED: &str = "Failed to add product";
pub const REMOVE_FAILED: &str = "Failed to remove product";
pub const UPDATE_FAILED: &str = "Failed to update product quantity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Publishing half of the notice channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl Notifier {
    /// Creates a notifier and the receiver the front end drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn publish(&self, notice: Notice) {
        debug!(severity = %notice.severity, message = %notice.message, "Notice");
        // A dropped receiver just means nobody is showing notices.
        let _ = self.sender.send(notice);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notice::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_receive() {
        let (notifier, mut receiver) = Notifier::channel();
        notifier.error(OUT_OF_STOCK);

        let notice = receiver.try_recv().unwrap();
        assert_eq!(notice, Notice::error(OUT_OF_STOCK));
        assert_eq!(notice.severity.to_string(), "error");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_receiver_does_not_fail() {
        let (notifier, receiver) = Notifier::channel();
        drop(receiver);
        notifier.error(ADD_FAILED);
    }
}
