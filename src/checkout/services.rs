// ABOUTME: Capabilities the checkout wizard calls out to: transient notifications and page navigation
// The TUI wires these to channels drained by the main loop; tests use mocks

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

/// A transient toast: headline, supporting text, and how long it stays up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub description: String,
    pub duration: Duration,
}

impl Notice {
    pub fn success(message: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            description: description.into(),
            duration,
        }
    }

    pub fn info(message: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            description: description.into(),
            duration,
        }
    }
}

/// Shows transient notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Moves the visible page to a path such as "/"
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Forwards notices to whoever holds the receiving end
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<Notice>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.tx.send(notice).is_err() {
            warn!("Notice dropped: receiver closed");
        }
    }
}

/// Forwards navigation requests to whoever holds the receiving end
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: UnboundedSender<String>,
}

impl ChannelNavigator {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        if self.tx.send(path.to_string()).is_err() {
            warn!("Navigation to {} dropped: receiver closed", path);
        }
    }
}
