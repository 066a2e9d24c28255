//! Transient user-visible notifications.
//!
//! A small broadcast bus carrying toast-style notices from the few
//! adapters that surface failures to the user (file save, clipboard copy).
//! UI layers subscribe and render; slow subscribers lag rather than block
//! emitters.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

pub use tokio::sync::broadcast::error::RecvError;
pub use tokio::sync::broadcast::Receiver;

/// Default per-subscriber buffer. Notices are rare; a subscriber that
/// falls this far behind receives `RecvError::Lagged` and keeps going.
pub const DEFAULT_NOTICE_CAPACITY: usize = 64;

/// Severity of a notice, used by the UI to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient, human-readable notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Broadcast channel for notices. Cloning shares the underlying channel.
#[derive(Clone)]
pub struct NoticeBus {
    sender: broadcast::Sender<Notice>,
}

impl NoticeBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to future notices. Each receiver sees every notice
    /// emitted after this call.
    pub fn subscribe(&self) -> Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Emit a notice. Having no subscribers is not an error; the notice
    /// is simply dropped.
    pub fn emit(&self, notice: Notice) {
        if self.sender.send(notice).is_err() {
            trace!("notice dropped: no subscribers");
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(Notice::info(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Notice::error(message));
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_CAPACITY)
    }
}
