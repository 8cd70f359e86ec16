//! Transient user-facing messages (toasts).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// Render with destructive (error) styling.
    pub destructive: bool,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
            destructive: false,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
            destructive: true,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
            destructive: false,
        }
    }
}

/// Sink for notifications. Presentation is up to the implementor.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
