//! Transient notifications
//!
//! Every intent answers with at most one notification. Notifications expire
//! on their own and never touch the budget state.

use std::time::{Duration, Instant};

/// Seconds a notification stays visible
pub const DEFAULT_DURATION_SECS: u64 = 3;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The intent was applied
    Success,
    /// The intent was rejected; nothing changed
    Warning,
    /// The intent removed data
    Danger,
}

impl NotificationKind {
    /// Get the icon/prefix for this notification kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Warning => "!",
            Self::Danger => "x",
        }
    }

    /// Get the title for this notification kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Removed",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// Duration to display
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(DEFAULT_DURATION_SECS),
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Create a danger notification
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Danger)
    }

    /// Set the duration for this notification
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Check expiry against a given instant
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Get remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self) -> f64 {
        let total = self.duration.as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f64();
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    /// Remove notifications expired as of `now`
    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Get the notification to display (the most recent one)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}
