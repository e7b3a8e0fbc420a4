//! Transient, non-blocking notifications ("toasts")

use std::fmt;
use std::time::{Duration, Instant};

/// Lifetime of a toast when nothing else is configured
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// What a notification reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// A course was added to the saved list
    Saved {
        /// Id of the saved course
        course_id: String,
    },
    /// The comparison tray is full and a course was not added
    CompareLimit {
        /// Capacity of the tray
        limit: usize,
    },
    /// An action referenced a course the catalog doesn't have
    UnknownCourse {
        /// The unrecognized id
        course_id: String,
    },
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { course_id } => write!(f, "Saved '{course_id}' to your list"),
            Self::CompareLimit { limit } => {
                write!(f, "You can compare up to {limit} courses at a time")
            }
            Self::UnknownCourse { course_id } => write!(f, "No course with id '{course_id}'"),
        }
    }
}

/// A notification with the instant it disappears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What happened
    pub kind: NoticeKind,
    /// When the notice is dismissed
    pub expires_at: Instant,
}

impl Notice {
    /// Whether the notice is gone at `now`
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    pending: Vec<Notice>,
}

impl Notifications {
    /// Show `kind` until `now + lifetime`
    ///
    /// An identical pending notice is replaced, restarting its timer.
    pub fn push(&mut self, kind: NoticeKind, now: Instant, lifetime: Duration) {
        self.pending.retain(|n| n.kind != kind);
        self.pending.push(Notice {
            kind,
            expires_at: now + lifetime,
        });
    }

    /// Drop notices that have expired at `now`. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending.retain(|n| !n.is_expired(now));
        before - self.pending.len()
    }

    /// Dismiss everything immediately
    pub fn dismiss_all(&mut self) {
        self.pending.clear();
    }

    /// Notices still showing
    #[must_use]
    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }

    /// Whether nothing is showing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
