// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Kind` and the
//! lifecycle `Phase` used by the manager.

use crate::dom::NodeId;
use crate::runtime::TaskHandle;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID. IDs increase monotonically.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// The two kinds of toast the site shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
}

impl Kind {
    /// Modifier class added next to `notification`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Kind::Success => "notification-success",
            Kind::Error => "notification-error",
        }
    }

    /// Font Awesome classes of the leading icon.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Kind::Success => "fas fa-check-circle",
            Kind::Error => "fas fa-exclamation-triangle",
        }
    }

    /// Background color of the toast.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Kind::Success => "#48bb78",
            Kind::Error => "#f56565",
        }
    }
}

/// Where a notification is in its lifecycle. Removed notifications have no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted off-screen, waiting for the slide-in.
    Entering,
    /// Slid in, waiting for the auto-dismiss timer or a close click.
    Visible,
    /// Sliding out, removed once the exit transition ends.
    Leaving,
}

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Timers {
    pub enter: Option<TaskHandle>,
    pub auto_dismiss: Option<TaskHandle>,
    pub remove: Option<TaskHandle>,
}

impl Timers {
    pub fn drain(&mut self) -> impl Iterator<Item = TaskHandle> {
        [
            self.enter.take(),
            self.auto_dismiss.take(),
            self.remove.take(),
        ]
        .into_iter()
        .flatten()
    }
}

/// A toast currently in the presentation tree.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Page-clock time at which `show` was called.
    created_at: Duration,
    phase: Phase,
    element: NodeId,
    close_button: NodeId,
    pub(super) timers: Timers,
}

impl Notification {
    pub(super) fn new(
        kind: Kind,
        message: String,
        created_at: Duration,
        element: NodeId,
        close_button: NodeId,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message,
            created_at,
            phase: Phase::Entering,
            element,
            close_button,
            timers: Timers::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Time elapsed since creation, given the current page-clock time.
    #[must_use]
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created_at)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// The `div.notification` element.
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[must_use]
    pub fn close_button(&self) -> NodeId {
        self.close_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique_and_increasing() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second > first);
    }

    #[test]
    fn kinds_have_distinct_presentation() {
        assert_ne!(Kind::Success.css_class(), Kind::Error.css_class());
        assert_ne!(Kind::Success.icon_class(), Kind::Error.icon_class());
        assert_ne!(Kind::Success.accent_color(), Kind::Error.accent_color());
    }

    #[test]
    fn age_is_measured_on_the_page_clock() {
        let mut doc = crate::dom::Document::new();
        let element = doc.create_element("div");
        let close = doc.create_element("button");
        let notification = Notification::new(
            Kind::Error,
            "oops".into(),
            Duration::from_millis(250),
            element,
            close,
        );
        assert_eq!(notification.age(Duration::from_millis(1250)), Duration::from_secs(1));
        assert_eq!(notification.age(Duration::ZERO), Duration::ZERO);
        assert_eq!(notification.phase(), Phase::Entering);
    }
}
