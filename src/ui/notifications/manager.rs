// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` inserts toast elements, drives their enter/exit transitions
//! through scheduled tasks and removes them once they have slid out. Every
//! timer handle is tracked so a dismissal cancels what is still pending.

use super::notification::{Kind, Notification, NotificationId, Phase};
use crate::config::NotificationConfig;
use crate::dom::{Document, NodeId};
use crate::runtime::Scheduler;
use std::time::Duration;

const OFFSCREEN: &str = "translateX(100%)";
const ONSCREEN: &str = "translateX(0)";

/// Timed steps of a notification's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Start the slide-in.
    Enter(NotificationId),
    /// Display time is over.
    AutoDismiss(NotificationId),
    /// Exit transition finished, detach the element.
    Remove(NotificationId),
}

/// Durations used by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub display: Duration,
    pub enter_delay: Duration,
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for Timings {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            display: config.display(),
            enter_delay: config.enter_delay(),
            exit: config.exit(),
        }
    }
}

/// Manages the toasts currently in the document.
#[derive(Debug)]
pub struct Manager {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    timings: Timings,
    close_label: String,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            notifications: Vec::new(),
            timings,
            close_label: String::from("Close"),
        }
    }

    /// Accessible label of the close button.
    #[must_use]
    pub fn with_close_label(mut self, label: impl Into<String>) -> Self {
        self.close_label = label.into();
        self
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Inserts a toast and schedules its slide-in and auto-dismissal.
    ///
    /// The toast goes into `#notifications` when the page has one, else into
    /// the body.
    pub fn show<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
        message: &str,
        kind: Kind,
    ) -> NotificationId {
        let container = document
            .get_element_by_id("notifications")
            .unwrap_or_else(|| document.body());
        let (element, close_button) = self.build_element(document, message, kind);
        document.append_child(container, element);

        let mut notification =
            Notification::new(kind, message.to_string(), scheduler.now(), element, close_button);
        let id = notification.id();
        notification.timers.enter =
            Some(scheduler.set_timeout(self.timings.enter_delay, T::from(Task::Enter(id))));
        notification.timers.auto_dismiss =
            Some(scheduler.set_timeout(self.timings.display, T::from(Task::AutoDismiss(id))));
        self.notifications.push(notification);

        tracing::debug!(id = id.value(), ?kind, "notification shown");
        id
    }

    fn build_element(&self, document: &mut Document, message: &str, kind: Kind) -> (NodeId, NodeId) {
        let element = document
            .build("div")
            .class("notification")
            .class(kind.css_class())
            .finish();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "100px"),
            ("right", "20px"),
            ("max-width", "400px"),
            ("padding", "1rem"),
            ("border-radius", "0.75rem"),
            ("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.15)"),
            ("z-index", "10000"),
            ("transform", OFFSCREEN),
            ("transition", "transform 0.3s ease"),
            ("background", kind.accent_color()),
            ("color", "white"),
        ] {
            document.set_style(element, property, value);
        }

        let content = document
            .build("div")
            .class("notification-content")
            .append_to(element);
        document.build("i").class(kind.icon_class()).append_to(content);
        document.build("span").text(message).append_to(content);
        let close_button = document
            .build("button")
            .class("notification-close")
            .attr("type", "button")
            .attr("aria-label", &self.close_label)
            .text("\u{00d7}")
            .append_to(content);
        (element, close_button)
    }

    /// Starts the exit transition of a notification.
    ///
    /// Returns `false` if it is already leaving or gone.
    pub fn dismiss<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
        id: NotificationId,
    ) -> bool {
        let exit = self.timings.exit;
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if notification.phase() == Phase::Leaving {
            return false;
        }
        for handle in notification.timers.drain() {
            scheduler.cancel(handle);
        }
        document.set_style(notification.element(), "transform", OFFSCREEN);
        notification.set_phase(Phase::Leaving);
        notification.timers.remove = Some(scheduler.set_timeout(exit, T::from(Task::Remove(id))));
        tracing::debug!(id = id.value(), "notification dismissed");
        true
    }

    /// Dismisses every notification that is not already leaving.
    pub fn dismiss_all<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
    ) -> usize {
        let ids: Vec<NotificationId> = self.notifications.iter().map(Notification::id).collect();
        ids.into_iter()
            .filter(|id| self.dismiss(document, scheduler, *id))
            .count()
    }

    /// Runs a timed lifecycle step.
    pub fn handle_task<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
        task: Task,
    ) {
        match task {
            Task::Enter(id) => {
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id() == id) {
                    notification.timers.enter = None;
                    if notification.phase() == Phase::Entering {
                        document.set_style(notification.element(), "transform", ONSCREEN);
                        notification.set_phase(Phase::Visible);
                    }
                }
            }
            Task::AutoDismiss(id) => {
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id() == id) {
                    notification.timers.auto_dismiss = None;
                }
                self.dismiss(document, scheduler, id);
            }
            Task::Remove(id) => {
                if let Some(index) = self.notifications.iter().position(|n| n.id() == id) {
                    let notification = self.notifications.remove(index);
                    // Page content may have been replaced in the meantime.
                    if document.is_connected(notification.element()) {
                        document.remove(notification.element());
                    }
                    tracing::debug!(id = id.value(), "notification removed");
                }
            }
        }
    }

    /// Dismisses the notification whose close button contains `target`.
    ///
    /// Returns `true` if the click landed on a close button.
    pub fn handle_click<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
        target: NodeId,
    ) -> bool {
        let Some(button) = document.closest(target, ".notification-close") else {
            return false;
        };
        let Some(id) = self
            .notifications
            .iter()
            .find(|n| n.close_button() == button)
            .map(Notification::id)
        else {
            return false;
        };
        self.dismiss(document, scheduler, id);
        true
    }

    /// Removes every notification at once and cancels their timers.
    pub fn clear<T>(&mut self, document: &mut Document, scheduler: &mut Scheduler<T>) {
        for mut notification in self.notifications.drain(..) {
            for handle in notification.timers.drain() {
                scheduler.cancel(handle);
            }
            document.remove(notification.element());
        }
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Number of notifications still in the document, leaving ones included.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}
