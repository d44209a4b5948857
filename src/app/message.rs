// SPDX-License-Identifier: MPL-2.0
//! Top-level messages, scheduled tasks and runtime flags.

use crate::dom::NodeId;
use crate::domain::ThemeMode;
use crate::integrations::ViewNamespace;
use crate::ui::contact_form;
use crate::ui::effects::{boot, cursor};
use crate::ui::notifications::NotificationTask;
use crate::ui::smooth_scroll;

/// Page events consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The page and its resources finished loading.
    Load,
    /// Click whose innermost target is the given element.
    Click(NodeId),
    /// The window scrolled to the given vertical offset.
    Scroll(f64),
    Resize { height: f64 },
    MouseMove { x: f64, y: f64 },
    /// The contact form was submitted.
    Submit,
    /// A client-side navigation starts leaving the current view.
    PageLeave,
    /// The new view's content is in place.
    PageEnter(Option<ViewNamespace>),
}

/// Every kind of work queued on the page clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Notification(NotificationTask),
    SmoothScrollFrame,
    FormCompleted,
    CursorFrame,
    LoadingFinished,
}

impl From<NotificationTask> for Task {
    fn from(task: NotificationTask) -> Self {
        Task::Notification(task)
    }
}

impl From<smooth_scroll::Task> for Task {
    fn from(_: smooth_scroll::Task) -> Self {
        Task::SmoothScrollFrame
    }
}

impl From<contact_form::Task> for Task {
    fn from(_: contact_form::Task) -> Self {
        Task::FormCompleted
    }
}

impl From<cursor::Task> for Task {
    fn from(_: cursor::Task) -> Self {
        Task::CursorFrame
    }
}

impl From<boot::Task> for Task {
    fn from(_: boot::Task) -> Self {
        Task::LoadingFinished
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Overrides `general.theme` from `settings.toml`.
    pub theme: Option<ThemeMode>,
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `VITRINE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VITRINE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
