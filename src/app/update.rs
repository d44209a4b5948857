// SPDX-License-Identifier: MPL-2.0
//! Update logic: page events in, component calls out.

use super::{App, Message, Task, STORAGE_ERROR_KEY};
use crate::dom::NodeId;
use crate::integrations::{transitions, ViewNamespace};
use crate::ui::contact_form::Submission;
use crate::ui::notifications::Kind;
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::theming::ThemeController;

impl App {
    /// Handles one page event.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Load => self.handle_load(),
            Message::Click(target) => self.handle_click(target),
            Message::Scroll(offset) => {
                self.viewport.offset = offset.max(0.0);
                self.run_scroll_handlers();
            }
            Message::Resize { height } => {
                self.viewport.height = height.max(0.0);
                self.run_visibility_checks();
            }
            Message::MouseMove { x, y } => self.cursor.on_mouse_move(x, y),
            Message::Submit => self.handle_submit(),
            Message::PageLeave => self.handle_page_leave(),
            Message::PageEnter(namespace) => self.handle_page_enter(namespace),
        }
    }

    /// Runs a task that fell due on the page clock.
    pub(super) fn dispatch(&mut self, task: Task) {
        match task {
            Task::Notification(task) => {
                self.notifications
                    .handle_task(&mut self.document, &mut self.scheduler, task);
            }
            Task::SmoothScrollFrame => {
                let current = self.viewport.offset;
                if let Some(next) = self.smooth_scroll.on_frame(&mut self.scheduler, current) {
                    self.viewport.offset = next;
                    self.run_scroll_handlers();
                }
            }
            Task::FormCompleted => {
                if self.contact_form.complete(&mut self.document) {
                    self.show_localized("notification-form-sent", Kind::Success);
                }
            }
            Task::CursorFrame => self.cursor.on_frame(&mut self.document, &mut self.scheduler),
            Task::LoadingFinished => self.loading.finish(&mut self.document),
        }
    }

    fn handle_load(&mut self) {
        self.loading.on_load(&mut self.scheduler);
        self.bindings.init_all(&self.document);
        tracing::info!("page loaded");
    }

    /// Every click listener sees the click, in registration order.
    fn handle_click(&mut self, target: NodeId) {
        if !self.document.is_connected(target) {
            tracing::debug!(?target, "click on a detached element");
            return;
        }

        if ThemeController::is_toggle(&self.document, target) {
            if let Err(error) = self.theme.toggle(&mut self.document, &mut self.preferences) {
                tracing::warn!(%error, "theme preference not persisted");
                self.show_localized(STORAGE_ERROR_KEY, Kind::Error);
            }
        }

        if let Some(message) = self.menu.route_click(&self.document, target) {
            self.menu.update(&mut self.document, message);
        }

        if self
            .notifications
            .handle_click(&mut self.document, &mut self.scheduler, target)
        {
            return;
        }

        if let Some(link) = SmoothScroll::anchor_link(&self.document, target) {
            self.smooth_scroll
                .scroll_to_anchor(&self.document, &mut self.scheduler, link);
        }
    }

    fn handle_submit(&mut self) {
        let working = self.i18n.tr("form-submit-working");
        match self
            .contact_form
            .submit(&mut self.document, &mut self.scheduler, &working)
        {
            Submission::Invalid(error) => {
                self.show_localized(error.i18n_key(), Kind::Error);
            }
            Submission::Started | Submission::Ignored => {}
        }
    }

    fn handle_page_leave(&mut self) {
        self.cursor.stop(&mut self.scheduler);
        self.smooth_scroll.cancel(&mut self.scheduler);
        self.contact_form
            .cancel(&mut self.document, &mut self.scheduler);
        transitions::leave(&mut self.document, &mut self.bindings);
    }

    fn handle_page_enter(&mut self, namespace: Option<ViewNamespace>) {
        let namespace = namespace.or_else(|| ViewNamespace::of_document(&self.document));
        self.viewport.offset = 0.0;
        self.rebind();
        transitions::enter(&mut self.document, &mut self.bindings, namespace);
        self.cursor.start(&mut self.scheduler);
        self.run_scroll_handlers();
    }
}
