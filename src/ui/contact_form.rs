// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.
//!
//! Submission is simulated: after validation the submit button shows a
//! "working" label for a fixed delay, then the form is reset. The caller turns
//! the returned [`Submission`] and the completion into notifications.

use crate::dom::{Document, NodeId};
use crate::domain::{Field, FormData, ValidationError};
use crate::runtime::{Scheduler, TaskHandle};
use std::time::Duration;

const FORM_ID: &str = "contact-form";

/// The simulated network round-trip has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// Validation failed. The form contents are untouched.
    Invalid,
    /// Waiting for the simulated round-trip.
    Submitting,
    /// Sent and reset.
    Success,
}

impl FormPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormPhase::Idle => "idle",
            FormPhase::Invalid => "invalid",
            FormPhase::Submitting => "submitting",
            FormPhase::Success => "success",
        }
    }
}

/// What a submit event led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// No form on the page, or a submission is already running.
    Ignored,
    Invalid(ValidationError),
    Started,
}

impl FormData {
    /// Reads the `name`, `email`, `phone` and `message` controls of `form`.
    /// Missing controls read as empty.
    #[must_use]
    pub fn from_document(document: &Document, form: NodeId) -> Self {
        let mut data = FormData::default();
        for field in Field::ALL {
            let selector = format!("[name=\"{}\"]", field.control_name());
            if let Some(control) = document.query_selector_within(form, &selector) {
                data.set(field, document.value(control));
            }
        }
        data
    }
}

/// `#contact-form` and its submit button.
#[derive(Debug, Clone)]
pub struct ContactForm {
    form: Option<NodeId>,
    button: Option<NodeId>,
    delay: Duration,
    phase: FormPhase,
    pending: Option<TaskHandle>,
    original_label: String,
}

impl ContactForm {
    #[must_use]
    pub fn bind(document: &Document, delay: Duration) -> Self {
        let form = document.get_element_by_id(FORM_ID);
        let button =
            form.and_then(|form| document.query_selector_within(form, "button[type=\"submit\"]"));
        Self {
            form,
            button,
            delay,
            phase: FormPhase::Idle,
            pending: None,
            original_label: String::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn form(&self) -> Option<NodeId> {
        self.form
    }

    /// Validates the form and starts the simulated submission.
    ///
    /// `working_label` replaces the button text while submitting.
    pub fn submit<T: From<Task>>(
        &mut self,
        document: &mut Document,
        scheduler: &mut Scheduler<T>,
        working_label: &str,
    ) -> Submission {
        let Some(form) = self.form else {
            tracing::debug!("submit without a contact form");
            return Submission::Ignored;
        };
        if self.phase == FormPhase::Submitting {
            tracing::debug!("submission already in flight");
            return Submission::Ignored;
        }

        if let Err(error) = FormData::from_document(document, form).validate() {
            tracing::debug!(%error, "contact form rejected");
            self.phase = FormPhase::Invalid;
            return Submission::Invalid(error);
        }

        if let Some(button) = self.button {
            self.original_label = document.text(button).to_string();
            document.set_text(button, working_label);
            document.set_disabled(button, true);
        }
        self.pending = Some(scheduler.set_timeout(self.delay, T::from(Task)));
        self.phase = FormPhase::Submitting;
        tracing::debug!("contact form submitting");
        Submission::Started
    }

    /// Finishes the running submission: restores the button and resets the form.
    ///
    /// Returns `false` when nothing was in flight.
    pub fn complete(&mut self, document: &mut Document) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.pending = None;
        self.restore_button(document);
        self.reset(document);
        self.phase = FormPhase::Success;
        tracing::debug!("contact form sent");
        true
    }

    /// Abandons a running submission (page transition or teardown).
    pub fn cancel<T>(&mut self, document: &mut Document, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if self.phase == FormPhase::Submitting {
            self.restore_button(document);
            self.phase = FormPhase::Idle;
        }
    }

    /// Puts every control back to its `value` attribute, or empty.
    pub fn reset(&self, document: &mut Document) {
        let Some(form) = self.form else {
            return;
        };
        for control in document.query_selector_all_within(form, "input, textarea, select") {
            let default = document.attribute(control, "value").unwrap_or_default();
            document.set_value(control, &default);
        }
    }

    fn restore_button(&self, document: &mut Document) {
        if let Some(button) = self.button {
            document.set_text(button, &self.original_label);
            document.set_disabled(button, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        doc: Document,
        button: NodeId,
        name: NodeId,
        email: NodeId,
        message: NodeId,
        subject: NodeId,
    }

    fn page(name: &str, email: &str, message: &str) -> Page {
        let mut doc = Document::new();
        let body = doc.body();
        let form = doc.build("form").id("contact-form").append_to(body);
        let name_input = doc.build("input").attr("name", "name").append_to(form);
        let email_input = doc.build("input").attr("name", "email").append_to(form);
        doc.build("input").attr("name", "phone").append_to(form);
        let message_input = doc.build("textarea").attr("name", "message").append_to(form);
        let subject = doc
            .build("input")
            .attr("name", "subject")
            .value("General")
            .append_to(form);
        let button = doc
            .build("button")
            .attr("type", "submit")
            .text("Send")
            .append_to(form);
        doc.set_value(name_input, name);
        doc.set_value(email_input, email);
        doc.set_value(message_input, message);
        Page {
            doc,
            button,
            name: name_input,
            email: email_input,
            message: message_input,
            subject,
        }
    }

    fn bind(page: &Page) -> ContactForm {
        ContactForm::bind(&page.doc, Duration::from_millis(2000))
    }

    #[test]
    fn reads_controls_by_name() {
        let page = page("Ada", "ada@example.com", "Hi");
        let form = page.doc.get_element_by_id("contact-form").unwrap();
        let data = FormData::from_document(&page.doc, form);
        assert_eq!(data.name, "Ada");
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(data.phone, "");
        assert_eq!(data.message, "Hi");
    }

    #[test]
    fn valid_submission_locks_the_button_then_resets() {
        let mut page = page("Ada", "ada@example.com", "Hi");
        let mut form = bind(&page);
        let mut scheduler: Scheduler<Task> = Scheduler::new();

        let result = form.submit(&mut page.doc, &mut scheduler, "Sending...");
        assert_eq!(result, Submission::Started);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(page.doc.text(page.button), "Sending...");
        assert!(page.doc.is_disabled(page.button));

        assert_eq!(scheduler.pop_due(Duration::from_millis(1999)), None);
        assert_eq!(scheduler.pop_due(Duration::from_millis(2000)), Some(Task));
        assert!(form.complete(&mut page.doc));

        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(page.doc.text(page.button), "Send");
        assert!(!page.doc.is_disabled(page.button));
        for control in [page.name, page.email, page.message] {
            assert_eq!(page.doc.value(control), "");
        }
        assert_eq!(page.doc.value(page.subject), "General");
    }

    #[test]
    fn missing_fields_schedule_nothing_and_keep_contents() {
        let mut page = page("", "ada@example.com", "");
        let mut form = bind(&page);
        let mut scheduler: Scheduler<Task> = Scheduler::new();

        let result = form.submit(&mut page.doc, &mut scheduler, "Sending...");
        assert_eq!(
            result,
            Submission::Invalid(ValidationError::MissingRequiredFields {
                fields: vec![Field::Name, Field::Message]
            })
        );
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(page.doc.value(page.email), "ada@example.com");
        assert!(!page.doc.is_disabled(page.button));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut page = page("Ada", "ada@example", "Hi");
        let mut form = bind(&page);
        let mut scheduler: Scheduler<Task> = Scheduler::new();

        assert_eq!(
            form.submit(&mut page.doc, &mut scheduler, "Sending..."),
            Submission::Invalid(ValidationError::InvalidEmail)
        );
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut page = page("Ada", "ada@example.com", "Hi");
        let mut form = bind(&page);
        let mut scheduler: Scheduler<Task> = Scheduler::new();

        form.submit(&mut page.doc, &mut scheduler, "Sending...");
        assert_eq!(
            form.submit(&mut page.doc, &mut scheduler, "Sending..."),
            Submission::Ignored
        );
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn cancel_restores_the_button_and_drops_the_timer() {
        let mut page = page("Ada", "ada@example.com", "Hi");
        let mut form = bind(&page);
        let mut scheduler: Scheduler<Task> = Scheduler::new();

        form.submit(&mut page.doc, &mut scheduler, "Sending...");
        form.cancel(&mut page.doc, &mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(page.doc.text(page.button), "Send");
        assert!(!form.complete(&mut page.doc));
        assert_eq!(page.doc.value(page.name), "Ada");
    }

    #[test]
    fn page_without_form_ignores_submit() {
        let mut doc = Document::new();
        let mut form = ContactForm::bind(&doc, Duration::from_millis(2000));
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        assert_eq!(form.submit(&mut doc, &mut scheduler, "..."), Submission::Ignored);
    }
}
