// SPDX-License-Identifier: MPL-2.0
//! One-off page chrome applied at boot: loading screen, footer year and
//! font preloading.

use crate::dom::{Document, NodeId};
use crate::runtime::{Scheduler, TaskHandle};
use chrono::Datelike;
use std::time::Duration;

pub const LOADING_CLASS: &str = "loading";
pub const LOADED_CLASS: &str = "loaded";

/// Stylesheet preloaded so the first paint uses the right font.
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";

/// The loading screen delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

/// `loading` on the body until shortly after the load event, then `loaded`.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    delay: Duration,
    pending: Option<TaskHandle>,
}

impl LoadingScreen {
    /// Marks the body as loading.
    pub fn begin(document: &mut Document, delay: Duration) -> Self {
        let body = document.body();
        document.add_class(body, LOADING_CLASS);
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules the swap to `loaded`. Later load events are ignored.
    pub fn on_load<T: From<Task>>(&mut self, scheduler: &mut Scheduler<T>) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.set_timeout(self.delay, T::from(Task)));
        }
    }

    pub fn finish(&mut self, document: &mut Document) {
        self.pending = None;
        let body = document.body();
        document.remove_class(body, LOADING_CLASS);
        document.add_class(body, LOADED_CLASS);
        tracing::debug!("loading screen finished");
    }

    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Writes `year` into `#year`, if the footer has one.
pub fn stamp_year(document: &mut Document, year: i32) -> Option<NodeId> {
    let element = document.get_element_by_id("year")?;
    document.set_text(element, &year.to_string());
    Some(element)
}

/// Appends the font preload link to `head` unless it is already there.
pub fn preload_font(document: &mut Document) -> NodeId {
    let head = document.head();
    let existing = document
        .query_selector_all_within(head, "link[rel=\"preload\"]")
        .into_iter()
        .find(|link| document.attribute(*link, "href").as_deref() == Some(FONT_STYLESHEET));
    if let Some(link) = existing {
        return link;
    }
    document
        .build("link")
        .attr("rel", "preload")
        .attr("href", FONT_STYLESHEET)
        .attr("as", "style")
        .append_to(head)
}
