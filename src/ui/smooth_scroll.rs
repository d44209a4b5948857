// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling to in-page anchors.
//!
//! Clicking `a[href^="#"]` scrolls so the target section sits just below the
//! fixed navbar. The page approaches the target by a fixed fraction each frame
//! and snaps once it is within half a pixel.

use crate::domain::Smoothing;
use crate::dom::{Document, NodeId};
use crate::runtime::{Scheduler, TaskHandle};

/// Distance under which the animation snaps to its target.
const SNAP_DISTANCE_PX: f64 = 0.5;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Frame callback of the scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

/// Frame-driven scroll animation towards an anchor.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    smoothing: Smoothing,
    anchor_offset: f64,
    target: Option<f64>,
    frame: Option<TaskHandle>,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(smoothing: Smoothing, anchor_offset: f64) -> Self {
        Self {
            smoothing,
            anchor_offset,
            target: None,
            frame: None,
        }
    }

    /// The in-page anchor link containing `target`, if any.
    #[must_use]
    pub fn anchor_link(document: &Document, target: NodeId) -> Option<NodeId> {
        document.closest(target, ANCHOR_SELECTOR)
    }

    /// Starts (or retargets) the animation towards the element named by the
    /// link's `href`.
    ///
    /// Returns the destination offset, or `None` when the link points nowhere.
    pub fn scroll_to_anchor<T: From<Task>>(
        &mut self,
        document: &Document,
        scheduler: &mut Scheduler<T>,
        link: NodeId,
    ) -> Option<f64> {
        let href = document.attribute(link, "href")?;
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let Some(element) = document.get_element_by_id(id) else {
            tracing::debug!(%id, "anchor target not found");
            return None;
        };
        let destination = (document.offset_top(element) - self.anchor_offset).max(0.0);
        self.target = Some(destination);
        if self.frame.is_none() {
            self.frame = Some(scheduler.request_animation_frame(T::from(Task)));
        }
        tracing::debug!(%id, destination, "smooth scroll started");
        Some(destination)
    }

    /// Advances the animation by one frame from `current`.
    ///
    /// Returns the new scroll offset, or `None` if no animation is running.
    pub fn on_frame<T: From<Task>>(&mut self, scheduler: &mut Scheduler<T>, current: f64) -> Option<f64> {
        self.frame = None;
        let target = self.target?;
        let next = self.smoothing.step(current, target);
        if (target - next).abs() < SNAP_DISTANCE_PX {
            self.target = None;
            return Some(target);
        }
        self.frame = Some(scheduler.request_animation_frame(T::from(Task)));
        Some(next)
    }

    /// Stops the animation where it is.
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        self.target = None;
        if let Some(handle) = self.frame.take() {
            scheduler.cancel(handle);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PX_EPSILON};
    use std::time::Duration;

    fn page() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let link = doc.build("a").attr("href", "#contact").append_to(body);
        let dead = doc.build("a").attr("href", "#missing").append_to(body);
        doc.build("section").id("contact").layout(1000.0, 500.0).append_to(body);
        (doc, link, dead)
    }

    fn run(scroll: &mut SmoothScroll, scheduler: &mut Scheduler<Task>, mut offset: f64) -> (f64, usize) {
        let mut frames = 0;
        while let Some(Task) = scheduler.pop_due(Duration::MAX) {
            if let Some(next) = scroll.on_frame(scheduler, offset) {
                offset = next;
            }
            frames += 1;
        }
        (offset, frames)
    }

    #[test]
    fn converges_on_the_offset_target() {
        let (doc, link, _) = page();
        let mut scheduler = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);

        assert_eq!(scroll.scroll_to_anchor(&doc, &mut scheduler, link), Some(920.0));
        let (offset, frames) = run(&mut scroll, &mut scheduler, 0.0);
        assert_abs_diff_eq!(offset, 920.0, epsilon = PX_EPSILON);
        assert!(frames > 1);
        assert!(!scroll.is_running());
    }

    #[test]
    fn first_frame_moves_a_fraction_of_the_distance() {
        let (doc, link, _) = page();
        let mut scheduler = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);
        scroll.scroll_to_anchor(&doc, &mut scheduler, link);

        assert_eq!(scheduler.pop_due(Duration::MAX), Some(Task));
        assert_eq!(scheduler.now(), Duration::from_millis(16));
        let next = scroll.on_frame(&mut scheduler, 0.0).unwrap();
        assert_abs_diff_eq!(next, 73.6, epsilon = 1e-9);
    }

    #[test]
    fn destination_never_goes_above_the_top() {
        let mut doc = Document::new();
        let body = doc.body();
        let link = doc.build("a").attr("href", "#top").append_to(body);
        doc.build("section").id("top").layout(30.0, 100.0).append_to(body);
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);

        assert_eq!(scroll.scroll_to_anchor(&doc, &mut scheduler, link), Some(0.0));
    }

    #[test]
    fn missing_target_does_not_start_an_animation() {
        let (doc, _, dead) = page();
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);

        assert_eq!(scroll.scroll_to_anchor(&doc, &mut scheduler, dead), None);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn retargeting_keeps_a_single_frame_loop() {
        let (doc, link, _) = page();
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);

        scroll.scroll_to_anchor(&doc, &mut scheduler, link);
        scroll.scroll_to_anchor(&doc, &mut scheduler, link);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn cancel_drops_the_pending_frame() {
        let (doc, link, _) = page();
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        let mut scroll = SmoothScroll::new(Smoothing::new(0.08), 80.0);

        scroll.scroll_to_anchor(&doc, &mut scheduler, link);
        scroll.cancel(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!scroll.is_running());
    }

    #[test]
    fn anchor_link_resolves_from_nested_targets() {
        let mut doc = Document::new();
        let body = doc.body();
        let link = doc.build("a").attr("href", "#about").append_to(body);
        let label = doc.build("span").append_to(link);
        let external = doc.build("a").attr("href", "https://example.com").append_to(body);

        assert_eq!(SmoothScroll::anchor_link(&doc, label), Some(link));
        assert_eq!(SmoothScroll::anchor_link(&doc, external), None);
    }
}
