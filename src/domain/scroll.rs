// SPDX-License-Identifier: MPL-2.0
//! Scroll-position derived state.
//!
//! Every scroll event is reduced to a [`ScrollState`]: whether the page is
//! past a threshold, whether the user is scrolling down (with a guard near the
//! top to avoid flicker) and which section is currently active. The only state
//! carried between events is the previous offset.

use crate::config::{
    DEFAULT_HIDE_GUARD_PX, DEFAULT_NAVBAR_SCROLLED_PX, DEFAULT_SECTION_MARGIN_PX,
};

/// Pixel thresholds for one scroll consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    /// Offset above which the page counts as scrolled.
    pub scrolled_px: f64,
    /// Minimum offset before downward scrolling is reported.
    pub hide_guard_px: f64,
    /// Header height subtracted from each section's top edge.
    pub section_margin_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled_px: DEFAULT_NAVBAR_SCROLLED_PX,
            hide_guard_px: DEFAULT_HIDE_GUARD_PX,
            section_margin_px: DEFAULT_SECTION_MARGIN_PX,
        }
    }
}

/// A section id together with its top offset in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// State derived from a single scroll event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub offset_y: f64,
    pub is_scrolled_past_threshold: bool,
    pub is_scrolling_down: bool,
    /// `None` when no section qualifies.
    pub active_section_id: Option<String>,
}

/// Whether `offset` lies strictly past `threshold`.
#[must_use]
pub fn is_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Downward movement past the guard offset.
#[must_use]
pub fn is_scrolling_down(previous: f64, current: f64, guard: f64) -> bool {
    current > previous && current > guard
}

/// The last section, in document order, whose top minus `margin` is at or
/// above `offset`.
#[must_use]
pub fn active_section(offset: f64, sections: &[SectionAnchor], margin: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| offset >= section.top - margin)
        .next_back()
        .map(|section| section.id.as_str())
}

/// Tracks the previous offset between scroll events.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    thresholds: ScrollThresholds,
    last_offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}

impl ScrollTracker {
    #[must_use]
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            last_offset: 0.0,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> ScrollThresholds {
        self.thresholds
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Computes the state for `offset` and remembers it as the previous offset.
    pub fn observe(&mut self, offset: f64, sections: &[SectionAnchor]) -> ScrollState {
        let state = ScrollState {
            offset_y: offset,
            is_scrolled_past_threshold: is_past(offset, self.thresholds.scrolled_px),
            is_scrolling_down: is_scrolling_down(
                self.last_offset,
                offset,
                self.thresholds.hide_guard_px,
            ),
            active_section_id: active_section(offset, sections, self.thresholds.section_margin_px)
                .map(str::to_string),
        };
        self.last_offset = offset;
        state
    }

    /// Forgets the previous offset (after a page transition).
    pub fn reset(&mut self) {
        self.last_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(scrolled: f64) -> ScrollThresholds {
        ScrollThresholds {
            scrolled_px: scrolled,
            hide_guard_px: 100.0,
            section_margin_px: 100.0,
        }
    }

    #[test]
    fn offsets_below_guard_never_report_scrolling_down() {
        let mut tracker = ScrollTracker::new(thresholds(20.0));
        let states: Vec<ScrollState> = [0.0, 30.0, 80.0, 40.0]
            .into_iter()
            .map(|offset| tracker.observe(offset, &[]))
            .collect();

        let past: Vec<bool> = states.iter().map(|s| s.is_scrolled_past_threshold).collect();
        assert_eq!(past, vec![false, true, true, true]);
        assert!(states.iter().all(|s| !s.is_scrolling_down));
    }

    #[test]
    fn scrolling_down_past_guard_is_reported() {
        let mut tracker = ScrollTracker::new(thresholds(50.0));
        assert!(!tracker.observe(90.0, &[]).is_scrolling_down);
        assert!(tracker.observe(150.0, &[]).is_scrolling_down);
        assert!(!tracker.observe(120.0, &[]).is_scrolling_down);
        assert!(!tracker.observe(120.0, &[]).is_scrolling_down);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_past(20.0, 20.0));
        assert!(is_past(20.5, 20.0));
    }

    #[test]
    fn last_qualifying_section_wins() {
        let sections = vec![
            SectionAnchor::new("home", 0.0),
            SectionAnchor::new("services", 300.0),
            SectionAnchor::new("contact", 700.0),
        ];
        // Adjusted tops are -100, 200 and 600: all three are at or above 650.
        assert_eq!(active_section(650.0, &sections, 100.0), Some("contact"));
        assert_eq!(active_section(599.0, &sections, 100.0), Some("services"));
        assert_eq!(active_section(600.0, &sections, 100.0), Some("contact"));
        assert_eq!(active_section(0.0, &sections, 100.0), Some("home"));
    }

    #[test]
    fn no_sections_means_no_active_id() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(500.0, &[]).active_section_id, None);
    }

    #[test]
    fn sections_below_the_offset_do_not_qualify() {
        let sections = vec![SectionAnchor::new("late", 900.0)];
        assert_eq!(active_section(100.0, &sections, 100.0), None);
    }

    #[test]
    fn reset_forgets_previous_offset() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(400.0, &[]);
        tracker.reset();
        assert_eq!(tracker.last_offset(), 0.0);
        assert!(tracker.observe(300.0, &[]).is_scrolling_down);
    }
}
