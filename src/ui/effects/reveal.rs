// SPDX-License-Identifier: MPL-2.0
//! Visibility-driven effects: reveal-on-scroll and lazy images.
//!
//! Both check element boxes against the visible band of the page after every
//! scroll or resize. An element is handled once and then forgotten.

use crate::dom::{Document, LayoutBox, NodeId};

/// Class that starts the slide-up animation.
pub const ANIMATE_CLASS: &str = "animate";
const LAZY_CLASS: &str = "lazy";

/// The visible band of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset (top edge of the band).
    pub offset: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.offset + self.height
    }
}

/// Whether the box overlaps `[top, bottom]`. Touching edges count.
#[must_use]
pub fn intersects(layout: LayoutBox, top: f64, bottom: f64) -> bool {
    layout.top <= bottom && layout.top + layout.height >= top
}

/// Fraction of the box inside `[top, bottom]`.
///
/// Boxes without height count as fully visible when they intersect.
#[must_use]
pub fn visible_ratio(layout: LayoutBox, top: f64, bottom: f64) -> f64 {
    if !intersects(layout, top, bottom) {
        return 0.0;
    }
    if layout.height <= 0.0 {
        return 1.0;
    }
    let overlap = (layout.top + layout.height).min(bottom) - layout.top.max(top);
    (overlap / layout.height).clamp(0.0, 1.0)
}

/// Adds `animate` to `.slide-up` elements once enough of them is visible.
#[derive(Debug, Clone)]
pub struct Reveal {
    pending: Vec<NodeId>,
    threshold: f64,
    bottom_margin: f64,
}

impl Reveal {
    #[must_use]
    pub fn bind(document: &Document, threshold: f64, bottom_margin: f64) -> Self {
        let pending = document
            .query_selector_all(".slide-up")
            .into_iter()
            .filter(|node| !document.has_class(*node, ANIMATE_CLASS))
            .collect();
        Self {
            pending,
            threshold,
            bottom_margin,
        }
    }

    /// Reveals what became visible and returns how many elements were revealed.
    pub fn on_viewport(&mut self, document: &mut Document, viewport: Viewport) -> usize {
        let top = viewport.offset;
        let bottom = (viewport.bottom() - self.bottom_margin).max(top);
        let before = self.pending.len();
        let threshold = self.threshold;
        self.pending.retain(|node| {
            let ratio = visible_ratio(document.layout(*node), top, bottom);
            if ratio > 0.0 && ratio >= threshold {
                document.add_class(*node, ANIMATE_CLASS);
                false
            } else {
                true
            }
        });
        before - self.pending.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Swaps `data-src` into `src` for images entering the viewport.
#[derive(Debug, Clone)]
pub struct LazyImages {
    pending: Vec<NodeId>,
}

impl LazyImages {
    #[must_use]
    pub fn bind(document: &Document) -> Self {
        Self {
            pending: document.query_selector_all("img[data-src]"),
        }
    }

    /// Loads images now in view and returns how many were loaded.
    pub fn on_viewport(&mut self, document: &mut Document, viewport: Viewport) -> usize {
        let before = self.pending.len();
        self.pending.retain(|image| {
            if !intersects(document.layout(*image), viewport.offset, viewport.bottom()) {
                return true;
            }
            if let Some(source) = document.attribute(*image, "data-src") {
                document.set_attribute(*image, "src", &source);
            }
            document.remove_class(*image, LAZY_CLASS);
            false
        });
        before - self.pending.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
