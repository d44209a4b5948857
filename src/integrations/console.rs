// SPDX-License-Identifier: MPL-2.0
//! Library stand-ins that only trace what they are asked to do.
//!
//! Used by the `vitrine` binary so a scripted run shows when each library
//! would have been initialized.

use super::port::{Animator, Carousel, GridFilter, Lightbox};
use super::presets::{CarouselConfig, GridFilterConfig, Tween};
use super::Bindings;
use crate::dom::NodeId;
use std::time::Duration;

/// Logs every library call at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLibraries;

impl Animator for TracingLibraries {
    fn from_on_scroll(&mut self, target: NodeId, tween: &Tween, delay: Duration) {
        tracing::info!(
            element = ?target,
            selector = tween.selector,
            delay_ms = delay.as_millis(),
            start = tween.start,
            "tween registered"
        );
    }

    fn fade_out(&mut self, container: NodeId, duration: Duration) {
        tracing::info!(?container, duration_ms = duration.as_millis(), "fade out");
    }

    fn fade_in(&mut self, container: NodeId, duration: Duration) {
        tracing::info!(?container, duration_ms = duration.as_millis(), "fade in");
    }
}

impl Carousel for TracingLibraries {
    fn mount(&mut self, element: NodeId, config: &CarouselConfig) {
        tracing::info!(
            ?element,
            selector = config.selector,
            slides_per_view = config.slides_per_view,
            autoplay_ms = config.autoplay.map(|delay| delay.as_millis()),
            "carousel mounted"
        );
    }
}

impl Lightbox for TracingLibraries {
    fn init(&mut self, selector: &str) {
        tracing::info!(%selector, "lightbox created");
    }

    fn destroy(&mut self) {
        tracing::info!("lightbox destroyed");
    }
}

impl GridFilter for TracingLibraries {
    fn mount(&mut self, container: NodeId, config: &GridFilterConfig) {
        tracing::info!(
            ?container,
            items = config.target_selector,
            effects = config.effects,
            "grid filter mounted"
        );
    }
}

impl Bindings {
    /// Every library backed by [`TracingLibraries`].
    #[must_use]
    pub fn tracing() -> Self {
        Bindings::none()
            .with_animator(TracingLibraries)
            .with_carousel(TracingLibraries)
            .with_lightbox(TracingLibraries)
            .with_grid_filter(TracingLibraries)
    }
}
