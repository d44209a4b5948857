// SPDX-License-Identifier: MPL-2.0
//! Interfaces of the third-party libraries the page can use.
//!
//! Every library is optional. An implementation receives resolved elements
//! and static configuration only, never page state, so the rest of the crate
//! stays independent of how animation, carousels or lightboxes are rendered.
//!
//! # Available Ports
//!
//! - [`Animator`]: scroll-triggered entrance tweens and container fades
//! - [`Carousel`]: slide carousels
//! - [`Lightbox`]: full-screen media viewer
//! - [`GridFilter`]: filterable portfolio grid

use super::presets::{CarouselConfig, GridFilterConfig, Tween};
use crate::dom::NodeId;
use std::time::Duration;

/// Tweening library.
pub trait Animator {
    /// Animates `target` from the tween's start state once it scrolls into
    /// view, after `delay`.
    fn from_on_scroll(&mut self, target: NodeId, tween: &Tween, delay: Duration);

    fn fade_out(&mut self, container: NodeId, duration: Duration);

    fn fade_in(&mut self, container: NodeId, duration: Duration);
}

/// Carousel library.
pub trait Carousel {
    fn mount(&mut self, element: NodeId, config: &CarouselConfig);
}

/// Lightbox library. Only one instance may be alive at a time.
pub trait Lightbox {
    fn init(&mut self, selector: &str);

    fn destroy(&mut self);
}

/// Grid filtering library.
pub trait GridFilter {
    fn mount(&mut self, container: NodeId, config: &GridFilterConfig);
}
