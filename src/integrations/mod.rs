// SPDX-License-Identifier: MPL-2.0
//! Optional third-party libraries and page transitions.
//!
//! [`Bindings`] holds one optional implementation per library. A missing
//! library turns the matching initialization into a no-op, so pages work the
//! same with or without them.

pub mod console;
pub mod port;
pub mod presets;
pub mod transitions;

pub use port::{Animator, Carousel, GridFilter, Lightbox};
pub use transitions::ViewNamespace;

use crate::dom::Document;
use presets::{GridFilterConfig, LIGHTBOX_SELECTOR};

/// The libraries available to the page.
#[derive(Default)]
pub struct Bindings {
    pub animator: Option<Box<dyn Animator>>,
    pub carousel: Option<Box<dyn Carousel>>,
    pub lightbox: Option<Box<dyn Lightbox>>,
    pub grid_filter: Option<Box<dyn GridFilter>>,
    lightbox_alive: bool,
}

impl std::fmt::Debug for Bindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindings")
            .field("animator", &self.animator.is_some())
            .field("carousel", &self.carousel.is_some())
            .field("lightbox", &self.lightbox.is_some())
            .field("grid_filter", &self.grid_filter.is_some())
            .field("lightbox_alive", &self.lightbox_alive)
            .finish()
    }
}

impl Bindings {
    /// No libraries at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    #[must_use]
    pub fn with_carousel(mut self, carousel: impl Carousel + 'static) -> Self {
        self.carousel = Some(Box::new(carousel));
        self
    }

    #[must_use]
    pub fn with_lightbox(mut self, lightbox: impl Lightbox + 'static) -> Self {
        self.lightbox = Some(Box::new(lightbox));
        self
    }

    #[must_use]
    pub fn with_grid_filter(mut self, grid_filter: impl GridFilter + 'static) -> Self {
        self.grid_filter = Some(Box::new(grid_filter));
        self
    }

    /// Registers the entrance tweens. Returns the number of animated elements.
    pub fn init_animations(&mut self, document: &Document) -> usize {
        let Some(animator) = self.animator.as_mut() else {
            return 0;
        };
        let mut count = 0;
        for tween in presets::tweens() {
            for (index, target) in document.query_selector_all(tween.selector).into_iter().enumerate() {
                animator.from_on_scroll(target, &tween, tween.delay_for(index));
                count += 1;
            }
        }
        count
    }

    /// Mounts every carousel whose element is on the page.
    pub fn init_carousels(&mut self, document: &Document) -> usize {
        let Some(carousel) = self.carousel.as_mut() else {
            return 0;
        };
        let mut count = 0;
        for config in presets::carousels() {
            if let Some(element) = document.query_selector(config.selector) {
                carousel.mount(element, &config);
                count += 1;
            }
        }
        count
    }

    /// (Re)creates the lightbox, destroying the previous instance first.
    pub fn init_lightbox(&mut self) -> bool {
        let Some(lightbox) = self.lightbox.as_mut() else {
            return false;
        };
        if self.lightbox_alive {
            lightbox.destroy();
        }
        lightbox.init(LIGHTBOX_SELECTOR);
        self.lightbox_alive = true;
        true
    }

    /// Mounts the grid filter on `#work-grid` when present.
    pub fn init_grid_filter(&mut self, document: &Document) -> bool {
        let Some(grid_filter) = self.grid_filter.as_mut() else {
            return false;
        };
        let config = GridFilterConfig::default();
        let Some(container) = document.query_selector(config.container_selector) else {
            return false;
        };
        grid_filter.mount(container, &config);
        true
    }

    /// Everything the page initializes once loaded.
    pub fn init_all(&mut self, document: &Document) {
        let animated = self.init_animations(document);
        let carousels = self.init_carousels(document);
        let lightbox = self.init_lightbox();
        let grid = self.init_grid_filter(document);
        tracing::debug!(animated, carousels, lightbox, grid, "library bindings initialized");
    }

    /// Releases what must not outlive the page.
    pub fn teardown(&mut self) {
        if self.lightbox_alive {
            if let Some(lightbox) = self.lightbox.as_mut() {
                lightbox.destroy();
            }
            self.lightbox_alive = false;
        }
    }

    #[must_use]
    pub fn is_lightbox_alive(&self) -> bool {
        self.lightbox_alive
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{recording, Call};
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_libraries_are_no_ops() {
        let doc = Document::new();
        let mut bindings = Bindings::none();
        assert_eq!(bindings.init_animations(&doc), 0);
        assert_eq!(bindings.init_carousels(&doc), 0);
        assert!(!bindings.init_lightbox());
        assert!(!bindings.init_grid_filter(&doc));
        bindings.teardown();
    }

    #[test]
    fn tweens_are_staggered_per_selector() {
        let mut doc = Document::new();
        let body = doc.body();
        let cards: Vec<_> = (0..3)
            .map(|_| doc.build("div").class("service-card").append_to(body))
            .collect();
        let (mut bindings, log) = recording();

        assert_eq!(bindings.init_animations(&doc), 3);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::Tween(cards[0], ".service-card", Duration::ZERO),
                Call::Tween(cards[1], ".service-card", Duration::from_millis(50)),
                Call::Tween(cards[2], ".service-card", Duration::from_millis(100)),
            ]
        );
    }

    #[test]
    fn only_present_carousels_are_mounted() {
        let mut doc = Document::new();
        let body = doc.body();
        let slider = doc.build("div").class("testimonials-swiper").append_to(body);
        let (mut bindings, log) = recording();

        assert_eq!(bindings.init_carousels(&doc), 1);
        assert_eq!(log.borrow().as_slice(), &[Call::Mount(slider, ".testimonials-swiper")]);
    }

    #[test]
    fn lightbox_is_destroyed_before_reinit() {
        let (mut bindings, log) = recording();
        bindings.init_lightbox();
        bindings.init_lightbox();
        bindings.teardown();
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::LightboxInit(".glightbox".into()),
                Call::LightboxDestroy,
                Call::LightboxInit(".glightbox".into()),
                Call::LightboxDestroy,
            ]
        );
        assert!(!bindings.is_lightbox_alive());
    }

    #[test]
    fn grid_filter_needs_the_work_grid() {
        let mut doc = Document::new();
        let (mut bindings, log) = recording();
        assert!(!bindings.init_grid_filter(&doc));

        let body = doc.body();
        let grid = doc.build("div").id("work-grid").append_to(body);
        assert!(bindings.init_grid_filter(&doc));
        assert_eq!(log.borrow().as_slice(), &[Call::Grid(grid)]);
    }
}
