// SPDX-License-Identifier: MPL-2.0
//! Static configuration handed to the third-party libraries.

use std::time::Duration;

/// Selector of elements opened in the lightbox.
pub const LIGHTBOX_SELECTOR: &str = ".glightbox";

/// Duration of the container fade during page transitions.
pub const PAGE_FADE: Duration = Duration::from_millis(200);

// =============================================================================
// Tweens
// =============================================================================

/// Entrance animation: fade in while moving up by `y` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub selector: &'static str,
    /// Initial vertical offset in pixels.
    pub y: f64,
    pub duration: Duration,
    /// Extra delay per element, multiplied by its index.
    pub stagger: Duration,
    /// Scroll trigger position (`"<element edge> <viewport %>"`).
    pub start: &'static str,
}

impl Tween {
    /// Delay of the element at `index` among the tween's matches.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// Entrance tweens applied on load and after each page transition.
#[must_use]
pub fn tweens() -> [Tween; 3] {
    [
        Tween {
            selector: ".service-card",
            y: 24.0,
            duration: Duration::from_millis(800),
            stagger: Duration::from_millis(50),
            start: "top 85%",
        },
        Tween {
            selector: ".section-header",
            y: 16.0,
            duration: Duration::from_millis(600),
            stagger: Duration::ZERO,
            start: "top 85%",
        },
        Tween {
            selector: ".work-card",
            y: 24.0,
            duration: Duration::from_millis(700),
            stagger: Duration::from_millis(40),
            start: "top 90%",
        },
    ]
}

// =============================================================================
// Carousels
// =============================================================================

/// Layout override above a minimum viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: f64,
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub selector: &'static str,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Element the carousel mounts on.
    pub selector: &'static str,
    pub slides_per_view: f64,
    pub space_between: u32,
    pub centered: bool,
    pub looped: bool,
    pub auto_height: bool,
    pub pagination: Option<Pagination>,
    /// Sorted by ascending `min_width`.
    pub breakpoints: Vec<Breakpoint>,
    pub autoplay: Option<Duration>,
}

impl CarouselConfig {
    /// Portfolio slider on the home page.
    #[must_use]
    pub fn portfolio() -> Self {
        Self {
            selector: ".portfolio-swiper",
            slides_per_view: 1.1,
            space_between: 14,
            centered: true,
            looped: true,
            auto_height: false,
            pagination: Some(Pagination {
                selector: ".portfolio .swiper-pagination",
                clickable: true,
            }),
            breakpoints: vec![Breakpoint {
                min_width: 800,
                slides_per_view: 1.4,
                space_between: 18,
            }],
            autoplay: None,
        }
    }

    /// Testimonials slider, one quote at a time.
    #[must_use]
    pub fn testimonials() -> Self {
        Self {
            selector: ".testimonials-swiper",
            slides_per_view: 1.0,
            space_between: 0,
            centered: false,
            looped: true,
            auto_height: true,
            pagination: Some(Pagination {
                selector: ".testimonials .swiper-pagination",
                clickable: true,
            }),
            breakpoints: Vec::new(),
            autoplay: Some(Duration::from_millis(4000)),
        }
    }

    /// Slides per view and spacing effective at viewport `width`.
    #[must_use]
    pub fn layout_for_width(&self, width: u32) -> (f64, u32) {
        self.breakpoints
            .iter()
            .rev()
            .find(|breakpoint| width >= breakpoint.min_width)
            .map_or((self.slides_per_view, self.space_between), |breakpoint| {
                (breakpoint.slides_per_view, breakpoint.space_between)
            })
    }
}

/// Carousels mounted when their element exists.
#[must_use]
pub fn carousels() -> [CarouselConfig; 2] {
    [CarouselConfig::portfolio(), CarouselConfig::testimonials()]
}

// =============================================================================
// Grid filter
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GridFilterConfig {
    pub container_selector: &'static str,
    pub target_selector: &'static str,
    pub duration: Duration,
    pub effects: &'static str,
}

impl Default for GridFilterConfig {
    fn default() -> Self {
        Self {
            container_selector: "#work-grid",
            target_selector: ".mix",
            duration: Duration::from_millis(400),
            effects: "fade translateY(12px)",
        }
    }
}
