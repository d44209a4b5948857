// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scroll**: Thresholds for scroll-driven classes, anchors and parallax
//! - **Notifications**: Toast display and transition timings
//! - **Form**: Simulated submission latency
//! - **Effects**: Cursor smoothing, loading screen and reveal tuning

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Offset past which `.site-header` gets the `scrolled` class.
pub const DEFAULT_HEADER_SCROLLED_PX: f64 = 20.0;

/// Offset past which `#navbar` gets the `scrolled` class.
pub const DEFAULT_NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Minimum offset before the navbar hides while scrolling down.
pub const DEFAULT_HIDE_GUARD_PX: f64 = 100.0;

/// Header height subtracted from section tops for active-link highlighting.
pub const DEFAULT_SECTION_MARGIN_PX: f64 = 100.0;

/// Fixed navbar height kept clear when jumping to an anchor.
pub const DEFAULT_ANCHOR_OFFSET_PX: f64 = 80.0;

/// Per-frame smoothing used for anchor scrolling.
pub const DEFAULT_SMOOTH_LERP: f64 = 0.08;

/// Parallax speed added per shape (first shape 0.5, second 1.0, ...).
pub const DEFAULT_PARALLAX_SPEED_STEP: f64 = 0.5;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays before dismissing itself.
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 5000;

/// Delay between inserting a toast and starting its slide-in.
pub const DEFAULT_NOTIFICATION_ENTER_DELAY_MS: u64 = 100;

/// Duration of the slide-out before the toast element is removed.
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Simulated network latency for contact form submission.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

// ==========================================================================
// Effect Defaults
// ==========================================================================

/// Per-frame smoothing of the cursor outline.
pub const DEFAULT_CURSOR_LERP: f64 = 0.15;

/// Delay between the load event and swapping `loading` for `loaded`.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 500;

/// Visible fraction an element needs before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Amount the viewport's bottom edge is pulled up for reveal checks.
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

/// Viewport height assumed until the first resize event.
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 800.0;
