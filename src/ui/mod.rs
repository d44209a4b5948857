// SPDX-License-Identifier: MPL-2.0
//! Page components bound to the document.
//!
//! Each component resolves the elements it needs when bound, degrades to a
//! no-op when they are missing, and exposes plain methods the application
//! calls from its update loop. Timed work is expressed as a component-local
//! task type scheduled on the shared page clock.
//!
//! # Components
//!
//! - [`theming`] - light/dark theme controller backed by the preference store
//! - [`navbar`] - scroll-driven navbar and header, active links, mobile menu
//! - [`smooth_scroll`] - animated scrolling to in-page anchors
//! - [`notifications`] - toast notification system for user feedback
//! - [`contact_form`] - validated, simulated contact form submission
//! - [`effects`] - parallax, custom cursor, reveal-on-scroll, lazy images, boot chrome

pub mod contact_form;
pub mod effects;
pub mod navbar;
pub mod notifications;
pub mod smooth_scroll;
pub mod theming;
