// SPDX-License-Identifier: MPL-2.0
//! Decorative effects layered on top of the page.
//!
//! - [`parallax`] - hero shapes drifting with the scroll position
//! - [`cursor`] - custom cursor dot and trailing outline
//! - [`reveal`] - reveal-on-scroll and lazy image loading
//! - [`boot`] - loading screen, footer year and font preload

pub mod boot;
pub mod cursor;
pub mod parallax;
pub mod reveal;

pub use boot::LoadingScreen;
pub use cursor::CursorFollower;
pub use parallax::Parallax;
pub use reveal::{LazyImages, Reveal, Viewport};
