// SPDX-License-Identifier: MPL-2.0
//! Pure domain types and rules, free of any document or timer concerns.
//!
//! - [`theme`]: the light/dark preference and its configured mode
//! - [`scroll`]: scroll-position derived state (thresholds, direction, active section)
//! - [`contact`]: contact form data and its validation rules
//! - [`newtypes`]: clamped values for tunable timings and smoothing factors

pub mod contact;
pub mod newtypes;
pub mod scroll;
pub mod theme;

pub use contact::{Field, FormData, ValidationError};
pub use newtypes::{DelayMs, Smoothing};
pub use scroll::{ScrollState, ScrollThresholds, ScrollTracker, SectionAnchor};
pub use theme::{Theme, ThemeMode};
