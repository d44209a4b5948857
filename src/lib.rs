// SPDX-License-Identifier: MPL-2.0
//! `vitrine` implements the interactive layer of a showcase website against
//! an in-memory document.
//!
//! It covers theme switching with a persisted preference, scroll-driven
//! navigation chrome, toast notifications, a validated contact form with
//! simulated submission, visual effects, and the hooks that initialize
//! third-party libraries on load and after client-side page transitions.
//! Everything timed runs on a virtual page clock, so behavior is fully
//! deterministic.

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod integrations;
pub mod runtime;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_utils;
