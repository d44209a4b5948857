// SPDX-License-Identifier: MPL-2.0
//! Localized strings for every user-visible message.
//!
//! Translations are Fluent files embedded at build time from `assets/i18n/`.
//! The locale comes from `--lang`, then `general.language` in the settings,
//! then the operating system, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
