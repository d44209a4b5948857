// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! A toast is a `div.notification` pinned to the top-right corner. It slides
//! in shortly after insertion, dismisses itself after a few seconds and can be
//! closed early with its close button.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Kind` and lifecycle `Phase`
//! - [`manager`] - `Manager` inserting elements and driving their timers
//!
//! # Usage
//!
//! ```
//! use vitrine::dom::Document;
//! use vitrine::runtime::Scheduler;
//! use vitrine::ui::notifications::{Kind, Manager, NotificationTask};
//!
//! let mut document = Document::new();
//! let mut scheduler: Scheduler<NotificationTask> = Scheduler::new();
//! let mut manager = Manager::default();
//!
//! let id = manager.show(&mut document, &mut scheduler, "Saved", Kind::Success);
//! assert!(manager.dismiss(&mut document, &mut scheduler, id));
//! assert!(!manager.dismiss(&mut document, &mut scheduler, id));
//! ```

mod manager;
mod notification;

pub use manager::{Manager, Task as NotificationTask, Timings};
pub use notification::{Kind, Notification, NotificationId, Phase};
