// SPDX-License-Identifier: MPL-2.0
//! Cooperative scheduling on a virtual clock.
//!
//! Everything runs on one thread: handlers run to completion and anything
//! that has to happen "later" is queued here as a plain task value together
//! with a due time. The owner pulls due tasks with [`Scheduler::pop_due`] and
//! dispatches them itself, which keeps timing fully deterministic in tests.

mod scheduler;

pub use scheduler::{PendingTask, Scheduler, TaskHandle, FRAME_INTERVAL};
