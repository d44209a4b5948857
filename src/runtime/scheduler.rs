// SPDX-License-Identifier: MPL-2.0
//! Timer and animation-frame queue.

use std::time::Duration;

/// Interval between two rendering frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cancellable handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    handle: TaskHandle,
    due_at: Duration,
    order: u64,
    task: T,
}

/// Read-only view of a queued task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTask<'a, T> {
    pub handle: TaskHandle,
    pub due_at: Duration,
    pub task: &'a T,
}

/// Virtual clock plus a queue of timers and frame callbacks.
///
/// Tasks fire no earlier than their due time. Among tasks due at the same
/// instant, registration order is preserved.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_handle: u64,
    next_order: u64,
    queue: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 1,
            next_order: 0,
            queue: Vec::new(),
        }
    }

    /// Current time on the page clock (time since the scheduler was created).
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `task` to run once `delay` has elapsed.
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TaskHandle {
        let due_at = self.now.saturating_add(delay);
        self.push(due_at, task)
    }

    /// Queues `task` for the next frame boundary strictly after now.
    pub fn request_animation_frame(&mut self, task: T) -> TaskHandle {
        let frame = FRAME_INTERVAL.as_millis();
        let now = self.now.as_millis();
        let next = (now / frame + 1) * frame;
        let due_at = Duration::from_millis(u64::try_from(next).unwrap_or(u64::MAX));
        self.push(due_at, task)
    }

    fn push(&mut self, due_at: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.push(Scheduled {
            handle,
            due_at,
            order: self.next_order,
            task,
        });
        self.next_order += 1;
        handle
    }

    /// Cancels a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.queue.len();
        self.queue.retain(|scheduled| scheduled.handle != handle);
        self.queue.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.queue.iter().any(|scheduled| scheduled.handle == handle)
    }

    /// Pending tasks ordered by due time, then registration order.
    #[must_use]
    pub fn pending(&self) -> Vec<PendingTask<'_, T>> {
        let mut pending: Vec<&Scheduled<T>> = self.queue.iter().collect();
        pending.sort_by_key(|scheduled| (scheduled.due_at, scheduled.order));
        pending
            .into_iter()
            .map(|scheduled| PendingTask {
                handle: scheduled.handle,
                due_at: scheduled.due_at,
                task: &scheduled.task,
            })
            .collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|scheduled| scheduled.due_at).min()
    }

    /// Drops every pending task and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let cleared = self.queue.len();
        self.queue.clear();
        cleared
    }

    /// Removes and returns the next task due at or before `limit`, moving the
    /// clock forward to its due time.
    pub fn pop_due(&mut self, limit: Duration) -> Option<T> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due_at <= limit)
            .min_by_key(|(_, scheduled)| (scheduled.due_at, scheduled.order))
            .map(|(index, _)| index)?;
        let scheduled = self.queue.remove(index);
        if scheduled.due_at > self.now {
            self.now = scheduled.due_at;
        }
        Some(scheduled.task)
    }

    /// Moves the clock forward without running anything. Never moves backwards.
    pub fn advance_clock_to(&mut self, target: Duration) {
        if target > self.now {
            self.now = target;
        }
    }
}
