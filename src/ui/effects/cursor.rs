// SPDX-License-Identifier: MPL-2.0
//! Custom cursor: a dot pinned to the pointer and an outline that trails it.

use crate::domain::Smoothing;
use crate::dom::{Document, NodeId};
use crate::runtime::{Scheduler, TaskHandle};

/// Half the size of the dot, so it is centered on the pointer.
const DOT_OFFSET_PX: f64 = 4.0;
/// Half the size of the outline ring.
const OUTLINE_OFFSET_PX: f64 = 18.0;

/// Frame callback of the follower loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct CursorFollower {
    dot: Option<NodeId>,
    outline: Option<NodeId>,
    smoothing: Smoothing,
    pointer: Point,
    trail: Point,
    frame: Option<TaskHandle>,
}

impl CursorFollower {
    #[must_use]
    pub fn bind(document: &Document, smoothing: Smoothing) -> Self {
        Self {
            dot: document.query_selector(".custom-cursor"),
            outline: document.query_selector(".custom-cursor-outline"),
            smoothing,
            pointer: Point::default(),
            trail: Point::default(),
            frame: None,
        }
    }

    /// Whether the page has anything to animate.
    #[must_use]
    pub fn has_elements(&self) -> bool {
        self.dot.is_some() || self.outline.is_some()
    }

    /// Starts the frame loop. Does nothing without cursor elements or when
    /// already running.
    pub fn start<T: From<Task>>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
        if !self.has_elements() || self.frame.is_some() {
            return false;
        }
        self.frame = Some(scheduler.request_animation_frame(T::from(Task)));
        true
    }

    pub fn stop<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel(handle);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    /// Moves the outline one step closer, writes both transforms and
    /// schedules the next frame.
    pub fn on_frame<T: From<Task>>(&mut self, document: &mut Document, scheduler: &mut Scheduler<T>) {
        self.trail = Point {
            x: self.smoothing.step(self.trail.x, self.pointer.x),
            y: self.smoothing.step(self.trail.y, self.pointer.y),
        };
        if let Some(dot) = self.dot {
            let transform = translate(self.pointer, DOT_OFFSET_PX);
            document.set_style(dot, "transform", &transform);
        }
        if let Some(outline) = self.outline {
            let transform = translate(self.trail, OUTLINE_OFFSET_PX);
            document.set_style(outline, "transform", &transform);
        }
        self.frame = Some(scheduler.request_animation_frame(T::from(Task)));
    }

    #[must_use]
    pub fn trail(&self) -> Point {
        self.trail
    }
}

fn translate(point: Point, offset: f64) -> String {
    format!("translate({}px, {}px)", point.x - offset, point.y - offset)
}
