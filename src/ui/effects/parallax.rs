// SPDX-License-Identifier: MPL-2.0
//! Hero shapes that drift upwards faster than the page scrolls.

use crate::dom::{Document, NodeId};

const SHAPE_SELECTOR: &str = ".hero-shape, .hero-shape-2, .hero-shape-3";

/// Vertical shift of the shape at `index` (0-based) for a scroll `offset`.
///
/// Each shape moves `step` times faster than the previous one.
#[must_use]
pub fn shift_for(index: usize, offset: f64, step: f64) -> f64 {
    let speed = (index as f64 + 1.0) * step;
    let shift = -(offset * speed);
    // Avoid printing "-0px".
    if shift == 0.0 {
        0.0
    } else {
        shift
    }
}

/// `transform` value keeping the shape centered, shifted by `shift` pixels.
#[must_use]
pub fn transform_for(shift: f64) -> String {
    format!("translate(-50%, calc(-50% + {shift}px))")
}

#[derive(Debug, Clone)]
pub struct Parallax {
    shapes: Vec<NodeId>,
    speed_step: f64,
}

impl Parallax {
    #[must_use]
    pub fn bind(document: &Document, speed_step: f64) -> Self {
        Self {
            shapes: document.query_selector_all(SHAPE_SELECTOR),
            speed_step,
        }
    }

    pub fn on_scroll(&self, document: &mut Document, offset: f64) {
        for (index, shape) in self.shapes.iter().enumerate() {
            let shift = shift_for(index, offset, self.speed_step);
            document.set_style(*shape, "transform", &transform_for(shift));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn shapes_move_at_increasing_speeds() {
        assert_abs_diff_eq!(shift_for(0, 100.0, 0.5), -50.0);
        assert_abs_diff_eq!(shift_for(1, 100.0, 0.5), -100.0);
        assert_abs_diff_eq!(shift_for(2, 100.0, 0.5), -150.0);
    }

    #[test]
    fn zero_offset_has_no_negative_zero() {
        assert_eq!(transform_for(shift_for(0, 0.0, 0.5)), "translate(-50%, calc(-50% + 0px))");
    }

    #[test]
    fn transforms_are_written_in_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let first = doc.build("div").class("hero-shape").append_to(body);
        let second = doc.build("div").class("hero-shape-2").append_to(body);
        let parallax = Parallax::bind(&doc, 0.5);

        parallax.on_scroll(&mut doc, 75.0);
        assert_eq!(
            doc.style(first, "transform"),
            Some("translate(-50%, calc(-50% + -37.5px))")
        );
        assert_eq!(
            doc.style(second, "transform"),
            Some("translate(-50%, calc(-50% + -75px))")
        );
    }
}
