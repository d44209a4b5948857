// SPDX-License-Identifier: MPL-2.0
//! Clamped value types for tunable timings and smoothing factors.
//!
//! These types enforce validity at construction so configuration values read
//! from disk can never produce a zero-length toast or a follower that never
//! moves.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Bounds for delays expressed in milliseconds.
pub mod delay_bounds {
    /// Shortest accepted delay (one rendering frame).
    pub const MIN_MS: u64 = 16;
    /// Longest accepted delay (one minute).
    pub const MAX_MS: u64 = 60_000;
}

/// Bounds for exponential smoothing factors.
pub mod smoothing_bounds {
    pub const MIN: f64 = 0.01;
    pub const MAX: f64 = 1.0;
}

// =============================================================================
// DelayMs
// =============================================================================

/// A delay in milliseconds, guaranteed to be within 16 ms – 60 s.
///
/// # Example
///
/// ```
/// use vitrine::domain::DelayMs;
///
/// assert_eq!(DelayMs::new(300).value(), 300);
///
/// // Values outside range are clamped
/// assert_eq!(DelayMs::new(0).value(), 16);
/// assert_eq!(DelayMs::new(120_000).value(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DelayMs(u64);

impl DelayMs {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(delay_bounds::MIN_MS, delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// Smoothing
// =============================================================================

/// Fraction of the remaining distance covered per frame, within 0.01 – 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Smoothing(f64);

impl Smoothing {
    /// Creates a smoothing factor, clamping to the valid range. NaN maps to the maximum.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(smoothing_bounds::MAX);
        }
        Self(value.clamp(smoothing_bounds::MIN, smoothing_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// One smoothing step from `current` towards `target`.
    #[must_use]
    pub fn step(self, current: f64, target: f64) -> f64 {
        current + (target - current) * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn delay_clamps_to_valid_range() {
        assert_eq!(DelayMs::new(0).value(), delay_bounds::MIN_MS);
        assert_eq!(DelayMs::new(u64::MAX).value(), delay_bounds::MAX_MS);
        assert_eq!(DelayMs::new(5000).value(), 5000);
    }

    #[test]
    fn delay_converts_to_duration() {
        assert_eq!(DelayMs::new(300).as_duration(), Duration::from_millis(300));
    }

    #[test]
    fn smoothing_clamps_and_rejects_nan() {
        assert_abs_diff_eq!(Smoothing::new(0.0).value(), smoothing_bounds::MIN);
        assert_abs_diff_eq!(Smoothing::new(3.0).value(), smoothing_bounds::MAX);
        assert_abs_diff_eq!(Smoothing::new(f64::NAN).value(), smoothing_bounds::MAX);
    }

    #[test]
    fn smoothing_step_moves_a_fraction_of_the_gap() {
        let smoothing = Smoothing::new(0.15);
        assert_abs_diff_eq!(smoothing.step(0.0, 100.0), 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(smoothing.step(100.0, 100.0), 100.0);
    }

    #[test]
    fn full_smoothing_jumps_to_target() {
        assert_abs_diff_eq!(Smoothing::new(1.0).step(12.0, 40.0), 40.0);
    }
}
