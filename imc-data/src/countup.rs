//! Ease-out interpolation for animated KPI values.
//!
//! This is the pure half of the count-up animation: given a start, a
//! target, and a duration, [`CountUp::sample`] maps elapsed time onto the
//! displayed value. The frame loop, cancellation, and signal writes live
//! in `imc-chart-ui::hooks`.

/// Time-based ease-out-cubic interpolation from a start value to a target.
///
/// `sample(t)` is monotonic in `t` and snaps exactly to the target at or
/// after the duration, so the final displayed value never carries floating
/// point residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    start: f64,
    target: f64,
    duration_ms: f64,
}

impl CountUp {
    /// A zero or negative duration, or equal endpoints, produce an already
    /// finished animation whose samples all return the target — this is
    /// what skips the zero-duration edge case.
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Displayed value after `elapsed_ms` of animation time.
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.target;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.start + (self.target - self.start) * eased
    }

    /// True once the animation has nothing further to display.
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || self.start == self.target || elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_start_and_ends_exactly_on_target() {
        let anim = CountUp::new(0.0, 1000.0, 1500.0);
        assert!(anim.sample(0.0).abs() < 1e-9);
        assert_eq!(anim.sample(1500.0), 1000.0);
        assert_eq!(anim.sample(9999.0), 1000.0);
    }

    #[test]
    fn samples_are_monotonically_non_decreasing() {
        let anim = CountUp::new(0.0, 1000.0, 1500.0);
        let mut last = f64::MIN;
        for step in 0..=150 {
            let value = anim.sample(step as f64 * 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        let anim = CountUp::new(0.0, 1000.0, 1000.0);
        // Half the duration covers well over half the distance.
        assert!(anim.sample(500.0) > 800.0);
    }

    #[test]
    fn counts_down_from_a_higher_previous_value() {
        let anim = CountUp::new(500.0, 100.0, 1000.0);
        assert_eq!(anim.sample(0.0), 500.0);
        assert!(anim.sample(500.0) < 500.0);
        assert_eq!(anim.sample(1000.0), 100.0);
    }

    #[test]
    fn equal_endpoints_are_immediately_done() {
        let anim = CountUp::new(42.0, 42.0, 1500.0);
        assert!(anim.is_done(0.0));
        assert_eq!(anim.sample(0.0), 42.0);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let anim = CountUp::new(0.0, 10.0, 0.0);
        assert!(anim.is_done(0.0));
        assert_eq!(anim.sample(0.0), 10.0);
    }
}
