//! Scroll-position progress — raw ratio plus critically-damped smoothing.
//!
//! The raw fraction is `offset / max_scroll`, clamped to [0, 1] and defined
//! as 0 when the page fits the viewport. The displayed value is a spring
//! eased toward the raw target each tick, so the progress bar lags and
//! settles instead of jumping.

/// Spring stiffness. Damping is derived as `2 * sqrt(stiffness)`, the
/// critical value: the spring settles without oscillating.
const STIFFNESS: f64 = 170.0;

/// Below these thresholds the spring snaps to its target.
const SETTLE_DELTA: f64 = 1e-4;
const SETTLE_VELOCITY: f64 = 1e-3;

/// Largest integration step the spring is advanced by. The discrete
/// integrator is only stable well below `2 / damping` (~77ms here), and the
/// event loop feeds wall-clock frame times that a stalled terminal can
/// stretch arbitrarily, so longer frames are split into substeps.
const MAX_STEP: f64 = 0.05;

/// Raw progress fraction for a scroll offset.
pub fn raw_progress(offset: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (offset / max_scroll).clamp(0.0, 1.0)
}

/// Tracks the scroll offset and exposes a smoothed progress fraction.
#[derive(Debug, Clone)]
pub struct ScrollProgressTracker {
    offset: f64,
    max_scroll: f64,
    target: f64,
    value: f64,
    velocity: f64,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_scroll: 0.0,
            target: 0.0,
            value: 0.0,
            velocity: 0.0,
        }
    }

    /// Resample the raw target from a new scroll offset.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
        self.target = raw_progress(self.offset, self.max_scroll);
    }

    /// Resize path: total scrollable height changed, recompute the target
    /// before the next sample.
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.target = raw_progress(self.offset, self.max_scroll);
    }

    /// Advance the spring by one frame's elapsed time. Frames longer than
    /// [`MAX_STEP`] are integrated in substeps to keep the spring stable.
    pub fn tick(&mut self, dt: f64) {
        let mut remaining = dt;
        while remaining > 0.0 {
            self.step(remaining.min(MAX_STEP));
            remaining -= MAX_STEP;
        }
    }

    /// One semi-implicit Euler step; `dt` must not exceed [`MAX_STEP`].
    fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let damping = 2.0 * STIFFNESS.sqrt();
        let accel = STIFFNESS * (self.target - self.value) - damping * self.velocity;
        self.velocity += accel * dt;
        self.value = (self.value + self.velocity * dt).clamp(0.0, 1.0);
        if (self.value - self.target).abs() < SETTLE_DELTA
            && self.velocity.abs() < SETTLE_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Raw (unsmoothed) progress fraction.
    pub fn raw(&self) -> f64 {
        self.target
    }

    /// Smoothed display fraction, always in [0, 1].
    pub fn smoothed(&self) -> f64 {
        self.value
    }
}

impl Default for ScrollProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_max_scroll_is_zero_progress() {
        assert_eq!(raw_progress(0.0, 0.0), 0.0);
        assert_eq!(raw_progress(500.0, 0.0), 0.0);
    }

    #[test]
    fn raw_progress_clamps() {
        assert_eq!(raw_progress(150.0, 100.0), 1.0);
        assert_eq!(raw_progress(-5.0, 100.0), 0.0);
        assert_eq!(raw_progress(50.0, 100.0), 0.5);
    }

    #[test]
    fn resize_recomputes_target() {
        let mut t = ScrollProgressTracker::new();
        t.set_max_scroll(100.0);
        t.set_offset(50.0);
        assert_eq!(t.raw(), 0.5);
        t.set_max_scroll(200.0);
        assert_eq!(t.raw(), 0.25);
        t.set_max_scroll(0.0);
        assert_eq!(t.raw(), 0.0);
    }

    #[test]
    fn smoothed_lags_behind_a_step() {
        let mut t = ScrollProgressTracker::new();
        t.set_max_scroll(100.0);
        t.set_offset(100.0);
        assert_eq!(t.smoothed(), 0.0);
        t.tick(0.05);
        assert!(t.smoothed() > 0.0);
        assert!(t.smoothed() < 1.0);
    }

    #[test]
    fn slow_frames_do_not_destabilize_the_spring() {
        let mut t = ScrollProgressTracker::new();
        t.set_max_scroll(100.0);
        t.set_offset(50.0);
        let mut prev = t.smoothed();
        for _ in 0..200 {
            t.tick(0.12); // well past the integrator's raw stability limit
            assert!(t.smoothed() >= prev - 1e-9);
            assert!(t.smoothed() <= t.raw() + 0.02);
            prev = t.smoothed();
        }
        assert!((t.smoothed() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn resume_from_suspend_settles_in_one_tick() {
        let mut t = ScrollProgressTracker::new();
        t.set_max_scroll(100.0);
        t.set_offset(80.0);
        t.tick(30.0); // e.g. the process was stopped for half a minute
        assert!((t.smoothed() - 0.8).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn raw_progress_bounded(offset in 0.0..10_000.0f64, max in 0.0..10_000.0f64) {
            let p = raw_progress(offset, max);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn step_input_settles_without_overshoot(target in 0.05..1.0f64, dt in 0.01..0.5f64) {
            let mut t = ScrollProgressTracker::new();
            t.set_max_scroll(1000.0);
            t.set_offset(target * 1000.0);
            let mut prev = t.smoothed();
            for _ in 0..400 {
                t.tick(dt);
                // Monotonic approach, bounded overshoot.
                prop_assert!(t.smoothed() >= prev - 1e-9);
                prop_assert!(t.smoothed() <= t.raw() + 0.02);
                prev = t.smoothed();
            }
            prop_assert!((t.smoothed() - t.raw()).abs() < 1e-3);
        }
    }
}
