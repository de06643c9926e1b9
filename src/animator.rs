//! Progress animation state machine.
//!
//! Owns the displayed progress value and drives eased transitions toward a
//! target on a fixed 16 ms tick. The animator is headless: the host calls
//! [`ProgressAnimator::tick`] once per frame while
//! [`ProgressAnimator::is_animating`] is true (in the demo this is an iced
//! subscription that exists only while a transition is in flight).

use crate::easing::{Easing, Interpolator};

/// Nominal frame period assumed when converting a duration into a per-tick
/// step size (~60 Hz).
pub const TICK_INTERVAL_MS: u64 = 16;

/// Default transition duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Animating {
        /// Displayed progress when the transition started
        start: f32,
        /// Signed distance to the target
        delta: f32,
        /// Normalized elapsed time in [0, 1]
        elapsed: f32,
    },
}

/// Tick-driven eased transition between progress values.
///
/// Retargeting while a transition is running restarts it from the currently
/// displayed value, so superseded transitions never contribute further
/// frames.
pub struct ProgressAnimator {
    progress: f32,
    enabled: bool,
    duration_ms: u64,
    easing: Box<dyn Interpolator>,
    phase: Phase,
}

impl ProgressAnimator {
    /// Create an idle animator displaying `initial_progress` (clamped)
    pub fn new(initial_progress: f32) -> Self {
        Self {
            progress: initial_progress.clamp(0.0, 1.0),
            enabled: false,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Box::new(Easing::default()),
            phase: Phase::Idle,
        }
    }

    /// Currently displayed progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Last requested progress; equals [`Self::progress`] when idle
    pub fn target(&self) -> f32 {
        match self.phase {
            Phase::Idle => self.progress,
            Phase::Animating { start, delta, .. } => (start + delta).clamp(0.0, 1.0),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn set_interpolator(&mut self, easing: impl Interpolator + 'static) {
        self.easing = Box::new(easing);
    }

    pub fn interpolator(&self) -> &dyn Interpolator {
        self.easing.as_ref()
    }

    /// Request a new target progress (clamped to [0, 1]).
    ///
    /// With animation disabled this stores the value immediately. With
    /// animation enabled it starts a transition from the currently displayed
    /// value, superseding any transition already running.
    pub fn set_progress(&mut self, target: f32) {
        let target = target.clamp(0.0, 1.0);

        if self.enabled && target != self.progress {
            tracing::debug!(from = self.progress, to = target, "starting progress transition");
            self.phase = Phase::Animating {
                start: self.progress,
                delta: target - self.progress,
                elapsed: 0.0,
            };
        } else {
            self.progress = target;
            self.phase = Phase::Idle;
        }
    }

    /// Whether a transition is in flight (the host should keep ticking)
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Advance one animation frame.
    ///
    /// Returns `true` while further ticks are needed. A zero duration makes
    /// the step size 1.0, so the first tick lands on the target.
    pub fn tick(&mut self) -> bool {
        let Phase::Animating { start, delta, elapsed } = self.phase else {
            return false;
        };

        let step = if self.duration_ms == 0 {
            1.0
        } else {
            TICK_INTERVAL_MS as f32 / self.duration_ms as f32
        };

        let elapsed = (elapsed + step).min(1.0);
        self.progress = (start + self.easing.map(elapsed) * delta).clamp(0.0, 1.0);

        if elapsed >= 1.0 {
            tracing::debug!(progress = self.progress, "progress transition finished");
            self.phase = Phase::Idle;
            false
        } else {
            self.phase = Phase::Animating { start, delta, elapsed };
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(animator: &mut ProgressAnimator) -> usize {
        let mut ticks = 0;
        while animator.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "animation never finished");
        }
        ticks + 1
    }

    #[test]
    fn disabled_set_is_immediate_and_clamped() {
        let mut animator = ProgressAnimator::new(0.0);

        animator.set_progress(0.5);
        assert_eq!(animator.progress(), 0.5);
        assert!(!animator.is_animating());

        animator.set_progress(2.0);
        assert_eq!(animator.progress(), 1.0);

        animator.set_progress(-0.5);
        assert_eq!(animator.progress(), 0.0);
    }

    #[test]
    fn consecutive_sets_are_last_write_wins() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_progress(0.3);
        animator.set_progress(0.8);
        assert_eq!(animator.progress(), 0.8);
    }

    #[test]
    fn transition_lands_exactly_on_target() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_duration_ms(250);

        animator.set_progress(1.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 1.0);

        drain(&mut animator);
        assert_eq!(animator.progress(), 1.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn transition_from_nonzero_start_lands_on_target() {
        let mut animator = ProgressAnimator::new(0.25);
        animator.set_enabled(true);
        animator.set_interpolator(Easing::EaseInOut);

        animator.set_progress(0.75);
        drain(&mut animator);
        assert_eq!(animator.progress(), 0.75);
    }

    #[test]
    fn zero_duration_jumps_in_a_single_tick() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_duration_ms(0);

        animator.set_progress(1.0);
        assert!(animator.is_animating());

        let more = animator.tick();
        assert_eq!(animator.progress(), 1.0);
        assert!(!more);
        assert!(!animator.tick());
    }

    #[test]
    fn step_size_follows_duration() {
        // 160 ms at a 16 ms cadence is ten steps; with linear easing each
        // tick advances displayed progress by a tenth of the delta.
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_duration_ms(160);
        animator.set_interpolator(Easing::Linear);

        animator.set_progress(1.0);
        animator.tick();
        assert!((animator.progress() - 0.1).abs() < 1e-5);

        let ticks = 1 + drain(&mut animator);
        assert_eq!(ticks, 10);
    }

    #[test]
    fn retarget_restarts_from_displayed_progress() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_duration_ms(160);
        animator.set_interpolator(Easing::Linear);

        // Head toward 0.5; after six ticks the displayed value is 0.3.
        animator.set_progress(0.5);
        for _ in 0..6 {
            animator.tick();
        }
        assert!((animator.progress() - 0.3).abs() < 1e-5);

        // Retarget to 1.0: the new transition starts at 0.3 with delta 0.7.
        animator.set_progress(1.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 1.0);

        animator.tick();
        assert!((animator.progress() - 0.37).abs() < 1e-5);

        drain(&mut animator);
        assert_eq!(animator.progress(), 1.0);
    }

    #[test]
    fn retarget_to_displayed_value_cancels_transition() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_interpolator(Easing::Linear);

        animator.set_progress(1.0);
        assert!(animator.is_animating());

        let displayed = animator.progress();
        animator.set_progress(displayed);
        assert!(!animator.is_animating());
        assert_eq!(animator.progress(), displayed);
    }

    #[test]
    fn displayed_progress_stays_clamped_under_overshoot() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_interpolator(Easing::Overshoot);

        animator.set_progress(1.0);
        loop {
            let more = animator.tick();
            assert!(animator.progress() >= 0.0 && animator.progress() <= 1.0);
            if !more {
                break;
            }
        }
        assert_eq!(animator.progress(), 1.0);
    }

    #[test]
    fn custom_closure_easing_is_accepted() {
        let mut animator = ProgressAnimator::new(0.0);
        animator.set_enabled(true);
        animator.set_duration_ms(32);
        animator.set_interpolator(|t: f32| t);

        animator.set_progress(1.0);
        drain(&mut animator);
        assert_eq!(animator.progress(), 1.0);
    }
}
