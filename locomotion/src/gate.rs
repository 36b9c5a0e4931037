//! Dependency gate.
//!
//! Hides externally owned objects (teleport affordances, menus) while the player is
//! walking and shows them again a fixed delay after the activation button is
//! released. Reactivation timers are independent: a second release before the first
//! timer fires schedules a second timer, and both fire. Timers cannot be cancelled.

use std::time::Duration;

use crate::scene::DependencySet;

/// Pending reactivation timers, advanced by the frame clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DependencyGate {
    /// Remaining seconds per scheduled timer.
    pending: Vec<f32>,
}

impl DependencyGate {
    /// Deactivate every dependency right away.
    pub fn disable(&self, dependencies: &mut dyn DependencySet) {
        dependencies.set_active(false);
    }

    /// Start a reactivation timer of `delay`.
    pub fn schedule_enable(&mut self, delay: Duration) {
        self.pending.push(delay.as_secs_f32());
        log::debug!(
            "dependency reactivation scheduled in {:?} ({} pending)",
            delay,
            self.pending.len()
        );
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Advance all timers by `dt` seconds.
    ///
    /// Every timer that reaches zero fires once and activates the dependencies when a
    /// set is present. Returns the number of timers that fired.
    pub fn advance(&mut self, dt: f32, dependencies: Option<&mut dyn DependencySet>) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        for remaining in self.pending.iter_mut() {
            *remaining -= dt;
        }
        let before = self.pending.len();
        // Small tolerance so a sum of frame deltas that lands on the delay fires on time.
        self.pending.retain(|remaining| *remaining > TIMER_EPS);
        let fired = before - self.pending.len();

        if fired > 0 {
            log::debug!("{fired} dependency reactivation timer(s) fired");
            if let Some(dependencies) = dependencies {
                for _ in 0..fired {
                    dependencies.set_active(true);
                }
            }
        }
        fired
    }
}

const TIMER_EPS: f32 = 1.0e-5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Toggle;

    const DELAY: Duration = Duration::from_millis(700);

    #[test]
    fn disable_deactivates_everything() {
        let gate = DependencyGate::default();
        let mut deps = vec![Toggle::active(), Toggle::active()];

        gate.disable(&mut deps);
        assert!(deps.iter().all(|d| !d.active));
    }

    #[test]
    fn timer_fires_after_exact_delay() {
        let mut gate = DependencyGate::default();
        let mut deps = vec![Toggle::inactive(), Toggle::inactive()];
        gate.schedule_enable(DELAY);

        assert_eq!(gate.advance(0.5, Some(&mut deps)), 0);
        assert!(deps.iter().all(|d| !d.active));

        assert_eq!(gate.advance(0.2, Some(&mut deps)), 1);
        assert!(deps.iter().all(|d| d.active));
        assert_eq!(gate.pending(), 0);
    }

    #[test]
    fn timer_fires_with_many_small_frames() {
        let mut gate = DependencyGate::default();
        let mut deps = vec![Toggle::inactive()];
        gate.schedule_enable(DELAY);

        // 70 frames of 10ms; float drift must not push the fire past 0.7s.
        let mut fired_at = None;
        for frame in 1..=80 {
            if gate.advance(0.01, Some(&mut deps)) > 0 {
                fired_at = Some(frame);
                break;
            }
        }
        assert_eq!(fired_at, Some(70));
    }

    #[test]
    fn overlapping_timers_each_fire() {
        let mut gate = DependencyGate::default();
        let mut deps = vec![Toggle::inactive()];

        gate.schedule_enable(DELAY);
        gate.advance(0.3, Some(&mut deps));
        gate.schedule_enable(DELAY);
        assert_eq!(gate.pending(), 2);

        // First timer fires at 0.7s, re-enabling while the player may be walking again.
        assert_eq!(gate.advance(0.4, Some(&mut deps)), 1);
        assert!(deps[0].active);

        deps[0].active = false;
        assert_eq!(gate.advance(0.3, Some(&mut deps)), 1);
        assert!(deps[0].active);
        assert_eq!(deps[0].activations, 2);
    }

    #[test]
    fn timers_without_dependencies_still_drain() {
        let mut gate = DependencyGate::default();
        gate.schedule_enable(DELAY);

        assert_eq!(gate.advance(1.0, None), 1);
        assert_eq!(gate.pending(), 0);
    }
}
