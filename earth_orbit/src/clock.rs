//! Simulation clock driving both propagators

use crate::constants::{SECONDS_PER_DAY, TIME_STEP};

/// Accumulated simulated time, advanced once per rendered frame.
///
/// The clock is created once at startup and never reset. Pausing is the
/// host simply not calling [`advance`](SimulationClock::advance) for a
/// frame, which freezes Earth's analytic position consistently with the
/// Moon's frozen integrator state.
#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    elapsed: f64,
    base_step: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            base_step: TIME_STEP,
        }
    }

    /// Add `base_step * speed_multiplier` simulated seconds and return the
    /// delta applied this step.
    ///
    /// `speed_multiplier` must be finite and non-negative; UI input is
    /// clamped by the caller before it reaches the clock.
    pub fn advance(&mut self, speed_multiplier: f64) -> f64 {
        let dt = self.base_step * speed_multiplier;
        self.elapsed += dt;
        dt
    }

    /// Total simulated seconds since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Simulated day of the year, starting at 1 and wrapping after 365.25
    /// days.
    pub fn day_of_year(&self) -> u32 {
        ((self.elapsed / SECONDS_PER_DAY) % 365.25).floor() as u32 + 1
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_scaled_steps() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(1.0), 3600.0);
        assert_eq!(clock.advance(2.0), 7200.0);
        assert_eq!(clock.elapsed(), 10800.0);
    }

    #[test]
    fn test_zero_speed_freezes_time() {
        let mut clock = SimulationClock::new();
        clock.advance(1.0);
        let before = clock.elapsed();
        for _ in 0..100 {
            assert_eq!(clock.advance(0.0), 0.0);
        }
        assert_eq!(clock.elapsed(), before);
    }

    #[test]
    fn test_day_of_year_starts_at_one_and_wraps() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.day_of_year(), 1);

        // A day and a half in
        for _ in 0..36 {
            clock.advance(1.0);
        }
        assert_eq!(clock.day_of_year(), 2);

        // One full year later the count wraps back around
        let mut clock = SimulationClock::new();
        for _ in 0..(366 * 24) {
            clock.advance(1.0);
        }
        assert_eq!(clock.day_of_year(), 1);
    }
}
