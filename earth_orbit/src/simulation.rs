//! The stepped Sun-Earth-Moon simulation state

use crate::bodies::{moon_initial_state, CelestialBody};
use crate::clock::SimulationClock;
use crate::constants::{
    EARTH_ECCENTRICITY, EARTH_MASS, EARTH_PERIOD, EARTH_SEMI_MAJOR_AXIS, MOON_ECCENTRICITY,
    MOON_MASS, MOON_SEMI_MAJOR_AXIS, SUN_MASS,
};
use crate::integrator;
use crate::kepler::EllipticalOrbit;

/// All mutable simulation state: the three bodies plus the clock.
///
/// Earth's state is re-derived analytically from elapsed time on every step
/// and never drifts. The Moon's Earth-relative state is integrated
/// numerically and carries the only accumulated error in the system. The Sun
/// never moves.
pub struct Simulation {
    pub sun: CelestialBody,
    pub earth: CelestialBody,
    pub moon: CelestialBody,
    pub clock: SimulationClock,
    earth_orbit: EllipticalOrbit,
}

impl Simulation {
    pub fn new() -> Self {
        let sun = CelestialBody::new("Sun", SUN_MASS);
        let earth = CelestialBody::new("Earth", EARTH_MASS)
            .with_orbit(EARTH_SEMI_MAJOR_AXIS, EARTH_ECCENTRICITY);
        let mut moon =
            CelestialBody::new("Moon", MOON_MASS).with_orbit(MOON_SEMI_MAJOR_AXIS, MOON_ECCENTRICITY);

        let (position, velocity) = moon_initial_state();
        moon.position = position;
        moon.velocity = velocity;

        log::info!(
            "Moon initial state: {:.0} km from Earth at {:.3} km/s",
            position.length() / 1000.0,
            velocity.length() / 1000.0
        );

        let earth_orbit = EllipticalOrbit {
            semi_major_axis: EARTH_SEMI_MAJOR_AXIS,
            eccentricity: EARTH_ECCENTRICITY,
            period: EARTH_PERIOD,
        };

        let mut sim = Self {
            sun,
            earth,
            moon,
            clock: SimulationClock::new(),
            earth_orbit,
        };
        // Put Earth at its t = 0 analytic position so the first frame sees a
        // consistent configuration
        sim.sync_earth();
        sim
    }

    /// Advance one frame. A single clock read drives both propagators, so
    /// Earth and Moon are always advanced with the same t/dt pair.
    ///
    /// Pausing is the host not calling this; `speed_multiplier` must be
    /// finite and non-negative (zero freezes both bodies).
    pub fn step(&mut self, speed_multiplier: f64) {
        let dt = self.clock.advance(speed_multiplier);
        self.sync_earth();

        let (position, velocity) =
            integrator::step(self.moon.position, self.moon.velocity, self.earth.mass, dt);
        self.moon.position = position;
        self.moon.velocity = velocity;
    }

    fn sync_earth(&mut self) {
        let (position, velocity) = self
            .earth_orbit
            .position_and_velocity(self.sun.mass, self.clock.elapsed());
        self.earth.position = position;
        self.earth.velocity = velocity;
    }

    /// Earth-Sun distance in meters.
    pub fn earth_sun_distance(&self) -> f64 {
        self.earth.position.length()
    }

    /// Earth-Sun distance in millions of kilometers, as shown in the stats
    /// readout.
    pub fn earth_sun_distance_mkm(&self) -> f64 {
        self.earth_sun_distance() / 1e9
    }

    /// Earth's orbital speed in m/s.
    pub fn earth_speed(&self) -> f64 {
        self.earth.velocity.length()
    }

    /// Earth's orbital speed in km/s.
    pub fn earth_speed_kms(&self) -> f64 {
        self.earth_speed() / 1000.0
    }

    /// Simulated day of the year, 1-based.
    pub fn day_of_year(&self) -> u32 {
        self.clock.day_of_year()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
