//! Analytic elliptical orbit propagation via Kepler's equation
//!
//! Position and velocity are pure functions of elapsed simulation time, so a
//! body propagated here never accumulates integration error. Only closed
//! orbits (0 <= e < 1) are supported.

use glam::DVec3;
use std::f64::consts::TAU;

use crate::constants::G;

/// Newton-Raphson iteration count for the Kepler solve. A fixed count keeps
/// the output reproducible from run to run; five iterations leave a residual
/// far below 1e-6 at Earth's eccentricity.
pub const KEPLER_ITERATIONS: u32 = 5;

/// A closed elliptical orbit around a central mass.
#[derive(Debug, Clone, Copy)]
pub struct EllipticalOrbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Orbital period in seconds, supplied directly so a published value can
    /// be used instead of one derived from Kepler's third law.
    pub period: f64,
}

impl EllipticalOrbit {
    /// Closest approach to the central body, a(1 - e).
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the central body, a(1 + e).
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Mean anomaly at time `t`, wrapped to [0, 2π).
    pub fn mean_anomaly(&self, t: f64) -> f64 {
        (TAU * t / self.period).rem_euclid(TAU)
    }

    /// Position and velocity at time `t`, in the orbital plane (z = 0).
    ///
    /// Deterministic: two calls with identical arguments yield identical
    /// output. Never reads or writes integrator state.
    pub fn position_and_velocity(&self, central_mass: f64, t: f64) -> (DVec3, DVec3) {
        self.position_and_velocity_iter(central_mass, t, KEPLER_ITERATIONS)
    }

    /// Same as [`position_and_velocity`](Self::position_and_velocity) with
    /// an explicit Kepler iteration count, for callers wanting a stricter
    /// (or cheaper) solve.
    pub fn position_and_velocity_iter(
        &self,
        central_mass: f64,
        t: f64,
        iterations: u32,
    ) -> (DVec3, DVec3) {
        let a = self.semi_major_axis;
        let e = self.eccentricity;

        let mean = self.mean_anomaly(t);
        let ecc_anomaly = solve_kepler(mean, e, iterations);

        // True anomaly and radial distance from the eccentric anomaly
        let (sin_e, cos_e) = ecc_anomaly.sin_cos();
        let nu = ((1.0 - e * e).sqrt() * sin_e).atan2(cos_e - e);
        let r = a * (1.0 - e * cos_e);

        let (sin_nu, cos_nu) = nu.sin_cos();
        let position = DVec3::new(r * cos_nu, r * sin_nu, 0.0);

        // Velocity from the specific angular momentum h = sqrt(G M a (1 - e²))
        let h = (G * central_mass * a * (1.0 - e * e)).sqrt();
        let velocity = DVec3::new(-(h / r) * sin_nu, (h / r) * (e + cos_nu), 0.0);

        (position, velocity)
    }
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly E by
/// Newton-Raphson, seeded with E = M.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, iterations: u32) -> f64 {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..iterations {
        let f = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let fp = 1.0 - eccentricity * ecc_anomaly.cos();
        ecc_anomaly -= f / fp;
    }
    ecc_anomaly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        EARTH_ECCENTRICITY, EARTH_PERIOD, EARTH_SEMI_MAJOR_AXIS, SUN_MASS,
    };

    fn earth_orbit() -> EllipticalOrbit {
        EllipticalOrbit {
            semi_major_axis: EARTH_SEMI_MAJOR_AXIS,
            eccentricity: EARTH_ECCENTRICITY,
            period: EARTH_PERIOD,
        }
    }

    #[test]
    fn test_propagation_is_deterministic() {
        let orbit = earth_orbit();
        for i in 0..20 {
            let t = i as f64 * 1.7e6;
            let (p1, v1) = orbit.position_and_velocity(SUN_MASS, t);
            let (p2, v2) = orbit.position_and_velocity(SUN_MASS, t);
            assert_eq!(p1, p2, "position differs at t = {}", t);
            assert_eq!(v1, v2, "velocity differs at t = {}", t);
        }
    }

    #[test]
    fn test_kepler_residual_below_tolerance() {
        let e = EARTH_ECCENTRICITY;
        for i in 0..1000 {
            let m = i as f64 / 1000.0 * TAU;
            let ecc = solve_kepler(m, e, KEPLER_ITERATIONS);
            let residual = (ecc - e * ecc.sin() - m).abs();
            assert!(residual < 1e-6, "residual {} at M = {}", residual, m);
        }
    }

    #[test]
    fn test_radius_stays_within_apsidal_bounds() {
        let orbit = earth_orbit();
        for i in 0..500 {
            let t = i as f64 / 500.0 * EARTH_PERIOD;
            let (position, _) = orbit.position_and_velocity(SUN_MASS, t);
            let r = position.length();
            assert!(
                r >= orbit.periapsis() - 1.0 && r <= orbit.apoapsis() + 1.0,
                "r = {} outside [{}, {}] at t = {}",
                r,
                orbit.periapsis(),
                orbit.apoapsis(),
                t
            );
        }
    }

    #[test]
    fn test_position_repeats_after_one_period() {
        let orbit = earth_orbit();
        for t in [0.0, 3.3e6, 1.1e7] {
            let (p0, _) = orbit.position_and_velocity(SUN_MASS, t);
            let (p1, _) = orbit.position_and_velocity(SUN_MASS, t + EARTH_PERIOD);
            assert!(
                (p1 - p0).length() < 1.0e4,
                "orbit does not close at t = {}: drift {} m",
                t,
                (p1 - p0).length()
            );
        }
    }

    #[test]
    fn test_earth_speed_near_mean_orbital_speed() {
        // Earth's orbital speed varies around ~29.8 km/s
        let (_, velocity) = earth_orbit().position_and_velocity(SUN_MASS, 1.0e7);
        let speed = velocity.length();
        assert!(
            speed > 28_000.0 && speed < 31_000.0,
            "implausible orbital speed {} m/s",
            speed
        );
    }

    #[test]
    fn test_orbit_lies_in_xy_plane() {
        let orbit = earth_orbit();
        for i in 0..50 {
            let t = i as f64 * 6.3e5;
            let (position, velocity) = orbit.position_and_velocity(SUN_MASS, t);
            assert_eq!(position.z, 0.0);
            assert_eq!(velocity.z, 0.0);
        }
    }
}
