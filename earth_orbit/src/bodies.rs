//! Celestial body records for the Sun-Earth-Moon configuration

use glam::DVec3;

use crate::constants::{EARTH_MASS, G, MOON_SEMI_MAJOR_AXIS};

/// A celestial body with mass and kinematic state in SI units.
///
/// Frame conventions: the Sun is pinned at the origin, Earth's state is
/// heliocentric absolute, and the Moon's state is relative to Earth.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    /// Mass in kg, immutable after creation
    pub mass: f64,
    /// Position in meters
    pub position: DVec3,
    /// Velocity in m/s
    pub velocity: DVec3,
    /// Reference ellipse semi-major axis in meters (zero for the Sun)
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl CelestialBody {
    pub fn new(name: &str, mass: f64) -> Self {
        Self {
            name: name.to_string(),
            mass,
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            semi_major_axis: 0.0,
            eccentricity: 0.0,
        }
    }

    /// Attach the body's reference ellipse.
    pub fn with_orbit(mut self, semi_major_axis: f64, eccentricity: f64) -> Self {
        self.semi_major_axis = semi_major_axis;
        self.eccentricity = eccentricity;
        self
    }
}

/// Derive the Moon's starting Earth-relative state. Runs exactly once, at
/// startup; stepping never re-invokes it.
///
/// The Moon starts at 0.8x its semi-major axis, closer than the real apogee
/// so the orbit reads well on screen, with its velocity perpendicular to the
/// position at the vis-viva speed v = sqrt(GM(2/r - 1/a)).
pub fn moon_initial_state() -> (DVec3, DVec3) {
    let r = MOON_SEMI_MAJOR_AXIS * 0.8;
    let speed = (G * EARTH_MASS * (2.0 / r - 1.0 / MOON_SEMI_MAJOR_AXIS)).sqrt();
    (DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, speed, 0.0))
}
