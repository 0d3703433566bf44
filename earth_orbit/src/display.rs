//! Physical-to-display unit conversion
//!
//! The simulation core works in SI meters; a renderer works in scene units.
//! This adapter owns that boundary so unit conversions never leak into the
//! physics step.

use glam::{DVec3, Vec3};

use crate::constants::AU;

/// Scale distances so 1 AU = 1 unit before display scaling
pub const DISTANCE_SCALE: f64 = 1.0 / AU;

/// Scene units per AU (Earth's orbit radius on screen)
pub const DISPLAY_SCALE: f64 = 150.0;

/// The Moon's orbit is drawn 20x larger than physical scale; at true scale
/// it would be invisible next to Earth's orbit. Display-only, never fed back
/// into the physics.
pub const MOON_ORBIT_EXAGGERATION: f64 = 20.0;

/// Converts physical positions in meters to renderer scene coordinates.
#[derive(Debug, Clone, Copy)]
pub struct DisplayAdapter {
    pub distance_scale: f64,
    pub display_scale: f64,
    pub moon_orbit_exaggeration: f64,
}

impl DisplayAdapter {
    pub fn new() -> Self {
        Self {
            distance_scale: DISTANCE_SCALE,
            display_scale: DISPLAY_SCALE,
            moon_orbit_exaggeration: MOON_ORBIT_EXAGGERATION,
        }
    }

    fn to_scene(&self, meters: DVec3) -> Vec3 {
        (meters * self.distance_scale * self.display_scale).as_vec3()
    }

    /// The Sun sits at the scene origin.
    pub fn sun_position(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Earth's scene position from its heliocentric position in meters.
    pub fn earth_position(&self, earth_meters: DVec3) -> Vec3 {
        self.to_scene(earth_meters)
    }

    /// The Moon's absolute scene position: Earth plus the exaggerated
    /// Earth-relative offset.
    pub fn moon_position(&self, earth_meters: DVec3, moon_relative_meters: DVec3) -> Vec3 {
        self.to_scene(earth_meters + moon_relative_meters * self.moon_orbit_exaggeration)
    }
}

impl Default for DisplayAdapter {
    fn default() -> Self {
        Self::new()
    }
}
