//! Semi-implicit Euler integration of a two-body gravitational interaction
//!
//! Velocity is updated from the current acceleration first, and the position
//! then moves with the already-updated velocity. This ordering keeps the
//! orbit from secularly decaying or expanding the way plain Euler does; the
//! remaining energy error oscillates within a band instead.

use glam::DVec3;

use crate::constants::G;

/// Below this separation the step is skipped entirely, guarding the
/// inverse-square singularity at zero distance.
pub const MIN_DISTANCE: f64 = 1e-10;

/// Advance a satellite's state relative to its central body by `dt` seconds.
///
/// `position` and `velocity` are relative to the central body; the returned
/// pair replaces them. A degenerate separation below [`MIN_DISTANCE`] returns
/// the input unchanged.
pub fn step(
    position: DVec3,
    velocity: DVec3,
    central_mass: f64,
    dt: f64,
) -> (DVec3, DVec3) {
    let distance = position.length();
    if distance < MIN_DISTANCE {
        return (position, velocity);
    }

    // a = GM/r², directed back toward the central body
    let accel_mag = G * central_mass / (distance * distance);
    let accel = -accel_mag * position / distance;

    let new_velocity = velocity + accel * dt;
    let new_position = position + new_velocity * dt;

    (new_position, new_velocity)
}

/// Specific orbital energy v²/2 - GM/r in J/kg, a conserved quantity of the
/// exact two-body problem. Used to watch integrator drift.
pub fn specific_orbital_energy(position: DVec3, velocity: DVec3, central_mass: f64) -> f64 {
    velocity.length_squared() / 2.0 - G * central_mass / position.length()
}
