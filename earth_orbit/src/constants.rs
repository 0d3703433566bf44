//! Physical constants and reference orbital elements, all in SI units

/// Gravitational constant in m³/(kg·s²)
pub const G: f64 = 6.674e-11;

/// Astronomical Unit in meters
pub const AU: f64 = 1.496e11;

/// Average Earth-Moon distance in meters
pub const LUNAR_DISTANCE: f64 = 3.844e8;

/// Mass of the Sun in kg
pub const SUN_MASS: f64 = 1.989e30;

/// Mass of Earth in kg
pub const EARTH_MASS: f64 = 5.972e24;

/// Mass of the Moon in kg
pub const MOON_MASS: f64 = 7.342e22;

/// Earth's heliocentric ellipse
pub const EARTH_SEMI_MAJOR_AXIS: f64 = AU;
pub const EARTH_ECCENTRICITY: f64 = 0.0167;

/// Moon's Earth-relative ellipse (used to derive initial conditions only)
pub const MOON_SEMI_MAJOR_AXIS: f64 = LUNAR_DISTANCE;
pub const MOON_ECCENTRICITY: f64 = 0.0549;

pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Earth's orbital period in seconds. Held as a published constant rather
/// than derived from Kepler's third law.
pub const EARTH_PERIOD: f64 = 365.25 * SECONDS_PER_DAY;

/// Moon's orbital period in seconds
pub const MOON_PERIOD: f64 = 27.3 * SECONDS_PER_DAY;

/// Simulated seconds applied per frame at speed multiplier 1.0 (one hour)
pub const TIME_STEP: f64 = 3600.0;
