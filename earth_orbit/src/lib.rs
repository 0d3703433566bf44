//! Sun-Earth-Moon orbital simulation
//!
//! A simplified three-body configuration: the Sun fixed at the origin, Earth
//! on an analytically propagated ellipse (Kepler's equation solved fresh
//! every frame, so no integration error accumulates), and the Moon advanced
//! by semi-implicit Euler integration under Earth's gravity alone.
//!
//! The core consumes only elapsed simulated time and a speed multiplier and
//! exposes positions and velocities in SI units; rendering, input handling,
//! and UI live outside it. [`display::DisplayAdapter`] converts meters to
//! scene coordinates for whatever draws the result.

pub mod bodies;
pub mod clock;
pub mod constants;
pub mod display;
pub mod integrator;
pub mod kepler;
pub mod simulation;

pub use bodies::CelestialBody;
pub use clock::SimulationClock;
pub use display::DisplayAdapter;
pub use kepler::EllipticalOrbit;
pub use simulation::Simulation;
