//! Morph math shared by every population.
//!
//! The clock damps a progress scalar towards the active mode and accumulates
//! rotation; the polar blend turns a chaos/tree point pair into the current
//! position by interpolating in cylindrical coordinates.

/// Exponential damping and smoothstep easing primitives.
pub mod damping;

/// Per-population progress and rotation state.
pub mod clock;

/// Cylindrical interpolation between chaos and tree layouts with vortex twist.
pub mod polar_blend;

pub use clock::{MorphClock, MorphMode, SpinAngles};
pub use polar_blend::{BlendedPoint, MorphProfile};
