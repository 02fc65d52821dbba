//! Static chaos and tree layouts for every population.
//!
//! Layouts are produced once when the scene is built and are read-only from
//! then on; the frame updater only ever borrows them.

/// Layout construction per population kind.
pub mod generator;

/// Geometric sampling helpers (sphere fill, Fibonacci lattice, cone spiral).
pub mod sampling;

pub use generator::{LayoutKind, PopulationLayout, generate_layout};
