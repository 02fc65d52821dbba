//! Per-tick morph of every population.
//!
//! `TreePopulations` owns the layouts, clocks and output transforms of all
//! populations. It is the only writer of object transforms; the scene sync
//! and the selection resolver read its snapshot after each tick.
//!
//! ```text
//! MorphInputs ──> update_tree_populations ──> TreePopulations::tick
//!                                               ├─> clock.advance / spin
//!                                               ├─> polar blend per object
//!                                               └─> CompositionRig damping
//! TreePopulations ──> sync_scene (Transforms, point meshes)
//!                 └─> resolve_photo_selection (photo world positions)
//! ```

/// Pan, zoom and trunk scale damping for the whole composition.
pub mod composition;

/// `TreePopulations` resource and the per-tick update system.
pub mod frame_updater;

/// Photo identities and their placement within the photo population.
pub mod photos;

/// One population: layout, clock, profile and output buffers.
pub mod population;

pub use composition::CompositionRig;
pub use frame_updater::{PopulationCounts, TreePopulations, update_tree_populations};
pub use photos::{PhotoId, PhotoPanel};
pub use population::{ObjectPopulation, ObjectTransform};
