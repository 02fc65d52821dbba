//! Scene entities driven by the tree populations.
//!
//! Foliage and lights render as point-list meshes whose positions are
//! overwritten in place each frame. Ornaments and photo panels are individual
//! entities whose transforms are copied from the population buffers. The
//! scene never feeds back into the morph.

/// Components, camera and lighting, and spawning of the tree hierarchy.
pub mod tree_scene;

/// Per-frame copy of population state onto meshes and transforms.
pub mod sync;

pub use sync::{sync_point_meshes, sync_population_members, sync_rig};
pub use tree_scene::{
    PhotoPanelEntity, PhotoTexture, PointBufferMesh, PopulationMember, TreeCamera, TreeRoot,
    TrunkPart, spawn_camera_and_lights, spawn_tree_scene,
};
