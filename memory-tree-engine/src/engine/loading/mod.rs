//! Loading pipeline from manifest to a running tree.
//!
//! ```text
//! start_loading ─> load_manifest_system ─> create_tree_when_ready ─> Running
//!                                                   │
//!                                                   └─> photo textures (async)
//! ```
//!
//! Photo textures stream in after the tree is running; panels show a
//! placeholder until their image is ready and the morph never waits on them.

/// Manifest asset request and publication as a resource.
pub mod manifest_loader;

/// Photo texture requests, fallback retry and material updates.
pub mod photo_textures;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Population construction and scene spawning once the manifest is known.
pub mod tree_creator;
