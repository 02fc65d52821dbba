//! Engine for the memory tree: layouts, morph core, scene and app wiring.

/// Manifest asset and photo texture cache.
pub mod assets;
/// App construction, states and window configuration.
pub mod core;
/// Input snapshot and native keyboard/mouse mapping.
pub mod input;
/// Deterministic chaos/tree layout generation.
pub mod layout;
/// Manifest to running tree loading pipeline.
pub mod loading;
/// Morph clock, damping and polar blend.
pub mod morph;
/// Populations, composition rig and the per-frame updater.
pub mod population;
/// Scene entities mirroring the populations.
pub mod scene;
/// Diagnostics and host notifications.
pub mod systems;
