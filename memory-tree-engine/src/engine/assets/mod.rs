//! Runtime assets for the memory tree.
//!
//! The JSON manifest configures photos, population sizes and rotation rates.
//! Photo images are loaded through a URL-keyed cache so panels sharing an
//! image trigger a single load.

/// Tree manifest asset, defaults and validation.
pub mod tree_manifest;

/// URL-deduplicating texture cache and per-photo load state machine.
pub mod texture_cache;

pub use texture_cache::{CacheLookup, PhotoTextureCache, SlotFailure, TextureCache, TextureSlot};
pub use tree_manifest::{ManifestError, PhotoEntry, TreeManifest};
