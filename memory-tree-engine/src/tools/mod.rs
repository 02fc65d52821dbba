//! Interactive tools layered over the tree composition.
//!
//! Currently a single tool: photo selection. Triggers come from native mouse
//! clicks or the `trigger` RPC method and are resolved against the photo
//! panels while the tree is dispersed.
//!
//! ### Selection Flow
//!
//! ```text
//! Click / RPC trigger
//!   └─> MorphInputs::trigger_count += 1
//!       └─> resolve_photo_selection()
//!           ├─> Project photo positions to NDC
//!           ├─> Nearest panel within threshold
//!           └─> SelectionChanged event -> RPC notification
//! ```

/// Screen-space photo selection with a post-activation lock.
pub mod photo_selection;
