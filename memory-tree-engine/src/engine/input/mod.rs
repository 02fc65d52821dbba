//! Mode and pointer input feeding the morph core.
//!
//! `MorphInputs` is the single per-tick input snapshot. Native builds fill it
//! from keyboard and mouse; web builds receive it over RPC from the host page,
//! which owns gesture acquisition.

/// Input snapshot resource read by the frame updater and selection resolver.
pub mod morph_inputs;

/// Keyboard and mouse mapping onto `MorphInputs` (native only).
pub mod keyboard_mouse;

pub use morph_inputs::{MorphInputs, RotationSettings};
