//! Screen-space photo selection.
//!
//! On each discrete trigger (tap or click) while the tree is dispersed, every
//! photo's world position is projected to normalised device coordinates and
//! the panel nearest to the pointer is selected if it lies within
//! `SELECTION_THRESHOLD`. Flat camera-facing panels make this projection test
//! sufficient; there is no 3D ray picking.
//!
//! ## State machine
//!
//! ```text
//! Idle ──trigger on panel──> Active(id, t)
//! Active ──trigger within lock──> Active (ignored)
//! Active ──trigger on same panel / empty space──> Idle
//! Active ──trigger on other panel──> Active(other, now)
//! ```

/// Projection of panels to NDC and nearest-panel search.
pub mod projection;

/// Trigger handling system and the pure trigger resolution it wraps.
pub mod selection;

/// Selection state machine, trigger bookkeeping and change events.
pub mod state;

use bevy::prelude::*;

pub use selection::{resolve_photo_selection, resolve_trigger};
pub use state::{SelectionChanged, SelectionResolver, SelectionState, SelectionTransition};

/// Registers selection resources and the change event. The resolver system
/// itself is scheduled by the app so it can run after the frame update.
pub struct PhotoSelectionPlugin;

impl Plugin for PhotoSelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<SelectionResolver>()
            .add_event::<SelectionChanged>();
    }
}
