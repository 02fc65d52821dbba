use bevy::prelude::*;
use serde_json::{Value, json};

use crate::engine::input::MorphInputs;
use crate::engine::layout::LayoutKind;
use crate::engine::morph::MorphMode;
use crate::engine::population::TreePopulations;
use crate::rpc::{WebRpcInterface, selection_json};
use crate::tools::photo_selection::{SelectionChanged, SelectionState};

/// Progress distance from the target below which the tree counts as settled.
const SETTLE_EPSILON: f32 = 0.01;

/// Remembers the last reported morph status so notifications are sent only
/// on change.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MorphStatusTracker {
    last: Option<(MorphMode, bool)>,
}

impl MorphStatusTracker {
    /// Returns a `morph_progress` payload when the mode changed or the
    /// progress just settled on (or left) its target.
    pub fn observe(&mut self, mode: MorphMode, progress: f32) -> Option<Value> {
        let settled = (progress - mode.target_progress()).abs() < SETTLE_EPSILON;
        if self.last == Some((mode, settled)) {
            return None;
        }
        self.last = Some((mode, settled));
        Some(json!({
            "mode": mode,
            "progress": progress,
            "settled": settled,
        }))
    }
}

/// Reports mode changes and settling of the foliage clock.
pub fn morph_status_notification_system(
    inputs: Res<MorphInputs>,
    populations: Res<TreePopulations>,
    mut tracker: Local<MorphStatusTracker>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let progress = populations
        .population(LayoutKind::Foliage)
        .clock()
        .progress();
    if let Some(payload) = tracker.observe(inputs.mode, progress) {
        rpc_interface.send_notification("morph_progress", payload);
    }
}

/// Forwards selection changes to the host page.
pub fn selection_notification_system(
    mut changes: EventReader<SelectionChanged>,
    selection: Res<SelectionState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    // Only the latest state matters when several changes land in one frame.
    if changes.read().last().is_some() {
        rpc_interface.send_notification("selection_changed", selection_json(&selection));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_mode_change_then_settling_once() {
        let mut tracker = MorphStatusTracker::default();
        assert!(tracker.observe(MorphMode::Dispersed, 0.0).is_some());
        assert!(tracker.observe(MorphMode::Dispersed, 0.0).is_none());

        let started = tracker.observe(MorphMode::Formed, 0.0);
        assert_eq!(started.map(|p| p["settled"].clone()), Some(json!(false)));
        assert!(tracker.observe(MorphMode::Formed, 0.5).is_none());

        let settled = tracker.observe(MorphMode::Formed, 0.995);
        assert_eq!(settled.map(|p| p["mode"].clone()), Some(json!("FORMED")));
        assert!(tracker.observe(MorphMode::Formed, 0.999).is_none());
    }
}
