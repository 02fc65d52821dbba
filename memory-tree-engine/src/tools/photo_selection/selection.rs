use bevy::prelude::*;
use bevy::render::camera::CameraProjection;
use constants::selection::{SELECTION_LOCK_MS, SELECTION_THRESHOLD};

use super::projection::{panel_under_pointer, pointer_to_ndc};
use super::state::{SelectionChanged, SelectionResolver, SelectionState, SelectionTransition};
use crate::engine::input::MorphInputs;
use crate::engine::morph::MorphMode;
use crate::engine::population::{PhotoId, TreePopulations};

/// One trigger against the current photo positions.
pub fn resolve_trigger(
    state: &mut SelectionState,
    panels: impl IntoIterator<Item = (PhotoId, Vec3)>,
    view_projection: &Mat4,
    pointer: Vec2,
    now_ms: f64,
) -> SelectionTransition {
    // Inside the lock the search is skipped entirely.
    if state.is_locked(now_ms, SELECTION_LOCK_MS) {
        return SelectionTransition::Ignored;
    }
    let hit = panel_under_pointer(
        panels,
        view_projection,
        pointer_to_ndc(pointer),
        SELECTION_THRESHOLD,
    );
    state.apply_trigger(hit, now_ms, SELECTION_LOCK_MS)
}

/// Handles tap/click triggers while the composition is dispersed.
///
/// Triggers that arrive while formed, or without a pointer, are consumed
/// without touching the selection.
pub fn resolve_photo_selection(
    inputs: Res<MorphInputs>,
    populations: Res<TreePopulations>,
    cameras: Query<(&Projection, &GlobalTransform), With<Camera3d>>,
    time: Res<Time>,
    mut resolver: ResMut<SelectionResolver>,
    mut selection: ResMut<SelectionState>,
    mut changes: EventWriter<SelectionChanged>,
) {
    if !resolver.take_trigger(inputs.trigger_count) {
        return;
    }
    if inputs.mode != MorphMode::Dispersed {
        return;
    }
    let Some(pointer) = inputs.pointer else {
        return;
    };
    let Ok((projection, camera_transform)) = cameras.single() else {
        warn!("Trigger dropped, no tree camera");
        return;
    };

    let view_projection =
        projection.get_clip_from_view() * camera_transform.compute_matrix().inverse();
    let now_ms = time.elapsed_secs_f64() * 1000.0;

    let transition = resolve_trigger(
        &mut selection,
        populations.photo_world_positions(),
        &view_projection,
        pointer,
        now_ms,
    );

    match transition {
        SelectionTransition::Activated(id) => info!("Selected {id}"),
        SelectionTransition::Deselected(id) => info!("Deselected {id}"),
        SelectionTransition::Ignored => {
            debug!("Trigger ignored, selection locked");
            return;
        }
        SelectionTransition::Unchanged => return,
    }

    changes.write(SelectionChanged {
        active: selection.active(),
        activated_at_ms: selection.activated_at_ms(),
    });
}
