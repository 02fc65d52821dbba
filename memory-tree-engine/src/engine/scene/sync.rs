use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use constants::render_settings::CAMERA_FOCUS_Y;

use super::tree_scene::{PointBufferMesh, PopulationMember, TreeCamera, TreeRoot, TrunkPart};
use crate::engine::population::TreePopulations;

/// Copies particle point buffers into their meshes in place.
pub fn sync_point_meshes(
    populations: Res<TreePopulations>,
    mut meshes: ResMut<Assets<Mesh>>,
    point_meshes: Query<(&Mesh3d, &PointBufferMesh)>,
) {
    for (mesh_handle, buffer) in &point_meshes {
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        else {
            continue;
        };
        let source = populations.population(buffer.kind).point_buffer();
        if positions.len() == source.len() {
            positions.copy_from_slice(source);
        }
    }
}

/// Writes ornament and photo transforms onto their entities.
pub fn sync_population_members(
    populations: Res<TreePopulations>,
    mut members: Query<(&PopulationMember, &mut Transform)>,
) {
    for (member, mut transform) in &mut members {
        let Some(object) = populations
            .population(member.kind)
            .transforms()
            .get(member.index)
        else {
            continue;
        };
        *transform = Transform::from(*object);
    }
}

/// Applies the rig: root pan, trunk and star growth, camera distance.
pub fn sync_rig(
    populations: Res<TreePopulations>,
    mut roots: Query<&mut Transform, (With<TreeRoot>, Without<TrunkPart>, Without<TreeCamera>)>,
    mut trunk_parts: Query<(&TrunkPart, &mut Transform), (Without<TreeRoot>, Without<TreeCamera>)>,
    mut cameras: Query<&mut Transform, (With<TreeCamera>, Without<TreeRoot>, Without<TrunkPart>)>,
) {
    let rig = populations.rig();

    for mut transform in &mut roots {
        transform.translation = rig.root_translation();
    }

    for (part, mut transform) in &mut trunk_parts {
        transform.translation = part.base_translation;
        transform.scale = Vec3::splat(rig.trunk_scale);
    }

    for mut transform in &mut cameras {
        let focus = Vec3::new(0.0, CAMERA_FOCUS_Y, 0.0);
        *transform = Transform::from_translation(focus + Vec3::Z * rig.camera_distance)
            .looking_at(focus, Vec3::Y);
    }
}
