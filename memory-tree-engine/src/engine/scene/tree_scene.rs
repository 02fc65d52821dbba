use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::layout::{TREE_BASE_RADIUS, TREE_BASE_Y, TREE_HEIGHT};
use constants::render_settings::{
    CAMERA_BASE_DISTANCE, CAMERA_FOCUS_Y, FOLIAGE_COLOUR, LIGHT_COLOUR, ORNAMENT_COLOURS,
    PHOTO_PANEL_SIZE, PHOTO_PLACEHOLDER_COLOUR, STAR_COLOUR, TRUNK_COLOUR,
};

use crate::engine::assets::TextureSlot;
use crate::engine::layout::LayoutKind;
use crate::engine::population::{PhotoId, TreePopulations};

/// Root of the tree; carries the rig pan.
#[derive(Component)]
pub struct TreeRoot;

/// Trunk and star, scaled by the rig as the tree forms.
#[derive(Component)]
pub struct TrunkPart {
    pub base_translation: Vec3,
}

/// Entity whose mesh positions mirror a particle population's point buffer.
#[derive(Component, Debug, Clone, Copy)]
pub struct PointBufferMesh {
    pub kind: LayoutKind,
}

/// One object of an oriented population.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationMember {
    pub kind: LayoutKind,
    pub index: usize,
}

/// A photo panel entity, with its own material so the texture can be swapped.
#[derive(Component, Debug, Clone)]
pub struct PhotoPanelEntity {
    pub id: PhotoId,
    pub url: String,
    pub material: Handle<StandardMaterial>,
}

/// Texture load state of a photo panel.
#[derive(Component, Debug, Clone, Default)]
pub struct PhotoTexture(pub TextureSlot<Handle<Image>>);

/// The camera the selection resolver projects through.
#[derive(Component)]
pub struct TreeCamera;

/// Spawns the camera and lighting. Runs at startup, before the manifest
/// arrives.
pub fn spawn_camera_and_lights(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, CAMERA_FOCUS_Y, CAMERA_BASE_DISTANCE)
            .looking_at(Vec3::new(0.0, CAMERA_FOCUS_Y, 0.0), Vec3::Y),
        TreeCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            0.6,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}

/// Spawns every population under a single root entity.
pub fn spawn_tree_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    populations: &TreePopulations,
) {
    let ornament_mesh = meshes.add(Sphere::new(1.0).mesh().uv(16, 8));
    let ornament_materials: Vec<Handle<StandardMaterial>> = ORNAMENT_COLOURS
        .iter()
        .map(|colour| {
            materials.add(StandardMaterial {
                base_color: *colour,
                metallic: 0.6,
                perceptual_roughness: 0.3,
                ..default()
            })
        })
        .collect();
    let photo_mesh = meshes.add(Rectangle::new(PHOTO_PANEL_SIZE.0, PHOTO_PANEL_SIZE.1));

    let foliage_mesh = meshes.add(point_list_mesh(
        populations.population(LayoutKind::Foliage).point_buffer(),
    ));
    let light_mesh = meshes.add(point_list_mesh(
        populations.population(LayoutKind::Lights).point_buffer(),
    ));
    let foliage_material = materials.add(StandardMaterial {
        base_color: FOLIAGE_COLOUR,
        unlit: true,
        ..default()
    });
    let light_material = materials.add(StandardMaterial {
        base_color: LIGHT_COLOUR,
        emissive: LIGHT_COLOUR.to_linear() * 4.0,
        unlit: true,
        ..default()
    });

    let trunk_mesh = meshes.add(Cylinder::new(TREE_BASE_RADIUS * 0.08, TREE_HEIGHT * 0.35));
    let trunk_material = materials.add(StandardMaterial {
        base_color: TRUNK_COLOUR,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.45));
    let star_material = materials.add(StandardMaterial {
        base_color: STAR_COLOUR,
        emissive: STAR_COLOUR.to_linear() * 6.0,
        ..default()
    });

    let rig = populations.rig();
    let trunk_base = Vec3::new(0.0, TREE_BASE_Y + TREE_HEIGHT * 0.175, 0.0);
    let star_base = Vec3::new(0.0, TREE_BASE_Y + TREE_HEIGHT + 0.3, 0.0);
    let ornaments = populations.population(LayoutKind::Ornaments).transforms();
    let photos = populations.population(LayoutKind::Photos).transforms();

    commands
        .spawn((
            TreeRoot,
            Transform::from_translation(rig.root_translation()),
            Visibility::Visible,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(foliage_mesh),
                MeshMaterial3d(foliage_material),
                Transform::IDENTITY,
                PointBufferMesh {
                    kind: LayoutKind::Foliage,
                },
                NoFrustumCulling,
            ));
            parent.spawn((
                Mesh3d(light_mesh),
                MeshMaterial3d(light_material),
                Transform::IDENTITY,
                PointBufferMesh {
                    kind: LayoutKind::Lights,
                },
                NoFrustumCulling,
            ));

            parent.spawn((
                Mesh3d(trunk_mesh),
                MeshMaterial3d(trunk_material),
                Transform::from_translation(trunk_base).with_scale(Vec3::splat(rig.trunk_scale)),
                TrunkPart {
                    base_translation: trunk_base,
                },
            ));
            parent.spawn((
                Mesh3d(star_mesh),
                MeshMaterial3d(star_material),
                Transform::from_translation(star_base).with_scale(Vec3::splat(rig.trunk_scale)),
                TrunkPart {
                    base_translation: star_base,
                },
            ));

            for (index, transform) in ornaments.iter().enumerate() {
                let material = &ornament_materials[index % ornament_materials.len()];
                parent.spawn((
                    Mesh3d(ornament_mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from(*transform),
                    PopulationMember {
                        kind: LayoutKind::Ornaments,
                        index,
                    },
                ));
            }

            for panel in populations.photos() {
                let Some(transform) = photos.get(panel.index) else {
                    continue;
                };
                let material = materials.add(StandardMaterial {
                    base_color: PHOTO_PLACEHOLDER_COLOUR,
                    double_sided: true,
                    cull_mode: None,
                    unlit: true,
                    ..default()
                });
                parent.spawn((
                    Mesh3d(photo_mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from(*transform),
                    PopulationMember {
                        kind: LayoutKind::Photos,
                        index: panel.index,
                    },
                    PhotoPanelEntity {
                        id: panel.id,
                        url: panel.url.clone(),
                        material,
                    },
                    PhotoTexture::default(),
                ));
            }
        });

    info!(
        "✓ Tree scene spawned: {} ornaments, {} photo panels",
        ornaments.len(),
        populations.photos().len()
    );
}

/// Point-list mesh with one vertex per population member.
pub fn point_list_mesh(points: &[[f32; 3]]) -> Mesh {
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points.to_vec())
}
