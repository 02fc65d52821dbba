use bevy::prelude::*;

use crate::engine::assets::TreeManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::population::TreePopulations;
use crate::engine::scene::spawn_tree_scene;

/// Builds the populations from the manifest and spawns the scene once.
pub fn create_tree_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    manifest: Option<Res<TreeManifest>>,
) {
    if loading_progress.tree_built || !loading_progress.manifest_loaded {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    let populations = build_populations(&manifest);
    spawn_tree_scene(&mut commands, &mut meshes, &mut materials, &populations);

    loading_progress.photos_total = populations.photos().len();
    loading_progress.tree_built = true;
    commands.insert_resource(populations);
}

/// Populations for a manifest. Invalid photo entries are logged and dropped.
pub fn build_populations(manifest: &TreeManifest) -> TreePopulations {
    let (photos, errors) = manifest.partition_photos();
    for error in &errors {
        warn!("Skipping photo: {error}");
    }
    TreePopulations::new(manifest.counts, photos, manifest.seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::PhotoEntry;
    use crate::engine::population::{PhotoId, PopulationCounts};

    #[test]
    fn invalid_photos_are_dropped_from_population() {
        let manifest = TreeManifest {
            photos: vec![
                PhotoEntry {
                    id: PhotoId(1),
                    url: "a.png".to_string(),
                },
                PhotoEntry {
                    id: PhotoId(1),
                    url: "b.png".to_string(),
                },
                PhotoEntry {
                    id: PhotoId(2),
                    url: String::new(),
                },
            ],
            counts: PopulationCounts {
                foliage: 10,
                lights: 5,
                ornaments: 2,
            },
            ..default()
        };

        let populations = build_populations(&manifest);
        assert_eq!(populations.photos().len(), 1);
        assert_eq!(populations.object_count(), 10 + 5 + 2 + 1);
    }
}
