use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::texture::RELATIVE_MANIFEST_PATH;

use crate::engine::assets::TreeManifest;
use crate::engine::input::{MorphInputs, RotationSettings};
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<TreeManifest>>,
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

/// Waits for the manifest, then publishes it as a resource. A manifest that
/// fails to load is replaced by the defaults so the tree still appears.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    mut inputs: ResMut<MorphInputs>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<TreeManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }
    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    let manifest = if let Some(manifest) = manifests.get(handle) {
        info!("✓ Manifest loaded with {} photos", manifest.photos.len());
        manifest.clone()
    } else if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        warn!("Manifest failed to load ({error}), using defaults");
        TreeManifest::default()
    } else {
        return;
    };

    apply_manifest(&mut commands, &mut inputs, manifest);
    loading_progress.manifest_loaded = true;
}

/// Publishes a manifest and its rotation settings.
pub fn apply_manifest(commands: &mut Commands, inputs: &mut MorphInputs, manifest: TreeManifest) {
    if let Err(error) = manifest.validate() {
        warn!("Manifest problem: {error}");
    }
    let rotation = manifest.rotation_settings();
    inputs.base_rotation_rate = rotation.base_rate;
    commands.insert_resource::<RotationSettings>(rotation);
    commands.insert_resource(manifest);
}
