use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::render_settings::PHOTO_ERRORED_COLOUR;
use constants::texture::FALLBACK_PHOTO_PATH;

use crate::engine::assets::{PhotoTextureCache, SlotFailure, TextureSlot, TreeManifest};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::{PhotoPanelEntity, PhotoTexture};
use crate::rpc::WebRpcInterface;

/// Starts a load for every photo panel that has not requested one yet.
/// Panels keep their placeholder material until the image arrives.
pub fn request_photo_textures(
    asset_server: Res<AssetServer>,
    mut cache: ResMut<PhotoTextureCache>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut panels: Query<(&PhotoPanelEntity, &mut PhotoTexture)>,
) {
    for (panel, mut texture) in &mut panels {
        if !matches!(texture.0, TextureSlot::Unrequested) {
            continue;
        }
        texture.0.begin(&mut cache.0, &panel.url, false, |url| {
            asset_server.load(url.to_string())
        });
        if let TextureSlot::Ready(handle) = &texture.0 {
            show_texture(&mut materials, panel, handle.clone());
            loading_progress.photos_ready += 1;
        }
    }
}

/// Moves loading panels to ready or, after one fallback retry, to errored.
pub fn poll_photo_textures(
    asset_server: Res<AssetServer>,
    manifest: Option<Res<TreeManifest>>,
    mut cache: ResMut<PhotoTextureCache>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut panels: Query<(&PhotoPanelEntity, &mut PhotoTexture)>,
) {
    let fallback_url = manifest
        .as_deref()
        .map_or(FALLBACK_PHOTO_PATH, |manifest| manifest.fallback_url.as_str());

    for (panel, mut texture) in &mut panels {
        let load_state = match &texture.0 {
            TextureSlot::Loading { handle, .. } => asset_server.get_load_state(handle),
            _ => continue,
        };

        match load_state {
            Some(LoadState::Loaded) => {
                texture.0.finish(&mut cache.0);
                if let TextureSlot::Ready(handle) = &texture.0 {
                    show_texture(&mut materials, panel, handle.clone());
                    loading_progress.photos_ready += 1;
                }
            }
            Some(LoadState::Failed(error)) => match texture.0.fail(&mut cache.0, fallback_url) {
                SlotFailure::RetryWith(url) => {
                    warn!("{} failed to load {} ({error}), trying fallback", panel.id, panel.url);
                    texture.0.begin(&mut cache.0, &url, true, |url| {
                        asset_server.load(url.to_string())
                    });
                    if let TextureSlot::Ready(handle) = &texture.0 {
                        show_texture(&mut materials, panel, handle.clone());
                        loading_progress.photos_ready += 1;
                    }
                }
                SlotFailure::GaveUp => {
                    warn!("{} has no usable texture, showing errored panel", panel.id);
                    if let Some(material) = materials.get_mut(&panel.material) {
                        material.base_color = PHOTO_ERRORED_COLOUR;
                    }
                    loading_progress.photos_errored += 1;
                    rpc_interface.send_notification(
                        "photo_texture_failed",
                        serde_json::json!({
                            "id": panel.id,
                            "url": panel.url,
                        }),
                    );
                }
                SlotFailure::NotLoading => {}
            },
            _ => {}
        }
    }
}

fn show_texture(
    materials: &mut Assets<StandardMaterial>,
    panel: &PhotoPanelEntity,
    image: Handle<Image>,
) {
    if let Some(material) = materials.get_mut(&panel.material) {
        material.base_color = Color::WHITE;
        material.base_color_texture = Some(image);
    }
}
