use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::BACKGROUND_COLOUR;

use crate::engine::assets::{PhotoTextureCache, TreeManifest};
use crate::engine::core::app_state::{AppState, transition_to_running, update_loading_frontend};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::{MorphInputs, RotationSettings};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::photo_textures::{poll_photo_textures, request_photo_textures};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::tree_creator::create_tree_when_ready;
use crate::engine::population::update_tree_populations;
use crate::engine::scene::{
    spawn_camera_and_lights, sync_point_meshes, sync_population_members, sync_rig,
};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::notifications::{
    morph_status_notification_system, selection_notification_system,
};
use crate::rpc::WebRpcPlugin;
use crate::tools::photo_selection::{PhotoSelectionPlugin, resolve_photo_selection};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::input::keyboard_mouse::keyboard_mouse_input_system;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

/// Per-frame order of the running tree.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeSet {
    /// Native keyboard and mouse. RPC input lands earlier, in `PreUpdate`.
    Input,
    /// Clock advance and re-blend of every population.
    Morph,
    /// Trigger resolution against this frame's photo positions.
    Selection,
    /// Copy of population state onto entities.
    Sync,
}

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers TreeManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<TreeManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(PhotoSelectionPlugin)
        .insert_resource(ClearColor(BACKGROUND_COLOUR));

    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<MorphInputs>()
        .init_resource::<RotationSettings>()
        .init_resource::<PhotoTextureCache>();

    app.add_systems(Startup, (spawn_camera_and_lights, start_loading).chain())
        .add_systems(
            Update,
            (
                load_manifest_system,
                create_tree_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(Update, update_loading_frontend);

    configure_tree_schedule(&mut app);

    app.add_systems(
        Update,
        (
            request_photo_textures,
            poll_photo_textures,
            fps_notification_system,
            morph_status_notification_system,
            selection_notification_system,
        )
            .run_if(in_state(AppState::Running)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system)
            .add_systems(
                Update,
                keyboard_mouse_input_system
                    .in_set(TreeSet::Input)
                    .run_if(in_state(AppState::Running)),
            );
    }

    app
}

/// Registers the morph, selection and sync systems in their fixed order.
/// Split out so headless tests can drive the same schedule.
pub fn configure_tree_schedule(app: &mut App) {
    app.configure_sets(
        Update,
        (TreeSet::Input, TreeSet::Morph, TreeSet::Selection, TreeSet::Sync).chain(),
    )
    .add_systems(
        Update,
        (
            update_tree_populations.in_set(TreeSet::Morph),
            resolve_photo_selection.in_set(TreeSet::Selection),
            (sync_point_meshes, sync_population_members, sync_rig).in_set(TreeSet::Sync),
        )
            .run_if(in_state(AppState::Running)),
    );
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
