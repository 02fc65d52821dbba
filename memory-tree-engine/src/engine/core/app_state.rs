use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Leaves `Loading` as soon as the tree exists. Photos keep streaming in.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.tree_built {
        info!("→ Tree ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

/// Pushes loading progress to the host page whenever it changes.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut last_sent: Local<Option<LoadingProgress>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if last_sent.as_ref() == Some(&*loading_progress) {
        return;
    }
    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({
            "stage": loading_progress.stage(),
            "photos_ready": loading_progress.photos_ready,
            "photos_errored": loading_progress.photos_errored,
            "photos_total": loading_progress.photos_total,
        }),
    );
    *last_sent = Some(loading_progress.clone());
}
