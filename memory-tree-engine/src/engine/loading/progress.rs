use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub tree_built: bool,
    pub photos_total: usize,
    pub photos_ready: usize,
    pub photos_errored: usize,
}

impl LoadingProgress {
    /// Stage name reported to the host page.
    pub fn stage(&self) -> &'static str {
        if !self.manifest_loaded {
            "manifest"
        } else if !self.tree_built {
            "tree"
        } else if self.photos_ready + self.photos_errored < self.photos_total {
            "photos"
        } else {
            "done"
        }
    }
}
