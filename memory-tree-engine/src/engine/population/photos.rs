use serde::{Deserialize, Serialize};

/// Stable identity of a photo, as listed in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u32);

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "photo#{}", self.0)
    }
}

/// A member of the photo population, addressable by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPanel {
    pub id: PhotoId,
    pub url: String,
    /// Index into the photo population's layout and transforms.
    pub index: usize,
}
