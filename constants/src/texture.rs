/// Manifest location relative to the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "memory_tree/manifest.json";

/// Substitute image loaded once when a photo fails to load.
pub const FALLBACK_PHOTO_PATH: &str = "memory_tree/photos/fallback.png";
