use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use constants::layout::DEFAULT_LAYOUT_SEED;
use constants::texture::FALLBACK_PHOTO_PATH;
use serde::{Deserialize, Serialize};

use crate::engine::input::RotationSettings;
use crate::engine::population::{PhotoId, PopulationCounts};

/// One photo entry as written in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub id: PhotoId,
    pub url: String,
}

fn default_seed() -> u64 {
    DEFAULT_LAYOUT_SEED
}

fn default_fallback_url() -> String {
    FALLBACK_PHOTO_PATH.to_string()
}

/// Runtime configuration of the tree, loaded as a Bevy asset from
/// `assets/memory_tree/manifest.json`. Every field except `photos` may be
/// omitted.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath, Resource)]
pub struct TreeManifest {
    #[serde(default)]
    pub photos: Vec<PhotoEntry>,
    #[serde(default)]
    pub counts: PopulationCounts,
    #[serde(default)]
    pub rotation: RotationSettings,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
}

impl Default for TreeManifest {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            counts: PopulationCounts::default(),
            rotation: RotationSettings::default(),
            seed: DEFAULT_LAYOUT_SEED,
            fallback_url: default_fallback_url(),
        }
    }
}

/// Problems found in a manifest's photo list.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    DuplicatePhotoId(PhotoId),
    EmptyPhotoUrl(PhotoId),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::DuplicatePhotoId(id) => write!(f, "duplicate photo id {id}"),
            ManifestError::EmptyPhotoUrl(id) => write!(f, "{id} has an empty url"),
        }
    }
}

impl std::error::Error for ManifestError {}

impl TreeManifest {
    /// Checks the whole manifest, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let (_, errors) = self.partition_photos();
        match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Photos that can be shown, in manifest order, plus the reasons the rest
    /// were dropped. The first occurrence of a duplicated id wins.
    pub fn partition_photos(&self) -> (Vec<(PhotoId, String)>, Vec<ManifestError>) {
        let mut seen = HashSet::new();
        let mut valid = Vec::with_capacity(self.photos.len());
        let mut errors = Vec::new();

        for entry in &self.photos {
            if entry.url.trim().is_empty() {
                errors.push(ManifestError::EmptyPhotoUrl(entry.id));
            } else if !seen.insert(entry.id) {
                errors.push(ManifestError::DuplicatePhotoId(entry.id));
            } else {
                valid.push((entry.id, entry.url.clone()));
            }
        }

        (valid, errors)
    }

    /// Rotation settings with non-finite values replaced by defaults.
    pub fn rotation_settings(&self) -> RotationSettings {
        let defaults = RotationSettings::default();
        RotationSettings {
            base_rate: finite_or(self.rotation.base_rate, defaults.base_rate),
            boost: finite_or(self.rotation.boost, defaults.boost),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TreeManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_fields_use_defaults() {
        let manifest = parse(r#"{ "photos": [ { "id": 1, "url": "a.png" } ] }"#);
        assert_eq!(manifest.counts, PopulationCounts::default());
        assert_eq!(manifest.rotation, RotationSettings::default());
        assert_eq!(manifest.seed, DEFAULT_LAYOUT_SEED);
        assert_eq!(manifest.fallback_url, FALLBACK_PHOTO_PATH);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn partial_counts_keep_other_defaults() {
        let manifest = parse(r#"{ "photos": [], "counts": { "foliage": 500 } }"#);
        assert_eq!(manifest.counts.foliage, 500);
        assert_eq!(manifest.counts.lights, PopulationCounts::default().lights);
    }

    #[test]
    fn duplicate_ids_are_reported_and_dropped() {
        let manifest = parse(
            r#"{ "photos": [
                { "id": 3, "url": "a.png" },
                { "id": 3, "url": "b.png" },
                { "id": 4, "url": "c.png" }
            ] }"#,
        );
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::DuplicatePhotoId(PhotoId(3)))
        );

        let (valid, errors) = manifest.partition_photos();
        assert_eq!(
            valid,
            vec![(PhotoId(3), "a.png".to_string()), (PhotoId(4), "c.png".to_string())]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_url_is_rejected() {
        let manifest = parse(r#"{ "photos": [ { "id": 9, "url": "  " } ] }"#);
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::EmptyPhotoUrl(PhotoId(9)))
        );
        assert!(manifest.partition_photos().0.is_empty());
    }

    #[test]
    fn non_finite_rotation_falls_back_to_defaults() {
        let mut manifest = parse(r#"{ "photos": [], "rotation": { "base_rate": 0.8 } }"#);
        manifest.rotation.boost = f32::NAN;

        assert!(manifest.validate().is_ok());
        let rotation = manifest.rotation_settings();
        assert_eq!(rotation.base_rate, 0.8);
        assert_eq!(rotation.boost, RotationSettings::default().boost);
    }

    #[test]
    fn error_messages_name_the_photo() {
        let message = ManifestError::DuplicatePhotoId(PhotoId(7)).to_string();
        assert_eq!(message, "duplicate photo id photo#7");
    }
}
