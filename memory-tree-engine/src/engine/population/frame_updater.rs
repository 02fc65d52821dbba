use bevy::prelude::*;
use constants::layout::{DEFAULT_FOLIAGE_COUNT, DEFAULT_LIGHT_COUNT, DEFAULT_ORNAMENT_COUNT};
use serde::{Deserialize, Serialize};

use super::composition::CompositionRig;
use super::photos::{PhotoId, PhotoPanel};
use super::population::{ObjectPopulation, ObjectTransform};
use crate::engine::input::MorphInputs;
use crate::engine::layout::LayoutKind;

/// Sizes of the particle-like and ornament populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationCounts {
    pub foliage: usize,
    pub lights: usize,
    pub ornaments: usize,
}

impl Default for PopulationCounts {
    fn default() -> Self {
        Self {
            foliage: DEFAULT_FOLIAGE_COUNT,
            lights: DEFAULT_LIGHT_COUNT,
            ornaments: DEFAULT_ORNAMENT_COUNT,
        }
    }
}

/// Every population of the tree plus the composition rig.
#[derive(Resource, Debug, Clone)]
pub struct TreePopulations {
    // Indexed by `slot(kind)`.
    populations: [ObjectPopulation; 4],
    photos: Vec<PhotoPanel>,
    rig: CompositionRig,
}

fn slot(kind: LayoutKind) -> usize {
    match kind {
        LayoutKind::Foliage => 0,
        LayoutKind::Lights => 1,
        LayoutKind::Ornaments => 2,
        LayoutKind::Photos => 3,
    }
}

impl TreePopulations {
    pub fn new(
        counts: PopulationCounts,
        photos: impl IntoIterator<Item = (PhotoId, String)>,
        seed: u64,
    ) -> Self {
        let photos: Vec<PhotoPanel> = photos
            .into_iter()
            .enumerate()
            .map(|(index, (id, url))| PhotoPanel { id, url, index })
            .collect();

        let populations = [
            ObjectPopulation::generate(LayoutKind::Foliage, counts.foliage, seed),
            ObjectPopulation::generate(LayoutKind::Lights, counts.lights, seed),
            ObjectPopulation::generate(LayoutKind::Ornaments, counts.ornaments, seed),
            ObjectPopulation::generate(LayoutKind::Photos, photos.len(), seed),
        ];

        info!(
            "Tree populations built: {} foliage, {} lights, {} ornaments, {} photos",
            counts.foliage,
            counts.lights,
            counts.ornaments,
            photos.len()
        );

        Self {
            populations,
            photos,
            rig: CompositionRig::default(),
        }
    }

    pub fn population(&self, kind: LayoutKind) -> &ObjectPopulation {
        &self.populations[slot(kind)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectPopulation> {
        self.populations.iter()
    }

    pub fn photos(&self) -> &[PhotoPanel] {
        &self.photos
    }

    pub fn photo(&self, id: PhotoId) -> Option<&PhotoPanel> {
        self.photos.iter().find(|panel| panel.id == id)
    }

    pub fn rig(&self) -> &CompositionRig {
        &self.rig
    }

    /// Total objects updated per tick.
    pub fn object_count(&self) -> usize {
        self.populations.iter().map(ObjectPopulation::len).sum()
    }

    /// Advances every clock, re-blends every object and damps the rig.
    pub fn tick(&mut self, inputs: &MorphInputs, delta_time: f32) {
        let angular_rate = inputs.angular_rate();
        for population in &mut self.populations {
            population.advance_clock(inputs.mode, angular_rate, delta_time);
            population.apply_blend();
        }
        self.rig.advance(inputs, delta_time);
    }

    /// Tree-space transform of a photo, written by the last tick.
    pub fn photo_transform(&self, panel: &PhotoPanel) -> Option<ObjectTransform> {
        self.population(LayoutKind::Photos)
            .transforms()
            .get(panel.index)
            .copied()
    }

    /// World transform of a photo: tree-space transform offset by the rig.
    pub fn photo_world_transform(&self, panel: &PhotoPanel) -> Option<ObjectTransform> {
        self.photo_transform(panel).map(|local| ObjectTransform {
            translation: self.rig.to_world(local.translation),
            ..local
        })
    }

    pub fn photo_world_positions(&self) -> impl Iterator<Item = (PhotoId, Vec3)> + '_ {
        let transforms = self.population(LayoutKind::Photos).transforms();
        self.photos.iter().filter_map(move |panel| {
            transforms
                .get(panel.index)
                .map(|local| (panel.id, self.rig.to_world(local.translation)))
        })
    }
}

/// Runs the morph for this frame.
pub fn update_tree_populations(
    time: Res<Time>,
    inputs: Res<MorphInputs>,
    mut populations: ResMut<TreePopulations>,
) {
    populations.tick(&inputs, time.delta_secs());
}
