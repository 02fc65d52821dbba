use bevy::prelude::*;

use crate::engine::layout::{LayoutKind, PopulationLayout, generate_layout};
use crate::engine::morph::polar_blend::{blend_orientation, orientation_quat, polar_blend_with};
use crate::engine::morph::{MorphClock, MorphMode, MorphProfile};

/// Position, orientation and uniform scale of one object in tree space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl From<ObjectTransform> for Transform {
    fn from(object: ObjectTransform) -> Self {
        Transform {
            translation: object.translation,
            rotation: object.rotation,
            scale: Vec3::splat(object.scale),
        }
    }
}

pub fn profile_for(kind: LayoutKind) -> MorphProfile {
    match kind {
        LayoutKind::Foliage => MorphProfile::FOLIAGE,
        LayoutKind::Lights => MorphProfile::LIGHTS,
        LayoutKind::Ornaments => MorphProfile::ORNAMENTS,
        LayoutKind::Photos => MorphProfile::PHOTOS,
    }
}

/// A set of objects sharing one layout pair and one clock.
///
/// Oriented kinds write `transforms`; particle kinds write `point_buffer`.
/// Both are sized once here and overwritten in place every tick.
#[derive(Debug, Clone)]
pub struct ObjectPopulation {
    kind: LayoutKind,
    layout: PopulationLayout,
    clock: MorphClock,
    profile: MorphProfile,
    transforms: Vec<ObjectTransform>,
    point_buffer: Vec<[f32; 3]>,
}

impl ObjectPopulation {
    pub fn new(kind: LayoutKind, layout: PopulationLayout, profile: MorphProfile) -> Self {
        let count = layout.len();
        let (transforms, point_buffer) = if kind.is_oriented() {
            (vec![ObjectTransform::default(); count], Vec::new())
        } else {
            (Vec::new(), vec![[0.0; 3]; count])
        };

        let mut population = Self {
            kind,
            layout,
            clock: MorphClock::new(),
            profile,
            transforms,
            point_buffer,
        };
        population.apply_blend();
        population
    }

    pub fn generate(kind: LayoutKind, count: usize, seed: u64) -> Self {
        Self::new(kind, generate_layout(kind, count, seed), profile_for(kind))
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn layout(&self) -> &PopulationLayout {
        &self.layout
    }

    pub fn clock(&self) -> &MorphClock {
        &self.clock
    }

    pub fn transforms(&self) -> &[ObjectTransform] {
        &self.transforms
    }

    /// Interleaved `[x, y, z]` positions for particle populations.
    pub fn point_buffer(&self) -> &[[f32; 3]] {
        &self.point_buffer
    }

    pub fn advance_clock(&mut self, mode: MorphMode, angular_rate: f32, delta_time: f32) {
        self.clock
            .advance(mode.target_progress(), delta_time, self.profile.damping);
        self.clock.spin(angular_rate, delta_time);
    }

    /// Blends every object for the current clock state into the output buffers.
    pub fn apply_blend(&mut self) {
        let ease = self.clock.ease();
        let spin = self.clock.spin_angles(self.profile.chaos_co_rotation);
        let vortex = self.profile.vortex_strength;
        let layout = &self.layout;

        let pairs = layout.chaos().iter().zip(layout.tree());

        if self.kind.is_oriented() {
            let objects = pairs
                .zip(layout.rotation_hints())
                .zip(layout.sizes())
                .zip(self.transforms.iter_mut());
            for ((((chaos, tree), hints), size), out) in objects {
                let blended = polar_blend_with(*chaos, *tree, ease, spin, vortex);
                let euler = blend_orientation(hints, blended.unwrapped_angle(), ease);
                *out = ObjectTransform {
                    translation: blended.position,
                    rotation: orientation_quat(euler),
                    scale: *size,
                };
            }
        } else {
            for ((chaos, tree), out) in pairs.zip(self.point_buffer.iter_mut()) {
                *out = polar_blend_with(*chaos, *tree, ease, spin, vortex)
                    .position
                    .to_array();
            }
        }
    }
}
