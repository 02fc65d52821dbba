use bevy::prelude::*;
use constants::morph::{
    PAN_DAMPING, PAN_RANGE, TRUNK_DAMPING, TRUNK_DISPERSED_SCALE, ZOOM_DAMPING,
};
use constants::render_settings::{CAMERA_BASE_DISTANCE, CAMERA_MIN_DISTANCE, ZOOM_RANGE};

use crate::engine::input::MorphInputs;
use crate::engine::morph::MorphMode;
use crate::engine::morph::damping::{damp, damp_vec2};

/// Whole-composition state damped towards the input targets each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionRig {
    /// World-space offset of the tree root in the XY plane.
    pub pan: Vec2,
    pub camera_distance: f32,
    /// Scale of the trunk and star: grows in when formed, shrinks away when
    /// dispersed.
    pub trunk_scale: f32,
}

impl Default for CompositionRig {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            camera_distance: CAMERA_BASE_DISTANCE,
            trunk_scale: TRUNK_DISPERSED_SCALE,
        }
    }
}

impl CompositionRig {
    pub fn advance(&mut self, inputs: &MorphInputs, delta_time: f32) {
        self.pan = damp_vec2(self.pan, inputs.pan * PAN_RANGE, PAN_DAMPING, delta_time);

        let distance_target =
            (CAMERA_BASE_DISTANCE - inputs.zoom * ZOOM_RANGE).max(CAMERA_MIN_DISTANCE);
        self.camera_distance = damp(
            self.camera_distance,
            distance_target,
            ZOOM_DAMPING,
            delta_time,
        );

        let trunk_target = match inputs.mode {
            MorphMode::Formed => 1.0,
            MorphMode::Dispersed => TRUNK_DISPERSED_SCALE,
        };
        self.trunk_scale = damp(self.trunk_scale, trunk_target, TRUNK_DAMPING, delta_time);
    }

    pub fn root_translation(&self) -> Vec3 {
        Vec3::new(self.pan.x, self.pan.y, 0.0)
    }

    /// Tree-space point to world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local + self.root_translation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_axes_damp_independently() {
        let mut rig = CompositionRig::default();
        let inputs = MorphInputs {
            pan: Vec2::new(1.0, 0.0),
            ..default()
        };
        rig.advance(&inputs, 0.1);
        assert!(rig.pan.x > 0.0 && rig.pan.x < PAN_RANGE);
        assert_eq!(rig.pan.y, 0.0);
    }

    #[test]
    fn trunk_grows_when_formed() {
        let mut rig = CompositionRig::default();
        let inputs = MorphInputs {
            mode: MorphMode::Formed,
            ..default()
        };
        for _ in 0..600 {
            rig.advance(&inputs, 1.0 / 60.0);
        }
        assert!((rig.trunk_scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_never_passes_minimum_distance() {
        let mut rig = CompositionRig::default();
        let inputs = MorphInputs {
            zoom: 1.0,
            ..default()
        };
        for _ in 0..2_000 {
            rig.advance(&inputs, 1.0 / 30.0);
            assert!(rig.camera_distance >= CAMERA_MIN_DISTANCE);
        }
    }

    #[test]
    fn zero_delta_time_keeps_rig() {
        let mut rig = CompositionRig::default();
        let before = rig;
        let inputs = MorphInputs {
            zoom: 0.5,
            pan: Vec2::ONE,
            ..default()
        };
        rig.advance(&inputs, 0.0);
        assert_eq!(rig, before);
    }
}
