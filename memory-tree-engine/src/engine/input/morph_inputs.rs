use bevy::prelude::*;
use constants::morph::{DEFAULT_BASE_ROTATION_RATE, ROTATION_BOOST_STEP};
use serde::{Deserialize, Serialize};

use crate::engine::morph::MorphMode;

/// Rotation rates configured by the manifest.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    pub base_rate: f32,
    /// Boost applied by the native `B` toggle.
    pub boost: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_ROTATION_RATE,
            boost: ROTATION_BOOST_STEP,
        }
    }
}

/// Externally supplied controls, sampled once per tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MorphInputs {
    pub mode: MorphMode,
    /// Rotation rate (rad/s) while formed.
    pub base_rotation_rate: f32,
    /// Additive rotation rate while formed.
    pub rotation_boost: f32,
    /// Pointer in screen fractions, origin top-left. `None` when no pointer
    /// or hand is tracked.
    pub pointer: Option<Vec2>,
    /// Incremented once per discrete tap/click.
    pub trigger_count: u64,
    /// Pan offset in `[-1, 1]` per axis.
    pub pan: Vec2,
    /// Zoom offset; positive moves the camera closer.
    pub zoom: f32,
}

impl Default for MorphInputs {
    fn default() -> Self {
        Self {
            mode: MorphMode::Dispersed,
            base_rotation_rate: DEFAULT_BASE_ROTATION_RATE,
            rotation_boost: 0.0,
            pointer: None,
            trigger_count: 0,
            pan: Vec2::ZERO,
            zoom: 0.0,
        }
    }
}

impl MorphInputs {
    pub fn angular_rate(&self) -> f32 {
        self.mode.angular_rate(self.base_rotation_rate, self.rotation_boost)
    }

    pub fn trigger(&mut self) {
        self.trigger_count = self.trigger_count.wrapping_add(1);
    }

    /// Clamps a pointer to the unit square; out-of-range input is treated as
    /// an edge position rather than dropped.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer.map(|p| p.clamp(Vec2::ZERO, Vec2::ONE));
    }

    pub fn set_view(&mut self, pan: Vec2, zoom: f32) {
        self.pan = pan.clamp(Vec2::splat(-1.0), Vec2::ONE);
        self.zoom = zoom.clamp(-1.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_counter_increments() {
        let mut inputs = MorphInputs::default();
        inputs.trigger();
        inputs.trigger();
        assert_eq!(inputs.trigger_count, 2);
    }

    #[test]
    fn pointer_and_view_are_clamped() {
        let mut inputs = MorphInputs::default();
        inputs.set_pointer(Some(Vec2::new(1.4, -0.2)));
        assert_eq!(inputs.pointer, Some(Vec2::new(1.0, 0.0)));
        inputs.set_view(Vec2::new(3.0, -0.5), -4.0);
        assert_eq!(inputs.pan, Vec2::new(1.0, -0.5));
        assert_eq!(inputs.zoom, -1.0);
    }

    #[test]
    fn formed_rate_includes_boost() {
        let inputs = MorphInputs {
            mode: MorphMode::Formed,
            base_rotation_rate: 0.25,
            rotation_boost: 0.5,
            ..default()
        };
        assert_eq!(inputs.angular_rate(), 0.75);
    }
}
