use std::f64::consts::TAU;

use constants::morph::IDLE_ROTATION_RATE;
use serde::{Deserialize, Serialize};

use super::damping::{damp, ease};

/// Discrete arrangement the composition is heading towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MorphMode {
    #[default]
    Dispersed,
    Formed,
}

impl MorphMode {
    pub fn target_progress(self) -> f32 {
        match self {
            MorphMode::Dispersed => 0.0,
            MorphMode::Formed => 1.0,
        }
    }

    /// Idle drift while dispersed, the tunable rate plus boost while formed.
    pub fn angular_rate(self, base_rate: f32, boost: f32) -> f32 {
        match self {
            MorphMode::Dispersed => IDLE_ROTATION_RATE,
            MorphMode::Formed => base_rate + boost,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MorphMode::Dispersed => MorphMode::Formed,
            MorphMode::Formed => MorphMode::Dispersed,
        }
    }
}

/// Rotation angles fed to the polar blend for one tick, reduced to `[0, 2π)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinAngles {
    /// Rotation applied to the tree-side target azimuth.
    pub tree: f32,
    /// Rotation applied to the chaos-side azimuth (co-rotation fraction).
    pub chaos: f32,
    /// Whole turns removed from `tree`, so `tree_turns + tree` is the
    /// accumulated rotation.
    pub tree_turns: f64,
}

impl SpinAngles {
    pub fn new(rotation_angle: f64, chaos_co_rotation: f32) -> Self {
        let tree = rotation_angle.rem_euclid(TAU);
        Self {
            tree: tree as f32,
            chaos: (rotation_angle * f64::from(chaos_co_rotation)).rem_euclid(TAU) as f32,
            tree_turns: rotation_angle - tree,
        }
    }
}

/// Damped morph progress and accumulated rotation for one population.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MorphClock {
    progress: f32,
    rotation_angle: f64,
}

impl MorphClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Total rotation since creation. Never reset; kept in f64 so long
    /// sessions do not lose precision.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Moves progress towards `target_progress` by exponential damping.
    pub fn advance(&mut self, target_progress: f32, delta_time: f32, damping_rate: f32) {
        self.progress = damp(self.progress, target_progress, damping_rate, delta_time)
            .clamp(0.0, 1.0);
    }

    pub fn spin(&mut self, angular_rate: f32, delta_time: f32) {
        self.rotation_angle += f64::from(angular_rate) * f64::from(delta_time);
    }

    /// Smoothstep of the raw progress; the value every blend uses.
    pub fn ease(&self) -> f32 {
        ease(self.progress)
    }

    pub fn spin_angles(&self, chaos_co_rotation: f32) -> SpinAngles {
        SpinAngles::new(self.rotation_angle, chaos_co_rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_time_changes_nothing() {
        let mut clock = MorphClock::new();
        clock.advance(1.0, 0.5, 2.0);
        clock.spin(0.7, 0.5);
        let before = clock;

        clock.advance(1.0, 0.0, 2.0);
        clock.spin(0.7, 0.0);

        assert_eq!(clock, before);
    }

    #[test]
    fn progress_approaches_target_without_passing_it() {
        let mut clock = MorphClock::new();
        let mut ticks = 0;
        while (1.0 - clock.progress()) > 1e-4 {
            let before = clock.progress();
            clock.advance(1.0, 1.0 / 60.0, 2.0);
            assert!(clock.progress() > before);
            assert!(clock.progress() <= 1.0);
            ticks += 1;
            assert!(ticks < 2_000, "progress did not converge");
        }

        while clock.progress() > 1e-4 {
            let before = clock.progress();
            clock.advance(0.0, 1.0 / 60.0, 2.0);
            assert!(clock.progress() < before);
            assert!(clock.progress() >= 0.0);
        }
    }

    #[test]
    fn spin_accumulates_without_reset() {
        let mut clock = MorphClock::new();
        for _ in 0..600 {
            clock.spin(3.0, 1.0);
        }
        assert!((clock.rotation_angle() - 1800.0).abs() < 1e-9);

        let spin = clock.spin_angles(0.5);
        assert!((0.0..std::f32::consts::TAU).contains(&spin.tree));
        assert!((f64::from(spin.chaos) - 900.0_f64.rem_euclid(TAU)).abs() < 1e-5);
        assert!((spin.tree_turns / TAU - (spin.tree_turns / TAU).round()).abs() < 1e-9);
        assert!((spin.tree_turns + f64::from(spin.tree) - 1800.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_rate_follows_mode() {
        assert_eq!(MorphMode::Dispersed.angular_rate(0.5, 1.0), IDLE_ROTATION_RATE);
        assert_eq!(MorphMode::Formed.angular_rate(0.5, 1.0), 1.5);
        assert_eq!(MorphMode::Formed.target_progress(), 1.0);
        assert_eq!(MorphMode::Dispersed.toggled(), MorphMode::Formed);
    }
}
