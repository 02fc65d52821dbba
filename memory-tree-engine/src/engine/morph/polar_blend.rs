use std::f32::consts::FRAC_PI_2;
use std::f64::consts::TAU;

use bevy::prelude::*;
use constants::morph::*;

use super::clock::SpinAngles;
use super::damping::lerp;

/// Per-population blend tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphProfile {
    /// Azimuth offset (radians) added to the tree target at full dispersal.
    pub vortex_strength: f32,
    /// Fraction of the clock rotation applied to the chaos side.
    pub chaos_co_rotation: f32,
    /// Exponential damping rate of the population clock.
    pub damping: f32,
}

impl MorphProfile {
    pub const FOLIAGE: Self = Self {
        vortex_strength: FOLIAGE_VORTEX_STRENGTH,
        chaos_co_rotation: FOLIAGE_CHAOS_CO_ROTATION,
        damping: MORPH_DAMPING,
    };
    pub const LIGHTS: Self = Self {
        vortex_strength: LIGHTS_VORTEX_STRENGTH,
        chaos_co_rotation: LIGHTS_CHAOS_CO_ROTATION,
        damping: MORPH_DAMPING,
    };
    pub const ORNAMENTS: Self = Self {
        vortex_strength: ORNAMENTS_VORTEX_STRENGTH,
        chaos_co_rotation: ORNAMENTS_CHAOS_CO_ROTATION,
        damping: MORPH_DAMPING,
    };
    pub const PHOTOS: Self = Self {
        vortex_strength: PHOTOS_VORTEX_STRENGTH,
        chaos_co_rotation: PHOTOS_CHAOS_CO_ROTATION,
        damping: MORPH_DAMPING,
    };
}

/// Euler angles (XYZ order) an oriented object takes in each layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationHints {
    pub chaos: Vec3,
    pub tree: Vec3,
}

/// Result of blending one object for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedPoint {
    pub position: Vec3,
    /// Target angular position: tree azimuth + vortex twist + rotation.
    pub angle: f32,
    /// Whole turns the clock rotation had before it was reduced into `angle`.
    pub turns: f64,
}

impl BlendedPoint {
    /// `angle` with the reduced turns added back. Continuous while the clock
    /// spins, unlike `angle` which jumps by 2π at every wrap.
    pub fn unwrapped_angle(&self) -> f64 {
        f64::from(self.angle) + self.turns
    }
}

/// Radius and azimuth of a point around the Y axis. `atan2(0, 0)` is 0.
#[inline]
pub fn cylindrical(point: Vec3) -> (f32, f32) {
    (Vec2::new(point.x, point.z).length(), point.z.atan2(point.x))
}

/// Rotates `point` about the Y axis so that its azimuth grows by `angle`.
#[inline]
pub fn rotate_about_y(point: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(
        point.x * cos - point.z * sin,
        point.y,
        point.x * sin + point.z * cos,
    )
}

/// Blends a chaos/tree pair using the population profile and the raw clock
/// rotation.
pub fn polar_blend(
    chaos: Vec3,
    tree: Vec3,
    ease: f32,
    rotation_angle: f32,
    profile: &MorphProfile,
) -> BlendedPoint {
    let spin = SpinAngles::new(f64::from(rotation_angle), profile.chaos_co_rotation);
    polar_blend_with(chaos, tree, ease, spin, profile.vortex_strength)
}

/// Cylindrical interpolation with a decaying vortex twist.
///
/// Height and radius are lerped independently; the target azimuth is the tree
/// azimuth plus `(1 - ease) * vortex_strength` plus the tree spin. The chaos
/// side is rotated by its own (slower) spin, and the final position lerps the
/// rotated chaos point towards the target. At the ends of the ease range the
/// rotated endpoints are returned directly.
#[inline]
pub fn polar_blend_with(
    chaos: Vec3,
    tree: Vec3,
    ease: f32,
    spin: SpinAngles,
    vortex_strength: f32,
) -> BlendedPoint {
    let (tree_radius, tree_azimuth) = cylindrical(tree);

    if ease >= 1.0 {
        return BlendedPoint {
            position: rotate_about_y(tree, spin.tree),
            angle: tree_azimuth + spin.tree,
            turns: spin.tree_turns,
        };
    }

    let twist = (1.0 - ease.max(0.0)) * vortex_strength;
    let angle = tree_azimuth + twist + spin.tree;
    let rotated_chaos = rotate_about_y(chaos, spin.chaos);

    if ease <= 0.0 {
        return BlendedPoint {
            position: rotated_chaos,
            angle,
            turns: spin.tree_turns,
        };
    }

    let (chaos_radius, _) = cylindrical(chaos);
    let radius = lerp(chaos_radius, tree_radius, ease);
    let height = lerp(chaos.y, tree.y, ease);
    let (sin, cos) = angle.sin_cos();
    let target = Vec3::new(radius * cos, height, radius * sin);

    BlendedPoint {
        position: rotated_chaos.lerp(target, ease),
        angle,
        turns: spin.tree_turns,
    }
}

/// Yaw that turns a panel (facing +Z) outwards at azimuth `angle`.
#[inline]
pub fn facing_yaw(angle: f32) -> f32 {
    FRAC_PI_2 - angle
}

/// Euler orientation for the current tick. Yaw heads from the chaos hint
/// towards the outward facing of `current_angle`; pitch and roll lerp between
/// the stored hints.
///
/// `current_angle` must be unwrapped (see [`BlendedPoint::unwrapped_angle`]):
/// the yaw lerp is not periodic, so a reduced angle flips panels mid-morph.
/// The eased facing term is reduced in f64 before narrowing.
#[inline]
pub fn blend_orientation(hints: &RotationHints, current_angle: f64, ease: f32) -> Vec3 {
    let ease = ease.clamp(0.0, 1.0);
    let facing = f64::from(FRAC_PI_2) - current_angle;
    let eased_facing = (f64::from(ease) * facing).rem_euclid(TAU) as f32;
    Vec3::new(
        lerp(hints.chaos.x, hints.tree.x, ease),
        hints.chaos.y * (1.0 - ease) + eased_facing,
        lerp(hints.chaos.z, hints.tree.z, ease),
    )
}

#[inline]
pub fn orientation_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAOS: Vec3 = Vec3::new(-6.0, 4.0, 2.5);
    const TREE: Vec3 = Vec3::new(1.5, -3.0, -2.0);

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn full_ease_lands_on_tree_point() {
        let out = polar_blend(CHAOS, TREE, 1.0, 0.0, &MorphProfile::FOLIAGE);
        assert_eq!(out.position, TREE);
    }

    #[test]
    fn full_ease_ignores_vortex_but_keeps_rotation() {
        let spin = SpinAngles {
            tree: 0.8,
            chaos: 0.2,
            ..default()
        };
        let out = polar_blend_with(CHAOS, TREE, 1.0, spin, 50.0);
        assert_close(out.position, rotate_about_y(TREE, 0.8));
        let (radius, _) = cylindrical(out.position);
        assert!((radius - cylindrical(TREE).0).abs() < 1e-5);
    }

    #[test]
    fn zero_ease_is_rotated_chaos_point() {
        let out = polar_blend(CHAOS, TREE, 0.0, 0.0, &MorphProfile::LIGHTS);
        assert_eq!(out.position, CHAOS);

        let profile = MorphProfile::PHOTOS;
        let out = polar_blend(CHAOS, TREE, 0.0, 2.0, &profile);
        assert_close(
            out.position,
            rotate_about_y(CHAOS, 2.0 * profile.chaos_co_rotation),
        );
    }

    #[test]
    fn tree_point_is_a_fixed_point() {
        let out = polar_blend(TREE, TREE, 1.0, 0.0, &MorphProfile::ORNAMENTS);
        assert_eq!(out.position, TREE);
    }

    #[test]
    fn vortex_twist_decays_with_ease() {
        let (_, azimuth) = cylindrical(TREE);
        let spin = SpinAngles::default();

        let half = polar_blend_with(CHAOS, TREE, 0.5, spin, 2.0);
        assert!((half.angle - (azimuth + 1.0)).abs() < 1e-6);

        let nearly = polar_blend_with(CHAOS, TREE, 0.999, spin, 2.0);
        assert!((nearly.angle - azimuth).abs() < 0.01);
    }

    #[test]
    fn height_and_radius_stay_between_layouts() {
        let out = polar_blend(CHAOS, TREE, 0.5, 0.0, &MorphProfile::FOLIAGE);
        assert!(out.position.y < CHAOS.y && out.position.y > TREE.y);
        let (radius, _) = cylindrical(out.position);
        assert!(radius <= cylindrical(CHAOS).0 + 1e-4);
    }

    #[test]
    fn axis_points_do_not_produce_nan() {
        let chaos = Vec3::new(0.0, 3.0, 0.0);
        let tree = Vec3::new(0.0, -2.0, 0.0);
        for ease in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let out = polar_blend(chaos, tree, ease, 1.3, &MorphProfile::FOLIAGE);
            assert!(out.position.is_finite(), "NaN at ease {ease}");
            assert!(out.angle.is_finite());
            assert!(cylindrical(out.position).0 < 1e-5);
        }
    }

    #[test]
    fn orientation_faces_outward_when_formed() {
        let hints = RotationHints {
            chaos: Vec3::new(0.1, -0.2, 0.05),
            tree: Vec3::new(-0.12, 0.0, 0.0),
        };
        let euler = blend_orientation(&hints, 0.7, 1.0);
        assert!((euler.y - (FRAC_PI_2 - 0.7)).abs() < 1e-6);
        assert_eq!(euler.x, hints.tree.x);

        let scattered = blend_orientation(&hints, 0.7, 0.0);
        assert_eq!(scattered, hints.chaos);
    }

    #[test]
    fn orientation_is_continuous_across_rotation_wrap() {
        let hints = RotationHints {
            chaos: Vec3::new(0.3, -1.1, 0.2),
            tree: Vec3::new(-0.12, 0.0, 0.0),
        };
        let profile = MorphProfile::PHOTOS;
        let orient = |rotation: f64| {
            let spin = SpinAngles::new(rotation, profile.chaos_co_rotation);
            let out = polar_blend_with(CHAOS, TREE, 0.5, spin, profile.vortex_strength);
            orientation_quat(blend_orientation(&hints, out.unwrapped_angle(), 0.5))
        };

        for turns in [1.0, 2.0, 200.0] {
            let wrap = turns * TAU;
            let jump = orient(wrap - 0.001).angle_between(orient(wrap + 0.001));
            assert!(jump < 0.05, "{jump} rad jump at {turns} turns");
        }
    }

    #[test]
    fn facing_yaw_points_panel_normal_away_from_axis() {
        let angle = 1.1_f32;
        let normal = orientation_quat(Vec3::new(0.0, facing_yaw(angle), 0.0)) * Vec3::Z;
        let outward = Vec3::new(angle.cos(), 0.0, angle.sin());
        assert!(normal.dot(outward) > 0.999);
    }
}
