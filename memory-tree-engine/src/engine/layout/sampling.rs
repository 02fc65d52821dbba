use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

/// Golden angle in radians, the azimuth step of the Fibonacci lattice.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Uniformly distributed point inside a sphere of `radius` around the origin.
pub fn uniform_in_sphere<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let z: f32 = rng.random_range(-1.0..=1.0);
    let phi: f32 = rng.random_range(0.0..TAU);
    let ring = (1.0 - z * z).max(0.0).sqrt();
    let direction = Vec3::new(ring * phi.cos(), z, ring * phi.sin());
    direction * radius * rng.random::<f32>().cbrt()
}

/// Point `index` of an `count`-point Fibonacci lattice on the unit sphere.
pub fn fibonacci_sphere(index: usize, count: usize) -> Vec3 {
    if count == 0 {
        return Vec3::ZERO;
    }
    let y = 1.0 - 2.0 * (index as f32 + 0.5) / count as f32;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let phi = index as f32 * GOLDEN_ANGLE;
    Vec3::new(ring * phi.cos(), y, ring * phi.sin())
}

/// Point on a cylinder-coordinate ring at `azimuth` (measured from +X towards +Z).
#[inline]
pub fn ring_point(radius: f32, azimuth: f32, height: f32) -> Vec3 {
    Vec3::new(radius * azimuth.cos(), height, radius * azimuth.sin())
}

/// Cone radius at normalised height `t`, shrinking linearly to zero at the tip.
#[inline]
pub fn cone_radius(base_radius: f32, t: f32) -> f32 {
    base_radius * (1.0 - t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn sphere_fill_stays_inside_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            assert!(uniform_in_sphere(&mut rng, 3.0).length() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn fibonacci_points_are_unit_length_and_descend() {
        let mut last_y = f32::INFINITY;
        for i in 0..64 {
            let point = fibonacci_sphere(i, 64);
            assert!((point.length() - 1.0).abs() < 1e-5);
            assert!(point.y < last_y);
            last_y = point.y;
        }
    }

    #[test]
    fn cone_radius_shrinks_to_tip() {
        assert_eq!(cone_radius(4.0, 0.0), 4.0);
        assert_eq!(cone_radius(4.0, 1.0), 0.0);
        assert_eq!(cone_radius(4.0, 0.5), 2.0);
    }
}
