use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use constants::layout::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::sampling::{cone_radius, fibonacci_sphere, ring_point, uniform_in_sphere};
use crate::engine::morph::polar_blend::{RotationHints, facing_yaw};

/// Object populations that make up the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Foliage,
    Lights,
    Ornaments,
    Photos,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Foliage,
        LayoutKind::Lights,
        LayoutKind::Ornaments,
        LayoutKind::Photos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Foliage => "foliage",
            LayoutKind::Lights => "lights",
            LayoutKind::Ornaments => "ornaments",
            LayoutKind::Photos => "photos",
        }
    }

    /// Oriented populations get a per-object transform; the others are
    /// written into a flat point buffer.
    pub fn is_oriented(self) -> bool {
        matches!(self, LayoutKind::Ornaments | LayoutKind::Photos)
    }

    fn seed_salt(self) -> u64 {
        match self {
            LayoutKind::Foliage => 0x9E37_79B9,
            LayoutKind::Lights => 0x85EB_CA6B,
            LayoutKind::Ornaments => 0xC2B2_AE35,
            LayoutKind::Photos => 0x27D4_EB2F,
        }
    }
}

/// Both target arrangements of one population plus per-object metadata.
///
/// Every sequence has the same length. There is no mutable access: a layout
/// is fixed for the lifetime of its population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationLayout {
    chaos: Vec<Vec3>,
    tree: Vec<Vec3>,
    sizes: Vec<f32>,
    rotation_hints: Vec<RotationHints>,
}

impl PopulationLayout {
    fn with_capacity(count: usize) -> Self {
        Self {
            chaos: Vec::with_capacity(count),
            tree: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
            rotation_hints: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, chaos: Vec3, tree: Vec3, size: f32, hints: RotationHints) {
        self.chaos.push(chaos);
        self.tree.push(tree);
        self.sizes.push(size);
        self.rotation_hints.push(hints);
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn chaos(&self) -> &[Vec3] {
        &self.chaos
    }

    pub fn tree(&self) -> &[Vec3] {
        &self.tree
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn rotation_hints(&self) -> &[RotationHints] {
        &self.rotation_hints
    }
}

/// Builds the chaos and tree layouts for `count` objects of `kind`.
///
/// Randomness comes only from `seed` (salted per kind), so the same inputs
/// always produce the same layout. `count == 0` yields an empty layout.
pub fn generate_layout(kind: LayoutKind, count: usize, seed: u64) -> PopulationLayout {
    let mut rng = StdRng::seed_from_u64(seed ^ kind.seed_salt());
    match kind {
        LayoutKind::Foliage => foliage_layout(count, &mut rng),
        LayoutKind::Lights => lights_layout(count, &mut rng),
        LayoutKind::Ornaments => ornaments_layout(count, &mut rng),
        LayoutKind::Photos => photos_layout(count, &mut rng),
    }
}

// Volume-filling rising spiral: each particle sits between the cone's inner
// core and its surface at its height.
fn foliage_layout(count: usize, rng: &mut StdRng) -> PopulationLayout {
    let mut layout = PopulationLayout::with_capacity(count);
    for i in 0..count {
        let t = (i as f32 + rng.random::<f32>()) / count as f32;
        let shell = cone_radius(TREE_BASE_RADIUS, t);
        let depth = FOLIAGE_CORE_FRACTION
            + (1.0 - FOLIAGE_CORE_FRACTION) * rng.random::<f32>().sqrt();
        let azimuth = t * FOLIAGE_TURNS * TAU
            + rng.random_range(-FOLIAGE_ANGLE_JITTER..=FOLIAGE_ANGLE_JITTER);
        let tree = ring_point(shell * depth, azimuth, TREE_BASE_Y + t * TREE_HEIGHT);
        let chaos = uniform_in_sphere(rng, CHAOS_RADIUS);
        let size = rng.random_range(0.6..=1.0);
        layout.push(chaos, tree, size, RotationHints::default());
    }
    layout
}

fn lights_layout(count: usize, rng: &mut StdRng) -> PopulationLayout {
    let mut layout = PopulationLayout::with_capacity(count);
    for i in 0..count {
        let t = (i as f32 + 0.5) / count as f32;
        let radius = cone_radius(TREE_BASE_RADIUS, t) * LIGHT_RADIUS_SCALE;
        let tree = ring_point(radius, t * LIGHT_TURNS * TAU, TREE_BASE_Y + t * TREE_HEIGHT);
        let chaos = uniform_in_sphere(rng, CHAOS_RADIUS);
        let size = rng.random_range(0.5..=1.0);
        layout.push(chaos, tree, size, RotationHints::default());
    }
    layout
}

fn ornaments_layout(count: usize, rng: &mut StdRng) -> PopulationLayout {
    let (low, high) = ORNAMENT_HEIGHT_RANGE;
    let (min_size, max_size) = ORNAMENT_SIZE_RANGE;
    let mut layout = PopulationLayout::with_capacity(count);
    for _ in 0..count {
        let t = rng.random_range(low..=high);
        let azimuth = rng.random_range(0.0..TAU);
        let radius = cone_radius(TREE_BASE_RADIUS, t) * ORNAMENT_RADIUS_SCALE;
        let tree = ring_point(radius, azimuth, TREE_BASE_Y + t * TREE_HEIGHT);
        let chaos = uniform_in_sphere(rng, CHAOS_RADIUS);
        let hints = RotationHints {
            chaos: Vec3::new(
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
            ),
            tree: Vec3::new(0.0, facing_yaw(azimuth), 0.0),
        };
        layout.push(chaos, tree, rng.random_range(min_size..=max_size), hints);
    }
    layout
}

// One evenly pitched spiral for the tree, a flattened Fibonacci sphere for
// the scattered state.
fn photos_layout(count: usize, rng: &mut StdRng) -> PopulationLayout {
    let mut layout = PopulationLayout::with_capacity(count);
    let last = count.saturating_sub(1);
    for i in 0..count {
        let t = if last == 0 { 0.0 } else { i as f32 / last as f32 };
        let height = PHOTO_SPIRAL_BOTTOM + t * (PHOTO_SPIRAL_TOP - PHOTO_SPIRAL_BOTTOM);
        let radius = PHOTO_BASE_RADIUS * (1.0 - t * (1.0 - PHOTO_TOP_RADIUS_RATIO));
        let azimuth = t * PHOTO_TURNS * TAU;
        let tree = ring_point(radius, azimuth, height);

        let jitter = 1.0 + rng.random_range(-PHOTO_CHAOS_JITTER..=PHOTO_CHAOS_JITTER);
        let lattice = fibonacci_sphere(i, count);
        let chaos = Vec3::new(lattice.x, lattice.y * PHOTO_CHAOS_FLATTEN, lattice.z)
            * PHOTO_CHAOS_RADIUS
            * jitter;

        let hints = RotationHints {
            chaos: Vec3::new(
                rng.random_range(-PHOTO_CHAOS_TILT..=PHOTO_CHAOS_TILT),
                rng.random_range(-PHOTO_CHAOS_TILT..=PHOTO_CHAOS_TILT),
                rng.random_range(-PHOTO_CHAOS_TILT..=PHOTO_CHAOS_TILT),
            ),
            tree: Vec3::new(PHOTO_TREE_TILT, facing_yaw(azimuth), 0.0),
        };
        layout.push(chaos, tree, 1.0, hints);
    }
    layout
}
