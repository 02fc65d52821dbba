/// Vertical extent of the tree formation, centred on the origin.
pub const TREE_HEIGHT: f32 = 14.0;

/// Y coordinate of the tree base. The tip sits at `TREE_BASE_Y + TREE_HEIGHT`.
pub const TREE_BASE_Y: f32 = -7.0;

/// Cone radius at the base of the tree.
pub const TREE_BASE_RADIUS: f32 = 5.5;

/// Radius of the sphere that particle-like chaos layouts fill.
pub const CHAOS_RADIUS: f32 = 15.0;

/// Full azimuth turns the foliage spiral makes from base to tip.
pub const FOLIAGE_TURNS: f32 = 12.0;

/// Maximum azimuth jitter (radians) applied to each foliage particle.
pub const FOLIAGE_ANGLE_JITTER: f32 = 0.35;

/// Innermost fraction of the cone radius foliage may occupy.
pub const FOLIAGE_CORE_FRACTION: f32 = 0.35;

/// Full turns of the string-light spiral.
pub const LIGHT_TURNS: f32 = 9.0;

/// Lights sit slightly outside the foliage so they read on top of it.
pub const LIGHT_RADIUS_SCALE: f32 = 1.05;

/// Ornaments sit slightly inside the foliage surface.
pub const ORNAMENT_RADIUS_SCALE: f32 = 0.92;

/// Height band (as a fraction of the tree) ornaments are scattered in.
pub const ORNAMENT_HEIGHT_RANGE: (f32, f32) = (0.04, 0.9);

/// Ornament sphere radius range.
pub const ORNAMENT_SIZE_RANGE: (f32, f32) = (0.18, 0.42);

/// Photo spiral bottom and top heights.
pub const PHOTO_SPIRAL_BOTTOM: f32 = -5.5;
pub const PHOTO_SPIRAL_TOP: f32 = 5.0;

/// Photo spiral radius at the bottom; shrinks towards `PHOTO_TOP_RADIUS_RATIO`
/// of this value at the top.
pub const PHOTO_BASE_RADIUS: f32 = 7.5;
pub const PHOTO_TOP_RADIUS_RATIO: f32 = 0.3;

/// Full turns of the photo spiral.
pub const PHOTO_TURNS: f32 = 2.5;

/// Slight backwards tilt of photo panels in the formed tree.
pub const PHOTO_TREE_TILT: f32 = -0.12;

/// Radius of the Fibonacci sphere used for the photo chaos layout.
pub const PHOTO_CHAOS_RADIUS: f32 = 12.0;

/// Vertical squash applied to the photo Fibonacci sphere.
pub const PHOTO_CHAOS_FLATTEN: f32 = 0.6;

/// Relative radius jitter that breaks banding on the Fibonacci sphere.
pub const PHOTO_CHAOS_JITTER: f32 = 0.08;

/// Maximum per-axis orientation jitter for scattered photo panels (radians).
pub const PHOTO_CHAOS_TILT: f32 = 0.15;

/// Default population sizes when the manifest does not override them.
pub const DEFAULT_FOLIAGE_COUNT: usize = 12_000;
pub const DEFAULT_LIGHT_COUNT: usize = 360;
pub const DEFAULT_ORNAMENT_COUNT: usize = 140;

/// Seed for all layout randomness.
pub const DEFAULT_LAYOUT_SEED: u64 = 0x7_2EE5;
