/// Exponential damping rate for the morph progress of every population.
pub const MORPH_DAMPING: f32 = 2.0;

/// Rotation rate (rad/s) while the composition is dispersed.
pub const IDLE_ROTATION_RATE: f32 = 0.05;

/// Default rotation rate (rad/s) while formed, before any boost.
pub const DEFAULT_BASE_ROTATION_RATE: f32 = 0.25;

/// Extra rotation rate added by the boost control.
pub const ROTATION_BOOST_STEP: f32 = 0.6;

/// Per population vortex twist (radians at full dispersal) and chaos
/// co-rotation factor. Stronger twist on the inner layers gives parallax.
pub const FOLIAGE_VORTEX_STRENGTH: f32 = 4.0;
pub const FOLIAGE_CHAOS_CO_ROTATION: f32 = 0.3;

pub const LIGHTS_VORTEX_STRENGTH: f32 = 3.0;
pub const LIGHTS_CHAOS_CO_ROTATION: f32 = 0.25;

pub const ORNAMENTS_VORTEX_STRENGTH: f32 = 2.0;
pub const ORNAMENTS_CHAOS_CO_ROTATION: f32 = 0.2;

pub const PHOTOS_VORTEX_STRENGTH: f32 = 1.0;
pub const PHOTOS_CHAOS_CO_ROTATION: f32 = 0.1;

/// Damping rates for the composition rig.
pub const PAN_DAMPING: f32 = 4.0;
pub const ZOOM_DAMPING: f32 = 3.0;
pub const TRUNK_DAMPING: f32 = 2.5;

/// Trunk/core scale while dispersed. Formed is always 1.
pub const TRUNK_DISPERSED_SCALE: f32 = 0.05;

/// World units one unit of pan input moves the tree.
pub const PAN_RANGE: f32 = 6.0;
