use bevy::prelude::Color;

pub const FOLIAGE_COLOUR: Color = Color::srgb(0.08, 0.45, 0.22);
pub const LIGHT_COLOUR: Color = Color::srgb(1.0, 0.82, 0.45);
pub const ORNAMENT_COLOURS: [Color; 4] = [
    Color::srgb(0.78, 0.1, 0.12),
    Color::srgb(0.95, 0.75, 0.2),
    Color::srgb(0.75, 0.78, 0.82),
    Color::srgb(0.2, 0.35, 0.8),
];
pub const TRUNK_COLOUR: Color = Color::srgb(0.32, 0.2, 0.12);
pub const STAR_COLOUR: Color = Color::srgb(1.0, 0.9, 0.5);

/// Colour shown on a photo panel while its texture is loading.
pub const PHOTO_PLACEHOLDER_COLOUR: Color = Color::srgb(0.85, 0.85, 0.8);

/// Colour shown on a photo panel whose texture failed twice.
pub const PHOTO_ERRORED_COLOUR: Color = Color::srgb(0.35, 0.1, 0.1);

/// Photo panel width and height in world units.
pub const PHOTO_PANEL_SIZE: (f32, f32) = (1.2, 1.5);

/// Camera distance from the tree axis before zoom is applied.
pub const CAMERA_BASE_DISTANCE: f32 = 28.0;

/// Height the camera looks at.
pub const CAMERA_FOCUS_Y: f32 = 0.0;

/// World units one unit of zoom input moves the camera.
pub const ZOOM_RANGE: f32 = 12.0;

/// Closest the camera may get to the tree axis.
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;

pub const BACKGROUND_COLOUR: Color = Color::srgb(0.01, 0.03, 0.02);
