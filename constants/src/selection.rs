/// Maximum distance (NDC units) between the pointer and a projected panel.
pub const SELECTION_THRESHOLD: f32 = 0.05;

/// Time a selection stays locked against new triggers, in milliseconds.
pub const SELECTION_LOCK_MS: f64 = 3000.0;
