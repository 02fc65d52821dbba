//! Tuning constants shared by the memory tree engine.

pub mod layout;
pub mod morph;
pub mod render_settings;
pub mod selection;
pub mod texture;
