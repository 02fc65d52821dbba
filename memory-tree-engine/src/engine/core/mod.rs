//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup, plugin configuration and per-frame system ordering.
pub mod app_setup;

/// Application state machine and loading progress notifications.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
