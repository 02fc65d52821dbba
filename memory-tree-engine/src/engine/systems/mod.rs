//! Runtime diagnostics and host notifications.
//!
//! Nothing here feeds back into the morph; these systems only observe state
//! and push it to the host page or the native overlay.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates the native overlay.
pub mod fps_tracking;

/// Morph status and selection change notifications.
pub mod notifications;
