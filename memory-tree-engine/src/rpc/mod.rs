//! JSON-RPC 2.0 bridge between the embedding web page and the tree.
//!
//! On wasm the app runs inside an iframe. The host page owns gesture and hand
//! tracking and forwards the results here as RPC messages; the engine pushes
//! selection changes and diagnostics back as notifications.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ dispatch_rpc() -> MorphInputs
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        ├─ Notification (no ID) ───────────────> │  applied, no reply
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Pointer updates arrive every frame during hand tracking, so hosts should
//! send them as notifications.
//!
//! ## Inbound Methods
//!
//! - `set_mode` `{mode: "FORMED" | "DISPERSED"}`
//! - `set_rotation` `{base_rate?, boost?}` in rad/s
//! - `pointer` `{x?, y?}` screen fractions, origin top-left; omit to clear
//! - `trigger` `{x?, y?}` one discrete tap, optionally moving the pointer
//! - `set_view` `{pan_x, pan_y, zoom}` each in `[-1, 1]`
//! - `get_selection` returns `{active, activated_at_ms}`
//! - `get_fps` returns `{fps}`
//!
//! ## Outbound Notifications
//!
//! - `selection_changed` `{active, activated_at_ms}`
//! - `morph_progress` `{mode, progress}` when the tree settles
//! - `fps_update` `{fps}` every 0.5 s
//! - `photo_texture_failed` `{id, url}` when a photo and its fallback both fail
//! - `loading_progress` `{stage, photos_ready, photos_total}`
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// Method dispatch onto `MorphInputs` and the selection state.
pub mod methods;

/// postMessage transport, request parsing and outgoing queues.
pub mod web_rpc;

pub use methods::{dispatch_rpc, selection_json};
pub use web_rpc::{RpcError, RpcRequest, WebRpcInterface, WebRpcPlugin};
