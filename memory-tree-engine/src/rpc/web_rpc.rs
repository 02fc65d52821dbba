use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::methods::dispatch_rpc;
use crate::engine::input::MorphInputs;
use crate::tools::photo_selection::SelectionState;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure. Requests without an `id` are
/// notifications and get no response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource buffering outgoing traffic to the host page until the end of
/// the frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing the postMessage bridge to the embedding page.
///
/// Incoming requests are applied to `MorphInputs` before the frame update
/// reads them, so a mode change sent this frame takes effect this frame.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .init_resource::<MorphInputs>()
            .init_resource::<SelectionState>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                PreUpdate,
                (process_incoming_messages, handle_rpc_messages).chain(),
            )
            .add_systems(Last, send_outgoing_messages);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC bridge disabled");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Ownership moves to JS for the lifetime of the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Messages received by the JS listener, drained once per frame.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw JSON text of one message from the host page.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Parses and dispatches queued messages. Also reachable from native builds
/// by writing `IncomingRpcMessage` events directly.
pub fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    mut inputs: ResMut<MorphInputs>,
    selection: Res<SelectionState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let fps = diagnostics.as_deref().map(smoothed_fps).unwrap_or(0.0);

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let result = dispatch_rpc(&request, &mut inputs, &selection, fps);
                if let Err(error) = &result {
                    warn!("RPC {} failed: {}", request.method, error.message);
                }
                if let Some(response) = build_response(request.id, result) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Unparseable RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Smoothed FPS from the frame time diagnostics, or 0 before the first sample.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32
}

/// Wraps a dispatch result for a request. Notifications produce nothing.
fn build_response(
    id: Option<serde_json::Value>,
    result: Result<serde_json::Value, RpcError>,
) -> Option<RpcResponse> {
    let id = id?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
