use bevy::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};

use super::web_rpc::{RpcError, RpcRequest};
use crate::engine::input::MorphInputs;
use crate::engine::morph::MorphMode;
use crate::tools::photo_selection::SelectionState;

/// Applies one request to the input snapshot and returns its result.
///
/// Runs for requests and notifications alike; the transport decides whether
/// the result is sent back.
pub fn dispatch_rpc(
    request: &RpcRequest,
    inputs: &mut MorphInputs,
    selection: &SelectionState,
    fps: f32,
) -> Result<Value, RpcError> {
    match request.method.as_str() {
        "set_mode" => handle_set_mode(&request.params, inputs),
        "set_rotation" => handle_set_rotation(&request.params, inputs),
        "pointer" => handle_pointer(&request.params, inputs),
        "trigger" => handle_trigger(&request.params, inputs),
        "set_view" => handle_set_view(&request.params, inputs),
        "get_selection" => Ok(selection_json(selection)),
        "get_fps" => Ok(json!({ "fps": fps })),
        _ => Err(RpcError::method_not_found(&request.method)),
    }
}

/// Selection payload shared by `get_selection` and `selection_changed`.
pub fn selection_json(selection: &SelectionState) -> Value {
    json!({
        "active": selection.active(),
        "activated_at_ms": selection.activated_at_ms(),
    })
}

fn parse<'de, T: Deserialize<'de>>(params: &'de Value, expected: &str) -> Result<T, RpcError> {
    T::deserialize(params).map_err(|_| RpcError::invalid_params(expected))
}

fn handle_set_mode(params: &Value, inputs: &mut MorphInputs) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct SetModeParams {
        mode: MorphMode,
    }

    let parsed: SetModeParams = parse(params, "Expected 'mode' of FORMED or DISPERSED")?;
    if inputs.mode != parsed.mode {
        info!("Morph mode set over RPC: {:?}", parsed.mode);
    }
    inputs.mode = parsed.mode;

    Ok(json!({ "mode": inputs.mode }))
}

fn handle_set_rotation(params: &Value, inputs: &mut MorphInputs) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct SetRotationParams {
        base_rate: Option<f32>,
        boost: Option<f32>,
    }

    let parsed: SetRotationParams = parse(params, "Expected 'base_rate' and/or 'boost'")?;
    let finite = |value: Option<f32>| value.is_none_or(f32::is_finite);
    if !finite(parsed.base_rate) || !finite(parsed.boost) {
        return Err(RpcError::invalid_params("Rotation rates must be finite"));
    }

    if let Some(base_rate) = parsed.base_rate {
        inputs.base_rotation_rate = base_rate;
    }
    if let Some(boost) = parsed.boost {
        inputs.rotation_boost = boost;
    }

    Ok(json!({
        "base_rate": inputs.base_rotation_rate,
        "boost": inputs.rotation_boost,
    }))
}

#[derive(Deserialize, Default)]
struct PointerParams {
    x: Option<f32>,
    y: Option<f32>,
}

impl PointerParams {
    fn pointer(&self) -> Option<Vec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// `{x, y}` in screen fractions; omitting either clears the pointer.
fn handle_pointer(params: &Value, inputs: &mut MorphInputs) -> Result<Value, RpcError> {
    let parsed: PointerParams = if params.is_null() {
        PointerParams::default()
    } else {
        parse(params, "Expected optional 'x' and 'y' screen fractions")?
    };
    inputs.set_pointer(parsed.pointer());

    Ok(json!({ "pointer": inputs.pointer.map(|p| [p.x, p.y]) }))
}

/// Fires one trigger, moving the pointer first when a position is given.
fn handle_trigger(params: &Value, inputs: &mut MorphInputs) -> Result<Value, RpcError> {
    if !params.is_null() {
        let parsed: PointerParams = parse(params, "Expected optional 'x' and 'y' screen fractions")?;
        if let Some(pointer) = parsed.pointer() {
            inputs.set_pointer(Some(pointer));
        }
    }
    inputs.trigger();

    Ok(json!({ "trigger_count": inputs.trigger_count }))
}

fn handle_set_view(params: &Value, inputs: &mut MorphInputs) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct SetViewParams {
        #[serde(default)]
        pan_x: f32,
        #[serde(default)]
        pan_y: f32,
        #[serde(default)]
        zoom: f32,
    }

    let parsed: SetViewParams = parse(params, "Expected 'pan_x', 'pan_y' and 'zoom'")?;
    if !(parsed.pan_x.is_finite() && parsed.pan_y.is_finite() && parsed.zoom.is_finite()) {
        return Err(RpcError::invalid_params("View offsets must be finite"));
    }
    inputs.set_view(Vec2::new(parsed.pan_x, parsed.pan_y), parsed.zoom);

    Ok(json!({
        "pan_x": inputs.pan.x,
        "pan_y": inputs.pan.y,
        "zoom": inputs.zoom,
    }))
}
