use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::animation::sequencer::LaunchSequencer;
use crate::engine::animation::systems::ScrollInput;
use crate::engine::assets::world_assets::WorldAssets;
use crate::engine::loading::progress::LoadingProgress;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure. A request without `id` is a notification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
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

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> impl Iterator<Item = &RpcNotification> {
        self.outgoing_notifications.iter()
    }
}

/// Plugin establishing the postMessage bridge to the host page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

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
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message_str: String = data.into();

        let from_self = match (event.source(), window()) {
            (Some(source), Some(own)) => js_sys::Object::is(&source, &own),
            _ => false,
        };

        if accepts_host_message(&message_str, from_self) {
            if let Ok(mut queue) = queue_clone.lock() {
                queue.push(message_str);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, host messages disabled");
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

/// Only string payloads that look like JSON-RPC and were posted by another
/// window are queued. On a top-level page our own posts land here too.
#[cfg(any(target_arch = "wasm32", test))]
fn accepts_host_message(message: &str, from_self: bool) -> bool {
    !from_self && message.contains("jsonrpc")
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
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

/// Read-only world state the request handlers can answer from.
struct RpcContext<'a> {
    diagnostics: &'a DiagnosticsStore,
    sequencer: &'a LaunchSequencer,
    loading: &'a LoadingProgress,
    world_assets: Option<&'a WorldAssets>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    sequencer: Res<LaunchSequencer>,
    loading: Res<LoadingProgress>,
    world_assets: Option<Res<WorldAssets>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut scroll_events: EventWriter<ScrollInput>,
) {
    let context = RpcContext {
        diagnostics: &diagnostics,
        sequencer: &sequencer,
        loading: &loading,
        world_assets: world_assets.as_deref(),
    };
    let mut scroll_inputs = Vec::new();

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(&request, &context, &mut scroll_inputs)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
            }
        }
    }

    scroll_events.write_batch(scroll_inputs);
}

/// Handle one request or notification. Returns a response only when the
/// message carried an id.
fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    scroll_inputs: &mut Vec<ScrollInput>,
) -> Option<RpcResponse> {
    let result = if request.jsonrpc != "2.0" {
        Err(RpcError::invalid_request("Expected jsonrpc \"2.0\""))
    } else {
        match request.method.as_str() {
            "get_fps" => handle_get_fps(context.diagnostics),
            "get_scroll_prompt" => handle_get_scroll_prompt(context.sequencer),
            "get_loading_progress" => {
                handle_get_loading_progress(context.loading, context.world_assets)
            }
            "scroll" => handle_scroll(&request.params, context.sequencer, scroll_inputs),
            _ => {
                warn!("Unknown RPC method: {}", request.method);
                Err(RpcError {
                    code: -32601,
                    message: "Method not found".to_string(),
                    data: Some(serde_json::json!({"method": request.method})),
                })
            }
        }
    };

    // Notifications get no reply, successful or not.
    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(create_error_response(id, error)),
    }
}

/// Queue a forwarded page scroll. Accepted only once the launch is live.
fn handle_scroll(
    params: &serde_json::Value,
    sequencer: &LaunchSequencer,
    scroll_inputs: &mut Vec<ScrollInput>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ScrollParams {
        delta_y: f32,
    }

    let scroll_params = serde_json::from_value::<ScrollParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected numeric 'delta_y' parameter"))?;

    let accepted = sequencer.scroll_prompt_visible();
    if accepted {
        scroll_inputs.push(ScrollInput {
            delta_y: scroll_params.delta_y,
        });
    }

    Ok(serde_json::json!({
        "accepted": accepted
    }))
}

fn handle_get_scroll_prompt(sequencer: &LaunchSequencer) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "visible": sequencer.scroll_prompt_visible(),
        "phase": sequencer.phase().as_str(),
    }))
}

fn handle_get_loading_progress(
    loading: &LoadingProgress,
    world_assets: Option<&WorldAssets>,
) -> Result<serde_json::Value, RpcError> {
    let assets: Vec<serde_json::Value> = world_assets
        .map(|assets| {
            assets
                .tracked()
                .iter()
                .map(|asset| serde_json::json!({ "name": asset.name, "status": asset.status }))
                .collect()
        })
        .unwrap_or_default();

    Ok(serde_json::json!({
        "manifest_loaded": loading.manifest_loaded,
        "manifest_fallback": loading.manifest_fallback,
        "scene_populated": loading.scene_populated,
        "assets": assets,
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

fn create_error_response(id: serde_json::Value, error: RpcError) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(error),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Notifications first, then responses, to keep ordering stable.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    match window.parent().ok().flatten() {
                        // Top-level page: there is no host to talk to.
                        Some(parent) if js_sys::Object::is(&parent, &window) => {}
                        Some(parent) => {
                            if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                                error!("Failed to send message to parent: {:?}", e);
                            }
                        }
                        None => warn!("No parent window available for message transmission"),
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
        // No host page on native targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: serde_json::Value, id: Option<i64>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: id.map(serde_json::Value::from),
        }
    }

    fn interactive_sequencer() -> LaunchSequencer {
        let mut sequencer = LaunchSequencer::default();
        sequencer.tick(&mut Transform::from_xyz(0.0, 0.0, 0.0));
        sequencer
    }

    fn call(
        request: &RpcRequest,
        sequencer: &LaunchSequencer,
        scroll_inputs: &mut Vec<ScrollInput>,
    ) -> Option<RpcResponse> {
        let diagnostics = DiagnosticsStore::default();
        let loading = LoadingProgress::default();
        let context = RpcContext {
            diagnostics: &diagnostics,
            sequencer,
            loading: &loading,
            world_assets: None,
        };
        handle_rpc_request(request, &context, scroll_inputs)
    }

    #[test]
    fn reports_scroll_prompt_state() {
        let mut inputs = Vec::new();

        let response = call(
            &request("get_scroll_prompt", serde_json::Value::Null, Some(1)),
            &LaunchSequencer::default(),
            &mut inputs,
        )
        .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["visible"], false);
        assert_eq!(result["phase"], "intro");

        let response = call(
            &request("get_scroll_prompt", serde_json::Value::Null, Some(2)),
            &interactive_sequencer(),
            &mut inputs,
        )
        .unwrap();
        assert_eq!(response.result.unwrap()["visible"], true);
        assert_eq!(response.id, Some(serde_json::json!(2)));
    }

    #[test]
    fn scroll_notification_queues_input_without_reply() {
        let mut inputs = Vec::new();

        let response = call(
            &request("scroll", serde_json::json!({ "delta_y": 100.0 }), None),
            &interactive_sequencer(),
            &mut inputs,
        );

        assert!(response.is_none());
        assert_eq!(inputs, vec![ScrollInput { delta_y: 100.0 }]);
    }

    #[test]
    fn scroll_during_intro_is_refused() {
        let mut inputs = Vec::new();

        let response = call(
            &request("scroll", serde_json::json!({ "delta_y": 100.0 }), Some(5)),
            &LaunchSequencer::default(),
            &mut inputs,
        )
        .unwrap();

        assert_eq!(response.result.unwrap()["accepted"], false);
        assert!(inputs.is_empty());
    }

    #[test]
    fn scroll_without_delta_is_invalid_params() {
        let mut inputs = Vec::new();

        let response = call(
            &request("scroll", serde_json::json!({ "dy": 1 }), Some(3)),
            &interactive_sequencer(),
            &mut inputs,
        )
        .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
        assert!(inputs.is_empty());
    }

    #[test]
    fn unknown_method_is_not_found() {
        let mut inputs = Vec::new();

        let response = call(
            &request("launch_now", serde_json::Value::Null, Some(9)),
            &LaunchSequencer::default(),
            &mut inputs,
        )
        .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data.unwrap()["method"], "launch_now");
    }

    #[test]
    fn wrong_version_is_invalid_request() {
        let mut inputs = Vec::new();
        let mut bad = request("get_fps", serde_json::Value::Null, Some(4));
        bad.jsonrpc = "1.0".to_string();

        let response = call(&bad, &LaunchSequencer::default(), &mut inputs).unwrap();

        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[test]
    fn fps_defaults_to_zero_without_diagnostics() {
        let mut inputs = Vec::new();

        let response = call(
            &request("get_fps", serde_json::Value::Null, Some(1)),
            &LaunchSequencer::default(),
            &mut inputs,
        )
        .unwrap();

        assert_eq!(response.result.unwrap()["fps"], 0.0);
    }

    #[test]
    fn own_echoed_messages_are_not_queued() {
        let notification = serde_json::to_string(&RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: "fps_update".to_string(),
            params: serde_json::json!({ "fps": 60.0 }),
        })
        .unwrap();
        let host_request = r#"{"jsonrpc":"2.0","method":"get_fps","id":7}"#;

        assert!(!accepts_host_message(&notification, true));
        assert!(!accepts_host_message(host_request, true));
        assert!(accepts_host_message(host_request, false));
        assert!(!accepts_host_message("webpackHotUpdate", false));
    }

    #[test]
    fn request_without_params_parses() {
        let parsed: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_fps","id":1}"#).unwrap();

        assert_eq!(parsed.params, serde_json::Value::Null);
    }
}
