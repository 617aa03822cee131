//! JSON-RPC 2.0 bridge between the world and the host web page.
//!
//! On the web the world runs in a canvas embedded in a page (or an iframe
//! of one). The page owns the "Scroll To Launch" markup and may own the
//! wheel events, so both directions go over `postMessage`.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (canvas / iframe)
//!        │                                            │
//!        ├─ Request (with ID) ──────────────────────> │
//!        │ <───────────────────── Response (with ID) ─┤
//!        ├─ Notification (no ID) ───────────────────> │
//!        │ <─────────────────── Notification (no ID) ─┤
//! ```
//!
//! ## Methods
//!
//! - `get_fps`: current smoothed frame rate
//! - `get_scroll_prompt`: `{ visible, phase }` of the launch sequencer
//! - `get_loading_progress`: manifest state and per-asset status
//! - `scroll` `{ delta_y }`: forward a page scroll (request or notification)
//!
//! ## Notifications sent to the page
//!
//! - `scroll_prompt_visibility` `{ visible, phase }`: on every change
//! - `asset_status` `{ name, status, error? }`: when an asset settles
//! - `fps_update` `{ fps }`: twice a second
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! Messages that are not valid JSON have no id to answer and are logged.

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
