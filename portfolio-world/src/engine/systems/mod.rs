//! Runtime systems that surface world state to the presentation layer.
//!
//! Provides the scroll prompt overlay and FPS reporting.

/// FPS notifications sent to the host page via RPC.
pub mod fps_tracking;

/// "Scroll To Launch" prompt driven by the launch sequencer.
///
/// Native builds show a UI overlay; web builds notify the host page, which
/// owns the prompt markup.
pub mod scroll_prompt;
