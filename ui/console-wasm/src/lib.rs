//! Vigil Camera Console WASM Frontend
//!
//! Pure Rust + WASM glue for the camera-recorder web console: loads
//! server-rendered widget fragments into the page, dispatches one-shot
//! camera commands, and keeps small preferences in cookies. Each concern
//! lives in its own module; the contract functions (`loadFragment`,
//! `refreshWidgets`, `dispatchCommand`, `setCookie`, `getCookie`) are
//! exported so server-rendered inline handlers can call them directly.

pub mod api;
pub mod commands;
pub mod cookies;
pub mod dom;
pub mod events;
pub mod fragments;
pub mod routes;
pub mod state;
pub mod widgets;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init();
    Ok(())
}

/// Main initialisation sequence. No initial refresh: the server renders the
/// first widget state into the page.
fn init() {
    events::bind_widget_set();
    events::bind_command_triggers();
}
