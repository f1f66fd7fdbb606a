//! Command dispatch.
//!
//! One-shot camera control commands. The trigger button is hidden at once,
//! the command GET goes out, and a fixed-delay timer re-fetches the camera's
//! widget so the new state shows up. The timer is armed at dispatch time and
//! never chained off the request: the refresh fires whether or not the
//! command has answered, and every dispatch arms its own timer.

use crate::api;
use crate::dom;
use crate::routes;
use crate::widgets;
use gloo_console::{error, log};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

/// Delay between dispatching a command and re-fetching the camera's widget.
/// Long enough for the recorder to act on the command before the re-render.
pub const REFRESH_DELAY_MS: u32 = 2_000;

/// Hide `trigger`, fire `/recorder/{camera}/{target}/{command}`, and arm the
/// delayed widget refresh.
#[wasm_bindgen(js_name = dispatchCommand)]
pub fn dispatch_command(trigger: &web_sys::HtmlElement, camera: &str, target: &str, command: &str) {
    dom::hide(trigger);

    let path = routes::command_path(camera, target, command);
    match api::issue_get(&path) {
        Ok(pending) => {
            wasm_bindgen_futures::spawn_local(async move {
                // Body is diagnostic only; the widget refresh shows the effect.
                match api::response_text(pending).await {
                    Ok(body) => log!(path, body),
                    Err(e) => error!("command failed:", path, e),
                }
            });
        }
        Err(e) => error!("command request failed:", path, e),
    }

    let camera = camera.to_string();
    Timeout::new(REFRESH_DELAY_MS, move || {
        widgets::refresh_widgets(Some(camera));
    })
    .forget();
}
