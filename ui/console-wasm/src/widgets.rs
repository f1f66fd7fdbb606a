//! Widget refresh.
//!
//! Re-fetches camera widgets through the fragment loader, either one camera
//! or every container in the bound widget set.

use crate::fragments;
use crate::routes;
use crate::state;
use wasm_bindgen::prelude::*;

/// Refresh one camera's widget, or all of them when `camera` is absent.
///
/// Requests are issued in set order; each fragment load is an independent
/// fetch and nothing waits on completion. A named camera bypasses the set —
/// its id is used directly as the container id.
#[wasm_bindgen(js_name = refreshWidgets)]
pub fn refresh_widgets(camera: Option<String>) {
    match camera {
        Some(camera) => {
            fragments::load_fragment(&camera, &routes::widget_path(&camera));
        }
        None => {
            for id in state::widget_ids() {
                fragments::load_fragment(&id, &routes::widget_path(&id));
            }
        }
    }
}
