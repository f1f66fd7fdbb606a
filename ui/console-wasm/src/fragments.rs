//! Fragment loading.
//!
//! Fetches a server-rendered HTML fragment and splices it into its container
//! element. Fire-and-forget: the request goes out before `load_fragment`
//! returns, the body lands whenever it arrives. No retry, no status check —
//! failures end up in the browser console and nowhere else.

use crate::api;
use crate::dom;
use gloo_console::error;
use wasm_bindgen::prelude::*;

/// Fetch `path` and inject the body into the element with id `container_id`.
///
/// The id may carry a querySelector-style `#` prefix; lookup uses the bare
/// id either way. The container is resolved when the body arrives, not at
/// call time, so a fragment may load into markup injected in the meantime.
#[wasm_bindgen(js_name = loadFragment)]
pub fn load_fragment(container_id: &str, path: &str) {
    let pending = match api::issue_fragment_get(path) {
        Ok(p) => p,
        Err(e) => {
            error!("fragment request failed:", path, e);
            return;
        }
    };

    let container = container_id.to_string();
    let path = path.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match api::response_text(pending).await {
            Ok(body) => match dom::by_id(&container) {
                Some(el) => dom::set_inner_html(&el, &body),
                None => error!("missing widget container:", container),
            },
            Err(e) => error!("fragment fetch failed:", path, e),
        }
    });
}
