//! HTTP plumbing.
//!
//! Builds `web_sys` requests against the recorder endpoints and issues them
//! through `window.fetch`. Issuance is split from response handling: the
//! `issue_*` helpers create the fetch promise synchronously at call time, so
//! callers control request ordering and never block; `response_text` is
//! awaited later inside a spawned task.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, RequestMode, Response};

/// Issue a GET for an HTML fragment, returning the in-flight fetch.
pub fn issue_fragment_get(path: &str) -> Result<js_sys::Promise, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_cache(RequestCache::Default);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "text/html")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;

    Ok(dom::window().fetch_with_request(&request))
}

/// Issue a bare GET (command endpoints), returning the in-flight fetch.
pub fn issue_get(path: &str) -> Result<js_sys::Promise, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;

    Ok(dom::window().fetch_with_request(&request))
}

/// Await an in-flight fetch and read the full response body as text.
///
/// No status-code check: whatever the server answered is the text.
pub async fn response_text(pending: js_sys::Promise) -> Result<String, String> {
    let resp_value = JsFuture::from(pending)
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    Ok(text.as_string().unwrap_or_default())
}
