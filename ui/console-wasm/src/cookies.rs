//! Cookie-backed preferences.
//!
//! Small string key-value pairs persisted in the browser's cookie jar, scoped
//! to the whole site. The header scan and the `Set-Cookie` assembly are pure
//! string functions over the decoded header; only the jar accessors touch
//! `web_sys`. A missing cookie reads back as `""`, indistinguishable from a
//! cookie set to the empty string.

use crate::dom;
use gloo_console::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

// ── Header codec ──

/// Scan a decoded cookie header for `name` and return its value.
///
/// Entries are `;`-separated with optional leading spaces; the match is
/// against the full `name=` prefix, so `cam` never picks up `camera`. The
/// first match wins; absence is `""`.
fn scan_header(header: &str, name: &str) -> String {
    let prefix = format!("{}=", name);
    for entry in header.split(';') {
        let entry = entry.trim_start_matches(' ');
        if let Some(value) = entry.strip_prefix(&prefix) {
            return value.to_string();
        }
    }
    String::new()
}

/// Assemble a `Set-Cookie` string: value as-is, absolute expiry, root path.
fn assemble_entry(name: &str, value: &str, expires_utc: &str) -> String {
    format!("{}={};expires={};path=/", name, value, expires_utc)
}

// ── Jar accessors ──

fn jar() -> Option<web_sys::HtmlDocument> {
    dom::document().dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Store a preference cookie that expires `days` from now.
#[wasm_bindgen(js_name = setCookie)]
pub fn set_cookie(name: &str, value: &str, days: f64) {
    let d = js_sys::Date::new_0();
    d.set_time(d.get_time() + days * MS_PER_DAY);
    let expires = String::from(d.to_utc_string());

    let entry = assemble_entry(name, value, &expires);
    if let Some(doc) = jar() {
        if let Err(e) = doc.set_cookie(&entry) {
            error!("cookie write failed:", e);
        }
    }
}

/// Read a preference cookie back, or `""` when it is not set.
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str) -> String {
    let header = match jar().and_then(|doc| doc.cookie().ok()) {
        Some(h) => h,
        None => return String::new(),
    };
    // A header that fails to URI-decode reads as empty rather than trapping.
    let decoded = match js_sys::decode_uri_component(&header) {
        Ok(s) => String::from(s),
        Err(_) => return String::new(),
    };
    scan_header(&decoded, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_value() {
        assert_eq!(scan_header("motion=on", "motion"), "on");
        assert_eq!(scan_header("a=1; motion=on; b=2", "motion"), "on");
    }

    #[test]
    fn scan_unset_name_is_empty() {
        assert_eq!(scan_header("motion=on", "grid"), "");
        assert_eq!(scan_header("", "grid"), "");
    }

    #[test]
    fn scan_ignores_name_prefix_collisions() {
        let header = "cam=1; camera=2";
        assert_eq!(scan_header(header, "cam"), "1");
        assert_eq!(scan_header(header, "camera"), "2");

        let header = "camera=2; cam=1";
        assert_eq!(scan_header(header, "cam"), "1");
        assert_eq!(scan_header(header, "camera"), "2");
    }

    #[test]
    fn scan_trims_leading_spaces_only() {
        assert_eq!(scan_header("a=1;   b=2", "b"), "2");
        // trailing space stays part of the value
        assert_eq!(scan_header("a=1 ;b=2", "a"), "1 ");
    }

    #[test]
    fn scan_keeps_equals_signs_in_value() {
        assert_eq!(scan_header("q=a=b", "q"), "a=b");
    }

    #[test]
    fn scan_first_match_wins() {
        assert_eq!(scan_header("d=1; d=2", "d"), "1");
    }

    #[test]
    fn entry_has_expiry_and_root_path() {
        assert_eq!(
            assemble_entry("grid", "2x2", "Sun, 23 Aug 2026 10:00:00 GMT"),
            "grid=2x2;expires=Sun, 23 Aug 2026 10:00:00 GMT;path=/"
        );
    }

    #[test]
    fn entry_keeps_value_as_is() {
        // no escaping on write; the jar stores what it is handed
        assert_eq!(
            assemble_entry("layout", "a b=c", "Sun, 23 Aug 2026 10:00:00 GMT"),
            "layout=a b=c;expires=Sun, 23 Aug 2026 10:00:00 GMT;path=/"
        );
    }

    #[test]
    fn assembled_entry_scans_back() {
        // the jar keeps only the `name=value` pair; a later read must find it
        let entry = assemble_entry("grid", "2x2", "Sun, 23 Aug 2026 10:00:00 GMT");
        let pair = entry.split(';').next().unwrap();
        let header = format!("session=abc; {}", pair);
        assert_eq!(scan_header(&header, "grid"), "2x2");
    }
}
