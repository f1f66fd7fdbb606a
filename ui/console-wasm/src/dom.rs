//! DOM access helpers.
//!
//! Thin wrappers over `web_sys` lookups. Container ids sometimes arrive
//! querySelector-style (`"#cam1"`, as inline handlers in older markup passed
//! them); `normalize_id` strips the marker so lookups always use the bare id.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Strip one leading querySelector-style `#` marker, if present.
pub fn normalize_id(id: &str) -> &str {
    id.strip_prefix('#').unwrap_or(id)
}

/// Look up an element by id. A `#`-prefixed id is normalized first.
pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(normalize_id(id))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Hide an element by setting its inline `display` to `"none"`.
pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_one_leading_marker() {
        assert_eq!(normalize_id("#cam1"), "cam1");
        assert_eq!(normalize_id("##cam1"), "#cam1");
    }

    #[test]
    fn normalize_leaves_bare_ids_alone() {
        assert_eq!(normalize_id("cam1"), "cam1");
        assert_eq!(normalize_id("cam#1"), "cam#1");
        assert_eq!(normalize_id(""), "");
    }
}
