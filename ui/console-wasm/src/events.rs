//! Startup wiring.
//!
//! Captures the widget set from the markup and installs one delegated click
//! listener for command triggers. Triggers are plain elements carrying
//! `data-camera`/`data-target`/`data-command`; delegating from the document
//! keeps them live across fragment re-injection, where listeners bound
//! inside a container die with its old innerHTML.

use crate::commands;
use crate::dom;
use crate::state;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Attribute marking a widget container element.
pub const WIDGET_ATTR: &str = "data-widget";
/// Attributes carried by a command trigger element.
pub const CAMERA_ATTR: &str = "data-camera";
pub const TARGET_ATTR: &str = "data-target";
pub const COMMAND_ATTR: &str = "data-command";

/// Capture `[data-widget]` container ids into state, in document order.
pub fn bind_widget_set() {
    let ids = dom::query_all(&format!("[{}]", WIDGET_ATTR))
        .into_iter()
        .map(|el| el.id())
        .filter(|id| !id.is_empty())
        .collect();
    state::set_widget_ids(ids);
}

/// Install the delegated click listener for command triggers.
///
/// A click anywhere resolves the nearest `[data-camera]` ancestor (or self)
/// and dispatches from its attributes; the matched element is the trigger
/// that gets hidden.
pub fn bind_command_triggers() {
    let selector = format!("[{}]", CAMERA_ATTR);
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        if let Some(target) = e.target() {
            if let Ok(el) = target.dyn_into::<web_sys::Element>() {
                if let Some(trigger) = el.closest(&selector).ok().flatten() {
                    dispatch_from_trigger(&trigger);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    dom::document()
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn dispatch_from_trigger(trigger: &web_sys::Element) {
    let camera = trigger.get_attribute(CAMERA_ATTR).unwrap_or_default();
    let target = trigger.get_attribute(TARGET_ATTR).unwrap_or_default();
    let command = trigger.get_attribute(COMMAND_ATTR).unwrap_or_default();
    if camera.is_empty() || target.is_empty() || command.is_empty() {
        return;
    }
    commands::dispatch_command(trigger.unchecked_ref(), &camera, &target, &command);
}
